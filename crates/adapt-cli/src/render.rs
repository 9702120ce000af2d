use anyhow::Result;
use bat::WrappingMode;
use console::style;

use adapt::models::block::ChatBlock;
use adapt::models::language::LanguageTag;

/// Syntax name bat understands for a detected language
fn bat_language(language: &LanguageTag) -> Option<&str> {
    match language {
        LanguageTag::C => Some("c"),
        LanguageTag::JavaScript => Some("js"),
        LanguageTag::Html => Some("html"),
        LanguageTag::Jsx => Some("jsx"),
        LanguageTag::PlainText => None,
        LanguageTag::Other(tag) => Some(tag.as_str()),
    }
}

pub fn print_code(content: &str, language: &LanguageTag) -> Result<()> {
    let mut printer = bat::PrettyPrinter::new();
    printer
        .input(bat::Input::from_bytes(content.as_bytes()).name(language.as_str()))
        .grid(true)
        .header(true)
        .wrapping_mode(WrappingMode::Character);
    if let Some(syntax) = bat_language(language) {
        printer.language(syntax);
    }

    // Fence tags are free-form, bat rejects the ones it has no syntax for
    if printer.print().is_err() {
        println!("{}", content);
    }
    Ok(())
}

fn print_heading(text: &str, level: usize) {
    let styled = match level {
        1 => style(text).bold().underlined(),
        2 => style(text).bold(),
        _ => style(text).bold().dim(),
    };
    println!("{}", styled);
}

pub fn render_blocks(blocks: &[ChatBlock]) -> Result<()> {
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            println!();
        }
        match block {
            ChatBlock::Code { language, content } => print_code(content, language)?,
            _ => match block.display_level() {
                Some(level) => print_heading(block.text(), level),
                None => println!("{}", block.text()),
            },
        }
    }
    Ok(())
}

pub fn print_transform(primary: &str, secondary: &str) -> Result<()> {
    println!("{}", style("HTML").cyan().bold());
    print_code(primary, &LanguageTag::Html)?;
    println!();
    println!("{}", style("CSS").cyan().bold());
    print_code(secondary, &LanguageTag::Other("css".to_string()))
}
