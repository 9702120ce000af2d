use anyhow::Result;
use cliclack::{input, spinner};
use console::style;

use adapt::assistant::Assistant;

use crate::render::render_blocks;

pub async fn handle_chat(assistant: Assistant) -> Result<()> {
    println!(
        "Adapt code assistant {}",
        style("- type \"exit\" to end the session").dim()
    );
    println!();

    loop {
        let message_text: String = input("Message:").placeholder("").multiline().interact()?;

        if message_text.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let spin = spinner();
        spin.start("Thinking...");

        match assistant.chat(&message_text).await {
            Ok(blocks) => {
                spin.stop("");
                render_blocks(&blocks)?;
            }
            Err(e) => spin.error(e.to_string()),
        }

        println!();
    }
    Ok(())
}
