use serde::Serialize;
use tera::{Context, Error as TeraError, Tera};

pub const CHAT_TEMPLATE: &str = include_str!("prompts/chat.md");
pub const TRANSFORM_TEMPLATE: &str = include_str!("prompts/transform.md");

#[derive(Serialize)]
struct ChatContext<'a> {
    question: &'a str,
}

#[derive(Serialize)]
struct TransformContext<'a> {
    html: &'a str,
    css: &'a str,
}

pub fn load_prompt<T: Serialize>(template: &str, context_data: &T) -> Result<String, TeraError> {
    let mut tera = Tera::default();
    // No file extension on the name, so tera leaves markup unescaped
    tera.add_raw_template("inline_template", template)?;
    let context = Context::from_serialize(context_data)?;
    let rendered = tera.render("inline_template", &context)?;
    Ok(rendered.trim_end().to_string())
}

pub fn chat_prompt(question: &str) -> Result<String, TeraError> {
    load_prompt(CHAT_TEMPLATE, &ChatContext { question })
}

pub fn transform_prompt(html: &str, css: &str) -> Result<String, TeraError> {
    load_prompt(TRANSFORM_TEMPLATE, &TransformContext { html, css })
}
