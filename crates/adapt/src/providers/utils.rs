use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use super::base::Usage;
use super::configs::GeminiProviderConfig;

/// Build a `generateContent` request body for a single user prompt
pub fn prompt_to_gemini_spec(prompt: &str, config: &GeminiProviderConfig) -> Value {
    let mut payload = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }]
    });

    let mut generation_config = serde_json::Map::new();
    if let Some(temp) = config.temperature {
        generation_config.insert("temperature".to_string(), json!(temp));
    }
    if let Some(tokens) = config.max_tokens {
        generation_config.insert("maxOutputTokens".to_string(), json!(tokens));
    }
    if !generation_config.is_empty() {
        payload["generationConfig"] = Value::Object(generation_config);
    }

    payload
}

/// Concatenate the text parts of the first candidate
pub fn gemini_response_to_text(response: &Value) -> Result<String> {
    if let Some(error) = response.get("error") {
        return Err(anyhow!("Gemini API error: {}", error));
    }

    let parts = response["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| anyhow!("No candidate content in response"))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    // Blocked candidates come back with no text parts
    if text.is_empty() {
        return Err(anyhow!("No candidate text in response"));
    }

    Ok(text)
}

pub fn gemini_usage(response: &Value) -> Usage {
    let usage = &response["usageMetadata"];
    let count = |key: &str| {
        usage
            .get(key)
            .and_then(|v| v.as_i64())
            .and_then(|v| i32::try_from(v).ok())
    };

    let input_tokens = count("promptTokenCount");
    let output_tokens = count("candidatesTokenCount");
    let total_tokens = count("totalTokenCount").or(match (input_tokens, output_tokens) {
        (Some(input), Some(output)) => input.checked_add(output),
        _ => None,
    });

    Usage::new(input_tokens, output_tokens, total_tokens)
}
