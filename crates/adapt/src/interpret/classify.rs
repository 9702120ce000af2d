use super::fence::FENCE;

/// Tokens that mark a reply as code when the trimmed text starts with them.
pub const CODE_PREFIXES: [&str; 12] = [
    "const", "let", "var", "function", "class", "import", "export", "if", "for", "while",
    "#include", "int main",
];

/// Decide whether a whole reply renders as a single code artifact.
///
/// Prefix checks are plain `starts_with`, so `format this` counts as code.
pub fn is_code(text: &str) -> bool {
    let leading = text.trim();

    text.contains(FENCE)
        || CODE_PREFIXES.iter().any(|prefix| leading.starts_with(prefix))
        || text.contains('{')
        || text.contains("</")
}
