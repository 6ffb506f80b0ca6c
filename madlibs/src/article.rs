//! Indefinite article selection for placeholder prompts

/// Pick "an" when the name starts with a vowel, "a" otherwise
pub fn article_for(name: &str) -> &'static str {
    match name.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Prompt shown when asking for a placeholder's value
pub fn prompt_for(name: &str) -> String {
    format!("Please type {} {}:", article_for(name), name)
}
