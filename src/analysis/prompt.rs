/// System message sent ahead of every prompt
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Keep only ASCII letters, digits, commas and spaces
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ',' || *c == ' ')
        .collect()
}

/// Embed already-sanitized ingredients into the analysis prompt
pub fn build_prompt(ingredients: &str) -> String {
    format!(
        "Analyze the following ingredients and identify any harmful ones. \
Provide the result as a JSON array in the format: \n\
        [\n            \
{{\"name\": \"Ingredient\", \"is_harmful\": \"y/n\", \"can_cause\": \"description\", \
\"category\": \"harmful/moderate/non-harmful\", \"color_code\": \"yellow/red/purple/white\"}}\n        \
]: {}",
        ingredients
    )
}
