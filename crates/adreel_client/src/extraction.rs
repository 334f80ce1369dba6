//! Utilities for extracting structured data from LLM responses.
//!
//! Even with a response schema in force, provider text sometimes arrives
//! wrapped in markdown code blocks or mixed with commentary. This module
//! recovers the JSON payload from common response patterns; callers map a
//! miss into their stage-specific error.

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Tries multiple extraction strategies:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced braces: { ... }
/// 3. Balanced brackets: [ ... ]
///
/// Returns `None` when no JSON-shaped content is present.
///
/// # Examples
///
/// ```
/// use adreel_client::extract_json;
///
/// let response = "Here's the plan: {\"productName\": \"kopi robusta\"}";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("kopi robusta"));
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    // Strategy 1: Extract from markdown code blocks
    if let Some(json) = extract_from_code_block(response, "json") {
        return Some(json);
    }

    // Strategy 2: Balanced delimiters, preferring whichever opens first
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Some(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Some(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Some(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Some(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Some(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in provider response"
    );
    None
}

/// Extract content from markdown code blocks.
///
/// Looks for patterns like:
/// - ```language\n...\n```
/// - ``` ... ``` (no language specified)
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    // Pattern: ```language\n...\n```
    let pattern = format!("```{language}");

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found, likely a truncated response
        return Some(response[content_start..].trim().to_string());
    }

    // Try without language specifier
    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip to next newline (in case there's a language specifier)
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found, likely a truncated response
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to
/// the matching `close`, handling nesting and string escapes correctly.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse JSON into a specific type.
///
/// # Errors
///
/// Returns the underlying parse error; a preview of the offending payload
/// is logged for diagnosis.
///
/// # Examples
///
/// ```
/// use adreel_client::parse_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Plan {
///     id: i64,
///     name: String,
/// }
///
/// let json = r#"{"id": 123, "name": "launch"}"#;
/// let plan: Plan = parse_json(json).unwrap();
/// assert_eq!(plan.id, 123);
/// ```
pub fn parse_json<T>(json_str: &str) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).inspect_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();
        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );
    })
}
