use crate::error::FilterError;
use serde_json::Value;

/// Outcome of a strict JSON parse.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonParse {
    Parsed(Value),
    Invalid { reason: String },
}

impl JsonParse {
    pub fn is_parsed(&self) -> bool {
        matches!(self, JsonParse::Parsed(_))
    }

    pub fn into_result(self) -> Result<Value, FilterError> {
        match self {
            JsonParse::Parsed(value) => Ok(value),
            JsonParse::Invalid { reason } => Err(FilterError::InvalidJson(reason)),
        }
    }
}

/// Parses `input` as a single JSON document.
///
/// Returns the parsed value, or `false` when the text is not valid JSON
/// (empty input, bad syntax, trailing data). A document that is literally
/// `false` comes back as `false` too, so callers cannot tell the two apart.
/// Use [`parse_json`] when that difference matters.
pub fn is_valid_json(input: &str) -> Value {
    match parse_json(input) {
        JsonParse::Parsed(value) => value,
        JsonParse::Invalid { .. } => Value::Bool(false),
    }
}

pub fn parse_json(input: &str) -> JsonParse {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => JsonParse::Parsed(value),
        Err(e) => {
            log::debug!("JSON parse failed: {e}");
            JsonParse::Invalid {
                reason: e.to_string(),
            }
        }
    }
}

/// Returns the body of the first Markdown code fence in a generated reply,
/// or the trimmed reply when it has no fence.
pub fn clean_json_block(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    let after = &trimmed[open + 3..];

    // Only an alphabetic info string ("json", "JSON", ...) is dropped.
    let body = match after.split_once('\n') {
        Some((info, rest)) if is_info_string(info.trim()) => rest,
        Some(_) => after,
        None => {
            let rest = after.trim_start_matches(|c: char| c.is_ascii_alphabetic());
            if rest.starts_with(['{', '[']) {
                rest
            } else {
                after
            }
        }
    };

    let body = match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    };
    body.trim()
}

fn is_info_string(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses a generated reply: the fenced block first, then the first
/// balanced object anywhere in the text.
pub fn parse_reply(text: &str) -> JsonParse {
    let parsed = parse_json(clean_json_block(text));
    if parsed.is_parsed() {
        return parsed;
    }
    match extract_embedded_json(text).map(parse_json) {
        Some(fallback @ JsonParse::Parsed(_)) => fallback,
        _ => parsed,
    }
}

/// Returns the first balanced `{...}` object embedded in `text`.
pub fn extract_embedded_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
