//! Utility functions for handling Telegram MarkdownV2 formatting
//!
//! MarkdownV2 requires escaping of special characters to prevent formatting issues.
//! This module provides centralized functions for proper text escaping and for
//! splitting replies that exceed Telegram's message size.

/// Longest text we put in a single message. Telegram's hard limit is 4096
/// characters after entity parsing; the margin absorbs escape sequences.
pub const MESSAGE_LIMIT: usize = 4000;

/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// # Example
/// ```
/// use islamic_companion_bot::utils::markdown::escape_markdown;
///
/// let text = "(1) سورة الفاتحة.";
/// let escaped = escape_markdown(text);
/// assert_eq!(escaped, "\\(1\\) سورة الفاتحة\\.");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|'
                | '{' | '}' | '.' | '!' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Wraps already escaped text in MarkdownV2 bold markers.
pub fn bold(escaped: &str) -> String {
    format!("*{escaped}*")
}

/// Splits `text` into chunks of at most `limit` characters, preferring line
/// boundaries. Lines longer than `limit` are cut on character boundaries,
/// never directly after an escaping backslash.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();

        if current_len + line_len > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= limit {
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        let mut rest: Vec<char> = line.chars().collect();
        while rest.len() > limit {
            let mut cut = limit;
            if rest[cut - 1] == '\\' {
                cut -= 1;
            }
            chunks.push(rest[..cut].iter().collect());
            rest.drain(..cut);
        }
        current = rest.iter().collect();
        current_len = rest.len();
    }

    if !current.trim().is_empty() {
        chunks.push(current);
    }

    chunks
        .into_iter()
        .map(|chunk| chunk.trim_end_matches('\n').to_string())
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}
