/// Sanitize extracted document text before line classification.
/// Strips control characters, trims each line, drops blank lines. The
/// preserved punctuation is exactly what the line classifiers key on:
/// field separators, email characters, and common address punctuation.
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '+'
                        | '%'
                        | '#'
                        | '@'
                        | '&'
                        | '\''
                        | '_'
                        | '|'
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate a line to at most `max_len` bytes, on a char boundary.
/// Applied before any regex runs so adversarially long input stays bounded.
pub fn truncate_line(line: &str, max_len: usize) -> &str {
    if line.len() <= max_len {
        return line;
    }
    let mut end = max_len;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}
