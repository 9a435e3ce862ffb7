/// Punctuation allowed through the generic whitelist besides word
/// characters and whitespace
const SAFE_PUNCTUATION: [char; 4] = ['!', '?', '.', '-'];

/// Reduce a message to characters that are inert in any shell context.
/// Quoting, substitution, and chaining characters are all dropped.
pub fn sanitize_message(input: &str) -> String {
    input
        .chars()
        .filter(|c| {
            c.is_alphanumeric() || *c == '_' || c.is_whitespace() || SAFE_PUNCTUATION.contains(c)
        })
        .collect()
}

/// Escape a message for embedding in a double-quoted AppleScript string.
/// AppleScript source is single-line; line breaks become spaces.
pub fn sanitize_applescript(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a message for a single-quoted PowerShell string (quotes are
/// doubled there), then apply the generic whitelist on top.
pub fn sanitize_powershell(input: &str) -> String {
    sanitize_message(&input.replace('\'', "''"))
}
