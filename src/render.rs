//! Tag stripping for page display.
//!
//! Deliberately naive: no entity decoding (`&amp;` passes through as-is), no
//! handling of `>` inside quoted attribute values, and an unterminated `<`
//! swallows everything after it.

/// Drops `<...>` tags from `body`, keeping the text between them.
pub fn strip_tags(body: &str) -> String {
    let mut in_tag = false;
    let mut text = String::new();
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
