//! Identifier casing helpers.

/// Convert an identifier to lower-camel-case.
///
/// Whitespace is removed, the first character is lowered, and characters
/// following removed whitespace are raised. For plain C# identifiers this
/// amounts to lowering the first letter (`Name` → `name`).
pub fn camel_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut first = true;
    let mut word_start = false;

    for ch in identifier.chars() {
        if ch.is_whitespace() {
            word_start = true;
            continue;
        }
        if first {
            out.extend(ch.to_lowercase());
            first = false;
        } else if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = false;
    }

    out
}

/// Raise the first character of an identifier (`count` → `Count`).
pub fn capitalize(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
