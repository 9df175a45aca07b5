//! Key name transforms applied to attribute names.
//!
//! The converter stores its key transform as a plain function, so any
//! naming policy can be supplied. This module provides the built-in ones:
//! - `snake_to_camel`: the default, producing JavaScript-friendly keys
//! - `identity`: keeps attribute names untouched

/// Convert a snake_case name to camelCase.
///
/// Every underscore followed by an ASCII lowercase letter starts a new
/// word: the underscore is removed and the letter uppercased. Underscores
/// that cannot start a word stay literal, which covers a leading
/// underscore ("_private"), a trailing underscore ("counter_") and an
/// underscore followed by anything else ("a_1", "a_B"). Input is not
/// validated; already-camel or otherwise mixed names come out best-effort.
///
/// # Arguments
/// * `name` - Snake case attribute name
///
/// # Returns
/// * `String` - Camel case key
pub fn snake_to_camel(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        if c == '_' && !first {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => result.push('_'),
            }
        } else {
            result.push(c);
        }
        first = false;
    }

    result
}

/// Keep an attribute name unchanged.
///
/// Supply to `Converter::with_key_converter` when output keys should
/// match attribute names exactly.
pub fn identity(name: &str) -> String {
    name.to_string()
}
