//! Category identifier to name-fragment conversion.

/// Convert a camel-case identifier into a dash-separated, lower-case fragment.
///
/// `backgroundColor` becomes `background-color`; identifiers without
/// uppercase letters pass through unchanged.
pub fn camel_to_kebab(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, ch) in identifier.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
