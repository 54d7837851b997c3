/// Upper-case the first character and lower-case the rest.
///
/// Only the very first character is touched, so `"ana maría"` becomes
/// `"Ana maría"`, not `"Ana María"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
