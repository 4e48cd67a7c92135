/// Truthy spellings accepted for boolean settings. Anything else is false.
pub(crate) fn parse_bool_loose(s: &str) -> bool {
    let v = s.trim().to_ascii_lowercase();
    matches!(v.as_str(), "t" | "true" | "y" | "yes" | "on" | "1")
}
