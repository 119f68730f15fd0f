//! Domain Name Normalization
//!
//! Pure domain logic for cleaning up user-supplied domain input.
//! This service has NO external dependencies - it's pure Rust.

/// Normalize raw domain input into a bare lowercase hostname.
///
/// Trims whitespace, lowercases, strips a leading `http://` or
/// `https://`, and truncates at the first `/`. Returns `None` when
/// nothing is left - the caller treats that as a validation failure.
///
/// No hostname syntax check is performed here; a nonsense name simply
/// fails at resolution time.
pub fn normalize(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();

    let stripped = lowered
        .strip_prefix("http://")
        .or_else(|| lowered.strip_prefix("https://"))
        .unwrap_or(&lowered);

    let host = stripped.split('/').next().unwrap_or("");

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
