//! ID prefixes and generation.
//!
//! Generated ids look like `les-1a2b3c4d`: a short entity prefix followed by
//! eight lowercase hex characters from the OS random source.

/// Prefix for generated lesson script ids.
pub const PREFIX_LESSON: &str = "les";

/// Generate a fresh id with the given prefix.
///
/// # Errors
///
/// Returns an error if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, getrandom::Error> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)?;
    Ok(format_id(prefix, bytes))
}

fn format_id(prefix: &str, bytes: [u8; 4]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}
