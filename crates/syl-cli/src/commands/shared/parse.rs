use syl_core::enums::CompletionState;

/// Parse an optional `--state` value.
pub fn parse_state(raw: Option<&str>) -> anyhow::Result<Option<CompletionState>> {
    Ok(raw.map(str::parse::<CompletionState>).transpose()?)
}

/// Trim a required text field, rejecting blanks.
pub fn required_text(raw: &str, field: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("--{field} must not be empty");
    }
    Ok(trimmed.to_string())
}
