/// Compute effective limit with precedence: global flag -> config default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> usize {
    usize::try_from(flag.unwrap_or(configured)).unwrap_or(usize::MAX)
}
