/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub solved: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn from_flags(solved: &[bool]) -> Self {
        let total = solved.len();
        let solved = solved.iter().filter(|flag| **flag).count();
        Self {
            total,
            solved,
            remaining: total - solved,
            is_complete: total > 0 && solved == total,
        }
    }
}
