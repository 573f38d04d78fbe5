use services::ProgressSnapshot;

/// Numbers shown in the game header and the menu's progress summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderVm {
    pub score: u32,
    pub level: u32,
    pub bugs_fixed: usize,
    pub total: usize,
}

impl From<ProgressSnapshot> for HeaderVm {
    fn from(snapshot: ProgressSnapshot) -> Self {
        Self {
            score: snapshot.score,
            level: snapshot.level,
            bugs_fixed: snapshot.bugs_fixed,
            total: snapshot.total_challenges,
        }
    }
}
