#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShowcaseState {
    Idle,          // Navigation accepted
    Transitioning, // Navigation locked until the transition window elapses
}

impl ShowcaseState {
    pub fn is_transitioning(self) -> bool {
        self == ShowcaseState::Transitioning
    }
}
