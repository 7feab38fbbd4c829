/// Request state of a chat widget. At most one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    Sending,
}

impl ChatState {
    pub fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(ChatState::default(), ChatState::Idle);
        assert!(ChatState::Sending.is_sending());
        assert!(!ChatState::Idle.is_sending());
    }
}
