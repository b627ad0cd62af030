use core::fmt;

/// True state of the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorState {
    Open,
    Closed,
}

impl DoorState {
    pub const ALL: [DoorState; 2] = [DoorState::Open, DoorState::Closed];
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DoorState::Open => "open",
            DoorState::Closed => "closed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::DoorState;

    #[test]
    fn all_lists_open_before_closed() {
        assert_eq!(DoorState::ALL, [DoorState::Open, DoorState::Closed]);
    }

    #[test]
    fn display_matches_report_labels() {
        assert_eq!(DoorState::Open.to_string(), "open");
        assert_eq!(DoorState::Closed.to_string(), "closed");
    }
}
