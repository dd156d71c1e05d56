//! Start/destination selection.
//!
//! Setting a role always overwrites it; the two roles are not checked
//! against each other until routes are requested.

use std::fmt;

use crate::domain::Stop;

/// Which roles are currently filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    StartOnly,
    EndOnly,
    Both,
}

impl SelectionState {
    /// Prompt shown to the user in this state.
    pub fn prompt(self) -> &'static str {
        match self {
            SelectionState::None => "Enter start and destination to find routes",
            SelectionState::StartOnly => "Start location selected. Now choose a destination.",
            SelectionState::EndOnly => "Destination selected. Now choose a start location.",
            SelectionState::Both => "Ready to find routes! Click \"Find Routes\" button.",
        }
    }
}

/// Why a selection cannot be planned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Please select both start and destination locations.")]
    Incomplete,

    #[error("Start and destination cannot be the same location.")]
    SameStop,
}

/// Which role a stop is being selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Start,
    End,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Start => "start",
            Role::End => "end",
        })
    }
}

/// The user's chosen start and destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    start: Option<Stop>,
    end: Option<Stop>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_start(&mut self, stop: Stop) {
        self.start = Some(stop);
    }

    pub fn set_end(&mut self, stop: Stop) {
        self.end = Some(stop);
    }

    /// Fill `role` with `stop`.
    pub fn set(&mut self, role: Role, stop: Stop) {
        match role {
            Role::Start => self.set_start(stop),
            Role::End => self.set_end(stop),
        }
    }

    pub fn start(&self) -> Option<&Stop> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Stop> {
        self.end.as_ref()
    }

    pub fn state(&self) -> SelectionState {
        match (&self.start, &self.end) {
            (None, None) => SelectionState::None,
            (Some(_), None) => SelectionState::StartOnly,
            (None, Some(_)) => SelectionState::EndOnly,
            (Some(_), Some(_)) => SelectionState::Both,
        }
    }

    /// The origin and destination, if they form a plannable pair.
    pub fn validate(&self) -> Result<(&Stop, &Stop), SelectionError> {
        let (Some(start), Some(end)) = (&self.start, &self.end) else {
            return Err(SelectionError::Incomplete);
        };
        if start.id == end.id {
            return Err(SelectionError::SameStop);
        }
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: i64) -> Stop {
        Stop::new(id, format!("Stop {id}"), 43.5, -80.2)
    }

    #[test]
    fn starts_empty() {
        let sel = Selection::new();
        assert_eq!(sel.state(), SelectionState::None);
        assert_eq!(sel.validate(), Err(SelectionError::Incomplete));
    }

    #[test]
    fn state_transitions() {
        let mut sel = Selection::new();
        sel.set_start(stop(1));
        assert_eq!(sel.state(), SelectionState::StartOnly);

        sel.set_end(stop(2));
        assert_eq!(sel.state(), SelectionState::Both);

        let mut sel = Selection::new();
        sel.set_end(stop(2));
        assert_eq!(sel.state(), SelectionState::EndOnly);
        assert_eq!(sel.validate(), Err(SelectionError::Incomplete));
    }

    #[test]
    fn setters_overwrite() {
        let mut sel = Selection::new();
        sel.set_start(stop(1));
        sel.set_start(stop(3));
        assert_eq!(sel.start().unwrap().id, stop(3).id);
    }

    #[test]
    fn same_stop_is_accepted_then_rejected_at_validation() {
        let mut sel = Selection::new();
        sel.set(Role::Start, stop(1));
        sel.set(Role::End, stop(1));

        assert_eq!(sel.state(), SelectionState::Both);
        assert_eq!(sel.validate(), Err(SelectionError::SameStop));
    }

    #[test]
    fn valid_pair() {
        let mut sel = Selection::new();
        sel.set_start(stop(1));
        sel.set_end(stop(2));

        let (origin, destination) = sel.validate().unwrap();
        assert_eq!(origin.id, stop(1).id);
        assert_eq!(destination.id, stop(2).id);
    }

    #[test]
    fn prompts_and_messages() {
        assert_eq!(
            SelectionState::StartOnly.prompt(),
            "Start location selected. Now choose a destination."
        );
        assert_eq!(
            SelectionState::Both.prompt(),
            "Ready to find routes! Click \"Find Routes\" button."
        );
        assert_eq!(
            SelectionError::SameStop.to_string(),
            "Start and destination cannot be the same location."
        );
        assert_eq!(
            SelectionError::Incomplete.to_string(),
            "Please select both start and destination locations."
        );
    }
}
