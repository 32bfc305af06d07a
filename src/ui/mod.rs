// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the clipmark application.
//!
//! Panels only draw; anything the user asks for comes back as a [`UiAction`]
//! which the app forwards to the controller once drawing is done.

pub mod labels;
pub mod player;
pub mod toolbar;

/// Result of user interaction with a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    None,
    PickFolder,
    ApplyFilter,
    ClearFilter,
    Previous,
    Next,
    Select(String),
    ToggleLabel(String),
    ClearLabels,
}

impl UiAction {
    /// Keep the first action reported in a frame.
    pub fn or(self, other: UiAction) -> UiAction {
        match self {
            UiAction::None => other,
            action => action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_action_wins() {
        assert_eq!(UiAction::None.or(UiAction::Next), UiAction::Next);
        assert_eq!(UiAction::Previous.or(UiAction::Next), UiAction::Previous);
        assert_eq!(UiAction::None.or(UiAction::None), UiAction::None);
    }
}
