//! Navigation-related state types.
//!
//! This module contains enums describing which tab is shown and where key
//! presses are routed.

/// Specifying the two table views.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Tab {
    #[default]
    Active,
    Completed,
}

impl Tab {
    /// Returns the completion flag records must carry to appear on this tab.
    ///
    pub fn shows_completed(self) -> bool {
        self == Tab::Completed
    }

    pub fn toggled(self) -> Self {
        match self {
            Tab::Active => Tab::Completed,
            Tab::Completed => Tab::Active,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Active => "Todos",
            Tab::Completed => "Completed",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Active => 0,
            Tab::Completed => 1,
        }
    }
}

/// Specifying where key presses are routed.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    #[default]
    Browse,
    Search,
    Form,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_default() {
        assert_eq!(Tab::Active, Tab::default());
    }

    #[test]
    fn test_tab_toggled() {
        assert_eq!(Tab::Completed, Tab::Active.toggled());
        assert_eq!(Tab::Active, Tab::Completed.toggled());
    }

    #[test]
    fn test_tab_shows_completed() {
        assert!(!Tab::Active.shows_completed());
        assert!(Tab::Completed.shows_completed());
    }

    #[test]
    fn test_tab_title_and_index() {
        assert_eq!("Todos", Tab::Active.title());
        assert_eq!("Completed", Tab::Completed.title());
        assert_eq!(0, Tab::Active.index());
        assert_eq!(1, Tab::Completed.index());
    }

    #[test]
    fn test_mode() {
        assert_eq!(Mode::Browse, Mode::default());
        assert_ne!(Mode::Search, Mode::Form);
    }
}
