//! Notable people sharing a birthday.

use serde::Serialize;

/// One entry of the ranked list of people born on a month/day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotablePerson {
    /// 1-based position on the source page.
    pub rank: u32,
    pub name: String,
    /// Current age; absent when the source does not print one.
    pub age: Option<u32>,
    pub occupation: String,
}

/// Ranked people list together with the page it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotablePeople {
    pub people: Vec<NotablePerson>,
    pub source_url: String,
}

impl NotablePeople {
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
