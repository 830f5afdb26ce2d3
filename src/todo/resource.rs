use chrono::NaiveDateTime;
use fake::Dummy;

/// Identifier of a todo record.
///
pub type TodoId = i64;

/// Display format for record timestamps, e.g. "November 20, 2025, 09:23 PM".
///
const DATE_FORMAT: &str = "%B %-d, %Y, %I:%M %p";

/// Defines todo data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub completed: bool,
}

impl Todo {
    /// Return a new uncompleted record.
    ///
    pub fn new(id: TodoId, title: &str, description: &str, date: NaiveDateTime) -> Self {
        Todo {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            date,
            completed: false,
        }
    }

    /// Returns true if the lower-cased query occurs in the title, the
    /// description or the decimal id.
    ///
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.id.to_string().contains(&query)
    }

    /// Returns the last-modified timestamp formatted for display.
    ///
    pub fn formatted_date(&self) -> String {
        format_date(&self.date)
    }
}

/// Format a timestamp with the long month name, day, year and 12-hour time.
///
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}
