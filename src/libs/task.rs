use super::error::ValidationError;
use super::validate::{is_valid_date, is_valid_name, is_valid_text};
use serde::{Deserialize, Serialize};

/// One to-do item.
///
/// Serialized as a JSON object with the keys `name`, `date`, `description`,
/// `priority` and `status`, all strings. A task has no identifier of its own;
/// it is addressed by its position in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub date: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

impl Task {
    pub fn new(name: &str, date: &str, description: &str, priority: &str, status: &str) -> Self {
        Task {
            name: name.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
        }
    }

    /// Checks every field and reports the first one that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_name(&self.name) {
            return Err(ValidationError::Name);
        }
        if !is_valid_date(&self.date) {
            return Err(ValidationError::Date);
        }
        if !is_valid_text(&self.description) || !is_valid_text(&self.priority) || !is_valid_text(&self.status) {
            return Err(ValidationError::Text);
        }
        Ok(())
    }

    /// List rendering: `<name> - <date> (<priority>)`.
    pub fn summary(&self) -> String {
        format!("{} - {} ({})", self.name, self.date, self.priority)
    }

    /// Detail rendering used by the view action.
    pub fn details(&self) -> String {
        format!(
            "Name: {}\nDate: {}\nDescription: {}\nPriority: {}\nStatus: {}",
            self.name, self.date, self.description, self.priority, self.status
        )
    }
}

/// Partial set of task fields, as collected from the command line.
///
/// Missing fields are filled in from prompts or from an existing task.
#[derive(Debug, Clone, Default)]
pub struct TaskFields {
    pub name: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl TaskFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    /// Builds a task, taking any field not set here from `base`.
    pub fn merge_onto(self, base: &Task) -> Task {
        Task {
            name: self.name.unwrap_or_else(|| base.name.clone()),
            date: self.date.unwrap_or_else(|| base.date.clone()),
            description: self.description.unwrap_or_else(|| base.description.clone()),
            priority: self.priority.unwrap_or_else(|| base.priority.clone()),
            status: self.status.unwrap_or_else(|| base.status.clone()),
        }
    }
}
