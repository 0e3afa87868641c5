//! Display implementation for taskvault messages.
//!
//! All user-facing text is defined here, in one place, so commands only ever
//! refer to a [`Message`] variant. Emoji prefixes are added by the output
//! macros (`msg_success!`, `msg_error!` and friends), not by the text itself.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added successfully!".to_string(),
            Message::TaskUpdated => "Task updated successfully!".to_string(),
            Message::TaskDeleted => "Task deleted successfully!".to_string(),
            Message::InvalidTaskIndex(index, len) => {
                format!("Invalid task index! {} is out of range for {} task(s).", index, len)
            }
            Message::TasksNotFound(path) => format!("No tasks found in {}", path),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TaskDetailsHeader(index) => format!("Task #{}", index),
            Message::ConfirmDeleteTask(summary) => format!("Delete task \"{}\"?", summary),
            Message::TaskDeleteCancelled => "Deletion cancelled".to_string(),
            Message::TaskEditNoInput => "Edit aborted: every field needs a value".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskName => "Name".to_string(),
            Message::PromptTaskDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleStorage(dir) => format!("Storage (relative names are placed in {})", dir),
            Message::PromptKeyFile => "Key file (name or absolute path)".to_string(),
            Message::PromptDataFile => "Data file (name or absolute path)".to_string(),

            // === KEY MESSAGES ===
            Message::KeyGenerated(path) => format!("Generated a new encryption key at {}", path),
            Message::KeyExists(path) => format!("Using existing encryption key at {}", path),

            // === GENERIC ===
            Message::Error(error) => error.clone(),
        };

        write!(f, "{}", text)
    }
}
