//! Field collection shared by the `add` and `edit` commands.

use crate::libs::{
    messages::Message,
    task::{Task, TaskFields},
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

/// Task fields accepted as command-line flags.
#[derive(Debug, Args, Clone, Default)]
pub struct TaskFieldArgs {
    /// Task name (letters and spaces)
    #[arg(short, long)]
    name: Option<String>,

    /// Due date, YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,

    /// Description (letters and spaces)
    #[arg(short = 'D', long)]
    description: Option<String>,

    /// Priority (letters and spaces)
    #[arg(short, long)]
    priority: Option<String>,

    /// Status (letters and spaces)
    #[arg(short, long)]
    status: Option<String>,
}

impl From<TaskFieldArgs> for TaskFields {
    fn from(args: TaskFieldArgs) -> Self {
        TaskFields {
            name: args.name,
            date: args.date,
            description: args.description,
            priority: args.priority,
            status: args.status,
        }
    }
}

/// Prompts for every field missing from `fields`.
///
/// `initial` pre-fills each prompt (the current values when editing). The
/// date prompt falls back to today's date.
pub fn complete(fields: TaskFields, initial: Option<&Task>) -> Result<Task> {
    let today = Local::now().format("%Y-%m-%d").to_string();

    Ok(Task {
        name: ask(fields.name, Message::PromptTaskName, initial.map(|t| t.name.as_str()))?,
        date: ask(
            fields.date,
            Message::PromptTaskDate,
            Some(initial.map(|t| t.date.as_str()).unwrap_or(today.as_str())),
        )?,
        description: ask(fields.description, Message::PromptTaskDescription, initial.map(|t| t.description.as_str()))?,
        priority: ask(fields.priority, Message::PromptTaskPriority, initial.map(|t| t.priority.as_str()))?,
        status: ask(fields.status, Message::PromptTaskStatus, initial.map(|t| t.status.as_str()))?,
    })
}

fn ask(value: Option<String>, prompt: Message, initial: Option<&str>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt.to_string()).allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}
