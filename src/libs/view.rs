use super::task::Task;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Builds the task list table: one row per task, `#` is the index used by
    /// `edit`, `view` and `delete`.
    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["#", "TASK", "STATUS"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![index, task.summary(), task.status]);
        }
        table
    }

    pub fn tasks(tasks: &[Task]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn task(task: &Task) {
        println!("{}", task.details());
    }
}
