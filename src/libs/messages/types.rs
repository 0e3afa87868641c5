#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded,
    TaskUpdated,
    TaskDeleted,
    InvalidTaskIndex(usize, usize), // index, collection length
    TasksNotFound(String), // data file path
    TasksHeader,
    TaskDetailsHeader(usize), // index
    ConfirmDeleteTask(String), // task summary
    TaskDeleteCancelled,
    TaskEditNoInput,

    // === TASK PROMPTS ===
    PromptTaskName,
    PromptTaskDate,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptTaskStatus,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleStorage(String), // storage directory
    PromptKeyFile,
    PromptDataFile,

    // === KEY MESSAGES ===
    KeyGenerated(String), // path
    KeyExists(String),    // path

    // === GENERIC ===
    Error(String),
}
