#[cfg(test)]
mod tests {
    use base64::prelude::*;
    use std::fs;
    use std::path::PathBuf;
    use taskvault::libs::error::{TaskError, ValidationError};
    use taskvault::libs::manager::{decode_tasks, encode_tasks, TaskManager};
    use taskvault::libs::secret::{Cipher, KeyFile, KEY_LEN};
    use taskvault::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        key_path: PathBuf,
        data_path: PathBuf,
    }

    impl TaskTestContext {
        fn open(&self) -> TaskManager {
            TaskManager::open(&self.key_path, &self.data_path).unwrap()
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let key_path = temp_dir.path().join("secret.key");
            let data_path = temp_dir.path().join("tasks.json");
            TaskTestContext {
                _temp_dir: temp_dir,
                key_path,
                data_path,
            }
        }
    }

    fn sample(name: &str) -> Task {
        Task::new(name, "2024-01-15", "Some details", "High", "Open")
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_open_fresh_store(ctx: &mut TaskTestContext) {
        let manager = ctx.open();
        assert!(manager.is_empty());
        assert!(ctx.key_path.exists());
        assert!(!ctx.data_path.exists());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_data_file_loads_as_empty(ctx: &mut TaskTestContext) {
        fs::write(&ctx.data_path, b"").unwrap();
        assert_eq!(ctx.open().len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_add_persists(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("Buy milk")).unwrap();
        assert_eq!(manager.len(), 1);

        // Data file must not contain the plaintext
        let raw = fs::read_to_string(&ctx.data_path).unwrap();
        assert!(!raw.contains("Buy milk"));

        let reopened = ctx.open();
        assert_eq!(reopened.tasks(), &[sample("Buy milk")]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_add_keeps_insertion_order(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        for name in ["First", "Second", "Third"] {
            manager.add(sample(name)).unwrap();
        }

        let names: Vec<String> = ctx.open().tasks().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_add_invalid_is_rejected(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("Valid")).unwrap();
        let before = fs::read(&ctx.data_path).unwrap();

        let result = manager.add(Task::new("Task 1", "2024-01-15", "Details", "High", "Open"));
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::Name))));

        let result = manager.add(Task::new("Task", "15-01-2024", "Details", "High", "Open"));
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::Date))));

        let result = manager.add(Task::new("Task", "2024-01-15", "", "High", "Open"));
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::Text))));

        assert_eq!(manager.len(), 1);
        assert_eq!(fs::read(&ctx.data_path).unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_edit(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        for name in ["First", "Second", "Third"] {
            manager.add(sample(name)).unwrap();
        }

        let updated = Task::new("Second edited", "2025-12-31", "New details", "Low", "Done");
        manager.edit(1, updated.clone()).unwrap();
        assert_eq!(manager.len(), 3);

        let reopened = ctx.open();
        assert_eq!(reopened.tasks()[0], sample("First"));
        assert_eq!(reopened.tasks()[1], updated);
        assert_eq!(reopened.tasks()[2], sample("Third"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_edit_out_of_range(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("Only")).unwrap();

        let result = manager.edit(1, sample("Other"));
        assert!(matches!(result, Err(TaskError::IndexOutOfRange { index: 1, len: 1 })));
        assert!(result.unwrap_err().is_recoverable());
        assert_eq!(ctx.open().tasks(), &[sample("Only")]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_edit_validates_before_index(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();

        let result = manager.edit(5, Task::new("Bad 1", "2024-01-15", "Details", "High", "Open"));
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::Name))));
        assert!(manager.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        for name in ["First", "Second", "Third"] {
            manager.add(sample(name)).unwrap();
        }

        let removed = manager.delete(0).unwrap();
        assert_eq!(removed, sample("First"));

        let reopened = ctx.open();
        assert_eq!(reopened.tasks(), &[sample("Second"), sample("Third")]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_out_of_range(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        assert!(matches!(
            manager.delete(0),
            Err(TaskError::IndexOutOfRange { index: 0, len: 0 })
        ));

        manager.add(sample("Keep")).unwrap();
        assert!(manager.delete(3).is_err());
        assert_eq!(ctx.open().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("Lookup")).unwrap();

        assert_eq!(manager.get(0).unwrap(), &sample("Lookup"));
        assert!(matches!(manager.get(1), Err(TaskError::IndexOutOfRange { index: 1, len: 1 })));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_corrupted_data_file_is_fatal(ctx: &mut TaskTestContext) {
        ctx.open();
        fs::write(&ctx.data_path, "garbage that is not a token").unwrap();

        match TaskManager::open(&ctx.key_path, &ctx.data_path) {
            Err(e) => assert!(!e.is_recoverable()),
            Ok(_) => panic!("corrupted data file should not load"),
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tampered_data_file_is_rejected(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("Buy milk")).unwrap();

        // Flip the IV byte over plaintext offset 15, the "i" of "milk"
        let mut raw = BASE64_URL_SAFE.decode(fs::read(&ctx.data_path).unwrap()).unwrap();
        raw[16] ^= b'i' ^ b'a';
        fs::write(&ctx.data_path, BASE64_URL_SAFE.encode(raw)).unwrap();

        assert!(matches!(
            TaskManager::open(&ctx.key_path, &ctx.data_path),
            Err(TaskError::Decrypt(_))
        ));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_failed_save_rolls_back(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("First")).unwrap();
        manager.add(sample("Second")).unwrap();
        let before = manager.tasks().to_vec();
        let on_disk = fs::read(&ctx.data_path).unwrap();

        // The temp file the save writes through cannot be created over a directory
        fs::create_dir(ctx.data_path.with_extension("tmp")).unwrap();

        let result = manager.add(sample("Third"));
        assert!(matches!(result, Err(TaskError::Io(_))));
        assert!(!result.unwrap_err().is_recoverable());
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.tasks(), before.as_slice());

        assert!(matches!(manager.edit(0, sample("Changed")), Err(TaskError::Io(_))));
        assert_eq!(manager.tasks(), before.as_slice());

        assert!(matches!(manager.delete(1), Err(TaskError::Io(_))));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.tasks(), before.as_slice());

        assert_eq!(fs::read(&ctx.data_path).unwrap(), on_disk);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_data_file_is_json_array_inside(ctx: &mut TaskTestContext) {
        let mut manager = ctx.open();
        manager.add(sample("Inspect")).unwrap();

        let cipher = Cipher::new(&KeyFile::load(&ctx.key_path).unwrap()).unwrap();
        let json = cipher.decrypt(&fs::read(&ctx.data_path).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

        let object = value.as_array().unwrap()[0].as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["date", "description", "name", "priority", "status"]);
        assert_eq!(object["name"], "Inspect");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let cipher = Cipher::new(&[9u8; KEY_LEN]).unwrap();
        let tasks = vec![sample("One"), Task::new("Two", "2024-13-99", "Odd date", "Low", "Blocked")];

        let encrypted = encode_tasks(&cipher, &tasks).unwrap();
        assert_eq!(decode_tasks(&cipher, &encrypted).unwrap(), tasks);

        let empty: Vec<Task> = Vec::new();
        let encrypted = encode_tasks(&cipher, &empty).unwrap();
        assert!(decode_tasks(&cipher, &encrypted).unwrap().is_empty());
    }
}
