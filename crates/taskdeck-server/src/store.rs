use chrono::Utc;
use taskdeck_api::{TaskDto, TaskPatch};
use tokio::sync::Mutex;

struct TaskTable {
    tasks: Vec<TaskDto>,
    next_id: u64,
}

/// Exclusive owner of the in-process task collection.
///
/// One lock acquisition per handler keeps the table internally consistent
/// after each request; there is no conflict detection beyond that, so
/// overlapping writes resolve last-write-wins. The collection lives in
/// insertion order and ids are assigned from a counter that never resets,
/// so an id stays dead once its task is deleted.
pub struct TaskStore {
    table: Mutex<TaskTable>,
}

impl TaskStore {
    /// Store pre-populated with the three fixed example tasks, ids 1..3.
    #[must_use]
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |id: u64, title: &str, description: &str, completed: bool| TaskDto {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed,
            created_at: now,
            updated_at: None,
        };
        Self {
            table: Mutex::new(TaskTable {
                tasks: vec![
                    seed(
                        1,
                        "Learn REST API basics",
                        "Study HTTP methods and status codes",
                        true,
                    ),
                    seed(
                        2,
                        "Build a portfolio project",
                        "Create a REST API project for GitHub",
                        false,
                    ),
                    seed(3, "Apply for jobs", "Send applications to companies", false),
                ],
                next_id: 4,
            }),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: Mutex::new(TaskTable {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn list(&self) -> Vec<TaskDto> {
        self.table.lock().await.tasks.clone()
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.tasks.len()
    }

    pub async fn get(&self, id: u64) -> Option<TaskDto> {
        self.table
            .lock()
            .await
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
    }

    /// Appends a new task with a fresh id and `completed` forced false.
    /// Title validation happens in the controller; the store takes the
    /// strings as given.
    pub async fn create(&self, title: String, description: String) -> TaskDto {
        let mut table = self.table.lock().await;
        let task = TaskDto {
            id: table.next_id,
            title,
            description,
            completed: false,
            created_at: Utc::now(),
            updated_at: None,
        };
        table.next_id += 1;
        table.tasks.push(task.clone());
        task
    }

    /// Merges the supplied patch fields into the task and stamps
    /// `updated_at`. `created_at` is never touched.
    pub async fn update(&self, id: u64, patch: &TaskPatch) -> Option<TaskDto> {
        let mut table = self.table.lock().await;
        let task = table.tasks.iter_mut().find(|task| task.id == id)?;
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        task.updated_at = Some(Utc::now());
        Some(task.clone())
    }

    /// Hard delete: the task is gone, its id is never reissued.
    pub async fn remove(&self, id: u64) -> bool {
        let mut table = self.table.lock().await;
        let before = table.tasks.len();
        table.tasks.retain(|task| task.id != id);
        table.tasks.len() != before
    }
}
