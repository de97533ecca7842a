//! In-memory store for task management
//!
//! A single owned state container: the ordered task collection plus the
//! active display filter. Mutations go through tagged `TaskAction`s (or the
//! typed methods they delegate to) and are synchronous, run-to-completion
//! operations; the store has exactly one logical writer.

use chrono::Duration;

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TaskError};
use crate::model::{NewTask, Priority, StatusFilter, Task, TaskId, TaskPatch, TaskStatus};

/// Tagged mutation dispatched to the store
#[derive(Debug, Clone)]
pub enum TaskAction {
    Add(NewTask),
    Update { id: TaskId, patch: TaskPatch },
    Delete(TaskId),
    SetFilter(StatusFilter),
}

/// Counts derived over the full (unfiltered) collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total: usize,
}

/// In-memory task collection plus the active display filter
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: StatusFilter,
    clock: Box<dyn Clock>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty store with an injected clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            filter: StatusFilter::All,
            clock,
        }
    }

    /// Create a store seeded with the demo fixtures
    pub fn seeded() -> Self {
        Self::seeded_with_clock(Box::new(SystemClock))
    }

    /// Create a seeded store with an injected clock
    pub fn seeded_with_clock(clock: Box<dyn Clock>) -> Self {
        let mut store = Self::with_clock(clock);
        store.tasks = fixtures(store.clock.as_ref());
        store
    }

    // ========== Mutations ==========

    /// Apply a tagged action
    ///
    /// Returns the affected task for record mutations, `None` for filter
    /// changes.
    pub fn apply(&mut self, action: TaskAction) -> Result<Option<Task>> {
        match action {
            TaskAction::Add(draft) => Ok(Some(self.add_task(draft))),
            TaskAction::Update { id, patch } => self.update_task(&id, patch).map(Some),
            TaskAction::Delete(id) => self.delete_task(&id).map(Some),
            TaskAction::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(None)
            }
        }
    }

    /// Create a task from caller-supplied fields
    ///
    /// Assigns a fresh id and one clock reading to both timestamps, and
    /// inserts the record at the front of the collection.
    pub fn add_task(&mut self, draft: NewTask) -> Task {
        let now = self.clock.now();
        let task = Task {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(0, task.clone());
        task
    }

    /// Merge a partial update over an existing task and refresh `updated_at`
    ///
    /// `created_at` and unpatched fields are left untouched.
    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or(TaskError::NotFound(*id))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        task.updated_at = self.clock.now();

        Ok(task.clone())
    }

    /// Remove a task, returning the removed record
    pub fn delete_task(&mut self, id: &TaskId) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == *id)
            .ok_or(TaskError::NotFound(*id))?;
        Ok(self.tasks.remove(index))
    }

    /// Replace the active display filter
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    // ========== Views ==========

    /// The active display filter
    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// All tasks in collection order (newest first)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Tasks visible under the active filter, in collection order
    pub fn filtered(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t.status))
            .collect()
    }

    /// Counts over the full collection
    pub fn stats(&self) -> TaskStats {
        let mut stats = TaskStats {
            total: self.tasks.len(),
            ..TaskStats::default()
        };
        for task in &self.tasks {
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Demo fixtures: 3 pending, 1 in-progress, 1 completed
fn fixtures(clock: &dyn Clock) -> Vec<Task> {
    let now = clock.now();
    let today = now.date_naive();

    let seed = |title: &str, description: &str, status, priority, due_in_days: i64| Task {
        id: TaskId::new(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        due_date: today + Duration::days(due_in_days),
        created_at: now,
        updated_at: now,
    };

    vec![
        seed(
            "Set up project scaffolding",
            "Initialize the workspace layout, CI checks, and shared tooling",
            TaskStatus::Completed,
            Priority::High,
            3,
        ),
        seed(
            "Implement task management",
            "Build out the create, update, and delete flows for the task board",
            TaskStatus::InProgress,
            Priority::High,
            8,
        ),
        seed(
            "Design dashboard layout",
            "Sketch the overview cards and navigation for the main screens",
            TaskStatus::Pending,
            Priority::Medium,
            13,
        ),
        seed(
            "Write unit tests",
            "Cover the store operations and view filtering with unit tests",
            TaskStatus::Pending,
            Priority::Medium,
            18,
        ),
        seed(
            "Deploy to production",
            "Set up the release pipeline and ship the first public build",
            TaskStatus::Pending,
            Priority::Low,
            24,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::ManualClock;

    fn manual_clock() -> Arc<ManualClock> {
        let start = Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap();
        Arc::new(ManualClock::new(start))
    }

    fn draft(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: format!("{} description", title),
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            due_date: "2025-02-01".parse().unwrap(),
        }
    }

    #[test]
    fn test_add_assigns_fresh_id_and_equal_timestamps() {
        let mut store = TaskStore::seeded();
        let existing: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();

        let task = store.add_task(draft("New task"));

        assert!(!existing.contains(&task.id));
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut store = TaskStore::new();
        let first = store.add_task(draft("First"));
        let second = store.add_task(draft("Second"));

        assert_eq!(store.tasks()[0].id, second.id);
        assert_eq!(store.tasks()[1].id, first.id);
    }

    #[test]
    fn test_update_merges_and_bumps_updated_at() {
        let clock = manual_clock();
        let mut store = TaskStore::with_clock(Box::new(clock.clone()));
        let task = store.add_task(draft("Draft review"));

        clock.advance(Duration::seconds(30));
        let updated = store
            .update_task(
                &task.id,
                TaskPatch {
                    status: Some(TaskStatus::InProgress),
                    ..TaskPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, TaskStatus::InProgress);
        assert_eq!(updated.title, task.title);
        assert_eq!(updated.description, task.description);
        assert_eq!(updated.priority, task.priority);
        assert_eq!(updated.due_date, task.due_date);
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at > updated.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = TaskStore::seeded();
        let before = store.len();

        let err = store
            .update_task(&TaskId::new(), TaskPatch::status(TaskStatus::Completed))
            .unwrap_err();

        assert!(matches!(err, TaskError::NotFound(_)));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_delete_removes_and_lookup_returns_absent() {
        let mut store = TaskStore::seeded();
        let id = store.tasks()[0].id;

        let removed = store.delete_task(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.get(&id).is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_unchanged() {
        let mut store = TaskStore::seeded();
        let before = store.len();

        let err = store.delete_task(&TaskId::new()).unwrap_err();

        assert!(matches!(err, TaskError::NotFound(_)));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_filtered_all_equals_full_collection() {
        let store = TaskStore::seeded();
        assert_eq!(store.filter(), StatusFilter::All);
        assert_eq!(store.filtered().len(), store.len());
    }

    #[test]
    fn test_filtered_matches_and_misses_nothing() {
        let mut store = TaskStore::seeded();
        store.set_filter(StatusFilter::Pending);

        let visible = store.filtered();
        assert!(visible.iter().all(|t| t.status == TaskStatus::Pending));

        let matching = store
            .tasks()
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count();
        assert_eq!(visible.len(), matching);
    }

    #[test]
    fn test_seeded_fixture_scenario() {
        let mut store = TaskStore::seeded();
        assert_eq!(store.len(), 5);

        store.set_filter(StatusFilter::Pending);
        let pending = store.filtered();
        assert_eq!(pending.len(), 3);
        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test]
    fn test_set_filter_does_not_alter_records() {
        let mut store = TaskStore::seeded();
        let before: Vec<Task> = store.tasks().to_vec();

        store.set_filter(StatusFilter::Completed);

        assert_eq!(store.len(), before.len());
        for (after, before) in store.tasks().iter().zip(&before) {
            assert_eq!(after.id, before.id);
            assert_eq!(after.status, before.status);
            assert_eq!(after.updated_at, before.updated_at);
        }
    }

    #[test]
    fn test_add_then_complete_scenario() {
        let clock = manual_clock();
        let mut store = TaskStore::seeded_with_clock(Box::new(clock.clone()));

        let task = store.add_task(draft("X"));
        clock.advance(Duration::seconds(5));
        store
            .update_task(&task.id, TaskPatch::status(TaskStatus::Completed))
            .unwrap();

        let found = store.get(&task.id).unwrap();
        assert_eq!(found.status, TaskStatus::Completed);
        assert!(found.updated_at > found.created_at);
    }

    #[test]
    fn test_apply_matches_typed_methods() {
        let mut store = TaskStore::new();

        let added = store
            .apply(TaskAction::Add(draft("Via action")))
            .unwrap()
            .unwrap();
        assert!(store.get(&added.id).is_some());

        let updated = store
            .apply(TaskAction::Update {
                id: added.id,
                patch: TaskPatch::status(TaskStatus::InProgress),
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, TaskStatus::InProgress);

        assert!(store
            .apply(TaskAction::SetFilter(StatusFilter::InProgress))
            .unwrap()
            .is_none());
        assert_eq!(store.filter(), StatusFilter::InProgress);

        store.apply(TaskAction::Delete(added.id)).unwrap();
        assert!(store.is_empty());

        let err = store.apply(TaskAction::Delete(added.id)).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[test]
    fn test_stats_counts_full_collection() {
        let mut store = TaskStore::seeded();
        store.set_filter(StatusFilter::Completed);

        let stats = store.stats();
        assert_eq!(
            stats,
            TaskStats {
                pending: 3,
                in_progress: 1,
                completed: 1,
                total: 5,
            }
        );
    }
}
