//! Task domain model
//!
//! Tasks are the units of work inside a project. A task created with a
//! due date already in the past starts out `Overdue`; that is the only
//! automatic status derivation, and nothing re-derives the status later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::{TaskId, UserId};
use super::user::User;

/// Status of a task
///
/// Transitions are ToDo→InProgress, ToDo→Completed, InProgress→Completed,
/// and (for tasks born Overdue) Overdue→InProgress/→Completed. Nothing
/// moves a task back to Overdue or ToDo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Overdue,
    Completed,
}

impl TaskStatus {
    /// Returns true if this status represents completion
    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::ToDo => write!(f, "ToDo"),
            TaskStatus::InProgress => write!(f, "InProgress"),
            TaskStatus::Overdue => write!(f, "Overdue"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A unit of work within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Human-readable title
    pub title: String,

    /// Longer description of the work
    pub description: String,

    /// User the task is assigned to, if any
    ///
    /// A non-owning association: only the user's id is held, so two
    /// distinct users with identical names never alias each other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,

    /// Current status
    pub status: TaskStatus,

    /// When the task is due
    pub due_date: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with no assignee
    ///
    /// A due date earlier than the current time puts the task straight
    /// into `Overdue`; otherwise it starts as `ToDo`.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        let status = if due_date < Utc::now() {
            TaskStatus::Overdue
        } else {
            TaskStatus::ToDo
        };

        Self {
            id,
            title: title.into(),
            description: description.into(),
            assigned_to: None,
            status,
            due_date,
        }
    }

    /// Sets the status to `Completed`
    ///
    /// No precondition; calling it again is a no-op.
    pub fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// Sets the status to `InProgress`
    ///
    /// Same contract as [`Task::mark_completed`].
    pub fn mark_in_progress(&mut self) {
        self.status = TaskStatus::InProgress;
    }

    /// Formats the one-line human-readable summary
    ///
    /// `assignee` is the resolved user for `assigned_to`; pass `None` for
    /// an unassigned task, which renders the assignee slot empty. The due
    /// date renders as `yyyy-MM-dd`.
    pub fn summary(&self, assignee: Option<&User>) -> String {
        let assignee = assignee.map(User::to_string).unwrap_or_default();
        format!(
            "Id: {} Название: {} Описание: {} Назначена пользователю: {}, Статус: {}, Дедлайн: {}",
            self.id,
            self.title,
            self.description,
            assignee,
            self.status,
            self.due_date.format("%Y-%m-%d"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdAllocator;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn make_task(due_date: DateTime<Utc>) -> Task {
        let mut ids = IdAllocator::new();
        Task::new(ids.next_task_id(), "Задача", "Описание задачи", due_date)
    }

    #[test]
    fn past_due_date_starts_overdue() {
        let task = make_task(Utc::now() - Duration::days(1));
        assert_eq!(task.status, TaskStatus::Overdue);
    }

    #[test]
    fn future_due_date_starts_todo() {
        let task = make_task(Utc::now() + Duration::days(365));
        assert_eq!(task.status, TaskStatus::ToDo);
    }

    #[test]
    fn new_task_is_unassigned() {
        let task = make_task(Utc::now() + Duration::days(1));
        assert!(task.assigned_to.is_none());
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut task = make_task(Utc::now() + Duration::days(1));
        task.mark_completed();
        task.mark_completed();
        task.mark_completed();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.status.is_complete());
    }

    #[test]
    fn status_is_not_rederived_after_construction() {
        let mut task = make_task(Utc::now() - Duration::days(1));
        assert_eq!(task.status, TaskStatus::Overdue);

        // Starting work on a stale task sticks; nothing flips it back
        task.mark_in_progress();
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn summary_line_matches_sample_output() {
        let mut ids = IdAllocator::new();
        let due = Utc.with_ymd_and_hms(2025, 4, 15, 0, 0, 0).unwrap();
        let mut task = Task::new(
            ids.next_task_id(),
            "Переработка лого",
            "Создание нового логотипа по требованиям заказчика.",
            due,
        );
        let user = User::new(ids.next_user_id(), "Михаил", "michael@gmail.com");
        task.assigned_to = Some(user.id);
        task.mark_completed();

        assert_eq!(
            task.summary(Some(&user)),
            "Id: 1 Название: Переработка лого Описание: Создание нового логотипа \
             по требованиям заказчика. Назначена пользователю: Имя: Михаил \
             Почта: michael@gmail.com, Статус: Completed, Дедлайн: 2025-04-15"
        );
    }

    #[test]
    fn summary_renders_missing_assignee_as_empty() {
        let mut ids = IdAllocator::new();
        let due = Utc.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).unwrap();
        let task = Task::new(ids.next_task_id(), "Задача", "Описание", due);

        assert_eq!(
            task.summary(None),
            "Id: 1 Название: Задача Описание: Описание Назначена пользователю: , \
             Статус: ToDo, Дедлайн: 2030-01-02"
        );
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    proptest! {
        // One minute of margin keeps the clock from moving the boundary
        // between sampling "now" and constructing the task.
        #[test]
        fn any_past_due_date_starts_overdue(minutes in 1i64..525_600) {
            let task = make_task(Utc::now() - Duration::minutes(minutes));
            prop_assert_eq!(task.status, TaskStatus::Overdue);
        }

        #[test]
        fn any_future_due_date_starts_todo(minutes in 1i64..525_600) {
            let task = make_task(Utc::now() + Duration::minutes(minutes));
            prop_assert_eq!(task.status, TaskStatus::ToDo);
        }
    }
}
