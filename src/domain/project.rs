//! Project domain model
//!
//! A project owns an ordered collection of tasks. Insertion order is
//! preserved and observable through every query.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::{ProjectId, TaskId};
use super::task::Task;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectError {
    #[error("Task {0} is not in this project")]
    TaskNotFound(TaskId),
}

/// A named container of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,

    /// Project name, stored as given
    pub name: String,

    /// Tasks in insertion order
    tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project with the given id
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Appends a task to the project
    ///
    /// No duplicate check: the caller is responsible for not adding the
    /// same task twice.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the task with the given id and returns it
    ///
    /// Unlike lookup, deleting a task that is not in the project is an
    /// error, never a silent no-op.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, ProjectError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(ProjectError::TaskNotFound(id))?;
        Ok(self.tasks.remove(position))
    }

    /// Finds a task by id
    ///
    /// Absence is a normal outcome, not an error.
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub(crate) fn find_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// The project's tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdAllocator;
    use chrono::{Duration, Utc};

    fn make_project() -> (Project, IdAllocator) {
        let mut ids = IdAllocator::new();
        (Project::new(ids.next_project_id(), "Редизайн сайта"), ids)
    }

    fn make_task(ids: &mut IdAllocator, title: &str) -> Task {
        Task::new(
            ids.next_task_id(),
            title,
            "Описание",
            Utc::now() + Duration::days(7),
        )
    }

    #[test]
    fn add_then_find_returns_the_task() {
        let (mut project, mut ids) = make_project();
        let task = make_task(&mut ids, "Задача");
        let task_id = task.id;

        project.add_task(task);
        assert_eq!(project.find_task(task_id).map(|t| t.id), Some(task_id));
    }

    #[test]
    fn find_miss_is_none_not_error() {
        let (project, mut ids) = make_project();
        assert!(project.find_task(ids.next_task_id()).is_none());
    }

    #[test]
    fn delete_removes_the_task() {
        let (mut project, mut ids) = make_project();
        let task = make_task(&mut ids, "Задача");
        let task_id = task.id;
        project.add_task(task);

        let removed = project.delete_task(task_id).unwrap();
        assert_eq!(removed.id, task_id);
        assert!(project.find_task(task_id).is_none());
        assert!(project.tasks().is_empty());
    }

    #[test]
    fn delete_unknown_task_is_an_error() {
        let (mut project, mut ids) = make_project();
        let absent = ids.next_task_id();

        assert_eq!(
            project.delete_task(absent),
            Err(ProjectError::TaskNotFound(absent))
        );
    }

    #[test]
    fn tasks_keep_insertion_order() {
        let (mut project, mut ids) = make_project();
        let first = make_task(&mut ids, "Первая");
        let second = make_task(&mut ids, "Вторая");
        let third = make_task(&mut ids, "Третья");

        project.add_task(first);
        project.add_task(second);
        project.add_task(third);

        let titles: Vec<_> = project.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Первая", "Вторая", "Третья"]);
    }

    #[test]
    fn delete_removes_only_the_matching_task() {
        let (mut project, mut ids) = make_project();
        let first = make_task(&mut ids, "Первая");
        let second = make_task(&mut ids, "Вторая");
        let first_id = first.id;
        let second_id = second.id;

        project.add_task(first);
        project.add_task(second);
        project.delete_task(first_id).unwrap();

        assert!(project.find_task(first_id).is_none());
        assert!(project.find_task(second_id).is_some());
    }
}
