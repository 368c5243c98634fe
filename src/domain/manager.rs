//! Task manager facade
//!
//! The single coordinating component: it creates users, projects, and
//! tasks, owns them for their whole lifetime, and answers the
//! cross-project queries. All queries scan projects in creation order and
//! tasks in insertion order.
//!
//! The manager is single-threaded by contract. Nothing here is safe for
//! concurrent mutation; callers that need sharing must add their own
//! synchronization around the whole instance.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::id::{IdAllocator, ProjectId, TaskId, UserId};
use super::project::Project;
use super::task::{Task, TaskStatus};
use super::user::User;

/// Errors raised by the manager's mutating operations
///
/// Every variant is an invalid-argument failure: a required value is
/// blank, or an entity reference does not resolve to anything this
/// manager owns. Deleting an absent task reports separately, through
/// [`ProjectError`](super::ProjectError).
#[derive(Debug, Error, PartialEq)]
pub enum ManagerError {
    #[error("Task title must not be empty")]
    MissingTitle,

    #[error("Task description must not be empty")]
    MissingDescription,

    #[error("Unknown project: {0}")]
    UnknownProject(ProjectId),

    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),

    #[error("Unknown user: {0}")]
    UnknownUser(UserId),
}

/// The coordinating facade over users, projects, and tasks
#[derive(Debug, Default)]
pub struct TaskManager {
    ids: IdAllocator,
    users: Vec<User>,
    projects: Vec<Project>,
}

impl TaskManager {
    /// Creates an empty manager with its own id allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user
    ///
    /// Name and email are stored as given, without validation.
    pub fn create_user(&mut self, name: impl Into<String>, email: impl Into<String>) -> &User {
        let user = User::new(self.ids.next_user_id(), name, email);
        self.users.push(user);
        &self.users[self.users.len() - 1]
    }

    /// Creates a new empty project
    pub fn create_project(&mut self, name: impl Into<String>) -> &Project {
        let project = Project::new(self.ids.next_project_id(), name);
        self.projects.push(project);
        &self.projects[self.projects.len() - 1]
    }

    /// Creates a task inside the given project
    ///
    /// The title and description are required; a blank value is rejected
    /// before anything is allocated or mutated, as is a project this
    /// manager does not own.
    pub fn create_task(
        &mut self,
        project_id: ProjectId,
        title: &str,
        description: &str,
        due_date: DateTime<Utc>,
    ) -> Result<&Task, ManagerError> {
        if title.trim().is_empty() {
            return Err(ManagerError::MissingTitle);
        }
        if description.trim().is_empty() {
            return Err(ManagerError::MissingDescription);
        }
        let position = self
            .projects
            .iter()
            .position(|project| project.id == project_id)
            .ok_or(ManagerError::UnknownProject(project_id))?;

        let task = Task::new(self.ids.next_task_id(), title, description, due_date);
        let project = &mut self.projects[position];
        project.add_task(task);

        let tasks = project.tasks();
        Ok(&tasks[tasks.len() - 1])
    }

    /// Assigns a task to a user
    ///
    /// Both references must resolve to entities this manager owns.
    pub fn assign_task(&mut self, task_id: TaskId, user_id: UserId) -> Result<(), ManagerError> {
        if !self.users.iter().any(|user| user.id == user_id) {
            return Err(ManagerError::UnknownUser(user_id));
        }
        let task = self
            .projects
            .iter_mut()
            .find_map(|project| project.find_task_mut(task_id))
            .ok_or(ManagerError::UnknownTask(task_id))?;
        task.assigned_to = Some(user_id);
        Ok(())
    }

    /// All tasks with the given status, across all projects
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.projects
            .iter()
            .flat_map(|project| project.tasks())
            .filter(|task| task.status == status)
            .collect()
    }

    /// All tasks assigned to the given user, across all projects
    ///
    /// Matching is by user id. Ids are unique per user, so a second user
    /// with the same name and email never picks up another user's tasks.
    pub fn tasks_assigned_to(&self, user_id: UserId) -> Vec<&Task> {
        self.projects
            .iter()
            .flat_map(|project| project.tasks())
            .filter(|task| task.assigned_to == Some(user_id))
            .collect()
    }

    /// The tasks of the given project, in insertion order
    ///
    /// Returned as an immutable view of the live collection; mutation
    /// goes through the manager or [`Self::project_mut`].
    pub fn tasks_for_project(&self, project_id: ProjectId) -> Result<&[Task], ManagerError> {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
            .map(Project::tasks)
            .ok_or(ManagerError::UnknownProject(project_id))
    }

    /// All tasks whose due date has passed and that are not completed
    ///
    /// Computed against the clock on every call; the stored `Overdue`
    /// status value plays no part. A stale task that nobody touches keeps
    /// showing up here until it is completed.
    pub fn overdue_tasks(&self) -> Vec<&Task> {
        let now = Utc::now();
        self.projects
            .iter()
            .flat_map(|project| project.tasks())
            .filter(|task| task.due_date < now && !task.status.is_complete())
            .collect()
    }

    /// Looks up a task by id across all projects
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.projects.iter().find_map(|project| project.find_task(id))
    }

    /// Mutable task lookup, for status changes and edits
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.projects
            .iter_mut()
            .find_map(|project| project.find_task_mut(id))
    }

    /// Looks up a user by id
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Looks up a project by id
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Mutable project lookup, for task removal
    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }

    /// Registered users in creation order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Projects in creation order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Formats the summary line for a task, resolving its assignee
    pub fn summary(&self, task: &Task) -> String {
        task.summary(task.assigned_to.and_then(|id| self.user(id)))
    }
}
