//! Taskdesk - an in-memory task tracker
//!
//! Taskdesk models users, projects, and the tasks inside them: creation,
//! assignment, status transitions, and cross-project queries (by status,
//! by assignee, by project, overdue). Everything lives in memory behind a
//! single [`TaskManager`] facade; there is no persistence and no
//! concurrency, and a manager instance is not safe to mutate from more
//! than one thread without external synchronization.

pub mod cli;
pub mod domain;

pub use domain::{
    ManagerError, Project, ProjectError, ProjectId, Task, TaskId, TaskManager, TaskStatus, User,
    UserId,
};
