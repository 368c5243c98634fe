//! Typed identifiers and their allocator
//!
//! Users, projects, and tasks draw ids from three independent counters,
//! each starting at 1 and strictly increasing. The counters live in an
//! explicit [`IdAllocator`] owned by the manager instead of process-wide
//! state, so independent managers never observe each other's ids and
//! tests run in isolation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Returns the numeric value of the id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Returns the numeric value of the id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Returns the numeric value of the id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocator for entity identifiers
///
/// Each entity kind has its own counter, so user, project, and task ids
/// are unique per kind but overlap across kinds (the first user and the
/// first project are both id 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next_user: u64,
    next_project: u64,
    next_task: u64,
}

impl IdAllocator {
    /// Creates an allocator with all counters at 1
    pub fn new() -> Self {
        Self {
            next_user: 1,
            next_project: 1,
            next_task: 1,
        }
    }

    /// Hands out the next user id
    pub fn next_user_id(&mut self) -> UserId {
        let id = UserId(self.next_user);
        self.next_user += 1;
        id
    }

    /// Hands out the next project id
    pub fn next_project_id(&mut self) -> ProjectId {
        let id = ProjectId(self.next_project);
        self.next_project += 1;
        id
    }

    /// Hands out the next task id
    pub fn next_task_id(&mut self) -> TaskId {
        let id = TaskId(self.next_task);
        self.next_task += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_user_id().value(), 1);
        assert_eq!(ids.next_project_id().value(), 1);
        assert_eq!(ids.next_task_id().value(), 1);
    }

    #[test]
    fn counters_are_independent() {
        let mut ids = IdAllocator::new();
        ids.next_user_id();
        ids.next_user_id();
        ids.next_task_id();

        // Two users and one task handed out, projects untouched
        assert_eq!(ids.next_user_id().value(), 3);
        assert_eq!(ids.next_task_id().value(), 2);
        assert_eq!(ids.next_project_id().value(), 1);
    }

    #[test]
    fn task_ids_strictly_increase() {
        let mut ids = IdAllocator::new();
        let mut last = ids.next_task_id().value();
        for _ in 0..10 {
            let next = ids.next_task_id().value();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn separate_allocators_do_not_share_state() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();
        a.next_task_id();
        a.next_task_id();

        assert_eq!(b.next_task_id().value(), 1);
    }

    #[test]
    fn id_serde_is_transparent() {
        let mut ids = IdAllocator::new();
        let id = ids.next_task_id();
        assert_eq!(serde_json::to_string(&id).unwrap(), "1");
    }
}
