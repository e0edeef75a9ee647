use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::task::{Task, TaskStatus, TaskType};

/// Task list filter. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Case-insensitive match against the title or the client name.
    #[serde(default)]
    pub search: String,
    #[serde(default, rename = "type")]
    pub task_type: Option<TaskType>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || task.title.to_lowercase().contains(&needle)
            || task.client_name.to_lowercase().contains(&needle);
        let matches_type = self.task_type.is_none_or(|t| t == task.task_type);
        let matches_status = self.status.is_none_or(|s| s == task.status);
        matches_search && matches_type && matches_status
    }

    /// Matching tasks, earliest start first. Ties keep storage order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let mut matched: Vec<&Task> = tasks.iter().filter(|t| self.matches(t)).collect();
        matched.sort_by_key(|t| t.start_date);
        matched
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub include_inactive: bool,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        let needle = self.search.to_lowercase();
        (needle.is_empty() || employee.name.to_lowercase().contains(&needle))
            && (self.include_inactive || employee.is_active)
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}
