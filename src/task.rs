use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Installation,
    Repair,
    Maintenance,
    Inspection,
    Emergency,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        TaskType::Installation,
        TaskType::Repair,
        TaskType::Maintenance,
        TaskType::Inspection,
        TaskType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Installation => "installation",
            TaskType::Repair => "repair",
            TaskType::Maintenance => "maintenance",
            TaskType::Inspection => "inspection",
            TaskType::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Installation => "Installation",
            TaskType::Repair => "Repair",
            TaskType::Maintenance => "Maintenance",
            TaskType::Inspection => "Inspection",
            TaskType::Emergency => "Emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

macro_rules! string_enum_impls {
    ($ty:ident, $what:literal) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::BoardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| {
                        $crate::error::BoardError::invalid(format!("unknown {} '{}'", $what, s))
                    })
            }
        }
    };
}

string_enum_impls!(TaskType, "task type");
string_enum_impls!(TaskStatus, "task status");
string_enum_impls!(Priority, "priority");

pub(crate) use string_enum_impls;

/// A scheduled unit of field work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub start_date: NaiveDateTime,
    /// Expected to be on or after `start_date`; not validated.
    pub end_date: NaiveDateTime,
    /// Employee ids, in assignment order. Ids that match no employee are
    /// kept as-is and skipped when rendering.
    #[serde(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        let now = Local::now().naive_local();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            task_type: TaskType::Installation,
            status: TaskStatus::Pending,
            start_date,
            end_date,
            assigned_to: Vec::new(),
            client_name: String::new(),
            client_address: String::new(),
            client_phone: None,
            priority: Priority::Medium,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    pub fn is_assigned_to(&self, employee_id: &str) -> bool {
        self.assigned_to.iter().any(|id| id == employee_id)
    }

    /// Inclusive on both ends: a task ending exactly at `window_start`
    /// still overlaps.
    pub fn overlaps(&self, window_start: NaiveDateTime, window_end: NaiveDateTime) -> bool {
        self.start_date <= window_end && self.end_date >= window_start
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::Urgent
    }
}
