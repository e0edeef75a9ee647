use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::{day_end, day_start};
use crate::task::string_enum_impls;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Vacation,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation",
            LeaveType::Sick => "Sick leave",
            LeaveType::Personal => "Personal matter",
            LeaveType::Other => "Other",
        }
    }
}

string_enum_impls!(LeaveType, "leave type");

/// A day range during which an employee is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: String,
    pub employee_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub approved: bool,
}

impl Leave {
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            leave_type,
            start_date,
            end_date,
            notes: None,
            approved: false,
        }
    }

    /// Checks `at` against `[start 00:00:00.000, end 23:59:59.999]`.
    pub fn covers(&self, at: NaiveDateTime) -> bool {
        at >= day_start(self.start_date) && at <= day_end(self.end_date)
    }

    pub fn covers_day(&self, day: NaiveDate) -> bool {
        self.covers(day_start(day))
    }
}
