use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use crate::calendar::{CalendarCursor, CalendarView, is_weekend};
use crate::config::BoardConfig;
use crate::employee::Employee;
use crate::leave::Leave;
use crate::store::ScheduleStore;
use crate::task::Task;

/// One employee/day intersection of the grid.
#[derive(Debug, Serialize)]
pub struct BoardCell<'a> {
    pub day: NaiveDate,
    pub is_weekend: bool,
    pub is_today: bool,
    pub leave: Option<&'a Leave>,
    pub tasks: Vec<&'a Task>,
}

impl BoardCell<'_> {
    pub fn is_empty(&self) -> bool {
        self.leave.is_none() && self.tasks.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct BoardRow<'a> {
    pub employee: &'a Employee,
    pub cells: Vec<BoardCell<'a>>,
}

/// Snapshot of the scheduling grid: active employees down, visible days
/// across.
#[derive(Debug, Serialize)]
pub struct Board<'a> {
    pub view: CalendarView,
    pub label: String,
    pub days: Vec<NaiveDate>,
    pub rows: Vec<BoardRow<'a>>,
}

impl<'a> Board<'a> {
    pub fn build(store: &'a ScheduleStore, cursor: &CalendarCursor) -> Self {
        let days = cursor.visible_days();
        let today = Local::now().date_naive();
        let rows = store
            .active_employees()
            .map(|employee| BoardRow {
                employee,
                cells: days
                    .iter()
                    .map(|&day| BoardCell {
                        day,
                        is_weekend: is_weekend(day),
                        is_today: day == today,
                        leave: store.leave_for_employee(&employee.id, day),
                        tasks: store.tasks_for_employee(&employee.id, day),
                    })
                    .collect(),
            })
            .collect();
        Self {
            view: cursor.view,
            label: cursor.label(),
            days,
            rows,
        }
    }

    pub fn row(&self, employee_id: &str) -> Option<&BoardRow<'a>> {
        self.rows.iter().find(|r| r.employee.id == employee_id)
    }

    pub fn cell(&self, employee_id: &str, day: NaiveDate) -> Option<&BoardCell<'a>> {
        self.row(employee_id)?.cells.iter().find(|c| c.day == day)
    }
}

/// Employees a task is assigned to, in assignment order. Ids that match no
/// employee are skipped.
pub fn assigned_employees<'a>(store: &'a ScheduleStore, task: &Task) -> Vec<&'a Employee> {
    task.assigned_to
        .iter()
        .filter_map(|id| store.employee_by_id(id))
        .collect()
}

/// Comma-separated first names of the assignees, as shown on task cards.
pub fn assignee_names(store: &ScheduleStore, task: &Task) -> String {
    assigned_employees(store, task)
        .iter()
        .map(|e| e.first_name())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pre-filled task for a click on an empty cell: pending installation of
/// medium priority, assigned to the cell's employee, starting at the
/// configured hour.
pub fn draft_task(
    id: impl Into<String>,
    employee_id: &str,
    day: NaiveDate,
    config: &BoardConfig,
) -> Task {
    let start = day.and_time(config.new_task_start);
    let end = Duration::try_minutes(config.new_task_duration_minutes)
        .and_then(|length| start.checked_add_signed(length))
        .unwrap_or(start);
    let mut task = Task::new(id, "", start, end);
    task.assigned_to.push(employee_id.to_string());
    task
}
