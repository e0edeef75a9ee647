//! Drag-and-drop rescheduling.
//!
//! Dropping a task on a calendar cell keeps the task's time of day and its
//! exact duration and only changes the calendar date. The employee of the
//! target cell is accepted but never written into `assigned_to`: a drop
//! reschedules, it does not reassign.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::store::ScheduleStore;
use crate::task::Task;

/// New `(start, end)` for `task` placed on `day`, or `None` when the end
/// would fall outside the representable date range.
pub fn rescheduled_window(
    task: &Task,
    day: NaiveDate,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let new_start = day.and_time(task.start_date.time());
    let new_end = new_start.checked_add_signed(task.duration())?;
    Some((new_start, new_end))
}

impl ScheduleStore {
    /// Moves a task to `day`, preserving time of day and duration.
    pub fn move_task(&mut self, task_id: &str, day: NaiveDate) {
        let Some(task) = self.task_by_id(task_id) else {
            debug!(task_id, %day, "move_task: unknown id, ignoring");
            return;
        };
        let from = task.start_date;
        let Some((start_date, end_date)) = rescheduled_window(task, day) else {
            debug!(task_id, %day, "move_task: window out of range, ignoring");
            return;
        };
        info!(task_id, %from, to = %start_date, "rescheduling task");
        self.set_task_window(task_id, start_date, end_date);
    }
}

/// Handles a drop of `task_id` on the cell of `employee_id` at `day`.
pub fn reschedule_on_drop(
    store: &mut ScheduleStore,
    task_id: &str,
    employee_id: &str,
    day: NaiveDate,
) {
    if let Some(task) = store.task_by_id(task_id) {
        if !task.is_assigned_to(employee_id) {
            debug!(
                task_id,
                employee_id, "dropped on another employee's row; assignment left unchanged"
            );
        }
    }
    store.move_task(task_id, day);
}
