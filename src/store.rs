use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::calendar::{day_end, day_start};
use crate::employee::Employee;
use crate::leave::Leave;
use crate::task::Task;

/// In-memory owner of every employee, task and leave record.
///
/// The collections are only reachable through the mutators below; readers
/// get shared slices. Lookups on unknown ids return `None` or an empty
/// result and updates on unknown ids do nothing. Ids are not checked for
/// uniqueness: updates replace every record carrying the id and deletes
/// remove every one.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    employees: Vec<Employee>,
    tasks: Vec<Task>,
    leaves: Vec<Leave>,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(employees: Vec<Employee>, tasks: Vec<Task>, leaves: Vec<Leave>) -> Self {
        Self {
            employees,
            tasks,
            leaves,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn leaves(&self) -> &[Leave] {
        &self.leaves
    }

    // -- tasks --

    pub fn add_task(&mut self, task: Task) {
        debug!(task_id = %task.id, "adding task");
        self.tasks.push(task);
    }

    /// Replaces every task with the same id and stamps `updated_at`.
    pub fn update_task(&mut self, task: Task) {
        let stamp = now();
        let mut replaced = 0;
        for slot in self.tasks.iter_mut().filter(|t| t.id == task.id) {
            let previous = slot.updated_at;
            *slot = task.clone();
            // never move backwards, even if the wall clock does
            slot.updated_at = stamp.max(previous);
            replaced += 1;
        }
        if replaced == 0 {
            debug!(task_id = %task.id, "update_task: unknown id, ignoring");
        } else {
            debug!(task_id = %task.id, replaced, "task updated");
        }
    }

    pub fn delete_task(&mut self, task_id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        if self.tasks.len() == before {
            debug!(task_id, "delete_task: unknown id, ignoring");
        } else {
            debug!(task_id, "task deleted");
        }
    }

    /// Sets both ends of a task's window at once.
    pub fn set_task_window(&mut self, task_id: &str, start: NaiveDateTime, end: NaiveDateTime) {
        let stamp = now();
        let mut moved = 0;
        for task in self.tasks.iter_mut().filter(|t| t.id == task_id) {
            task.start_date = start;
            task.end_date = end;
            task.updated_at = stamp.max(task.updated_at);
            moved += 1;
        }
        if moved == 0 {
            debug!(task_id, "set_task_window: unknown id, ignoring");
        }
    }

    pub fn task_by_id(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Tasks assigned to `employee_id` whose window touches `day`.
    pub fn tasks_for_employee(&self, employee_id: &str, day: NaiveDate) -> Vec<&Task> {
        let (start, end) = (day_start(day), day_end(day));
        self.tasks
            .iter()
            .filter(|t| t.is_assigned_to(employee_id) && t.overlaps(start, end))
            .collect()
    }

    // -- employees --

    pub fn add_employee(&mut self, employee: Employee) {
        debug!(employee_id = %employee.id, "adding employee");
        self.employees.push(employee);
    }

    pub fn update_employee(&mut self, employee: Employee) {
        let mut replaced = 0;
        for slot in self.employees.iter_mut().filter(|e| e.id == employee.id) {
            *slot = employee.clone();
            replaced += 1;
        }
        if replaced == 0 {
            debug!(employee_id = %employee.id, "update_employee: unknown id, ignoring");
        } else {
            debug!(employee_id = %employee.id, replaced, "employee updated");
        }
    }

    pub fn set_employee_active(&mut self, employee_id: &str, is_active: bool) {
        for employee in self.employees.iter_mut().filter(|e| e.id == employee_id) {
            employee.is_active = is_active;
        }
        debug!(employee_id, is_active, "employee visibility changed");
    }

    pub fn employee_by_id(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    pub fn active_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.is_active)
    }

    // -- leaves --

    pub fn add_leave(&mut self, leave: Leave) {
        debug!(leave_id = %leave.id, employee_id = %leave.employee_id, "adding leave");
        self.leaves.push(leave);
    }

    pub fn update_leave(&mut self, leave: Leave) {
        let mut replaced = 0;
        for slot in self.leaves.iter_mut().filter(|l| l.id == leave.id) {
            *slot = leave.clone();
            replaced += 1;
        }
        if replaced == 0 {
            debug!(leave_id = %leave.id, "update_leave: unknown id, ignoring");
        } else {
            debug!(leave_id = %leave.id, replaced, "leave updated");
        }
    }

    pub fn delete_leave(&mut self, leave_id: &str) {
        let before = self.leaves.len();
        self.leaves.retain(|l| l.id != leave_id);
        if self.leaves.len() == before {
            debug!(leave_id, "delete_leave: unknown id, ignoring");
        }
    }

    pub fn leave_by_id(&self, leave_id: &str) -> Option<&Leave> {
        self.leaves.iter().find(|l| l.id == leave_id)
    }

    /// First leave in storage order that covers `day`. Later overlapping
    /// leaves for the same employee are never surfaced.
    pub fn leave_for_employee(&self, employee_id: &str, day: NaiveDate) -> Option<&Leave> {
        self.leaves
            .iter()
            .find(|l| l.employee_id == employee_id && l.covers_day(day))
    }

    pub fn leaves_for_employee(&self, employee_id: &str) -> Vec<&Leave> {
        self.leaves
            .iter()
            .filter(|l| l.employee_id == employee_id)
            .collect()
    }
}
