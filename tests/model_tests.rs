use chrono::{NaiveDate, NaiveDateTime};
use dispatch_board::{Employee, Leave, LeaveType, Priority, Task, TaskStatus, TaskType};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn task_json_uses_wire_names() {
    let mut task = Task::new("t1", "Install", dt(2024, 3, 4, 9, 0), dt(2024, 3, 4, 10, 0));
    task.task_type = TaskType::Emergency;
    task.status = TaskStatus::InProgress;
    task.priority = Priority::Urgent;

    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["type"], "emergency");
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["priority"], "urgent");
    assert_eq!(value["start_date"], "2024-03-04T09:00:00");
    assert!(value.get("notes").is_none());
    assert!(value.get("task_type").is_none());
}

#[test]
fn enums_parse_case_insensitively_and_reject_unknowns() {
    assert_eq!("IN_PROGRESS".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
    assert_eq!("repair".parse::<TaskType>().unwrap(), TaskType::Repair);
    assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
    assert_eq!("sick".parse::<LeaveType>().unwrap(), LeaveType::Sick);

    let err = "done".parse::<TaskStatus>().unwrap_err();
    assert_eq!(err.to_string(), "invalid input: unknown task status 'done'");
    assert_eq!(TaskStatus::Cancelled.to_string(), "cancelled");
}

#[test]
fn priorities_are_ordered() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::High < Priority::Urgent);
    assert_eq!(Priority::ALL.iter().max(), Some(&Priority::Urgent));
}

#[test]
fn overlap_is_inclusive_at_both_ends() {
    let task = Task::new("t1", "Install", dt(2024, 3, 4, 9, 0), dt(2024, 3, 4, 10, 0));
    assert!(task.overlaps(dt(2024, 3, 4, 10, 0), dt(2024, 3, 4, 11, 0)));
    assert!(task.overlaps(dt(2024, 3, 4, 8, 0), dt(2024, 3, 4, 9, 0)));
    assert!(!task.overlaps(dt(2024, 3, 4, 10, 1), dt(2024, 3, 4, 11, 0)));
    assert_eq!(task.duration(), chrono::Duration::hours(1));
}

#[test]
fn leave_covers_from_first_to_last_instant() {
    let leave = Leave::new(
        "l1",
        "e1",
        LeaveType::Vacation,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
    );
    assert!(leave.covers(dt(2024, 6, 1, 0, 0)));
    assert!(leave.covers(dt(2024, 6, 5, 23, 59)));
    assert!(!leave.covers(dt(2024, 6, 6, 0, 0)));
    assert!(!leave.approved);

    let value = serde_json::to_value(&leave).unwrap();
    assert_eq!(value["type"], "vacation");
    assert_eq!(value["end_date"], "2024-06-05");
}

#[test]
fn employee_helpers() {
    let mut employee = Employee::new("e1", "carlos martínez ruiz");
    employee.skills = vec!["Refrigeration".into()];
    assert_eq!(employee.initials(), "CM");
    assert_eq!(employee.first_name(), "carlos");
    assert!(employee.has_skill("refrigeration"));
    assert!(employee.is_active);

    let nameless = Employee::new("e2", "");
    assert_eq!(nameless.initials(), "");
    assert_eq!(nameless.first_name(), "");
}
