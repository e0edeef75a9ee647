use dispatch_board::{EmployeeFilter, ScheduleStore, TaskFilter, TaskStatus, TaskType};

fn ids<'a>(tasks: impl IntoIterator<Item = &'a dispatch_board::Task>) -> Vec<&'a str> {
    tasks.into_iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn empty_filter_returns_everything_by_start() {
    let store = ScheduleStore::with_sample_data().unwrap();
    let filtered = TaskFilter::default().apply(store.tasks());
    assert_eq!(
        ids(filtered),
        vec!["task-1", "task-2", "task-3", "task-4", "task-5"]
    );
}

#[test]
fn search_matches_title_or_client_case_insensitively() {
    let store = ScheduleStore::with_sample_data().unwrap();

    let by_title = TaskFilter {
        search: "COMPRESSOR".into(),
        ..TaskFilter::default()
    };
    assert_eq!(ids(by_title.apply(store.tasks())), vec!["task-2"]);

    let by_client = TaskFilter {
        search: "castellana".into(),
        ..TaskFilter::default()
    };
    assert_eq!(ids(by_client.apply(store.tasks())), vec!["task-3"]);

    // the term is matched as typed, surrounding spaces included
    let padded = TaskFilter {
        search: "castellana  ".into(),
        ..TaskFilter::default()
    };
    assert!(padded.apply(store.tasks()).is_empty());

    let nothing = TaskFilter {
        search: "boiler".into(),
        ..TaskFilter::default()
    };
    assert!(nothing.apply(store.tasks()).is_empty());
}

#[test]
fn type_and_status_narrow_the_list() {
    let store = ScheduleStore::with_sample_data().unwrap();

    let repairs = TaskFilter {
        task_type: Some(TaskType::Repair),
        ..TaskFilter::default()
    };
    assert_eq!(ids(repairs.apply(store.tasks())), vec!["task-2"]);

    let pending = TaskFilter {
        status: Some(TaskStatus::Pending),
        ..TaskFilter::default()
    };
    assert_eq!(
        ids(pending.apply(store.tasks())),
        vec!["task-1", "task-3", "task-4"]
    );

    let pending_emergencies = TaskFilter {
        task_type: Some(TaskType::Emergency),
        status: Some(TaskStatus::Pending),
        search: "server".into(),
    };
    assert_eq!(ids(pending_emergencies.apply(store.tasks())), vec!["task-4"]);
}

#[test]
fn results_are_sorted_even_when_storage_is_not() {
    let mut store = ScheduleStore::with_sample_data().unwrap();
    store.move_task("task-1", chrono::NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());

    let filtered = TaskFilter::default().apply(store.tasks());
    assert_eq!(ids(filtered).last().copied(), Some("task-1"));
}

#[test]
fn task_filter_deserializes_from_query_shape() {
    let filter: TaskFilter =
        serde_json::from_str(r#"{"type": "maintenance", "status": "pending"}"#).unwrap();
    assert_eq!(filter.task_type, Some(TaskType::Maintenance));
    assert_eq!(filter.status, Some(TaskStatus::Pending));
    assert!(filter.search.is_empty());
}

#[test]
fn employee_filter_hides_inactive_unless_asked() {
    let store = ScheduleStore::with_sample_data().unwrap();

    let active: Vec<&str> = EmployeeFilter::default()
        .apply(store.employees())
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(active, vec!["emp-1", "emp-2", "emp-3"]);

    let everyone = EmployeeFilter {
        include_inactive: true,
        ..EmployeeFilter::default()
    };
    assert_eq!(everyone.apply(store.employees()).len(), 4);

    let search = EmployeeFilter {
        search: "lópez".into(),
        include_inactive: true,
    };
    let found = search.apply(store.employees());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "emp-4");
}
