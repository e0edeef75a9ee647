use chrono::{Local, NaiveDate};
use dispatch_board::{
    Board, BoardConfig, CalendarCursor, CalendarView, EmployeeFilter, Leave, LeaveType,
    ScheduleStore, Task, TaskFilter, TaskStatus, assigned_employees, assignee_names, draft_task,
    logging, reschedule_on_drop,
};
use std::io::{self, Write};

fn render_text_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if ci < widths.len() && len > widths[ci] {
                widths[ci] = len;
            }
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (ci, w) in widths.iter().enumerate() {
            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(w.saturating_sub(cell.chars().count())));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(headers));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn render_board(store: &ScheduleStore, cursor: &CalendarCursor) -> String {
    let board = Board::build(store, cursor);
    let mut headers = vec!["Technician".to_string()];
    headers.extend(board.days.iter().map(|d| d.format("%a %d").to_string()));

    let rows: Vec<Vec<String>> = board
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.employee.name.clone()];
            for cell in &row.cells {
                let mut parts = Vec::new();
                if let Some(leave) = cell.leave {
                    parts.push(format!("[{}]", leave.leave_type.label()));
                }
                for task in &cell.tasks {
                    let marker = if task.is_urgent() { "!" } else { "" };
                    parts.push(format!(
                        "{}{} {}",
                        marker,
                        task.start_date.format("%H:%M"),
                        task.title
                    ));
                }
                cells.push(parts.join("; "));
            }
            cells
        })
        .collect();

    format!("{}\n{}", board.label, render_text_table(&headers, &rows))
}

fn render_tasks(store: &ScheduleStore, tasks: &[&Task]) -> String {
    let headers = [
        "id", "start", "end", "type", "status", "priority", "title", "client", "assigned",
    ]
    .map(String::from);
    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.start_date.format("%Y-%m-%d %H:%M").to_string(),
                t.end_date.format("%Y-%m-%d %H:%M").to_string(),
                t.task_type.to_string(),
                t.status.to_string(),
                t.priority.to_string(),
                t.title.clone(),
                t.client_name.clone(),
                assignee_names(store, t),
            ]
        })
        .collect();
    render_text_table(&headers, &rows)
}

fn render_employees(store: &ScheduleStore, include_inactive: bool) -> String {
    let filter = EmployeeFilter {
        search: String::new(),
        include_inactive,
    };
    let headers = ["id", "name", "role", "active", "skills", "leaves"].map(String::from);
    let rows: Vec<Vec<String>> = filter
        .apply(store.employees())
        .into_iter()
        .map(|e| {
            let leaves = store
                .leaves_for_employee(&e.id)
                .iter()
                .map(|l| format!("{} {}..{}", l.leave_type, l.start_date, l.end_date))
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                e.id.clone(),
                e.name.clone(),
                e.role.clone(),
                e.is_active.to_string(),
                e.skills.join(", "),
                leaves,
            ]
        })
        .collect();
    render_text_table(&headers, &rows)
}

fn print_task_detail(store: &ScheduleStore, task: &Task) {
    println!("Task {}: {}", task.id, task.title);
    println!("  Type       : {}", task.task_type.label());
    println!("  Status     : {}", task.status.label());
    println!("  Priority   : {}", task.priority.label());
    println!("  Start      : {}", task.start_date);
    println!("  End        : {}", task.end_date);
    println!("  Client     : {}", task.client_name);
    println!("  Address    : {}", task.client_address);
    if let Some(phone) = &task.client_phone {
        println!("  Phone      : {}", phone);
    }
    let assignees = assigned_employees(store, task)
        .iter()
        .map(|e| format!("{} ({})", e.name, e.initials()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Assigned   : {}", assignees);
    if let Some(notes) = &task.notes {
        println!("  Notes      : {}", notes);
    }
    println!("  Updated at : {}", task.updated_at);
}

fn print_help() {
    println!(
        "Commands:\n  help                                   Show this help\n  show                                   Show the scheduling board\n  view <day|week|month>                  Change the board view\n  date <YYYY-MM-DD>                      Jump to a date\n  today | next | prev                    Navigate the board\n  tasks [search...]                      List tasks sorted by start\n  task <id>                              Show task details\n  employees [all]                        List employees (all includes inactive)\n  add <employee_id> <YYYY-MM-DD> <title...>\n                                         Create a task in a board cell\n  move <task_id> <employee_id> <YYYY-MM-DD>\n                                         Drop a task on another day\n  status <task_id> <status>              Set task status\n  delete <task_id>                       Delete a task\n  leave add <employee_id> <type> <start> <end>\n                                         Record a leave\n  leave delete <leave_id>                Delete a leave\n  activate|deactivate <employee_id>      Toggle board visibility\n  quit|exit                              Exit"
    );
}

fn next_id(prefix: &str, ids: impl Iterator<Item = String>) -> String {
    let max = ids
        .filter_map(|id| {
            id.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|n| n.parse::<u64>().ok())
        })
        .max()
        .unwrap_or(0);
    format!("{prefix}-{}", max.saturating_add(1))
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

fn main() {
    logging::init();
    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}. Falling back to defaults.", e);
            BoardConfig::default()
        }
    };
    let mut store = match ScheduleStore::from_config(&config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Could not load seed data: {}. Starting empty.", e);
            ScheduleStore::new()
        }
    };
    let mut cursor = CalendarCursor::new(Local::now().date_naive(), config.default_view)
        .with_week_start(config.week_starts_on);

    println!("Dispatch Board (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => println!("{}", render_board(&store, &cursor)),
            "view" => match parts.next().map(str::parse::<CalendarView>) {
                Some(Ok(view)) => {
                    cursor.set_view(view);
                    println!("{}", render_board(&store, &cursor));
                }
                Some(Err(e)) => println!("Error: {}", e),
                None => println!("Usage: view <day|week|month>"),
            },
            "date" => match parts.next().and_then(parse_date) {
                Some(date) => {
                    cursor.selected = date;
                    println!("{}", render_board(&store, &cursor));
                }
                None => println!("Usage: date <YYYY-MM-DD>"),
            },
            "today" | "next" | "prev" => {
                match cmd {
                    "today" => cursor.today(),
                    "next" => cursor.next(),
                    _ => cursor.prev(),
                }
                println!("{}", render_board(&store, &cursor));
            }
            "tasks" => {
                let filter = TaskFilter {
                    search: parts.collect::<Vec<_>>().join(" "),
                    ..TaskFilter::default()
                };
                let tasks = filter.apply(store.tasks());
                if tasks.is_empty() {
                    println!("No tasks found.");
                } else {
                    println!("{}", render_tasks(&store, &tasks));
                }
            }
            "task" => match parts.next() {
                Some(id) => match store.task_by_id(id) {
                    Some(task) => print_task_detail(&store, task),
                    None => println!("Task {id} not found."),
                },
                None => println!("Usage: task <id>"),
            },
            "employees" => {
                let include_inactive = parts.next() == Some("all");
                println!("{}", render_employees(&store, include_inactive));
            }
            "add" => {
                let employee_id = parts.next();
                let date = parts.next().and_then(parse_date);
                let title = parts.collect::<Vec<_>>().join(" ");
                match (employee_id, date) {
                    (Some(employee_id), Some(date)) if !title.is_empty() => {
                        let id = next_id("task", store.tasks().iter().map(|t| t.id.clone()));
                        let mut task = draft_task(id.clone(), employee_id, date, &config);
                        task.title = title;
                        store.add_task(task);
                        println!("Added task {id}.");
                    }
                    _ => println!("Usage: add <employee_id> <YYYY-MM-DD> <title...>"),
                }
            }
            "move" => {
                let task_id = parts.next();
                let employee_id = parts.next();
                let date = parts.next().and_then(parse_date);
                match (task_id, employee_id, date) {
                    (Some(task_id), Some(employee_id), Some(date)) => {
                        if store.task_by_id(task_id).is_none() {
                            println!("Task {task_id} not found.");
                            continue;
                        }
                        reschedule_on_drop(&mut store, task_id, employee_id, date);
                        if let Some(task) = store.task_by_id(task_id) {
                            println!(
                                "Moved task {} to {} - {}.",
                                task_id, task.start_date, task.end_date
                            );
                        }
                    }
                    _ => println!("Usage: move <task_id> <employee_id> <YYYY-MM-DD>"),
                }
            }
            "status" => {
                let task_id = parts.next();
                let status = parts.next().map(str::parse::<TaskStatus>);
                match (task_id, status) {
                    (Some(task_id), Some(Ok(status))) => match store.task_by_id(task_id).cloned()
                    {
                        Some(task) => {
                            store.update_task(Task { status, ..task });
                            println!("Task {task_id} status set to {status}.");
                        }
                        None => println!("Task {task_id} not found."),
                    },
                    (Some(_), Some(Err(e))) => println!("Error: {}", e),
                    _ => println!("Usage: status <task_id> <status>"),
                }
            }
            "delete" => match parts.next() {
                Some(task_id) => {
                    if store.task_by_id(task_id).is_some() {
                        store.delete_task(task_id);
                        println!("Deleted task {task_id}.");
                    } else {
                        println!("Task {task_id} not found.");
                    }
                }
                None => println!("Usage: delete <task_id>"),
            },
            "leave" => match parts.next() {
                Some("add") => {
                    let employee_id = parts.next();
                    let leave_type = parts.next().map(str::parse::<LeaveType>);
                    let start = parts.next().and_then(parse_date);
                    let end = parts.next().and_then(parse_date);
                    match (employee_id, leave_type, start, end) {
                        (Some(employee_id), Some(Ok(leave_type)), Some(start), Some(end)) => {
                            let id =
                                next_id("leave", store.leaves().iter().map(|l| l.id.clone()));
                            store.add_leave(Leave::new(
                                id.clone(),
                                employee_id,
                                leave_type,
                                start,
                                end,
                            ));
                            println!("Added leave {id}.");
                        }
                        (_, Some(Err(e)), _, _) => println!("Error: {}", e),
                        _ => println!(
                            "Usage: leave add <employee_id> <type> <YYYY-MM-DD> <YYYY-MM-DD>"
                        ),
                    }
                }
                Some("delete") => match parts.next() {
                    Some(leave_id) => {
                        if store.leave_by_id(leave_id).is_some() {
                            store.delete_leave(leave_id);
                            println!("Deleted leave {leave_id}.");
                        } else {
                            println!("Leave {leave_id} not found.");
                        }
                    }
                    None => println!("Usage: leave delete <leave_id>"),
                },
                _ => println!("Usage: leave add|delete ..."),
            },
            "activate" | "deactivate" => match parts.next() {
                Some(employee_id) => {
                    if store.employee_by_id(employee_id).is_none() {
                        println!("Employee {employee_id} not found.");
                        continue;
                    }
                    let is_active = cmd == "activate";
                    store.set_employee_active(employee_id, is_active);
                    println!(
                        "Employee {} {}.",
                        employee_id,
                        if is_active { "activated" } else { "deactivated" }
                    );
                }
                None => println!("Usage: {cmd} <employee_id>"),
            },
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
