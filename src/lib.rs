pub mod board;
pub mod calendar;
pub mod config;
pub mod employee;
pub mod error;
pub mod filter;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod leave;
pub mod logging;
pub mod reschedule;
pub mod seed;
pub mod store;
pub mod task;

pub use board::{Board, BoardCell, BoardRow, assigned_employees, assignee_names, draft_task};
pub use calendar::{CalendarCursor, CalendarView};
pub use config::BoardConfig;
pub use employee::Employee;
pub use error::{BoardError, BoardResult};
pub use filter::{EmployeeFilter, TaskFilter};
pub use leave::{Leave, LeaveType};
pub use reschedule::{reschedule_on_drop, rescheduled_window};
pub use seed::SeedData;
pub use store::ScheduleStore;
pub use task::{Priority, Task, TaskStatus, TaskType};
