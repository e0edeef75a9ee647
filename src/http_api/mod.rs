use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    Board, BoardConfig, BoardError, CalendarCursor, CalendarView, Employee, EmployeeFilter, Leave,
    ScheduleStore, Task, TaskFilter, reschedule_on_drop,
};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ScheduleStore>>,
    config: Arc<BoardConfig>,
}

impl AppState {
    pub fn new(store: ScheduleStore, config: BoardConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    pub fn with_shared(store: Arc<RwLock<ScheduleStore>>, config: BoardConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    fn store(&self) -> Arc<RwLock<ScheduleStore>> {
        self.store.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }

    fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<BoardError> for ApiError {
    fn from(value: BoardError) -> Self {
        ApiError::Invalid(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct MovePayload {
    employee_id: String,
    day: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct BoardQuery {
    view: Option<CalendarView>,
    date: Option<NaiveDate>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/:id/move", post(move_task))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", get(get_employee).put(update_employee))
        .route("/employees/:id/leaves", get(list_employee_leaves))
        .route("/leaves", get(list_leaves).post(create_leave))
        .route("/leaves/:id", put(update_leave).delete(delete_leave))
        .route("/board", get(get_board))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, store: ScheduleStore, config: BoardConfig) -> std::io::Result<()> {
    let state = AppState::new(store, config);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "dispatch board HTTP API listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> Json<Vec<Task>> {
    let store = state.store();
    let guard = store.read();
    Json(filter.apply(guard.tasks()).into_iter().cloned().collect())
}

async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let store = state.store();
    let guard = store.read();
    guard
        .task_by_id(&task_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("task {task_id} not found")))
}

async fn create_task(
    State(state): State<AppState>,
    Json(task): Json<Task>,
) -> (StatusCode, Json<Task>) {
    let store = state.store();
    store.write().add_task(task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(task): Json<Task>,
) -> Result<Json<Task>, ApiError> {
    if task.id != task_id {
        return Err(ApiError::invalid(
            "task id in payload does not match path parameter",
        ));
    }
    let store = state.store();
    let mut guard = store.write();
    if guard.task_by_id(&task_id).is_none() {
        return Err(ApiError::not_found(format!("task {task_id} not found")));
    }
    guard.update_task(task);
    guard
        .task_by_id(&task_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::internal("task not found after update"))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let mut guard = store.write();
    if guard.task_by_id(&task_id).is_none() {
        return Err(ApiError::not_found(format!("task {task_id} not found")));
    }
    guard.delete_task(&task_id);
    Ok(StatusCode::NO_CONTENT)
}

async fn move_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(payload): Json<MovePayload>,
) -> Result<Json<Task>, ApiError> {
    let store = state.store();
    let mut guard = store.write();
    if guard.task_by_id(&task_id).is_none() {
        return Err(ApiError::not_found(format!("task {task_id} not found")));
    }
    reschedule_on_drop(&mut guard, &task_id, &payload.employee_id, payload.day);
    guard
        .task_by_id(&task_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::internal("task not found after move"))
}

async fn list_employees(
    State(state): State<AppState>,
    Query(filter): Query<EmployeeFilter>,
) -> Json<Vec<Employee>> {
    let store = state.store();
    let guard = store.read();
    Json(filter.apply(guard.employees()).into_iter().cloned().collect())
}

async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let store = state.store();
    let guard = store.read();
    guard
        .employee_by_id(&employee_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("employee {employee_id} not found")))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> (StatusCode, Json<Employee>) {
    let store = state.store();
    store.write().add_employee(employee.clone());
    (StatusCode::CREATED, Json(employee))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, ApiError> {
    if employee.id != employee_id {
        return Err(ApiError::invalid(
            "employee id in payload does not match path parameter",
        ));
    }
    let store = state.store();
    let mut guard = store.write();
    if guard.employee_by_id(&employee_id).is_none() {
        return Err(ApiError::not_found(format!("employee {employee_id} not found")));
    }
    guard.update_employee(employee.clone());
    Ok(Json(employee))
}

async fn list_employee_leaves(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Json<Vec<Leave>> {
    let store = state.store();
    let guard = store.read();
    Json(
        guard
            .leaves_for_employee(&employee_id)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn list_leaves(State(state): State<AppState>) -> Json<Vec<Leave>> {
    let store = state.store();
    let guard = store.read();
    Json(guard.leaves().to_vec())
}

async fn create_leave(
    State(state): State<AppState>,
    Json(leave): Json<Leave>,
) -> (StatusCode, Json<Leave>) {
    let store = state.store();
    store.write().add_leave(leave.clone());
    (StatusCode::CREATED, Json(leave))
}

async fn update_leave(
    State(state): State<AppState>,
    Path(leave_id): Path<String>,
    Json(leave): Json<Leave>,
) -> Result<Json<Leave>, ApiError> {
    if leave.id != leave_id {
        return Err(ApiError::invalid(
            "leave id in payload does not match path parameter",
        ));
    }
    let store = state.store();
    let mut guard = store.write();
    if guard.leave_by_id(&leave_id).is_none() {
        return Err(ApiError::not_found(format!("leave {leave_id} not found")));
    }
    guard.update_leave(leave.clone());
    Ok(Json(leave))
}

async fn delete_leave(
    State(state): State<AppState>,
    Path(leave_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let mut guard = store.write();
    if guard.leave_by_id(&leave_id).is_none() {
        return Err(ApiError::not_found(format!("leave {leave_id} not found")));
    }
    guard.delete_leave(&leave_id);
    Ok(StatusCode::NO_CONTENT)
}

async fn get_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let cursor = CalendarCursor::new(
        query.date.unwrap_or_else(|| Local::now().date_naive()),
        query.view.unwrap_or(state.config.default_view),
    )
    .with_week_start(state.config.week_starts_on);
    let store = state.store();
    let guard = store.read();
    let board = Board::build(&guard, &cursor);
    serde_json::to_value(&board)
        .map(Json)
        .map_err(|err| ApiError::internal(err.to_string()))
}
