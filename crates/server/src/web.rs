//! Web server for the Taskdash UI
//!
//! JSON API consumed by the Leptos front end, plus static delivery of the
//! SPA shell, stylesheet, and WASM bundle. Task mutations go through the
//! shared store; the posts/users endpoints are read-only proxies of the
//! remote feed.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use tasks::{NewTask, StatusFilter, Task, TaskError, TaskId, TaskPatch, TaskStats, TaskStore};

const MAIN_CSS: &str = include_str!("../../web/style/main.css");

/// Shared state for web handlers
pub struct WebState {
    pub board: RwLock<TaskStore>,
    pub feed: feed::Client,
}

/// Build the web router
pub fn build_router(state: Arc<WebState>, pkg_dir: &std::path::Path) -> Router {
    Router::new()
        // API endpoints
        .route("/api/stats", get(api_stats))
        .route("/api/tasks", get(api_list_tasks).post(api_create_task))
        .route(
            "/api/tasks/:id",
            put(api_update_task).delete(api_delete_task),
        )
        .route("/api/filter", post(api_set_filter))
        .route("/api/posts", get(api_list_posts))
        .route("/api/users", get(api_list_users))
        // Static assets
        .route("/style/main.css", get(serve_main_css))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        // Fallback to the shell page for SPA routing
        .fallback(get(spa_fallback))
        .with_state(state)
}

// -----------------------------------------------------------------------------
// View models for API responses
// -----------------------------------------------------------------------------

#[derive(Clone, serde::Serialize)]
struct TaskView {
    id: String,
    title: String,
    description: String,
    status: String,
    priority: String,
    due_date: String,
    created_at: String,
    updated_at: String,
}

#[derive(Clone, Copy, serde::Serialize)]
struct StatsView {
    pending: usize,
    in_progress: usize,
    completed: usize,
    total: usize,
}

#[derive(Clone, serde::Serialize)]
struct TaskBoardView {
    filter: String,
    stats: StatsView,
    tasks: Vec<TaskView>,
}

fn task_to_view(task: &Task) -> TaskView {
    TaskView {
        id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        status: task.status.to_string(),
        priority: task.priority.to_string(),
        due_date: task.due_date.to_string(),
        created_at: task.created_at.to_rfc3339(),
        updated_at: task.updated_at.to_rfc3339(),
    }
}

fn stats_to_view(stats: TaskStats) -> StatsView {
    StatsView {
        pending: stats.pending,
        in_progress: stats.in_progress,
        completed: stats.completed,
        total: stats.total,
    }
}

// -----------------------------------------------------------------------------
// Request bodies
// -----------------------------------------------------------------------------

#[derive(Deserialize)]
struct SetFilterRequest {
    filter: StatusFilter,
}

// -----------------------------------------------------------------------------
// Static asset handlers
// -----------------------------------------------------------------------------

async fn serve_main_css() -> Response {
    ([(header::CONTENT_TYPE, "text/css")], MAIN_CSS).into_response()
}

async fn spa_fallback() -> impl IntoResponse {
    Html(include_str!("../templates/shell.html"))
}

// -----------------------------------------------------------------------------
// API handlers
// -----------------------------------------------------------------------------

async fn api_stats(State(state): State<Arc<WebState>>) -> impl IntoResponse {
    let board = state.board.read().await;
    Json(stats_to_view(board.stats()))
}

async fn api_list_tasks(State(state): State<Arc<WebState>>) -> impl IntoResponse {
    let board = state.board.read().await;
    let tasks: Vec<TaskView> = board.filtered().into_iter().map(task_to_view).collect();

    Json(TaskBoardView {
        filter: board.filter().to_string(),
        stats: stats_to_view(board.stats()),
        tasks,
    })
}

async fn api_create_task(
    State(state): State<Arc<WebState>>,
    Json(draft): Json<NewTask>,
) -> impl IntoResponse {
    let mut board = state.board.write().await;
    let task = board.add_task(draft);
    tracing::info!("Created task {}", task.id);

    (StatusCode::CREATED, Json(task_to_view(&task)))
}

async fn api_update_task(
    State(state): State<Arc<WebState>>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Response {
    let Ok(task_id) = id.parse::<TaskId>() else {
        return (StatusCode::NOT_FOUND, "Task not found").into_response();
    };

    let mut board = state.board.write().await;
    match board.update_task(&task_id, patch) {
        Ok(task) => Json(task_to_view(&task)).into_response(),
        Err(TaskError::NotFound(_)) => (StatusCode::NOT_FOUND, "Task not found").into_response(),
    }
}

async fn api_delete_task(
    State(state): State<Arc<WebState>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(task_id) = id.parse::<TaskId>() else {
        return (StatusCode::NOT_FOUND, "Task not found").into_response();
    };

    let mut board = state.board.write().await;
    match board.delete_task(&task_id) {
        Ok(task) => {
            tracing::info!("Deleted task {}", task.id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(TaskError::NotFound(_)) => (StatusCode::NOT_FOUND, "Task not found").into_response(),
    }
}

async fn api_set_filter(
    State(state): State<Arc<WebState>>,
    Json(request): Json<SetFilterRequest>,
) -> impl IntoResponse {
    let mut board = state.board.write().await;
    board.set_filter(request.filter);
    StatusCode::NO_CONTENT
}

async fn api_list_posts(State(state): State<Arc<WebState>>) -> impl IntoResponse {
    match state.feed.posts().await {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch posts: {}", e);
            (StatusCode::BAD_GATEWAY, "Failed to fetch posts").into_response()
        }
    }
}

async fn api_list_users(State(state): State<Arc<WebState>>) -> impl IntoResponse {
    match state.feed.users().await {
        Ok(users) => Json(users).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch users: {}", e);
            (StatusCode::BAD_GATEWAY, "Failed to fetch users").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasks::{Priority, TaskStatus};

    fn draft() -> NewTask {
        NewTask {
            title: "Ship the release".to_string(),
            description: "Tag, build, and publish".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: "2025-02-01".parse().unwrap(),
        }
    }

    #[test]
    fn test_task_view_wire_forms() {
        let mut store = TaskStore::new();
        let task = store.add_task(draft());

        let view = task_to_view(&task);
        assert_eq!(view.id, task.id.to_string());
        assert_eq!(view.status, "in-progress");
        assert_eq!(view.priority, "high");
        assert_eq!(view.due_date, "2025-02-01");
        assert!(chrono::DateTime::parse_from_rfc3339(&view.created_at).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&view.updated_at).is_ok());
    }

    #[test]
    fn test_stats_view_counts_seeded_store() {
        let store = TaskStore::seeded();
        let view = stats_to_view(store.stats());

        assert_eq!(view.total, 5);
        assert_eq!(view.pending, 3);
        assert_eq!(view.in_progress, 1);
        assert_eq!(view.completed, 1);
    }

    #[test]
    fn test_set_filter_request_wire_form() {
        let request: SetFilterRequest =
            serde_json::from_str(r#"{"filter":"in-progress"}"#).unwrap();
        assert_eq!(request.filter, StatusFilter::InProgress);
    }
}
