use axum::http::HeaderValue;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;
use crate::config::Config;

pub fn create_router(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let board_routes = Router::new()
        .route(
            "/",
            get(handlers::boards::list_boards).post(handlers::boards::create_board),
        )
        .route(
            "/{id}",
            get(handlers::boards::get_board)
                .patch(handlers::boards::rename_board)
                .delete(handlers::boards::delete_board),
        );

    let column_routes = Router::new()
        .route("/", post(handlers::columns::create_column))
        .route(
            "/{id}",
            patch(handlers::columns::update_column)
                .delete(handlers::columns::delete_column),
        )
        .route("/{id}/tasks", post(handlers::columns::create_task))
        .route(
            "/{id}/tasks/{task_id}",
            delete(handlers::columns::delete_task),
        )
        .route("/{id}/generate", post(handlers::ai::generate_tasks));

    let task_routes = Router::new()
        .route("/{id}", patch(handlers::tasks::update_task))
        .route("/{id}/tags", post(handlers::tasks::add_tag))
        .route("/{id}/tags/{tag}", delete(handlers::tasks::remove_tag))
        .route("/{id}/enhance", post(handlers::ai::enhance_task));

    let drag_routes = Router::new()
        .route("/", get(handlers::drag::get_drag))
        .route("/start", post(handlers::drag::start_drag))
        .route("/over", post(handlers::drag::drag_over))
        .route("/drop", post(handlers::drag::drop_on_column))
        .route("/end", post(handlers::drag::end_drag));

    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/health/live", get(handlers::liveness))
        .route("/api/board", get(handlers::boards::get_active_board))
        .route("/api/active-board", put(handlers::boards::select_board))
        .route("/api/column-colors", get(handlers::list_column_colors))
        .route("/api/ai/status", get(handlers::ai::ai_status))
        .route("/api/events", get(handlers::sse::sse_handler))
        .nest("/api/boards", board_routes)
        .nest("/api/columns", column_routes)
        .nest("/api/tasks", task_routes)
        .nest("/api/drag", drag_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let serve_dir = ServeDir::new(&config.frontend_dir).not_found_service(
        ServeDir::new(&config.frontend_dir).append_index_html_on_directories(true),
    );

    api_routes.fallback_service(serve_dir)
}
