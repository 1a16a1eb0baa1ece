use axum::Router;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use crate::application::todo_service::TodoService;
use crate::http::api_docs;
use crate::http::routes::{todos, utility};

pub fn app<S: TodoService + Clone + Send + Sync + 'static>(state: todos::AppState<S>) -> Router {
    Router::new()
        .merge(utility::router())
        .merge(todos::router(state))
        .merge(api_docs::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin, method and header is accepted.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}
