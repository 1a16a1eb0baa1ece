//! OpenAPI description of the HTTP surface, served through Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::calculator::Calculation;
use crate::domain::todo::{CreateTodo, Todo};
use crate::http::routes::{todos, utility};
use crate::http::types::{ErrorBody, MessageBody};

pub const SPEC_PATH: &str = "/api/docs/spec.json";
pub const UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    paths(
        utility::health,
        utility::calculate,
        todos::list_todos,
        todos::create_todo,
        todos::toggle_todo,
        todos::delete_todo,
        utility::random,
        utility::greet,
    ),
    components(
        schemas(
            Todo,
            CreateTodo,
            Calculation,
            utility::Health,
            utility::RandomNumber,
            MessageBody,
            ErrorBody,
        )
    ),
    tags(
        (name = "todos", description = "In-memory todo list"),
        (name = "utility", description = "Health, calculator, random numbers and greetings")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(UI_PATH).url(SPEC_PATH, ApiDoc::openapi())
}
