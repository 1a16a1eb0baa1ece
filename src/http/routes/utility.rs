use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{calculator::{self, Calculation}, greeting, random::RandomRange};
use crate::http::types::{ApiError, ApiQuery, ErrorBody, MessageBody};

pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/calculate", get(calculate))
        .route("/api/random", get(random))
        .route("/api/greet", get(greet))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    operation_id = "HealthCheck",
    responses((status = 200, description = "Service is up", body = Health)),
    tag = "utility"
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "OK".into(), message: "Backend is running!".into(), timestamp: Utc::now() })
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalculateParams {
    a: i32,
    b: i32,
    /// One of add, subtract, multiply, divide (any case).
    operation: String,
}

#[utoipa::path(
    get,
    path = "/api/calculate",
    operation_id = "Calculate",
    params(CalculateParams),
    responses(
        (status = 200, description = "Result of the operation", body = Calculation),
        (status = 400, description = "Bad operands, unknown operation or division by zero", body = ErrorBody)
    ),
    tag = "utility"
)]
pub async fn calculate(ApiQuery(params): ApiQuery<CalculateParams>) -> Result<Json<Calculation>, ApiError> {
    Ok(Json(calculator::calculate(params.a, params.b, &params.operation)?))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RandomParams {
    /// Inclusive lower bound, defaults to 1.
    min: Option<i32>,
    /// Inclusive upper bound, defaults to 100.
    max: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomNumber { pub min: i32, pub max: i32, pub random_number: i32 }

#[utoipa::path(
    get,
    path = "/api/random",
    operation_id = "GetRandom",
    params(RandomParams),
    responses(
        (status = 200, description = "Number drawn from the range", body = RandomNumber),
        (status = 400, description = "Malformed bounds or min greater than max", body = ErrorBody)
    ),
    tag = "utility"
)]
pub async fn random(ApiQuery(params): ApiQuery<RandomParams>) -> Result<Json<RandomNumber>, ApiError> {
    let range = RandomRange::new(params.min, params.max)?;
    let random_number = range.draw(&mut rand::thread_rng());
    Ok(Json(RandomNumber { min: range.min, max: range.max, random_number }))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GreetParams {
    name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/greet",
    operation_id = "Greet",
    params(GreetParams),
    responses((status = 200, description = "Greeting", body = MessageBody)),
    tag = "utility"
)]
pub async fn greet(ApiQuery(params): ApiQuery<GreetParams>) -> Json<MessageBody> {
    Json(MessageBody { message: greeting::greet(params.name.as_deref()) })
}
