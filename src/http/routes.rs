//! Route table and handlers.

use std::sync::{MutexGuard, PoisonError};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{middleware, Json, Router};
use chrono::SecondsFormat;
use serde_json::Value;
use tracing::info;

use super::middleware::log_requests;
use super::types::{ErrorResponse, HealthResponse};
use crate::context::ServiceContext;
use crate::registry::{RegistryError, Student, StudentPayload, StudentRegistry};

type ApiResult<T> = Result<(StatusCode, Json<T>), RegistryError>;

/// Build the full router.
///
/// `DELETE /__test__/reset` is only mounted when `expose_test_routes` is set.
pub fn router(ctx: ServiceContext, expose_test_routes: bool) -> Router {
    let mut routes = Router::new()
        .route("/health", get(health))
        .route("/students", get(student_list).post(student_create))
        .route(
            "/students/{id}",
            get(student_get).put(student_update).delete(student_delete),
        );
    if expose_test_routes {
        routes = routes.route("/__test__/reset", delete(registry_reset));
    }
    routes
        .fallback(unknown_route)
        .layer(middleware::from_fn_with_state(ctx.clone(), log_requests))
        .with_state(ctx)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A poisoned lock still holds a consistent registry: every mutation is a
/// single push, remove or assignment.
fn registry(ctx: &ServiceContext) -> MutexGuard<'_, StudentRegistry> {
    ctx.registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ids that are not non-negative integers can never match a record.
fn parse_id(raw: &str) -> Result<u64, RegistryError> {
    raw.parse().map_err(|_| RegistryError::NotFound { id: raw.to_string() })
}

fn parse_payload(body: Result<Json<Value>, JsonRejection>) -> Result<StudentPayload, RegistryError> {
    let Json(value) = body.map_err(|rejection| RegistryError::Validation(rejection.body_text()))?;
    StudentPayload::from_value(&value)
}

fn ok<T>(val: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(val)))
}

fn created<T>(val: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(val)))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

async fn health(State(ctx): State<ServiceContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: ctx.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

// ---------------------------------------------------------------------------
// Student routes
// ---------------------------------------------------------------------------

async fn student_list(State(ctx): State<ServiceContext>) -> Json<Vec<Student>> {
    Json(registry(&ctx).list().to_vec())
}

async fn student_create(
    State(ctx): State<ServiceContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Student> {
    let payload = parse_payload(body)?;
    let student = registry(&ctx).create(payload);
    info!(id = student.id, "student created");
    created(student)
}

async fn student_get(
    State(ctx): State<ServiceContext>,
    Path(id): Path<String>,
) -> ApiResult<Student> {
    let id = parse_id(&id)?;
    let student = registry(&ctx).get(id)?.clone();
    ok(student)
}

async fn student_update(
    State(ctx): State<ServiceContext>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Student> {
    let id = parse_id(&id)?;
    let mut students = registry(&ctx);
    // Unknown ids win over bad payloads.
    students.get(id)?;
    let student = students.update(id, parse_payload(body)?)?;
    info!(id, "student updated");
    ok(student)
}

async fn student_delete(
    State(ctx): State<ServiceContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, RegistryError> {
    let id = parse_id(&id)?;
    registry(&ctx).delete(id)?;
    info!(id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn registry_reset(State(ctx): State<ServiceContext>) -> StatusCode {
    registry(&ctx).reset();
    info!("registry reset");
    StatusCode::NO_CONTENT
}

async fn unknown_route() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::with_code("Not found", "NOT_FOUND")))
}
