use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Deserialize;

use crate::client::SECRET_HEADER;
use crate::config::AppConfig;
use crate::employees::map_rows;
use crate::error::UpstreamError;
use crate::google::GoogleClient;
use crate::master::build_master_data;
use crate::model::{Employee, ErrorBody, MasterData};
use crate::photos::build_lookup;

pub struct AppState {
    pub google: GoogleClient,
    pub config: AppConfig,
}

#[derive(Deserialize)]
struct SecretQuery {
    secret_key: Option<String>,
}

/// The secret travels in the `x-secret-key` header, or as a `secret_key`
/// query parameter when the header is absent.
fn provided_secret(req: &HttpRequest) -> Option<String> {
    if let Some(value) = req.headers().get(SECRET_HEADER) {
        return value.to_str().ok().map(str::to_string);
    }
    web::Query::<SecretQuery>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().secret_key)
}

fn is_authorized(req: &HttpRequest, secret_key: &str) -> bool {
    provided_secret(req).is_some_and(|provided| provided == secret_key)
}

#[utoipa::path(
    get,
    path = "/api/employee",
    responses(
        (status = 200, description = "Employee records, one JSON object per sheet row"),
        (status = 401, description = "Invalid secret key", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
#[get("/api/employee")]
pub async fn list_employees(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if !is_authorized(&req, &state.config.secret_key) {
        return HttpResponse::Unauthorized().json(ErrorBody::unauthorized());
    }
    match employee_records(&state).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(err) => {
            tracing::error!(error = %err, "employee dataset fetch failed");
            HttpResponse::InternalServerError().json(ErrorBody::employee_failure())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/master-data",
    responses(
        (status = 200, description = "The eleven grouped lookup lists", body = MasterData),
        (status = 401, description = "Invalid secret key", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
#[get("/api/master-data")]
pub async fn master_data(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if !is_authorized(&req, &state.config.secret_key) {
        return HttpResponse::Unauthorized().json(ErrorBody::unauthorized());
    }
    match master_data_records(&state).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            tracing::error!(error = %err, "master dataset fetch failed");
            HttpResponse::InternalServerError().json(ErrorBody::master_data_failure())
        }
    }
}

/// Sheet rows and folder listing are independent and fetched concurrently;
/// the lookup is ready before any row is mapped.
async fn employee_records(state: &AppState) -> Result<Vec<Employee>, UpstreamError> {
    let params = &state.config.employees;
    let (rows, lookup) = tokio::try_join!(
        state.google.sheet_values(&params.spreadsheet_id, &params.range),
        build_lookup(&state.google, &params.folder_id, &state.config.photo_host),
    )?;
    let mut rows = rows.into_iter();
    let header = rows.next().unwrap_or_default();
    let data_rows: Vec<Vec<String>> = rows.collect();
    Ok(map_rows(&header, &data_rows, &lookup))
}

async fn master_data_records(state: &AppState) -> Result<MasterData, UpstreamError> {
    let params = &state.config.master_data;
    let (rows, lookup) = tokio::try_join!(
        state.google.sheet_values(&params.spreadsheet_id, &params.range),
        build_lookup(&state.google, &params.folder_id, &state.config.photo_host),
    )?;
    Ok(build_master_data(&rows, &lookup))
}
