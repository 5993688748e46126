use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse,
};

use crate::{
    app_state::AppState, auth::AdminGuard, errors::AppError, models::dto::request::DashboardQuery,
};

#[get("/api/admin/dashboard")]
async fn get_dashboard(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
    _admin: AdminGuard,
) -> Result<HttpResponse, AppError> {
    let view = state.attempt_service.dashboard(&query).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/admin/attempts")]
async fn list_attempts(
    state: web::Data<AppState>,
    _admin: AdminGuard,
) -> Result<HttpResponse, AppError> {
    let attempts = state.attempt_service.list().await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/api/admin/attempts/{index}")]
async fn get_attempt(
    state: web::Data<AppState>,
    index: web::Path<usize>,
    _admin: AdminGuard,
) -> Result<HttpResponse, AppError> {
    let detail = state.attempt_service.detail(index.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

#[get("/api/admin/export")]
async fn export_attempts(
    state: web::Data<AppState>,
    _admin: AdminGuard,
) -> Result<HttpResponse, AppError> {
    let export = state.attempt_service.export_csv().await?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(export.filename)],
        })
        .body(export.body))
}
