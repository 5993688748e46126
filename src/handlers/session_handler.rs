use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{domain::Profile, dto::request::NavigateRequest},
};

#[post("/api/sessions")]
async fn start_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.session_service.start_session().await?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/api/sessions/{id}")]
async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.session_view(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/profile")]
async fn submit_profile(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    profile: web::Json<Profile>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .session_service
        .submit_profile(&id, profile.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/navigate")]
async fn navigate(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<NavigateRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.navigate(&id, request.page).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/sessions/{id}/content")]
async fn get_content(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let content = state.session_service.content(&id).await?;
    Ok(HttpResponse::Ok().json(content))
}
