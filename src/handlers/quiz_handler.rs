use actix_web::{get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::{NavAction, QuizVariant},
        dto::request::RecordAnswerRequest,
    },
};

type QuizPath = web::Path<(Uuid, QuizVariant)>;

#[get("/api/sessions/{id}/quiz/{variant}")]
async fn get_section(state: web::Data<AppState>, path: QuizPath) -> Result<HttpResponse, AppError> {
    let (id, variant) = path.into_inner();
    let view = state.quiz_service.current_section(&id, variant).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/quiz/{variant}/answers")]
async fn record_answer(
    state: web::Data<AppState>,
    path: QuizPath,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, variant) = path.into_inner();
    let outcome = state
        .quiz_service
        .record_answer(&id, variant, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[post("/api/sessions/{id}/quiz/{variant}/next")]
async fn next_section(state: web::Data<AppState>, path: QuizPath) -> Result<HttpResponse, AppError> {
    let (id, variant) = path.into_inner();
    let view = state.quiz_service.navigate(&id, variant, NavAction::Next).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/quiz/{variant}/previous")]
async fn previous_section(
    state: web::Data<AppState>,
    path: QuizPath,
) -> Result<HttpResponse, AppError> {
    let (id, variant) = path.into_inner();
    let view = state
        .quiz_service
        .navigate(&id, variant, NavAction::Previous)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/quiz/{variant}/submit")]
async fn submit_quiz(state: web::Data<AppState>, path: QuizPath) -> Result<HttpResponse, AppError> {
    let (id, variant) = path.into_inner();
    let result = state.quiz_service.submit(&id, variant).await?;
    Ok(HttpResponse::Ok().json(result))
}
