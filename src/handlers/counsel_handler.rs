use actix_web::{get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        ChatRequest, ChecklistUpdateRequest, EvaluationRequest, ExplanationRequest, HistoryQuery,
        PracticeQuestionRequest,
    },
};

#[get("/api/sessions/{id}/chat")]
async fn get_chat_history(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, AppError> {
    let history = state.counselor_service.history(&id, query.limit()).await?;
    Ok(HttpResponse::Ok().json(history))
}

#[post("/api/sessions/{id}/chat")]
async fn ask_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<HistoryQuery>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let reply = state
        .counselor_service
        .ask(&id, request.into_inner(), query.limit())
        .await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[post("/api/sessions/{id}/explanations")]
async fn explain_section(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<ExplanationRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .counselor_service
        .explain(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/practice-questions")]
async fn generate_practice_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<PracticeQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .counselor_service
        .practice_question(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/evaluations")]
async fn evaluate_understanding(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<EvaluationRequest>,
) -> Result<HttpResponse, AppError> {
    let evaluation = state
        .counselor_service
        .evaluate(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(evaluation))
}

#[get("/api/sessions/{id}/checklist")]
async fn get_checklist(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.checklist_service.view(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/checklist/{index}")]
async fn update_checklist_item(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<ChecklistUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, index) = path.into_inner();
    let view = state
        .checklist_service
        .set_item(&id, index, request.checked)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}
