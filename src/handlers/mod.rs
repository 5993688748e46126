pub mod admin_handler;
pub mod counsel_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod session_handler;

use actix_web::web;

pub use health_handler::health_check;

/// Registers every route on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(session_handler::start_session)
        .service(session_handler::get_session)
        .service(session_handler::submit_profile)
        .service(session_handler::navigate)
        .service(session_handler::get_content)
        .service(quiz_handler::get_section)
        .service(quiz_handler::record_answer)
        .service(quiz_handler::next_section)
        .service(quiz_handler::previous_section)
        .service(quiz_handler::submit_quiz)
        .service(counsel_handler::get_chat_history)
        .service(counsel_handler::ask_question)
        .service(counsel_handler::explain_section)
        .service(counsel_handler::generate_practice_question)
        .service(counsel_handler::evaluate_understanding)
        .service(counsel_handler::get_checklist)
        .service(counsel_handler::update_checklist_item)
        .service(admin_handler::get_dashboard)
        .service(admin_handler::list_attempts)
        .service(admin_handler::get_attempt)
        .service(admin_handler::export_attempts);
}
