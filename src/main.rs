use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use consent_quiz_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
    services::QuestionBank,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }

    if let Err(problems) = QuestionBank::standard().validate() {
        for problem in &problems {
            log::error!("Question bank invariant violated: {}", problem);
        }
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origin = config.cors_allowed_origin.clone();
    let idle_ttl = config.session_idle_ttl();
    let sweep_interval = config.session_sweep_interval();
    let state = web::Data::new(AppState::new(config));

    std::sync::Arc::clone(&state.session_service).spawn_idle_sweep(idle_ttl, sweep_interval);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
