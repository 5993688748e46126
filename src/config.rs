use std::{env, time::Duration};

use secrecy::SecretString;

const DEFAULT_ADMIN_TOKEN: &str = "dev_admin_token_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: Option<String>,
    pub chat_model: String,
    pub explanation_model: String,
    pub chat_max_tokens: u32,
    pub answer_char_limit: usize,
    pub llm_timeout_secs: u64,
    pub chat_history_cap: usize,
    pub session_idle_ttl_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub admin_token: SecretString,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE").ok(),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            explanation_model: env::var("EXPLANATION_MODEL")
                .unwrap_or_else(|_| "gpt-4".to_string()),
            chat_max_tokens: env::var("CHAT_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(500),
            answer_char_limit: env::var("ANSWER_CHAR_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(1000),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            chat_history_cap: env::var("CHAT_HISTORY_CAP")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(100),
            session_idle_ttl_secs: env::var("SESSION_IDLE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
            session_sweep_interval_secs: env::var("SESSION_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
            admin_token: SecretString::from(
                env::var("ADMIN_TOKEN").unwrap_or_else(|_| DEFAULT_ADMIN_TOKEN.to_string()),
            ),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// Never zero; the sweep timer rejects a zero period.
    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs.max(1))
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let admin_token = self.admin_token.expose_secret();

        if admin_token == DEFAULT_ADMIN_TOKEN {
            panic!(
                "FATAL: ADMIN_TOKEN is using default value! Set ADMIN_TOKEN environment variable to a secure random string."
            );
        }

        if admin_token.len() < 32 {
            panic!(
                "FATAL: ADMIN_TOKEN is too short ({}). Must be at least 32 characters.",
                admin_token.len()
            );
        }

        if self.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; the counselor chat will report a missing credential");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            openai_api_key: None,
            openai_api_base: None,
            chat_model: "gpt-3.5-turbo".to_string(),
            explanation_model: "gpt-4".to_string(),
            chat_max_tokens: 500,
            answer_char_limit: 1000,
            llm_timeout_secs: 5,
            chat_history_cap: 100,
            session_idle_ttl_secs: 3600,
            session_sweep_interval_secs: 300,
            admin_token: SecretString::from("test_admin_token".to_string()),
            app_env: "test".to_string(),
        }
    }
}
