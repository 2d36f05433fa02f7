// src/config/mod.rs
// All values load from .env / environment with sane defaults

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ArenaConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,

    // ── Grok (xAI) Configuration
    pub grok_api_key: String,
    pub grok_base_url: String,
    pub grok_model: String,

    // ── OpenAI Configuration
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,

    // ── DeepSeek Configuration
    pub deepseek_api_key: String,
    pub deepseek_base_url: String,
    pub deepseek_model: String,

    // ── Anthropic Configuration
    pub anthropic_api_key: String,
    pub anthropic_model: String,

    // ── Token Budgets
    // The chattier providers get the larger budget.
    pub max_tokens_large: usize,
    pub max_tokens_small: usize,
}

// Handles values with trailing comments and whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl ArenaConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            host: env_var_or("HOST", "0.0.0.0".to_string()),
            port: env_var_or("PORT", 3000),
            log_level: env_var_or("LOG_LEVEL", "info".to_string()),

            grok_api_key: env_var_or("GROK_API_KEY", String::new()),
            grok_base_url: env_var_or("GROK_BASE_URL", "https://api.x.ai/v1".to_string()),
            grok_model: env_var_or("GROK_MODEL", "grok-2-latest".to_string()),

            openai_api_key: env_var_or("OPENAI_API_KEY", String::new()),
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com/v1".to_string()),
            openai_model: env_var_or("OPENAI_MODEL", "gpt-4o".to_string()),

            deepseek_api_key: env_var_or("DEEPSEEK_API_KEY", String::new()),
            deepseek_base_url: env_var_or(
                "DEEPSEEK_BASE_URL",
                "https://api.deepseek.com/v1".to_string(),
            ),
            deepseek_model: env_var_or("DEEPSEEK_MODEL", "deepseek-chat".to_string()),

            anthropic_api_key: env_var_or("ANTHROPIC_API_KEY", String::new()),
            anthropic_model: env_var_or(
                "ANTHROPIC_MODEL",
                "claude-3-7-sonnet-20250219".to_string(),
            ),

            max_tokens_large: env_var_or("DEBATE_MAX_TOKENS_LARGE", 300),
            max_tokens_small: env_var_or("DEBATE_MAX_TOKENS_SMALL", 200),
        }
    }
}

pub static CONFIG: Lazy<ArenaConfig> = Lazy::new(ArenaConfig::from_env);
