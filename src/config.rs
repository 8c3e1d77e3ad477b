use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub frontend_dir: String,
    pub cors_origin: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub ai_timeout_secs: u64,
    pub seed_demo_boards: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let defaults = Self::default();
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse()?,
                Err(_) => defaults.port,
            },
            frontend_dir: std::env::var("FRONTEND_DIR").unwrap_or(defaults.frontend_dir),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            ai_timeout_secs: match std::env::var("AI_TIMEOUT_SECS") {
                Ok(v) => v.parse()?,
                Err(_) => defaults.ai_timeout_secs,
            },
            seed_demo_boards: match std::env::var("SEED_DEMO_BOARDS") {
                Ok(v) => parse_flag(&v)?,
                Err(_) => defaults.seed_demo_boards,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool, anyhow::Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean flag: {}", other)),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 21547,
            frontend_dir: "../frontend/dist".into(),
            cors_origin: "http://localhost:21548,http://127.0.0.1:21548".into(),
            gemini_api_key: None,
            gemini_model: "gemini-3-flash-preview".into(),
            gemini_base_url: "https://generativelanguage.googleapis.com".into(),
            ai_timeout_secs: 30,
            seed_demo_boards: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn defaults_seed_demo_boards_without_ai() {
        let config = Config::default();
        assert!(config.seed_demo_boards);
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.port, 21547);
    }
}
