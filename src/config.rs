use std::env;

pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        // An absent key is not fatal here; provider calls fail with the
        // fixed 500 body until it is configured.
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let gemini_api_url = env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-3-flash-preview".to_string());

        let timeout_ms = env::var("GEMINI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(20_000);

        Self {
            port,
            gemini_api_key,
            gemini_api_url,
            gemini_model,
            timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "PORT",
        "GEMINI_API_KEY",
        "GEMINI_API_URL",
        "GEMINI_MODEL",
        "GEMINI_TIMEOUT_MS",
    ];

    // One test so the env mutations stay sequential.
    #[test]
    fn from_env_applies_defaults_then_overrides() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini_api_key, "");
        assert_eq!(
            config.gemini_api_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.gemini_model, "gemini-3-flash-preview");
        assert_eq!(config.timeout_ms, 20_000);

        env::set_var("PORT", "9090");
        env::set_var("GEMINI_API_KEY", "sinov-kaliti");
        env::set_var("GEMINI_TIMEOUT_MS", "2500");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 9090);
        assert_eq!(config.gemini_api_key, "sinov-kaliti");
        assert_eq!(config.timeout_ms, 2_500);

        env::set_var("PORT", "not-a-port");
        assert_eq!(AppConfig::from_env().port, 8080);

        for var in VARS {
            env::remove_var(var);
        }
    }
}
