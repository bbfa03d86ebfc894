use std::env;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub novelai_api_key: String,
    pub novelai_api_url: Option<String>,
}

impl Envy {
    /// Loads `.env.{APP_ENV}` if present, then reads the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
        if let Err(e) = dotenvy::from_filename(format!(".env.{}", app_env)) {
            tracing::debug!("no .env.{} loaded: {}", app_env, e);
        }

        envy::from_env::<Envy>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_api_key_and_optional_url() {
        let envy: Envy = envy::from_iter(vec![
            ("NOVELAI_API_KEY".to_string(), "pst-abc".to_string()),
            (
                "NOVELAI_API_URL".to_string(),
                "http://localhost:8080".to_string(),
            ),
        ])
        .unwrap();

        assert_eq!(envy.novelai_api_key, "pst-abc");
        assert_eq!(envy.novelai_api_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn api_url_is_optional() {
        let envy: Envy =
            envy::from_iter(vec![("NOVELAI_API_KEY".to_string(), "pst-abc".to_string())])
                .unwrap();

        assert!(envy.novelai_api_url.is_none());
    }

    #[test]
    fn api_key_is_required() {
        let result = envy::from_iter::<_, Envy>(Vec::<(String, String)>::new());
        assert!(result.is_err());
    }
}
