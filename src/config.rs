use leptos::logging::log;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SESSION_KEY: &str = "foodrescue.session";

/// Client settings, fixed at build time. Set `FOODRESCUE_API_URL` when running
/// `trunk build` to point the bundle at another backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Local storage key the session is persisted under.
    pub session_key: String,
}

impl ClientConfig {
    pub fn load() -> Self {
        let api_base_url = match option_env!("FOODRESCUE_API_URL") {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => {
                log!("[CONFIG] FOODRESCUE_API_URL not set, using default: {}", DEFAULT_API_BASE_URL);
                DEFAULT_API_BASE_URL.to_string()
            }
        };
        Self::with_base_url(api_base_url)
    }

    pub fn with_base_url(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }

    /// Joins `path` (with or without a leading slash) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = ClientConfig::with_base_url("https://food.example/api/");
        assert_eq!(config.endpoint("/food-listings"), "https://food.example/api/food-listings");
        assert_eq!(config.endpoint("ratings/abc"), "https://food.example/api/ratings/abc");
    }
}
