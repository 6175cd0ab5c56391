//! Runtime settings read from the process environment.

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_SITE_URL: &str = "https://bridgebase-datasets-hub.vercel.app";

/// Checked in order; the first non-empty value is used.
const API_KEY_VARS: [&str; 2] = ["OPENROUTER_API_KEY", "OPENROUTER_KEY"];

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub site_url: String,
    pub base_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key = API_KEY_VARS.iter().find_map(|name| non_empty(*name));
        let site_url = non_empty("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let base_url = non_empty("OPENROUTER_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, site_url, base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn primary_key_wins_over_alternate() {
        let s = settings(&[("OPENROUTER_API_KEY", "primary"), ("OPENROUTER_KEY", "alt")]);
        assert_eq!(s.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn empty_primary_falls_back_to_alternate() {
        let s = settings(&[("OPENROUTER_API_KEY", ""), ("OPENROUTER_KEY", "alt")]);
        assert_eq!(s.api_key.as_deref(), Some("alt"));
    }

    #[test]
    fn whitespace_key_counts_as_set() {
        let s = settings(&[("OPENROUTER_API_KEY", " "), ("OPENROUTER_KEY", "alt")]);
        assert_eq!(s.api_key.as_deref(), Some(" "));
    }

    #[test]
    fn missing_keys_leave_api_key_unset() {
        let s = settings(&[]);
        assert!(s.api_key.is_none());
        assert_eq!(s.site_url, DEFAULT_SITE_URL);
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let s = settings(&[("OPENROUTER_BASE_URL", "http://127.0.0.1:9000/")]);
        assert_eq!(s.base_url, "http://127.0.0.1:9000");
    }
}
