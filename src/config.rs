//! Runtime Configuration
//!
//! Backend base URL, resolved from the host page, then the build
//! environment, then a local default.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// `<meta name="parking-api-url" content="...">` in index.html overrides the build value
const META_NAME: &str = "parking-api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Read the config from the current page and build environment
    pub fn load() -> Self {
        Self::resolve(read_meta_url(), option_env!("PARKING_API_URL"))
    }

    /// First non-blank source wins; trailing slashes are dropped
    pub fn resolve(meta: Option<String>, build_env: Option<&str>) -> Self {
        let chosen = meta
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| build_env.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_API_URL);
        Self {
            api_url: chosen.trim_end_matches('/').to_string(),
        }
    }
}

fn read_meta_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", META_NAME);
    let element = document.query_selector(&selector).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wins_over_build_env() {
        let config = Config::resolve(Some("https://parking.example/api/".into()), Some("http://build/api"));
        assert_eq!(config.api_url, "https://parking.example/api");
    }

    #[test]
    fn test_blank_meta_falls_through() {
        let config = Config::resolve(Some("   ".into()), Some("http://build/api"));
        assert_eq!(config.api_url, "http://build/api");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(Config::resolve(None, None).api_url, DEFAULT_API_URL);
    }
}
