/// Address of the question-answering backend when no override is baked in.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const DEFAULT_SITE_URL: &str = "https://example.com";

/// How long the embedded site gets to fire its load event before the direct
/// link is offered.
pub const FRAME_FALLBACK_DELAY_MS: u32 = 5_000;

/// Backend root, taken from `API_URL` at build time (e.g. `API_URL=https://api.example.com trunk build`).
pub fn get_backend_url() -> String {
    resolve_base_url(option_env!("API_URL"))
}

pub fn site_url() -> &'static str {
    match option_env!("SITE_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_SITE_URL,
    }
}

pub fn resolve_base_url(override_url: Option<&str>) -> String {
    let url = match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    };
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_default() {
        assert_eq!(resolve_base_url(None), "http://localhost:8000");
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(resolve_base_url(Some("   ")), "http://localhost:8000");
    }

    #[test]
    fn override_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }

    #[test]
    fn ask_endpoint_has_single_separator() {
        let url = format!("{}/api/ask", resolve_base_url(Some("http://10.0.0.2:9000//")));
        assert_eq!(url, "http://10.0.0.2:9000/api/ask");
    }
}
