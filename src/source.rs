//! Source URI resolution
//!
//! An add-request can name its upstream media source several ways. The first
//! of these that resolves wins:
//!
//! 1. `url` field of a JSON POST body
//! 2. `url` query parameter
//! 3. `name` query parameter, expanded to an RTSP URL on the configured host
//! 4. configured `sample_uri` fallback
//! 5. the stock DeepStream sample file

use serde::Deserialize;

use crate::config::{ControlConfig, DEFAULT_SAMPLE_URI};

/// Query parameters accepted by the add-stream endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddStreamQuery {
    /// Upstream source URI
    pub url: Option<String>,
    /// Stream name, expanded to `rtsp://{public_host}:{rtsp_port}/{name}`
    pub name: Option<String>,
}

/// JSON body accepted by the add-stream endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddStreamBody {
    pub url: Option<String>,
}

/// Determine the upstream source URI for an add-request.
///
/// `body` is the raw request body; anything that does not decode as an
/// `AddStreamBody` is treated as absent rather than rejected, matching the
/// lenient behavior of the original endpoint.
pub fn resolve_source_uri(config: &ControlConfig, query: &AddStreamQuery, body: &[u8]) -> String {
    if !body.is_empty() {
        if let Ok(decoded) = serde_json::from_slice::<AddStreamBody>(body) {
            if let Some(url) = decoded.url {
                return url;
            }
        }
    }

    if let Some(url) = &query.url {
        return url.clone();
    }

    if let Some(name) = &query.name {
        return format!(
            "rtsp://{}:{}/{}",
            config.public_host, config.rtsp_port, name
        );
    }

    if let Some(sample) = &config.sample_uri {
        return sample.clone();
    }

    DEFAULT_SAMPLE_URI.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_url_wins() {
        let config = ControlConfig::default().sample_uri("rtsp://fallback/x");
        let query = AddStreamQuery {
            url: Some("rtsp://query/y".to_string()),
            name: None,
        };

        let uri = resolve_source_uri(&config, &query, br#"{"url":"rtsp://x/y"}"#);
        assert_eq!(uri, "rtsp://x/y");
    }

    #[test]
    fn test_query_url_over_name() {
        let config = ControlConfig::default();
        let query = AddStreamQuery {
            url: Some("rtsp://query/y".to_string()),
            name: Some("cam7".to_string()),
        };

        assert_eq!(resolve_source_uri(&config, &query, b""), "rtsp://query/y");
    }

    #[test]
    fn test_name_synthesizes_rtsp_url() {
        let config = ControlConfig::default().public_host("10.0.0.5");
        let query = AddStreamQuery {
            url: None,
            name: Some("cam7".to_string()),
        };

        assert_eq!(
            resolve_source_uri(&config, &query, b""),
            "rtsp://10.0.0.5:8554/cam7"
        );
    }

    #[test]
    fn test_configured_sample_uri() {
        let config = ControlConfig::default().sample_uri("file:///data/loop.mp4");

        let uri = resolve_source_uri(&config, &AddStreamQuery::default(), b"");
        assert_eq!(uri, "file:///data/loop.mp4");
    }

    #[test]
    fn test_hardcoded_default() {
        let config = ControlConfig::default();

        let uri = resolve_source_uri(&config, &AddStreamQuery::default(), b"");
        assert_eq!(uri, DEFAULT_SAMPLE_URI);
    }

    #[test]
    fn test_malformed_body_falls_through() {
        let config = ControlConfig::default();
        let query = AddStreamQuery {
            url: Some("rtsp://query/y".to_string()),
            name: None,
        };

        let uri = resolve_source_uri(&config, &query, b"not json at all");
        assert_eq!(uri, "rtsp://query/y");
    }

    #[test]
    fn test_body_without_url_falls_through() {
        let config = ControlConfig::default();

        let uri = resolve_source_uri(&config, &AddStreamQuery::default(), br#"{"other":1}"#);
        assert_eq!(uri, DEFAULT_SAMPLE_URI);
    }
}
