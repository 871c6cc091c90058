pub mod config;
pub mod summarize;
pub mod transcript;

use thiserror::Error;
use url::Url;

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A successful resolution. `url_warning` is set when the input failed URL
/// parsing but still matched as a bare video id.
#[derive(Debug)]
pub struct Resolution {
    pub id: VideoId,
    pub url_warning: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid YouTube video URL or ID: {input}")]
    InvalidIdentifier {
        input: String,
        url_warning: Option<String>,
    },
}

/// Derive a canonical video id from a YouTube URL or bare id.
///
/// Precedence: the `v` query parameter on a watch URL, then the youtu.be
/// path, then the raw input itself when it already looks like an id. URL
/// parse failures are non-fatal and fall through to the bare-id check.
pub fn resolve(raw: &str) -> Result<Resolution, ResolveError> {
    let mut url_warning = None;

    match Url::parse(raw) {
        Ok(parsed) => {
            if let Some(id) = candidate_from_url(&parsed) {
                return Ok(Resolution {
                    id: VideoId(id),
                    url_warning: None,
                });
            }
        }
        // A bare id is not an absolute URL; only genuinely malformed
        // URLs warrant a warning.
        Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => url_warning = Some(format!("error parsing URL: {e}")),
    }

    if is_bare_id(raw) {
        return Ok(Resolution {
            id: VideoId(raw.to_string()),
            url_warning,
        });
    }

    Err(ResolveError::InvalidIdentifier {
        input: raw.to_string(),
        url_warning,
    })
}

fn candidate_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    if host == "www.youtube.com" || host == "youtube.com" {
        if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v") {
            if v.chars().count() == 11 {
                return Some(v.into_owned());
            }
        }
    } else if host == "youtu.be" {
        let path = url.path().trim_start_matches('/');
        if path.chars().count() == 11 {
            return Some(path.to_string());
        }
    }

    None
}

fn is_bare_id(raw: &str) -> bool {
    raw.chars().count() == 11
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(input: &str) -> String {
        resolve(input).unwrap().id.as_str().to_string()
    }

    #[test]
    fn test_bare_video_id() {
        assert_eq!(id_of("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_bare_id_with_hyphen_and_underscore() {
        assert_eq!(id_of("a-b_c1D2e3F"), "a-b_c1D2e3F");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url_without_www() {
        assert_eq!(id_of("https://youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_short_url() {
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url_with_short_v_falls_through() {
        // The `v` parameter is not 11 characters and the input as a whole
        // is not a bare id, so resolution fails.
        let err = resolve("https://www.youtube.com/watch?v=abc").unwrap_err();
        let ResolveError::InvalidIdentifier { url_warning, .. } = err;
        assert!(url_warning.is_none());
    }

    #[test]
    fn test_watch_url_without_v_fails() {
        assert!(resolve("https://www.youtube.com/watch").is_err());
    }

    #[test]
    fn test_short_url_with_wrong_length_path_fails() {
        assert!(resolve("https://youtu.be/abc").is_err());
    }

    #[test]
    fn test_unrelated_host_fails() {
        assert!(resolve("https://vimeo.com/dQw4w9WgXcQ").is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(resolve("not a url or id").is_err());
    }

    #[test]
    fn test_bare_id_with_invalid_char_fails() {
        assert!(resolve("dQw4w9WgXc!").is_err());
    }

    #[test]
    fn test_wrong_length_fails() {
        assert!(resolve("dQw4w9WgXc").is_err());
        assert!(resolve("dQw4w9WgXcQQ").is_err());
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_malformed_url_carries_warning() {
        // Space in the host: an absolute-URL parse error, not a bare id.
        let err = resolve("https://exa mple.com/dQw4w9WgXcQ").unwrap_err();
        let ResolveError::InvalidIdentifier { url_warning, .. } = err;
        assert!(url_warning.is_some());
    }
}
