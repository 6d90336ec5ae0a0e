use std::str::FromStr;

use thiserror::Error;

/// A parsed `http://host/path` URL.
///
/// Only the `http` scheme is accepted. Ports, query strings and userinfo are
/// not split out; whatever the input carries stays embedded in `host` or
/// `path` verbatim.
#[derive(Debug)]
pub struct Url {
    host: String,
    path: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed url: missing \"://\"")]
    Malformed,

    #[error("unsupported scheme {0:?}, only \"http\" is supported")]
    UnsupportedScheme(String),
}

impl Url {
    pub fn scheme(&self) -> &str {
        "http"
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Always starts with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = s.split_once("://").ok_or(ParseError::Malformed)?;

        if scheme != "http" {
            return Err(ParseError::UnsupportedScheme(scheme.to_string()));
        }

        // The slash between host and path belongs to the path; a bare host
        // gets path "/".
        let (host, path_rest) = match rest.split_once('/') {
            Some((host, path_rest)) => (host, path_rest),
            None => (rest, ""),
        };

        Ok(Self {
            host: host.to_string(),
            path: format!("/{}", path_rest),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_and_path() {
        let url: Url = "http://example.org/index.html".parse().unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), "example.org");
        assert_eq!(url.path(), "/index.html");
    }

    #[test]
    fn bare_host_gets_root_path() {
        let url: Url = "http://example.com".parse().unwrap();
        assert_eq!(url.host(), "example.com");
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn trailing_slash_is_the_path() {
        let url: Url = "http://example.com/".parse().unwrap();
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn deep_path_keeps_later_slashes() {
        let url: Url = "http://example.com/a/b/c".parse().unwrap();
        assert_eq!(url.host(), "example.com");
        assert_eq!(url.path(), "/a/b/c");
    }

    #[test]
    fn https_is_rejected() {
        let err = "https://example.com/".parse::<Url>().unwrap_err();
        assert_eq!(err, ParseError::UnsupportedScheme("https".to_string()));
    }

    #[test]
    fn scheme_is_case_sensitive() {
        let err = "HTTP://example.com/".parse::<Url>().unwrap_err();
        assert_eq!(err, ParseError::UnsupportedScheme("HTTP".to_string()));
    }

    #[test]
    fn missing_delimiter_is_malformed() {
        let err = "example.com/foo".parse::<Url>().unwrap_err();
        assert_eq!(err, ParseError::Malformed);
    }

    #[test]
    fn port_stays_in_host_verbatim() {
        let url: Url = "http://example.com:8080/x".parse().unwrap();
        assert_eq!(url.host(), "example.com:8080");
        assert_eq!(url.path(), "/x");
    }

    #[test]
    fn query_stays_in_path_verbatim() {
        let url: Url = "http://example.com/search?q=a/b".parse().unwrap();
        assert_eq!(url.path(), "/search?q=a/b");
    }
}
