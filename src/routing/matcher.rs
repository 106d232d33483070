//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse patterns such as `/dashboard/chats/:id` and `/sign-in/*`
//! - Match a request path against a pattern, binding named parameters
//! - Rank patterns by specificity
//!
//! # Design Decisions
//! - Static segments compare ASCII case-insensitively
//! - Empty path segments are ignored, so trailing slashes do not matter
//! - A wildcard is only allowed as the last segment
//! - Bound parameters are percent-decoded; the wildcard remainder is not
//! - No regex: matching is a single pass over the segments

use std::fmt;

use percent_encoding::percent_decode_str;
use thiserror::Error;

const STATIC_SCORE: i32 = 10;
const PARAM_SCORE: i32 = 3;
const WILDCARD_PENALTY: i32 = -2;
const ROOT_SCORE: i32 = 2;

/// Error raised for a malformed pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    #[error("wildcard must be the last segment: {0:?}")]
    WildcardNotLast(String),

    #[error("empty parameter name in pattern: {0:?}")]
    EmptyParam(String),
}

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    Wildcard,
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathMatch {
    /// Named parameters in pattern order.
    pub params: Vec<(String, String)>,
    /// Remainder consumed by a trailing wildcard, without a leading slash.
    pub rest: Option<String>,
}

impl PathMatch {
    /// Look up a bound parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Split a request path into its non-empty segments.
///
/// Anything from the first `?` or `#` on is dropped.
pub fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Percent-decode a bound segment. Bytes that do not decode to UTF-8 leave
/// the segment as written.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

impl PathPattern {
    /// Parse a pattern.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(PatternError::WildcardNotLast(raw.to_string()));
                }
                Segment::Wildcard
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParam(raw.to_string()));
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters this pattern binds, in order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    /// Ranking score; higher wins when several patterns match.
    pub fn specificity(&self) -> i32 {
        if self.segments.is_empty() {
            return ROOT_SCORE;
        }
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(_) => STATIC_SCORE,
                Segment::Param(_) => PARAM_SCORE,
                Segment::Wildcard => WILDCARD_PENALTY,
            })
            .sum()
    }

    /// Match a request path against this pattern.
    pub fn matches(&self, path: &str) -> Option<PathMatch> {
        let parts = path_segments(path);
        let mut result = PathMatch::default();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard => {
                    // Every earlier segment consumed one part, so `i <= parts.len()`.
                    result.rest = Some(parts[i..].join("/"));
                    return Some(result);
                }
                Segment::Static(expected) => {
                    let actual = parts.get(i)?;
                    if !actual.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let actual = parts.get(i)?;
                    result.params.push((name.clone(), decode_segment(actual)));
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(result)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PathPattern::parse("dashboard"),
            Err(PatternError::MissingLeadingSlash("dashboard".into()))
        );
        assert_eq!(
            PathPattern::parse("/a/*/b"),
            Err(PatternError::WildcardNotLast("/a/*/b".into()))
        );
        assert_eq!(
            PathPattern::parse("/chats/:"),
            Err(PatternError::EmptyParam("/chats/:".into()))
        );
    }

    #[test]
    fn test_root_pattern() {
        let root = PathPattern::parse("/").unwrap();
        assert!(root.matches("/").is_some());
        assert!(root.matches("").is_some());
        assert!(root.matches("/dashboard").is_none());
    }

    #[test]
    fn test_static_match() {
        let pattern = PathPattern::parse("/dashboard").unwrap();
        assert!(pattern.matches("/dashboard").is_some());
        assert!(pattern.matches("/dashboard/").is_some());
        assert!(pattern.matches("/Dashboard").is_some());
        assert!(pattern.matches("/dashboard/chats").is_none());
        assert!(pattern.matches("/dash").is_none());
    }

    #[test]
    fn test_param_binding() {
        let pattern = PathPattern::parse("/dashboard/chats/:id").unwrap();
        assert_eq!(pattern.param_names(), vec!["id"]);

        let m = pattern.matches("/dashboard/chats/42").unwrap();
        assert_eq!(m.param("id"), Some("42"));
        assert_eq!(m.rest, None);

        assert!(pattern.matches("/dashboard/chats").is_none());
        assert!(pattern.matches("/dashboard/chats/").is_none());
        assert!(pattern.matches("/dashboard/chats/42/extra").is_none());
    }

    #[test]
    fn test_param_is_percent_decoded() {
        let pattern = PathPattern::parse("/dashboard/chats/:id").unwrap();

        let spaced = pattern.matches("/dashboard/chats/a%20b").unwrap();
        assert_eq!(spaced.param("id"), Some("a b"));

        let unicode = pattern.matches("/dashboard/chats/caf%C3%A9").unwrap();
        assert_eq!(unicode.param("id"), Some("café"));

        // Not valid UTF-8 once decoded: keep the raw text.
        let broken = pattern.matches("/dashboard/chats/%FF").unwrap();
        assert_eq!(broken.param("id"), Some("%FF"));
    }

    #[test]
    fn test_wildcard_suffix() {
        let pattern = PathPattern::parse("/sign-in/*").unwrap();
        assert!(pattern.has_wildcard());

        let base = pattern.matches("/sign-in").unwrap();
        assert_eq!(base.rest.as_deref(), Some(""));

        let sub = pattern.matches("/sign-in/factor-two").unwrap();
        assert_eq!(sub.rest.as_deref(), Some("factor-two"));

        let deep = pattern.matches("/sign-in/sso-callback/verify").unwrap();
        assert_eq!(deep.rest.as_deref(), Some("sso-callback/verify"));

        assert!(pattern.matches("/sign-up").is_none());
        assert!(pattern.matches("/").is_none());
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let pattern = PathPattern::parse("/dashboard/chats/:id").unwrap();
        let m = pattern.matches("/dashboard/chats/7?tab=history#top").unwrap();
        assert_eq!(m.param("id"), Some("7"));
    }

    #[test]
    fn test_specificity_ordering() {
        let root = PathPattern::parse("/").unwrap();
        let wildcard = PathPattern::parse("/sign-in/*").unwrap();
        let dashboard = PathPattern::parse("/dashboard").unwrap();
        let chat = PathPattern::parse("/dashboard/chats/:id").unwrap();

        assert_eq!(root.specificity(), 2);
        assert_eq!(wildcard.specificity(), 8);
        assert_eq!(dashboard.specificity(), 10);
        assert_eq!(chat.specificity(), 23);
    }
}
