use std::collections::BTreeMap;

use crate::errors::NavError;

/// Param name under which a trailing `*` binds the unmatched remainder.
pub const REST_PARAM: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// `:name`, matches exactly one path segment
    Param(String),
    /// trailing `*`, matches the remainder (zero or more segments)
    Rest,
}

/// A parsed route path pattern such as `users/:username` or `/docs/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, NavError> {
        let parts: Vec<&str> = split_path(raw);
        let mut segments = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(NavError::InvalidPattern(format!(
                        "`*` must be the last segment in `{raw}`"
                    )));
                }
                Segment::Rest
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(NavError::InvalidPattern(format!(
                        "empty parameter name in `{raw}`"
                    )));
                }
                Segment::Param(name.to_string())
            } else if part.contains('*') {
                return Err(NavError::InvalidPattern(format!(
                    "`{part}` in `{raw}` mixes a literal with `*`"
                )));
            } else {
                Segment::Literal(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_rest(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Rest))
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Rest => Some(REST_PARAM),
            Segment::Literal(_) => None,
        })
    }

    /// Match this pattern against the front of `path`.
    ///
    /// Returns how many path segments were consumed, binding params into `params`.
    /// Nothing is written to `params` when the pattern does not match.
    pub fn match_prefix(
        &self,
        path: &[&str],
        params: &mut BTreeMap<String, String>,
    ) -> Option<usize> {
        let mut bound = Vec::new();
        let mut consumed = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if path.get(consumed) != Some(&lit.as_str()) {
                        return None;
                    }
                    consumed += 1;
                }
                Segment::Param(name) => {
                    let value = path.get(consumed)?;
                    bound.push((name.clone(), value.to_string()));
                    consumed += 1;
                }
                Segment::Rest => {
                    bound.push((REST_PARAM.to_string(), path[consumed..].join("/")));
                    consumed = path.len();
                }
            }
        }

        params.extend(bound);
        Some(consumed)
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a request path or pattern into non-empty segments, dropping any query or fragment.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path
        .split_once(['?', '#'])
        .map(|(p, _)| p)
        .unwrap_or(path);
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let p = PathPattern::parse("/iam/users/:username/*").unwrap();
        assert_eq!(
            p.segments(),
            &[
                Segment::Literal("iam".into()),
                Segment::Literal("users".into()),
                Segment::Param("username".into()),
                Segment::Rest,
            ]
        );
        assert!(p.has_rest());
        assert_eq!(p.param_names().collect::<Vec<_>>(), vec!["username", "*"]);
        assert_eq!(p.to_string(), "/iam/users/:username/*");
    }

    #[test]
    fn test_parse_rejects_bad_patterns() {
        assert!(matches!(
            PathPattern::parse("docs/*/more"),
            Err(NavError::InvalidPattern(_))
        ));
        assert!(matches!(
            PathPattern::parse("users/:"),
            Err(NavError::InvalidPattern(_))
        ));
        assert!(matches!(
            PathPattern::parse("files*"),
            Err(NavError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_empty_pattern_consumes_nothing() {
        let p = PathPattern::parse("").unwrap();
        let mut params = BTreeMap::new();
        assert_eq!(p.match_prefix(&["users"], &mut params), Some(0));
    }

    #[test]
    fn test_match_literal_and_param() {
        let p = PathPattern::parse("users/:username").unwrap();
        let mut params = BTreeMap::new();
        assert_eq!(p.match_prefix(&["users", "alice", "edit"], &mut params), Some(2));
        assert_eq!(params.get("username").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_failed_match_binds_nothing() {
        let p = PathPattern::parse(":group/members").unwrap();
        let mut params = BTreeMap::new();
        assert_eq!(p.match_prefix(&["admins", "roles"], &mut params), None);
        assert!(params.is_empty());
        assert_eq!(p.match_prefix(&["admins"], &mut params), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_rest_binds_remainder() {
        let p = PathPattern::parse("docs/*").unwrap();
        let mut params = BTreeMap::new();
        assert_eq!(p.match_prefix(&["docs", "a", "b"], &mut params), Some(3));
        assert_eq!(params.get(REST_PARAM).map(String::as_str), Some("a/b"));

        let mut params = BTreeMap::new();
        assert_eq!(p.match_prefix(&["docs"], &mut params), Some(1));
        assert_eq!(params.get(REST_PARAM).map(String::as_str), Some(""));
    }

    #[test]
    fn test_split_path_drops_query_and_empty_segments() {
        assert_eq!(split_path("/iam//users/?page=2"), vec!["iam", "users"]);
        assert_eq!(split_path("/iam/users#top"), vec!["iam", "users"]);
        assert!(split_path("/").is_empty());
    }
}
