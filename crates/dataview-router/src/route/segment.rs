/// Segment classification for route patterns
///
/// Pure functional parsing of path pattern segments into typed variants.

use std::fmt;

/// One segment of a route pattern
///
/// # Examples
///
/// ```
/// use dataview_router::route::segment::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("upload"), Some(Segment::Static("upload".into())));
/// assert_eq!(classify_segment(":id"), Some(Segment::Param("id".into())));
/// assert_eq!(classify_segment(":id?"), Some(Segment::OptionalParam("id".into())));
/// assert_eq!(classify_segment(":"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text: `upload`
    Static(String),
    /// Required parameter, exactly one path segment: `:id`
    Param(String),
    /// Optional parameter, zero or one path segment: `:id?`
    OptionalParam(String),
}

impl Segment {
    /// Parameter name for dynamic segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::OptionalParam(name) => Some(name),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Segment::Static(_))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Segment::OptionalParam(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(text) => write!(f, "{}", text),
            Segment::Param(name) => write!(f, ":{}", name),
            Segment::OptionalParam(name) => write!(f, ":{}?", name),
        }
    }
}

/// Classifies a raw pattern segment
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional param**: `:name?`
/// 2. **Required param**: `:name`
/// 3. **Static**: any text without `:`, `?` or `*`
///
/// Returns `None` for malformed segments: an empty or non-identifier
/// parameter name, or stray pattern characters inside static text.
pub fn classify_segment(segment: &str) -> Option<Segment> {
    match segment.strip_prefix(':') {
        Some(param) => match param.strip_suffix('?') {
            Some(name) => valid_param_name(name).then(|| Segment::OptionalParam(name.to_string())),
            None => valid_param_name(param).then(|| Segment::Param(param.to_string())),
        },
        None => {
            let has_pattern_chars = segment.contains(&[':', '?', '*'][..]);
            (!segment.is_empty() && !has_pattern_chars).then(|| Segment::Static(segment.to_string()))
        }
    }
}

fn valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("DataAnalysis"),
            Some(Segment::Static("DataAnalysis".to_string()))
        );
    }

    #[test]
    fn test_classify_params() {
        assert_eq!(classify_segment(":file_id"), Some(Segment::Param("file_id".to_string())));
        assert_eq!(classify_segment(":id?"), Some(Segment::OptionalParam("id".to_string())));
    }

    #[test]
    fn test_classify_malformed() {
        assert_eq!(classify_segment(""), None);
        assert_eq!(classify_segment(":"), None);
        assert_eq!(classify_segment(":?"), None);
        assert_eq!(classify_segment(":id??"), None);
        assert_eq!(classify_segment(":my-id"), None);
        assert_eq!(classify_segment("files*"), None);
        assert_eq!(classify_segment("what?"), None);
    }

    #[test]
    fn test_display_round_trips_syntax() {
        for raw in ["upload", ":id", ":id?"] {
            let segment = classify_segment(raw).unwrap();
            assert_eq!(segment.to_string(), raw);
        }
    }
}
