/// Pattern parsing and priority calculation for routes
///
/// Pure functional parsers that turn declared path patterns into typed segments.

use super::segment::{classify_segment, Segment};
use crate::RouteError;

/// A fully parsed route pattern, including the segments of every ancestor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Canonical pattern text like `/mainpage/DataAnalysis/Clean/:id?`
    pub pattern: String,
    pub segments: Vec<Segment>,
    /// Parameter names in path order
    pub params: Vec<String>,
    pub optional_params: Vec<String>,
    pub dynamic_count: usize,
}

impl ParsedPattern {
    /// Depth in path segments (`/` is 0)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn priority(&self) -> usize {
        calculate_priority(self.dynamic_count, self.depth(), &self.optional_params)
    }

    pub fn is_static(&self) -> bool {
        self.dynamic_count == 0
    }
}

/// Fold accumulator; each builder method returns the updated state
struct ParseState {
    parsed: ParsedPattern,
    source: String,
}

impl ParseState {
    fn with_static_segment(mut self, text: String) -> Self {
        self.parsed.segments.push(Segment::Static(text));
        self
    }

    fn with_param(mut self, segment: Segment) -> Result<Self, RouteError> {
        let name = segment.param_name().unwrap_or_default().to_string();

        if self.parsed.params.contains(&name) {
            return Err(RouteError::DuplicateParam {
                pattern: self.source,
                param: name,
            });
        }

        if segment.is_optional() {
            self.parsed.optional_params.push(name.clone());
        }
        self.parsed.params.push(name);
        self.parsed.dynamic_count += 1;
        self.parsed.segments.push(segment);
        Ok(self)
    }

    fn finalize(mut self) -> ParsedPattern {
        self.parsed.pattern = render_pattern(&self.parsed.segments);
        self.parsed
    }
}

/// Processes a single raw segment (fold step)
fn process_segment(state: ParseState, raw: &str) -> Result<ParseState, RouteError> {
    match classify_segment(raw) {
        Some(Segment::Static(text)) => Ok(state.with_static_segment(text)),
        Some(dynamic) => state.with_param(dynamic),
        None => Err(RouteError::InvalidSegment {
            pattern: state.source,
            segment: raw.to_string(),
        }),
    }
}

/// Parses a pattern on its own, as a top-level route
///
/// # Examples
///
/// ```
/// use dataview_router::route::parser::parse_pattern;
///
/// let parsed = parse_pattern("/mainpage/DataAnalysis/Clean/:id?").unwrap();
/// assert_eq!(parsed.pattern, "/mainpage/DataAnalysis/Clean/:id?");
/// assert_eq!(parsed.params, vec!["id"]);
/// assert_eq!(parsed.optional_params, vec!["id"]);
/// ```
pub fn parse_pattern(pattern: &str) -> Result<ParsedPattern, RouteError> {
    parse_child_pattern(&ParsedPattern::default(), pattern)
}

/// Parses a child pattern appended to its already parsed parent
///
/// Parameter names must stay unique along the whole chain.
pub fn parse_child_pattern(parent: &ParsedPattern, pattern: &str) -> Result<ParsedPattern, RouteError> {
    let source = if parent.segments.is_empty() {
        pattern.to_string()
    } else {
        format!("{}/{}", parent.pattern, pattern)
    };

    let initial = ParseState {
        parsed: parent.clone(),
        source,
    };

    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .try_fold(initial, process_segment)
        .map(ParseState::finalize)
}

/// Renders segments back to canonical pattern text
pub fn render_pattern(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }

    segments.iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(&segment.to_string());
        acc
    })
}

/// Calculates route priority (lower = tried first)
///
/// Static routes come first. Among dynamic routes, fewer dynamic segments
/// and shallower depth win; a route whose params are all required ranks just
/// after an otherwise equal route with optional params.
///
/// ```
/// use dataview_router::route::parser::calculate_priority;
///
/// assert_eq!(calculate_priority(0, 2, &[]), 0);
/// assert_eq!(calculate_priority(1, 4, &["id".to_string()]), 5);
/// assert_eq!(calculate_priority(1, 4, &[]), 6);
/// ```
pub fn calculate_priority(dynamic_count: usize, depth: usize, optional_params: &[String]) -> usize {
    if dynamic_count == 0 {
        return 0;
    }

    let optional_bonus = if optional_params.is_empty() { 1 } else { 0 };
    dynamic_count + depth + optional_bonus
}
