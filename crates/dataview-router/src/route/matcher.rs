/// Segment-by-segment matching of a request path against a parsed pattern

use super::segment::Segment;
use crate::Params;

/// Matches path segments against pattern segments, returning extracted params
///
/// The pattern must consume the whole path. An optional parameter first tries
/// to take the next path segment and falls back to matching without it, so
/// `/clean/:id?` accepts `/clean` and `/clean/42` but never `/clean/42/43`.
///
/// Parameter values are percent-decoded; static segments compare either
/// exactly or ignoring ASCII case.
pub fn match_segments(pattern: &[Segment], path: &[&str], case_insensitive: bool) -> Option<Params> {
    fn step(pattern: &[Segment], path: &[&str], params: Params, case_insensitive: bool) -> Option<Params> {
        let Some((segment, pattern_rest)) = pattern.split_first() else {
            // Consumed all pattern segments: success only if the path is consumed too
            return path.is_empty().then_some(params);
        };

        match segment {
            Segment::OptionalParam(name) => {
                if let Some((value, path_rest)) = path.split_first() {
                    let mut with_value = params.clone();
                    with_value.insert(name.as_str(), decode_segment(value));
                    if let Some(found) = step(pattern_rest, path_rest, with_value, case_insensitive) {
                        return Some(found);
                    }
                }
                step(pattern_rest, path, params, case_insensitive)
            }
            Segment::Param(name) => {
                let (value, path_rest) = path.split_first()?;
                let mut params = params;
                params.insert(name.as_str(), decode_segment(value));
                step(pattern_rest, path_rest, params, case_insensitive)
            }
            Segment::Static(text) => {
                let (value, path_rest) = path.split_first()?;
                let matches = if case_insensitive {
                    text.eq_ignore_ascii_case(value)
                } else {
                    text == value
                };

                if !matches {
                    return None;
                }
                step(pattern_rest, path_rest, params, case_insensitive)
            }
        }
    }

    step(pattern, path, Params::new(), case_insensitive)
}

/// Percent-decodes a path segment, keeping the raw text if it is not valid UTF-8
fn decode_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::parser::parse_pattern;

    fn matches(pattern: &str, path: &[&str]) -> Option<Params> {
        let parsed = parse_pattern(pattern).unwrap();
        match_segments(&parsed.segments, path, false)
    }

    #[test]
    fn test_static_match() {
        assert_eq!(matches("/login", &["login"]), Some(Params::new()));
        assert_eq!(matches("/login", &["register"]), None);
        assert_eq!(matches("/login", &[]), None);
        assert_eq!(matches("/login", &["login", "extra"]), None);
    }

    #[test]
    fn test_case_insensitive_static() {
        let parsed = parse_pattern("/mainpage/DataAnalysis/EDA").unwrap();
        let path = ["MAINPAGE", "dataanalysis", "eda"];
        assert!(match_segments(&parsed.segments, &path, true).is_some());
        assert!(match_segments(&parsed.segments, &path, false).is_none());
    }

    #[test]
    fn test_optional_param_present_and_absent() {
        let present = matches("/clean/:id?", &["clean", "42"]).unwrap();
        assert_eq!(present.get("id"), Some("42"));

        let absent = matches("/clean/:id?", &["clean"]).unwrap();
        assert_eq!(absent.get("id"), None);
        assert!(absent.is_empty());
    }

    #[test]
    fn test_optional_param_takes_single_segment() {
        assert_eq!(matches("/clean/:id?", &["clean", "42", "43"]), None);
    }

    #[test]
    fn test_optional_param_backtracks_before_static() {
        let params = matches("/files/:id?/rows", &["files", "rows"]).unwrap();
        assert_eq!(params.get("id"), None);

        let params = matches("/files/:id?/rows", &["files", "7", "rows"]).unwrap();
        assert_eq!(params.get("id"), Some("7"));
    }

    #[test]
    fn test_required_param() {
        let params = matches("/files/:id", &["files", "a%20b"]).unwrap();
        assert_eq!(params.get("id"), Some("a b"));
        assert_eq!(matches("/files/:id", &["files"]), None);
    }

    #[test]
    fn test_param_value_keeps_case() {
        let parsed = parse_pattern("/clean/:id?").unwrap();
        let params = match_segments(&parsed.segments, &["CLEAN", "AbC"], true).unwrap();
        assert_eq!(params.get("id"), Some("AbC"));
    }
}
