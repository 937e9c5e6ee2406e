/// Splitting a requested location into path, query and hash
///
/// `/mainpage/DataAnalysis/Clean/7?tab=nulls#top` becomes path
/// `/mainpage/DataAnalysis/Clean/7`, query `tab=nulls` and hash `top`.

use crate::params::Params;

/// A requested location broken into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub hash: Option<&'a str>,
}

impl<'a> Location<'a> {
    /// Splits on the first `#`, then on the first `?` of what remains
    ///
    /// ```
    /// use dataview_router::path::Location;
    ///
    /// let loc = Location::parse("/mainpage/upload?file=a.csv#preview");
    /// assert_eq!(loc.path, "/mainpage/upload");
    /// assert_eq!(loc.query, Some("file=a.csv"));
    /// assert_eq!(loc.hash, Some("preview"));
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (raw, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Self {
            path,
            query: query.filter(|q| !q.is_empty()),
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    /// Decodes the query string into params; a repeated key keeps its last value
    pub fn query_params(&self) -> Params {
        self.query
            .map(|query| {
                query
                    .split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((key, value)) => (decode_component(key), decode_component(value)),
                        None => (decode_component(pair), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Percent-decodes one query component, treating `+` as a space
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
