//! Query builder for the MediaWiki prefix-search API

/// Pages returned per search
pub const RESULT_LIMIT: u32 = 5;
/// Thumbnail width in pixels
pub const THUMBNAIL_SIZE: u32 = 160;
/// Maximum thumbnails returned with the results
pub const THUMBNAIL_LIMIT: u32 = 30;
/// Main (article) namespace
pub const MAIN_NAMESPACE: u32 = 0;

/// Parameters for a single prefix search
///
/// Built fresh for every term; only `gpssearch` varies between queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// The term is passed through verbatim, including the empty string
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Query-string pairs in the order they are sent
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("action", "query".to_string()),
            ("format", "json".to_string()),
            ("gpssearch", self.term.clone()),
            ("generator", "prefixsearch".to_string()),
            ("prop", "pageprops|pageimages|pageterms".to_string()),
            // Empty value enables redirect resolution
            ("redirects", String::new()),
            ("ppprop", "displaytitle".to_string()),
            ("piprop", "thumbnail".to_string()),
            ("pithumbsize", THUMBNAIL_SIZE.to_string()),
            ("pilimit", THUMBNAIL_LIMIT.to_string()),
            ("wbptterms", "description".to_string()),
            ("gpsnamespace", MAIN_NAMESPACE.to_string()),
            ("gpslimit", RESULT_LIMIT.to_string()),
            ("origin", "*".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_params_contract() {
        let params = SearchQuery::new("Paris").params();
        let rendered = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n");

        assert_snapshot!(rendered, @r"
        action=query
        format=json
        gpssearch=Paris
        generator=prefixsearch
        prop=pageprops|pageimages|pageterms
        redirects=
        ppprop=displaytitle
        piprop=thumbnail
        pithumbsize=160
        pilimit=30
        wbptterms=description
        gpsnamespace=0
        gpslimit=5
        origin=*
        ");
    }

    #[test]
    fn test_term_is_passed_verbatim() {
        let query = SearchQuery::new("  l'Été & co ");
        assert_eq!(query.term(), "  l'Été & co ");
        assert_eq!(param(&query.params(), "gpssearch"), Some("  l'Été & co "));
    }

    #[test]
    fn test_empty_term_is_a_legal_query() {
        let query = SearchQuery::new("");
        assert_eq!(param(&query.params(), "gpssearch"), Some(""));
        assert_eq!(param(&query.params(), "gpslimit"), Some("5"));
    }

    #[test]
    fn test_only_search_term_varies() {
        let a = SearchQuery::new("Berlin").params();
        let b = SearchQuery::new("Tokyo").params();

        let differing: Vec<_> = a
            .iter()
            .zip(b.iter())
            .filter(|(x, y)| x != y)
            .map(|(x, _)| x.0)
            .collect();
        assert_eq!(differing, vec!["gpssearch"]);
    }
}
