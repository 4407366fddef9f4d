//! Query string parsing module
//!
//! Decoded access to URL query parameters. Article ids arrive
//! percent-encoded from the frontend, so raw `&`/`=` splitting is not
//! enough; decoding goes through `form_urlencoded`.

use url::form_urlencoded;

/// A parameter that was present but did not parse as an integer
#[derive(Debug, PartialEq, Eq)]
pub struct NotAnInteger;

/// Decoded query parameters, in request order
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse the raw query string portion of a URI (without the `?`)
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self(pairs)
    }

    /// First occurrence of `name`, decoded
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Integer-valued parameter. `Ok(None)` when absent, `Err` when present
    /// but not an integer.
    pub fn int(&self, name: &str) -> Result<Option<i64>, NotAnInteger> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| NotAnInteger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_query() {
        let params = QueryParams::parse(None);
        assert_eq!(params.get("id"), None);
        assert_eq!(params.int("offset"), Ok(None));
    }

    #[test]
    fn test_get_decodes() {
        let params = QueryParams::parse(Some("id=hero%5F001&x=a+b"));
        assert_eq!(params.get("id"), Some("hero_001"));
        assert_eq!(params.get("x"), Some("a b"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = QueryParams::parse(Some("id=first&id=second"));
        assert_eq!(params.get("id"), Some("first"));
    }

    #[test]
    fn test_int_parsing() {
        let params = QueryParams::parse(Some("offset=12&limit=-3&bad=12abc"));
        assert_eq!(params.int("offset"), Ok(Some(12)));
        assert_eq!(params.int("limit"), Ok(Some(-3)));
        assert_eq!(params.int("bad"), Err(NotAnInteger));
        assert_eq!(params.int("missing"), Ok(None));
    }
}
