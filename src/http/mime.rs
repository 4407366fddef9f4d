//! MIME type detection module
//!
//! Returns the Content-Type for a file extension. The table is deliberately
//! small: it covers what the site tree actually contains, everything else is
//! served as a generic binary. Matching is case-sensitive.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use newsroom::http::mime::content_type;
/// assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(content_type(Some("png")), "image/png");
/// assert_eq!(content_type(None), "application/octet-stream");
/// ```
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_types() {
        assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("css")), "text/css; charset=utf-8");
        assert_eq!(
            content_type(Some("js")),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(
            content_type(Some("json")),
            "application/json; charset=utf-8"
        );
        assert_eq!(content_type(Some("jpeg")), "image/jpeg");
        assert_eq!(content_type(Some("ico")), "image/x-icon");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Some("exe")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_case_sensitive() {
        // Upper-case extensions are not in the table on purpose
        assert_eq!(content_type(Some("HTML")), "application/octet-stream");
    }
}
