//! Access log format module
//!
//! One `AccessLogEntry` is emitted per request, rendered as `combined`
//! (Apache/Nginx combined format, the default), `common` (CLF), or `json`.

use chrono::Local;

/// Everything the access log knows about one request/response pair
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// New entry stamped with the current local time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Render the entry in the named format; unknown names fall back to
    /// `combined`
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    /// `"GET /api/news?offset=9 HTTP/1.1"` as logged
    fn request_line(&self) -> String {
        let query = self
            .query
            .as_ref()
            .map(|q| format!("?{q}"))
            .unwrap_or_default();
        format!(
            "{} {}{} HTTP/{}",
            self.method, self.path, query, self.http_version
        )
    }

    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        let entry = serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        });
        entry.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "10.0.0.7".to_string(),
            "GET".to_string(),
            "/api/news".to_string(),
        );
        entry.query = Some("offset=9&limit=9".to_string());
        entry.status = 200;
        entry.body_bytes = 4096;
        entry.referer = Some("http://localhost:8080/".to_string());
        entry.user_agent = Some("curl/8.5.0".to_string());
        entry.request_time_us = 850;
        entry
    }

    #[test]
    fn test_combined_format() {
        let log = sample_entry().format("combined");
        assert!(log.contains("10.0.0.7"));
        assert!(log.contains("GET /api/news?offset=9&limit=9 HTTP/1.1"));
        assert!(log.contains("200 4096"));
        assert!(log.contains("curl/8.5.0"));
    }

    #[test]
    fn test_common_format_omits_agent() {
        let log = sample_entry().format("common");
        assert!(log.contains("200 4096"));
        assert!(!log.contains("curl/8.5.0"));
    }

    #[test]
    fn test_json_format() {
        let log = sample_entry().format("json");
        assert!(log.contains(r#""remote_addr":"10.0.0.7""#));
        assert!(log.contains(r#""status":200"#));
        assert!(log.contains(r#""body_bytes":4096"#));
    }

    #[test]
    fn test_unknown_format_falls_back_to_combined() {
        let entry = sample_entry();
        assert_eq!(entry.format("fancy"), entry.format("combined"));
    }
}
