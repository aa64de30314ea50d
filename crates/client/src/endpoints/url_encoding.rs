//! URL encoding utilities for constructing safe API paths and query strings.
//!
//! Provides percent-encoding for URL path segments (certnames, fact names,
//! mbean names) and for query parameter values (encoded AST queries).
//!
//! # Security Considerations
//!
//! Without percent-encoding, special characters in caller-supplied names could:
//! - Cause path traversal (e.g., `node/../facts` would create a nested path)
//! - Break URL parsing (e.g., `node?x` would create a query parameter)
//! - Split a query value (e.g., `&` inside an encoded query)
//!
//! # Example
//!
//! ```
//! use puppetdb_client::endpoints::url_encoding::{encode_path_segment, encode_query_value};
//!
//! assert_eq!(encode_path_segment("web/01"), "web%2F01");
//! assert_eq!(encode_query_value(r#"["=","a b"]"#), "%5B%22%3D%22%2C%22a%20b%22%5D");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3. Colon, equals and comma pass through
/// because mbean names (`domain:type=default,name=num-nodes`) use them.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')      // Space
    .add(b'"')      // Double quote
    .add(b'<')      // Less than
    .add(b'>')      // Greater than
    .add(b'`')      // Backtick
    .add(b'{')      // Left curly brace
    .add(b'}')      // Right curly brace
    .add(b'|')      // Pipe
    .add(b'\\')     // Backslash
    .add(b'^')      // Caret
    .add(b'%')      // Percent (prevents double-encoding)
    .add(b'/')      // Forward slash (prevents path traversal)
    .add(b'?')      // Question mark
    .add(b'#')      // Hash
    .add(b'+')      // Plus
    .add(b';')      // Semicolon
    .add(b'[')      // Left square bracket
    .add(b']'); // Right square bracket

/// Characters that must be percent-encoded in query parameter values.
///
/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`).
pub const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use puppetdb_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("node123"), "node123");
/// assert_eq!(encode_path_segment("node 1"), "node%201");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Percent-encode a query parameter value. Space becomes `%20`.
pub fn encode_query_value(value: &str) -> String {
    percent_encode(value.as_bytes(), QUERY_VALUE_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("node123"), "node123");
        assert_eq!(encode_path_segment("uptime_seconds"), "uptime_seconds");
        assert_eq!(encode_path_segment("web-01.example.com"), "web-01.example.com");
    }

    #[test]
    fn test_encode_slash() {
        assert_eq!(encode_path_segment("node/facts"), "node%2Ffacts");
        assert_eq!(encode_path_segment("a/b/c"), "a%2Fb%2Fc");
    }

    #[test]
    fn test_encode_percent() {
        assert_eq!(encode_path_segment("node%20name"), "node%2520name");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("n\u{00e9}ud"), "n%C3%A9ud");
    }

    #[test]
    fn test_encode_question_and_hash() {
        assert_eq!(encode_path_segment("node?x"), "node%3Fx");
        assert_eq!(encode_path_segment("node#x"), "node%23x");
    }

    #[test]
    fn test_mbean_name_passes_through() {
        let mbean = "com.puppetlabs.puppetdb.query.population:type=default,name=num-nodes";
        assert_eq!(encode_path_segment(mbean), mbean);
    }

    #[test]
    fn test_query_value_unreserved_kept() {
        assert_eq!(encode_query_value("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn test_query_value_reserved_encoded() {
        assert_eq!(encode_query_value("a b"), "a%20b");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_value("a+b"), "a%2Bb");
        assert_eq!(
            encode_query_value(r#"["=","certname","node123"]"#),
            "%5B%22%3D%22%2C%22certname%22%2C%22node123%22%5D"
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
        assert_eq!(encode_query_value(""), "");
    }
}
