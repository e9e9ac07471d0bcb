//! URL decoding module
//!
//! Percent-decoding for path segments and query string parameter extraction.

/// Decode percent-encoded sequences in a path segment
///
/// Malformed escapes are kept literally rather than rejected, and `+`
/// stays `+` (plus only means space in query strings).
///
/// # Examples
/// ```
/// use rosterd::http::query::percent_decode;
/// assert_eq!(percent_decode("Chess%20Club"), "Chess Club");
/// assert_eq!(percent_decode("a+b"), "a+b");
/// ```
pub fn percent_decode(input: &str) -> String {
    decode_with(input, false)
}

/// Extract and decode a single query string parameter by name
///
/// Returns the first matching value. A bare key or an empty value both
/// decode to `Some("")`; an absent key returns `None`.
///
/// # Examples
/// ```
/// use rosterd::http::query::query_param;
/// let query = Some("email=michael%40mergington.edu");
/// assert_eq!(
///     query_param(query, "email").as_deref(),
///     Some("michael@mergington.edu")
/// );
/// assert_eq!(query_param(query, "name"), None);
/// ```
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if percent_decode(key) == name {
            return Some(decode_with(value, true));
        }
    }
    None
}

fn decode_with(input: &str, plus_as_space: bool) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' if plus_as_space => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(high), Some(low)) => {
                        decoded.push((high << 4) | low);
                        i += 3;
                    }
                    // Malformed escape, keep the literal percent
                    _ => {
                        decoded.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passthrough() {
        assert_eq!(percent_decode("activities"), "activities");
    }

    #[test]
    fn test_decodes_spaces() {
        assert_eq!(percent_decode("Chess%20Club"), "Chess Club");
        assert_eq!(percent_decode("Art%20Studio"), "Art Studio");
    }

    #[test]
    fn test_decodes_utf8() {
        assert_eq!(percent_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn test_plus_stays_literal_in_paths() {
        assert_eq!(percent_decode("a+b"), "a+b");
    }

    #[test]
    fn test_malformed_escape_kept() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%2"), "%2");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn test_query_param_decodes_value() {
        let query = Some("email=alice%40mergington.edu");
        assert_eq!(
            query_param(query, "email").as_deref(),
            Some("alice@mergington.edu")
        );
    }

    #[test]
    fn test_query_param_plus_is_space() {
        let query = Some("email=a+b%40mergington.edu");
        assert_eq!(
            query_param(query, "email").as_deref(),
            Some("a b@mergington.edu")
        );
    }

    #[test]
    fn test_query_param_picks_named_pair() {
        let query = Some("name=chess&email=x%40y");
        assert_eq!(query_param(query, "email").as_deref(), Some("x@y"));
        assert_eq!(query_param(query, "name").as_deref(), Some("chess"));
    }

    #[test]
    fn test_query_param_missing() {
        assert_eq!(query_param(None, "email"), None);
        assert_eq!(query_param(Some("name=chess"), "email"), None);
    }

    #[test]
    fn test_query_param_empty_value_is_present() {
        assert_eq!(query_param(Some("email="), "email").as_deref(), Some(""));
        assert_eq!(query_param(Some("email"), "email").as_deref(), Some(""));
    }
}
