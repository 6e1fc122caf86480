//! Endpoint classification and best-endpoint selection.
//!
//! Selection is a deterministic scan over the endpoint list. No latency or
//! liveness probe is made.

/// URL scheme of an RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointScheme {
    Https,
    Http,
    Wss,
    Ws,
    /// Anything else, including templated entries such as `${INFURA_API_KEY}`.
    Other,
}

impl EndpointScheme {
    /// Classify an endpoint URL by its prefix.
    pub fn of(url: &str) -> Self {
        if url.starts_with("https://") {
            Self::Https
        } else if url.starts_with("http://") {
            Self::Http
        } else if url.starts_with("wss://") {
            Self::Wss
        } else if url.starts_with("ws://") {
            Self::Ws
        } else {
            Self::Other
        }
    }

    /// `true` for plain or TLS HTTP.
    pub fn is_http(self) -> bool {
        matches!(self, Self::Https | Self::Http)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
            Self::Wss => "wss",
            Self::Ws => "ws",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EndpointScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Pick the preferred endpoint, in strict priority order:
///
/// 1. the first `https://` endpoint;
/// 2. otherwise the first `http://` endpoint;
/// 3. otherwise the first endpoint of any kind;
/// 4. `None` for an empty list.
pub fn select_best_rpc(endpoints: &[String]) -> Option<&str> {
    let find = |scheme: EndpointScheme| {
        endpoints
            .iter()
            .find(|url| EndpointScheme::of(url) == scheme)
    };
    find(EndpointScheme::Https)
        .or_else(|| find(EndpointScheme::Http))
        .or_else(|| endpoints.first())
        .map(String::as_str)
}

/// Keep only `http://` and `https://` endpoints, in order.
pub fn http_endpoints(endpoints: &[String]) -> Vec<String> {
    endpoints
        .iter()
        .filter(|url| EndpointScheme::of(url).is_http())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prefers_first_https() {
        let eps = urls(&["http://a", "https://b", "https://c"]);
        assert_eq!(select_best_rpc(&eps), Some("https://b"));
    }

    #[test]
    fn falls_back_to_http() {
        let eps = urls(&["wss://a", "http://b"]);
        assert_eq!(select_best_rpc(&eps), Some("http://b"));
        assert_eq!(select_best_rpc(&urls(&["http://a"])), Some("http://a"));
    }

    #[test]
    fn falls_back_to_first_of_any_scheme() {
        let eps = urls(&["wss://a", "ws://b"]);
        assert_eq!(select_best_rpc(&eps), Some("wss://a"));
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(select_best_rpc(&[]), None);
    }

    #[test]
    fn scheme_is_case_sensitive_prefix() {
        assert_eq!(EndpointScheme::of("HTTPS://a"), EndpointScheme::Other);
        assert_eq!(
            EndpointScheme::of("https://mainnet.infura.io/v3/${INFURA_API_KEY}"),
            EndpointScheme::Https
        );
        assert_eq!(EndpointScheme::of("${RPC_URL}"), EndpointScheme::Other);
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("[{:>5}]", EndpointScheme::Wss), "[  wss]");
    }

    #[test]
    fn http_filter_drops_websockets() {
        let eps = urls(&["wss://a", "https://b", "ws://c", "http://d"]);
        assert_eq!(http_endpoints(&eps), urls(&["https://b", "http://d"]));
    }
}
