//! Endpoint rewriting for CORS proxies

/// Route `base` through `proxy`
///
/// Joining rules:
/// - blank proxy: `base` unchanged
/// - proxy ending in `?` or `=`: the proxy embeds the target in its query
///   string, so the two are concatenated directly
/// - otherwise exactly one `/` separates proxy and target
pub fn apply_proxy(proxy: Option<&str>, base: &str) -> String {
    let proxy = match proxy.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => return base.to_string(),
    };

    if proxy.ends_with('?') || proxy.ends_with('=') || proxy.ends_with('/') {
        format!("{}{}", proxy, base)
    } else {
        format!("{}/{}", proxy, base)
    }
}
