//! Start-parameter string parsing
//!
//! ASA servers are launched with a single start-parameter blob in which
//! `?`-delimited sub-keys and `-key=value` switches are mixed, e.g.
//! `"TheIsland_WP?listen?Port=7777?RCONPort=27020 -WinLiveMaxPlayers=50"`.

/// Extract the value of `key` from a start-parameter string.
///
/// Scans left-to-right for the literal substring `"<key>="`; the value is
/// everything after it up to the next space, `?`, or end of string. Returns
/// `None` when the key is absent or its value is empty.
pub fn extract(start_params: &str, key: &str) -> Option<String> {
    if start_params.is_empty() {
        return None;
    }

    let needle = format!("{key}=");
    let offset = start_params.find(&needle)? + needle.len();

    let value: String = start_params[offset..]
        .chars()
        .take_while(|&c| c != ' ' && c != '?')
        .collect();

    // A key immediately followed by a delimiter has no usable value
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
