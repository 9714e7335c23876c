//! URL utility functions for reading query parameters.

use web_sys::window;

/// Get a query parameter from the current URL, reading directly from
/// `window.location.search`. Useful before the router's query map is
/// initialized (e.g. referral codes on the registration page).
pub fn get_query_param(key: &str) -> Option<String> {
    let window = window()?;
    let search = window.location().search().ok()?;

    let query_string = search.strip_prefix('?').unwrap_or(&search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((k, v)) if k == key => {
                return Some(
                    urlencoding::decode(v)
                        .unwrap_or_else(|_| v.into())
                        .into_owned(),
                );
            }
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}
