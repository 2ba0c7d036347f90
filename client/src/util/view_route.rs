//! Top-level view selection from the load-time URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has two top-level views. Selection happens once per full page
//! load; in-page URL changes afterwards do not re-select.

#[cfg(test)]
#[path = "view_route_test.rs"]
mod view_route_test;

/// Path that hosts the identity-provider callback and the profile view.
pub const PROFILE_PATH: &str = "/profile";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewSelector {
    /// Landing page: hero, career paths, jobs, blog.
    #[default]
    Main,
    /// Auth callback completion and the signed-in profile.
    ProfileCallback,
}

/// `/profile` selects the profile view; every other path selects main.
pub fn select_view(path: &str) -> ViewSelector {
    if path == PROFILE_PATH { ViewSelector::ProfileCallback } else { ViewSelector::Main }
}

/// Extract the one-time `session_id` from a URL fragment such as
/// `#session_id=abc&state=x`. The leading `#` is optional; values are
/// form-urlencoded. Empty values count as absent.
pub fn session_id_from_fragment(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| decode_component(key) == "session_id")
        .map(|(_, value)| decode_component(value))
        .filter(|value| !value.is_empty())
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), std::borrow::Cow::into_owned)
}
