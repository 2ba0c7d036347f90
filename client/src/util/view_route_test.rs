use super::*;

#[test]
fn profile_path_selects_profile_view() {
    assert_eq!(select_view("/profile"), ViewSelector::ProfileCallback);
}

#[test]
fn other_paths_select_main_view() {
    for path in ["/", "", "/jobs", "/profile/", "/profiles", "/PROFILE"] {
        assert_eq!(select_view(path), ViewSelector::Main, "path {path:?}");
    }
}

#[test]
fn session_id_read_from_fragment() {
    assert_eq!(session_id_from_fragment("#session_id=ABC"), Some("ABC".to_owned()));
    assert_eq!(session_id_from_fragment("session_id=ABC"), Some("ABC".to_owned()));
}

#[test]
fn session_id_found_among_other_params() {
    assert_eq!(
        session_id_from_fragment("#state=xyz&session_id=abc-123&foo"),
        Some("abc-123".to_owned())
    );
}

#[test]
fn session_id_is_url_decoded() {
    assert_eq!(session_id_from_fragment("#session_id=a%2Bb+c"), Some("a+b c".to_owned()));
}

#[test]
fn missing_or_empty_session_id_is_none() {
    assert_eq!(session_id_from_fragment(""), None);
    assert_eq!(session_id_from_fragment("#"), None);
    assert_eq!(session_id_from_fragment("#session_id="), None);
    assert_eq!(session_id_from_fragment("#session_id"), None);
    assert_eq!(session_id_from_fragment("#other=1"), None);
}
