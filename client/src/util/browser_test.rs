#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_fragment_is_empty_outside_browser() {
    assert_eq!(current_fragment(), "");
}

#[test]
fn side_effects_are_noops_but_callable() {
    navigate_to("/");
    alert("Application submitted successfully!");
    download_text_file("Basic.txt", "Basic\n\n");
}
