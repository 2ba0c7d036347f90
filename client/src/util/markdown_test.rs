use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown_html("# Stay motivated\n\nShip **small** projects.");
    assert!(html.contains("<h1>Stay motivated</h1>"));
    assert!(html.contains("<strong>small</strong>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nhello <b>there</b>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("hello"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn script_links_lose_their_target() {
    let html = render_markdown_html("[click](javascript:alert(1)) and [x](JavaScript:void(0))");
    assert!(!html.to_ascii_lowercase().contains("javascript:"));
    assert!(html.contains("<a href=\"#\">click</a>"));
}

#[test]
fn web_and_relative_links_are_kept() {
    let html = render_markdown_html("[a](https://devset.io/x) [b](mailto:hi@devset.io) [c](/careers/web:dev)");
    assert!(html.contains("href=\"https://devset.io/x\""));
    assert!(html.contains("href=\"mailto:hi@devset.io\""));
    assert!(html.contains("href=\"/careers/web:dev\""));
}

#[test]
fn data_images_are_dropped() {
    let html = render_markdown_html("![pic](data:text/html,boom)");
    assert!(!html.contains("data:"));
}
