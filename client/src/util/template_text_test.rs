use super::*;
use crate::net::types::TemplateSection;

fn doc(name: &str, sections: &[(&str, &str)]) -> ResumeTemplateDocument {
    ResumeTemplateDocument {
        template_name: name.to_owned(),
        sections: sections
            .iter()
            .map(|(n, c)| TemplateSection { name: (*n).to_owned(), content: (*c).to_owned() })
            .collect(),
    }
}

#[test]
fn single_section_renders_expected_lines() {
    let text = render_template_text(&doc("Basic", &[("Summary", "X")]));
    assert_eq!(text, "Basic\n\nSummary:\nX\n\n");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(&lines[..4], &["Basic", "", "Summary:", "X"]);
}

#[test]
fn sections_render_in_order() {
    let text = render_template_text(&doc(
        "Software Engineer Resume",
        &[("Contact", "[Name]"), ("Experience", "- Role at Company")],
    ));
    assert_eq!(
        text,
        "Software Engineer Resume\n\nContact:\n[Name]\n\nExperience:\n- Role at Company\n\n"
    );
}

#[test]
fn template_without_sections_is_just_the_title() {
    assert_eq!(render_template_text(&doc("Empty", &[])), "Empty\n\n");
}

#[test]
fn filename_collapses_whitespace_runs() {
    assert_eq!(template_filename("Software  Engineer\tResume"), "Software_Engineer_Resume.txt");
    assert_eq!(template_filename("Basic"), "Basic.txt");
    assert_eq!(template_filename(" Lead"), "_Lead.txt");
}
