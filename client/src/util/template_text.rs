//! Plain-text rendering of downloadable resume templates.

#[cfg(test)]
#[path = "template_text_test.rs"]
mod template_text_test;

use std::fmt::Write as _;

use crate::net::types::ResumeTemplateDocument;

/// Template name, a blank line, then `Section:` / content blocks each
/// followed by a blank line.
pub fn render_template_text(doc: &ResumeTemplateDocument) -> String {
    let mut out = format!("{}\n\n", doc.template_name);
    for section in &doc.sections {
        let _ = write!(out, "{}:\n{}\n\n", section.name, section.content);
    }
    out
}

/// Download filename: whitespace runs become `_`, plus `.txt`.
pub fn template_filename(template_name: &str) -> String {
    let mut name = String::with_capacity(template_name.len() + 4);
    let mut in_space = false;
    for ch in template_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    name.push_str(".txt");
    name
}
