//! Wire DTOs for the careers API.
//!
//! DESIGN
//! ======
//! Records are passed straight through to rendering, so every field is
//! `#[serde(default)]`: a sparse or partially populated backend record still
//! renders instead of failing the whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /api/user/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Avatar image URL, if the identity provider supplied one.
    pub picture: Option<String>,
    /// Account creation timestamp (ISO-8601).
    pub created_at: String,
    /// Most recent login timestamp (ISO-8601), if reported.
    pub last_login: Option<String>,
}

/// One step of a career path learning roadmap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub duration: String,
    pub description: String,
}

/// A free learning resource attached to a career path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathResource {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Emoji shown on the card.
    pub icon: String,
    pub skills: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
    pub resources: Vec<PathResource>,
    pub salary_range: String,
    pub job_outlook: String,
    pub difficulty_level: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct CareerPathsResponse {
    pub career_paths: Vec<CareerPath>,
}

/// Body of `POST /api/jobs/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub query: String,
    pub location: String,
    /// `""` (all), `full_time`, `part_time` or `internship`.
    pub job_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub posted_date: String,
    pub job_type: String,
    pub description: String,
    /// Link to the original posting; `"#"` means none.
    pub apply_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct JobSearchResponse {
    pub results: Vec<JobListing>,
}

/// Fields collected by the application modal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
}

/// Body of `POST /api/jobs/apply`: the form fields plus the target job.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct ApplicationRequest<'a> {
    #[serde(flatten)]
    pub form: &'a ApplicationForm,
    pub job_id: &'a str,
}

/// A submitted application as listed by `GET /api/jobs/my-applications`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    pub id: String,
    pub job_id: String,
    /// `applied`, `reviewed`, `interviewed`, `hired` or `rejected`.
    pub status: String,
    pub applied_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeTemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub preview_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSection {
    pub name: String,
    pub content: String,
}

/// Structured template body from `GET /api/resume-templates/{id}/download`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeTemplateDocument {
    pub template_name: String,
    pub sections: Vec<TemplateSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub created_at: String,
    pub tags: Vec<String>,
    /// Full markdown body; listings usually omit it.
    pub content: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct BlogPostsResponse {
    pub posts: Vec<BlogPost>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceLink {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// General internship and interview advice from `GET /api/job-guidance`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobGuidance {
    pub internship_tips: Vec<String>,
    pub application_process: Vec<String>,
    pub resume_templates: Vec<GuidanceLink>,
    pub interview_prep: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct LoginUrlResponse {
    pub auth_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct SessionExchangeResponse {
    pub session_token: String,
}

/// Calendar date portion of an ISO-8601 timestamp (`2025-03-01T10:00:00Z` ->
/// `2025-03-01`). Non-ISO input is returned unchanged.
pub fn display_date(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) => date,
        None => timestamp,
    }
}
