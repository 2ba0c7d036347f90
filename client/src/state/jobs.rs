//! Job guidance section state: search form, results, templates, the user's
//! applications, and the application modal.
//!
//! DESIGN
//! ======
//! Application submission is a free async function over [`AuthController`]
//! and the current [`AuthPhase`] so its gatekeeping (sign-in, required fields)
//! is testable without a reactive runtime. Every outcome maps to one alert.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::auth::{AuthController, AuthPhase};
use crate::config::DEFAULT_JOB_QUERY;
use crate::net::api::{ApiClient, recover_listing};
use crate::net::types::{
    ApplicationForm, ApplicationRecord, JobGuidance, JobListing, JobSearchRequest, ResumeTemplateSummary,
};
use crate::util::template_text::{render_template_text, template_filename};

pub const SIGN_IN_TO_APPLY: &str = "Please sign in to apply for jobs";
pub const REQUIRED_FIELDS_MISSING: &str = "Please fill in all required fields";
pub const APPLICATION_SUBMITTED: &str = "Application submitted successfully!";
pub const APPLICATION_FAILED: &str = "Error submitting application. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobsTab {
    #[default]
    Search,
    Templates,
    Applications,
    Tips,
}

impl JobsTab {
    pub const ALL: [Self; 4] = [Self::Search, Self::Templates, Self::Applications, Self::Tips];

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "🔍 Job Search",
            Self::Templates => "📄 Resume Templates",
            Self::Applications => "📋 My Applications",
            Self::Tips => "💡 Career Tips",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobTypeFilter {
    #[default]
    All,
    FullTime,
    PartTime,
    Internship,
}

impl JobTypeFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::FullTime, Self::PartTime, Self::Internship];

    /// Wire value sent as `job_type`.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "",
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Internship => "internship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Job Types",
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Internship => "Internship",
        }
    }

    /// Unknown values fall back to `All`.
    pub fn from_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobsState {
    pub tab: JobsTab,
    pub query: String,
    pub location: String,
    pub job_type: JobTypeFilter,
    pub searching: bool,
    pub results: Vec<JobListing>,
    pub templates: Vec<ResumeTemplateSummary>,
    pub applications: Vec<ApplicationRecord>,
    pub guidance: Option<JobGuidance>,
    /// Job whose application modal is open.
    pub applying_to: Option<JobListing>,
}

impl JobsState {
    /// Search body for the current form; an empty query searches
    /// [`DEFAULT_JOB_QUERY`].
    pub fn search_request(&self) -> JobSearchRequest {
        let query = self.query.trim();
        JobSearchRequest {
            query: if query.is_empty() { DEFAULT_JOB_QUERY.to_owned() } else { query.to_owned() },
            location: self.location.trim().to_owned(),
            job_type: self.job_type.value().to_owned(),
        }
    }

    /// Open the application modal for `job`.
    ///
    /// # Errors
    ///
    /// Returns [`SIGN_IN_TO_APPLY`] unless the user is authenticated.
    pub fn open_application(&mut self, job: JobListing, phase: &AuthPhase) -> Result<(), &'static str> {
        if !phase.is_authenticated() {
            return Err(SIGN_IN_TO_APPLY);
        }
        self.applying_to = Some(job);
        Ok(())
    }

    pub fn close_application(&mut self) {
        self.applying_to = None;
    }

    /// Store a finished applications load; dropped if the user signed out
    /// while it was in flight.
    pub fn receive_applications(&mut self, applications: Vec<ApplicationRecord>, phase: &AuthPhase) {
        if phase.is_authenticated() {
            self.applications = applications;
        }
    }

    pub fn finish_search(&mut self, results: Vec<JobListing>) {
        self.results = results;
        self.searching = false;
    }
}

/// Name, email and cover letter are required; phone is optional.
///
/// # Errors
///
/// Returns [`REQUIRED_FIELDS_MISSING`] when a required field is blank.
pub fn validate_application(form: &ApplicationForm) -> Result<(), &'static str> {
    let required = [&form.applicant_name, &form.email, &form.cover_letter];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(REQUIRED_FIELDS_MISSING);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignInRequired,
    Invalid,
    Submitted,
    Failed,
}

impl SubmitOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::SignInRequired => SIGN_IN_TO_APPLY,
            Self::Invalid => REQUIRED_FIELDS_MISSING,
            Self::Submitted => APPLICATION_SUBMITTED,
            Self::Failed => APPLICATION_FAILED,
        }
    }
}

/// Submit `form` for `job_id`. Only an authenticated user with a stored token
/// and a complete form reaches the network, and then with exactly one request.
pub async fn submit_application(
    auth: &AuthController,
    phase: &AuthPhase,
    job_id: &str,
    form: &ApplicationForm,
) -> SubmitOutcome {
    if !phase.is_authenticated() {
        return SubmitOutcome::SignInRequired;
    }
    let Some(token) = auth.token() else {
        return SubmitOutcome::SignInRequired;
    };
    if validate_application(form).is_err() {
        return SubmitOutcome::Invalid;
    }
    match auth.api().submit_application(&token, job_id, form).await {
        Ok(()) => SubmitOutcome::Submitted,
        Err(e) => {
            log::error!("error submitting application: {e}");
            SubmitOutcome::Failed
        }
    }
}

pub async fn search(api: &ApiClient, request: &JobSearchRequest) -> Vec<JobListing> {
    recover_listing("jobs", api.search_jobs(request).await)
}

pub async fn load_templates(api: &ApiClient) -> Vec<ResumeTemplateSummary> {
    recover_listing("resume templates", api.resume_templates().await)
}

pub async fn load_guidance(api: &ApiClient) -> Option<JobGuidance> {
    match api.job_guidance().await {
        Ok(guidance) => Some(guidance),
        Err(e) => {
            log::warn!("error fetching job guidance: {e}");
            None
        }
    }
}

/// Fetch a template and render it to `(filename, text)` for download.
pub async fn template_download(api: &ApiClient, template_id: &str) -> Option<(String, String)> {
    match api.resume_template_document(template_id).await {
        Ok(doc) => Some((template_filename(&doc.template_name), render_template_text(&doc))),
        Err(e) => {
            log::error!("error downloading template: {e}");
            None
        }
    }
}

/// The signed-in user's applications; empty without a token (no request).
pub async fn load_applications(auth: &AuthController) -> Vec<ApplicationRecord> {
    let Some(token) = auth.token() else {
        return Vec::new();
    };
    recover_listing("applications", auth.api().my_applications(&token).await)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    Interviewed,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    /// Anything unrecognised is shown as rejected.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "applied" => Self::Applied,
            "reviewed" => Self::Reviewed,
            "interviewed" => Self::Interviewed,
            "hired" => Self::Hired,
            _ => Self::Rejected,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Applied => "status-badge status-badge--applied",
            Self::Reviewed => "status-badge status-badge--reviewed",
            Self::Interviewed => "status-badge status-badge--interviewed",
            Self::Hired => "status-badge status-badge--hired",
            Self::Rejected => "status-badge status-badge--rejected",
        }
    }
}

/// Raw status with its first letter upper-cased (`reviewed` -> `Reviewed`).
pub fn status_label(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First eight characters of an application id.
pub fn short_application_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(idx, _)| &id[..idx])
}

/// Whether the posting links to an external original (`"#"` means none).
pub fn has_external_link(job: &JobListing) -> bool {
    job.apply_url.as_deref().is_some_and(|url| !url.is_empty() && url != "#")
}
