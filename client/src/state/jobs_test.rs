use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::testing::{RecordingTransport, client};
use crate::net::transport::{ApiError, HttpMethod};
use crate::net::types::User;
use crate::state::session::MemorySessionStore;

fn job(id: &str) -> JobListing {
    JobListing { id: id.to_owned(), title: "Junior Developer".to_owned(), ..JobListing::default() }
}

fn filled_form() -> ApplicationForm {
    ApplicationForm {
        applicant_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        cover_letter: "I love engines.".to_owned(),
    }
}

fn signed_in() -> AuthPhase {
    AuthPhase::Authenticated(User { name: "Ada".to_owned(), ..User::default() })
}

fn controller(transport: &Arc<RecordingTransport>, token: Option<&str>) -> AuthController {
    let store = match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::default(),
    };
    AuthController::new(client(transport), Arc::new(store))
}

// =============================================================
// Search form
// =============================================================

#[test]
fn empty_query_defaults_to_software_developer() {
    let state = JobsState::default();
    let req = state.search_request();
    assert_eq!(req.query, "software developer");
    assert_eq!(req.location, "");
    assert_eq!(req.job_type, "");
}

#[test]
fn search_request_uses_form_fields() {
    let state = JobsState {
        query: " rust engineer ".to_owned(),
        location: "Berlin".to_owned(),
        job_type: JobTypeFilter::Internship,
        ..JobsState::default()
    };
    assert_eq!(
        state.search_request(),
        JobSearchRequest {
            query: "rust engineer".to_owned(),
            location: "Berlin".to_owned(),
            job_type: "internship".to_owned(),
        }
    );
}

#[test]
fn job_type_filter_round_trips_wire_values() {
    for filter in JobTypeFilter::ALL {
        assert_eq!(JobTypeFilter::from_value(filter.value()), filter);
    }
    assert_eq!(JobTypeFilter::from_value("contract"), JobTypeFilter::All);
}

#[test]
fn finish_search_clears_searching_flag() {
    let mut state = JobsState { searching: true, ..JobsState::default() };
    state.finish_search(vec![job("J1")]);
    assert!(!state.searching);
    assert_eq!(state.results.len(), 1);
}

#[test]
fn default_tab_is_search() {
    assert_eq!(JobsState::default().tab, JobsTab::Search);
    assert_eq!(JobsTab::ALL.len(), 4);
}

// =============================================================
// Application modal
// =============================================================

#[test]
fn open_application_requires_sign_in() {
    let mut state = JobsState::default();
    assert_eq!(state.open_application(job("J1"), &AuthPhase::Unauthenticated), Err(SIGN_IN_TO_APPLY));
    assert_eq!(state.open_application(job("J1"), &AuthPhase::Loading), Err(SIGN_IN_TO_APPLY));
    assert!(state.applying_to.is_none());
}

#[test]
fn open_application_when_signed_in_selects_job() {
    let mut state = JobsState::default();
    assert_eq!(state.open_application(job("J1"), &signed_in()), Ok(()));
    assert_eq!(state.applying_to.as_ref().map(|j| j.id.as_str()), Some("J1"));
    state.close_application();
    assert!(state.applying_to.is_none());
}

#[test]
fn validate_application_requires_name_email_and_cover_letter() {
    assert_eq!(validate_application(&filled_form()), Ok(()));

    let mut form = filled_form();
    form.cover_letter = "   ".to_owned();
    assert_eq!(validate_application(&form), Err(REQUIRED_FIELDS_MISSING));

    let mut form = filled_form();
    form.email.clear();
    assert_eq!(validate_application(&form), Err(REQUIRED_FIELDS_MISSING));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_while_unauthenticated_sends_nothing() {
    let transport = RecordingTransport::new();
    let auth = controller(&transport, Some("tok"));

    let outcome = block_on(submit_application(&auth, &AuthPhase::Unauthenticated, "J1", &filled_form()));

    assert_eq!(outcome, SubmitOutcome::SignInRequired);
    assert!(transport.requests().is_empty());
}

#[test]
fn submit_without_stored_token_sends_nothing() {
    let transport = RecordingTransport::new();
    let auth = controller(&transport, None);

    let outcome = block_on(submit_application(&auth, &signed_in(), "J1", &filled_form()));

    assert_eq!(outcome, SubmitOutcome::SignInRequired);
    assert!(transport.requests().is_empty());
}

#[test]
fn submit_with_missing_fields_sends_nothing() {
    let transport = RecordingTransport::new();
    let auth = controller(&transport, Some("tok"));

    let outcome = block_on(submit_application(&auth, &signed_in(), "J1", &ApplicationForm::default()));

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(transport.requests().is_empty());
}

#[test]
fn submit_when_authenticated_posts_once_with_job_id() {
    let transport = RecordingTransport::new();
    transport.respond(HttpMethod::Post, "/api/jobs/apply", 200, serde_json::json!({"message": "ok"}));
    let auth = controller(&transport, Some("tok"));

    let outcome = block_on(submit_application(&auth, &signed_in(), "J1", &filled_form()));

    assert_eq!(outcome, SubmitOutcome::Submitted);
    let sent = transport.requests_to("/api/jobs/apply");
    assert_eq!(sent.len(), 1);
    assert_eq!(transport.requests().len(), 1);
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].header_value("Authorization"), Some("Bearer tok"));
    let body = sent[0].body.as_ref().unwrap();
    assert_eq!(body["job_id"], "J1");
    assert_eq!(body["applicant_name"], "Ada Lovelace");
}

#[test]
fn submit_rejected_by_backend_reports_failure() {
    let transport = RecordingTransport::new();
    transport.respond(HttpMethod::Post, "/api/jobs/apply", 500, serde_json::json!({}));
    let auth = controller(&transport, Some("tok"));

    let outcome = block_on(submit_application(&auth, &signed_in(), "J1", &filled_form()));

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(outcome.message(), APPLICATION_FAILED);
}

#[test]
fn submit_transport_failure_reports_failure() {
    let transport = RecordingTransport::new();
    transport.fail(HttpMethod::Post, "/api/jobs/apply", ApiError::Transport("offline".to_owned()));
    let auth = controller(&transport, Some("tok"));

    assert_eq!(
        block_on(submit_application(&auth, &signed_in(), "J1", &filled_form())),
        SubmitOutcome::Failed
    );
}

// =============================================================
// Applications list
// =============================================================

#[test]
fn load_applications_without_token_skips_request() {
    let transport = RecordingTransport::new();
    let auth = controller(&transport, None);
    assert!(block_on(load_applications(&auth)).is_empty());
    assert!(transport.requests().is_empty());
}

#[test]
fn load_applications_failure_yields_empty_list() {
    let transport = RecordingTransport::new();
    transport.respond(HttpMethod::Get, "/api/jobs/my-applications", 401, serde_json::json!({}));
    let auth = controller(&transport, Some("tok"));
    assert!(block_on(load_applications(&auth)).is_empty());
    assert_eq!(transport.requests().len(), 1);
}

fn record(id: &str) -> ApplicationRecord {
    ApplicationRecord { id: id.to_owned(), ..ApplicationRecord::default() }
}

#[test]
fn applications_arriving_after_logout_are_dropped() {
    let mut state = JobsState::default();
    state.receive_applications(vec![record("a1")], &AuthPhase::Unauthenticated);
    assert!(state.applications.is_empty());

    state.receive_applications(vec![record("a1"), record("a2")], &signed_in());
    assert_eq!(state.applications.len(), 2);
}

#[test]
fn application_status_maps_to_badges() {
    assert_eq!(ApplicationStatus::parse("applied"), ApplicationStatus::Applied);
    assert_eq!(ApplicationStatus::parse("hired"), ApplicationStatus::Hired);
    assert_eq!(ApplicationStatus::parse("withdrawn"), ApplicationStatus::Rejected);
    assert_eq!(ApplicationStatus::Reviewed.badge_class(), "status-badge status-badge--reviewed");
}

#[test]
fn status_label_capitalizes_first_letter() {
    assert_eq!(status_label("interviewed"), "Interviewed");
    assert_eq!(status_label(""), "");
}

#[test]
fn short_application_id_takes_eight_chars() {
    assert_eq!(short_application_id("1234567890abcdef"), "12345678");
    assert_eq!(short_application_id("abc"), "abc");
    assert_eq!(short_application_id("12345678"), "12345678");
}

#[test]
fn external_link_requires_real_url() {
    let mut listing = job("J1");
    assert!(!has_external_link(&listing));
    listing.apply_url = Some("#".to_owned());
    assert!(!has_external_link(&listing));
    listing.apply_url = Some("https://jobs.example/1".to_owned());
    assert!(has_external_link(&listing));
}

// =============================================================
// Loaders
// =============================================================

#[test]
fn search_posts_request_and_reads_results() {
    let transport = RecordingTransport::new();
    transport.respond(
        HttpMethod::Post,
        "/api/jobs/search",
        200,
        serde_json::json!({"results": [{"id": "J1", "title": "Intern"}], "total": 1}),
    );
    let request = JobsState::default().search_request();

    let results = block_on(search(&client(&transport), &request));

    assert_eq!(results.len(), 1);
    let sent = transport.requests_to("/api/jobs/search");
    assert_eq!(sent[0].body.as_ref().unwrap()["query"], "software developer");
}

#[test]
fn search_failure_yields_no_results() {
    let transport = RecordingTransport::new();
    transport.respond_raw(HttpMethod::Post, "/api/jobs/search", 200, "not json");
    assert!(block_on(search(&client(&transport), &JobSearchRequest::default())).is_empty());
}

#[test]
fn template_download_renders_named_text_file() {
    let transport = RecordingTransport::new();
    transport.respond(
        HttpMethod::Get,
        "/api/resume-templates/t1/download",
        200,
        serde_json::json!({
            "template_name": "Modern Tech Resume",
            "sections": [{"name": "Summary", "content": "Rustacean"}]
        }),
    );

    let (filename, text) = block_on(template_download(&client(&transport), "t1")).unwrap();

    assert_eq!(filename, "Modern_Tech_Resume.txt");
    assert_eq!(text, "Modern Tech Resume\n\nSummary:\nRustacean\n\n");
}

#[test]
fn template_download_failure_is_none() {
    let transport = RecordingTransport::new();
    assert!(block_on(template_download(&client(&transport), "missing")).is_none());
}

#[test]
fn guidance_failure_is_none() {
    let transport = RecordingTransport::new();
    assert!(block_on(load_guidance(&client(&transport))).is_none());
}
