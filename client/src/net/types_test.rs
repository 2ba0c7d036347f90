use super::*;

#[test]
fn user_deserializes_backend_profile_record() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "ada@example.com",
        "name": "Ada",
        "picture": null,
        "created_at": "2025-01-02T03:04:05",
        "last_login": "2025-02-01T00:00:00"
    }))
    .unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.picture, None);
    assert_eq!(user.last_login.as_deref(), Some("2025-02-01T00:00:00"));
}

#[test]
fn career_path_maps_resource_type_field() {
    let path: CareerPath = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "title": "Web Developer",
        "skills": ["HTML", "CSS"],
        "roadmap": [{"step": 1, "title": "HTML & CSS", "duration": "2-4 weeks", "description": "Basics"}],
        "resources": [{"name": "MDN", "url": "https://developer.mozilla.org", "type": "documentation"}]
    }))
    .unwrap();
    assert_eq!(path.resources[0].kind, "documentation");
    assert_eq!(path.roadmap[0].step, 1);
    assert!(path.salary_range.is_empty());
}

#[test]
fn job_listing_tolerates_missing_fields() {
    let job: JobListing = serde_json::from_value(serde_json::json!({"id": "J1", "title": "Intern"})).unwrap();
    assert_eq!(job.id, "J1");
    assert_eq!(job.apply_url, None);
    assert!(job.company.is_empty());
}

#[test]
fn application_request_flattens_form_and_adds_job_id() {
    let form = ApplicationForm {
        applicant_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        cover_letter: "Hello".to_owned(),
    };
    let body = serde_json::to_value(ApplicationRequest { form: &form, job_id: "J1" }).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "applicant_name": "Ada",
            "email": "ada@example.com",
            "phone": "",
            "cover_letter": "Hello",
            "job_id": "J1"
        })
    );
}

#[test]
fn blog_post_content_is_optional() {
    let post: BlogPost = serde_json::from_value(serde_json::json!({
        "id": "b-1",
        "title": "Networking Tips",
        "tags": ["career"]
    }))
    .unwrap();
    assert_eq!(post.content, None);
    assert_eq!(post.tags, vec!["career".to_owned()]);
}

#[test]
fn display_date_strips_time_component() {
    assert_eq!(display_date("2025-03-01T10:00:00Z"), "2025-03-01");
    assert_eq!(display_date("2025-03-01"), "2025-03-01");
    assert_eq!(display_date(""), "");
}
