//! REST API client for the careers backend.
//!
//! One method per endpoint; each issues exactly one request through the
//! injected [`Transport`] and decodes the JSON body.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ApiError>`. Listing views collapse failures
//! with [`recover_listing`] (log + empty default); mutating callers decide how
//! to surface the failure themselves.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::transport::{ApiError, ApiRequest, Transport};
use super::types::{
    ApplicationForm, ApplicationRecord, ApplicationRequest, BlogPost, BlogPostsResponse, CareerPath,
    CareerPathsResponse, JobGuidance, JobListing, JobSearchRequest, JobSearchResponse, LoginUrlResponse,
    ResumeTemplateDocument, ResumeTemplateSummary, SessionExchangeResponse, User,
};
use crate::config::ClientConfig;

fn career_path_endpoint(path_id: &str) -> String {
    format!("/api/career-paths/{}", urlencoding::encode(path_id))
}

fn template_download_endpoint(template_id: &str) -> String {
    format!("/api/resume-templates/{}/download", urlencoding::encode(template_id))
}

/// Handle to the careers API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), transport }
    }

    pub fn from_config(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::new(&config.backend_url, transport)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.transport.send(request).await?.json()
    }

    /// Fetch the identity-provider redirect URL via `GET /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or a body
    /// without `auth_url`.
    pub async fn login_url(&self) -> Result<String, ApiError> {
        let body: LoginUrlResponse = self.fetch(ApiRequest::get(self.url("/api/auth/login"))).await?;
        Ok(body.auth_url)
    }

    /// Exchange a one-time provider session id for a session token via
    /// `POST /api/auth/profile` with the `X-Session-ID` header.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the exchange is rejected or unreadable.
    pub async fn exchange_session(&self, session_id: &str) -> Result<String, ApiError> {
        let request = ApiRequest::post(self.url("/api/auth/profile")).header("X-Session-ID", session_id);
        let body: SessionExchangeResponse = self.fetch(request).await?;
        Ok(body.session_token)
    }

    /// Fetch the profile behind `token` from `GET /api/user/profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] when the backend rejects the token.
    pub async fn user_profile(&self, token: &str) -> Result<User, ApiError> {
        self.fetch(ApiRequest::get(self.url("/api/user/profile")).bearer(token)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn career_paths(&self) -> Result<Vec<CareerPath>, ApiError> {
        let body: CareerPathsResponse = self.fetch(ApiRequest::get(self.url("/api/career-paths"))).await?;
        Ok(body.career_paths)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] (404) for unknown ids.
    pub async fn career_path(&self, path_id: &str) -> Result<CareerPath, ApiError> {
        self.fetch(ApiRequest::get(self.url(&career_path_endpoint(path_id)))).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn resume_templates(&self) -> Result<Vec<ResumeTemplateSummary>, ApiError> {
        self.fetch(ApiRequest::get(self.url("/api/resume-templates"))).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn resume_template_document(&self, template_id: &str) -> Result<ResumeTemplateDocument, ApiError> {
        self.fetch(ApiRequest::get(self.url(&template_download_endpoint(template_id)))).await
    }

    /// Search postings via `POST /api/jobs/search`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn search_jobs(&self, search: &JobSearchRequest) -> Result<Vec<JobListing>, ApiError> {
        let body = serde_json::to_value(search).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::post(self.url("/api/jobs/search")).json(body);
        let resp: JobSearchResponse = self.fetch(request).await?;
        Ok(resp.results)
    }

    /// Submit an application for `job_id` via `POST /api/jobs/apply`.
    /// Any 2xx counts as success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses.
    pub async fn submit_application(&self, token: &str, job_id: &str, form: &ApplicationForm) -> Result<(), ApiError> {
        let body = serde_json::to_value(ApplicationRequest { form, job_id })
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::post(self.url("/api/jobs/apply")).bearer(token).json(body);
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn my_applications(&self, token: &str) -> Result<Vec<ApplicationRecord>, ApiError> {
        self.fetch(ApiRequest::get(self.url("/api/jobs/my-applications")).bearer(token)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let body: BlogPostsResponse = self.fetch(ApiRequest::get(self.url("/api/blog/posts"))).await?;
        Ok(body.posts)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on any request or decode failure.
    pub async fn job_guidance(&self) -> Result<JobGuidance, ApiError> {
        self.fetch(ApiRequest::get(self.url("/api/job-guidance"))).await
    }
}

/// Collapse a failed read into its empty default, logging the cause.
pub fn recover_listing<T: Default>(label: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("error fetching {label}: {e}");
        T::default()
    })
}
