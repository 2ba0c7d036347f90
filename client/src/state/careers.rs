//! Career path listing and detail-modal state.

#[cfg(test)]
#[path = "careers_test.rs"]
mod careers_test;

use crate::net::api::{ApiClient, recover_listing};
use crate::net::types::CareerPath;

/// Skills shown on a card before the "+N more" overflow label.
pub const CARD_SKILL_PREVIEW: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CareerPathsState {
    pub loading: bool,
    pub paths: Vec<CareerPath>,
    /// Path shown in the detail modal, if open.
    pub selected: Option<CareerPath>,
}

impl Default for CareerPathsState {
    fn default() -> Self {
        Self { loading: true, paths: Vec::new(), selected: None }
    }
}

impl CareerPathsState {
    pub fn finish_loading(&mut self, paths: Vec<CareerPath>) {
        self.paths = paths;
        self.loading = false;
    }

    pub fn open(&mut self, path_id: &str) {
        self.selected = self.paths.iter().find(|p| p.id == path_id).cloned();
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Replace the open detail record with a fresher copy, but only if the
    /// modal still shows that path.
    pub fn refresh_selected(&mut self, fresh: CareerPath) {
        if self.selected.as_ref().is_some_and(|current| current.id == fresh.id) {
            self.selected = Some(fresh);
        }
    }
}

/// Leading skills for a card plus the count of hidden ones.
pub fn skill_preview(skills: &[String]) -> (&[String], usize) {
    let shown = skills.len().min(CARD_SKILL_PREVIEW);
    (&skills[..shown], skills.len() - shown)
}

/// Fetch the catalogue; failures log and yield an empty list.
pub async fn load_career_paths(api: &ApiClient) -> Vec<CareerPath> {
    recover_listing("career paths", api.career_paths().await)
}

/// Fetch the full record for an opened path; `None` keeps the list copy.
pub async fn load_career_detail(api: &ApiClient, path_id: &str) -> Option<CareerPath> {
    match api.career_path(path_id).await {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("error fetching career path {path_id}: {e}");
            None
        }
    }
}
