//! Blog section state: post list and the expanded post.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use crate::net::api::{ApiClient, recover_listing};
use crate::net::types::BlogPost;
use crate::util::markdown::render_markdown_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogState {
    pub loading: bool,
    pub posts: Vec<BlogPost>,
    /// Id of the post whose full body is shown.
    pub expanded: Option<String>,
}

impl Default for BlogState {
    fn default() -> Self {
        Self { loading: true, posts: Vec::new(), expanded: None }
    }
}

impl BlogState {
    pub fn finish_loading(&mut self, posts: Vec<BlogPost>) {
        self.posts = posts;
        self.loading = false;
    }

    /// Expand `post_id`, or collapse it if it is already expanded.
    pub fn toggle(&mut self, post_id: &str) {
        if self.is_expanded(post_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(post_id.to_owned());
        }
    }

    pub fn is_expanded(&self, post_id: &str) -> bool {
        self.expanded.as_deref() == Some(post_id)
    }
}

/// Rendered body for an expanded post; posts without content show the excerpt.
pub fn post_body_html(post: &BlogPost) -> String {
    let source = post.content.as_deref().filter(|c| !c.trim().is_empty()).unwrap_or(&post.excerpt);
    render_markdown_html(source)
}

pub async fn load_blog_posts(api: &ApiClient) -> Vec<BlogPost> {
    recover_listing("blog posts", api.blog_posts().await)
}
