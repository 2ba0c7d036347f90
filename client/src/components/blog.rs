//! Student success blog: post cards with an inline expanded body.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{BlogPost, display_date};
use crate::state::blog::{BlogState, load_blog_posts, post_body_html};
use crate::util::scope::ViewScope;

#[component]
pub fn BlogSection(api: ApiClient) -> impl IntoView {
    let state = RwSignal::new(BlogState::default());
    let scope = ViewScope::install();
    scope.spawn(async move {
        let posts = load_blog_posts(&api).await;
        state.update(|s| s.finish_loading(posts));
    });

    let on_toggle = Callback::new(move |post_id: String| state.update(|s| s.toggle(&post_id)));

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! {
                <section class="section section--loading">
                    <div class="spinner"></div>
                    <p>"Loading blog posts..."</p>
                </section>
            }
        >
            <section id="blog" class="section">
                <div class="section__header">
                    <h2>"Student Success Tips"</h2>
                    <p>
                        "Get motivated and learn strategies for personal development, effective learning, "
                        "and building a successful career in tech."
                    </p>
                </div>
                <div class="card-grid">
                    {move || {
                        state
                            .with(|s| s.posts.clone())
                            .into_iter()
                            .map(|post| {
                                let expanded = state.with(|s| s.is_expanded(&post.id));
                                view! { <BlogCard post=post expanded=expanded on_toggle=on_toggle/> }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}

#[component]
fn BlogCard(post: BlogPost, expanded: bool, on_toggle: Callback<String>) -> impl IntoView {
    let post_id = StoredValue::new(post.id.clone());
    let toggle = move |_: leptos::ev::MouseEvent| on_toggle.run(post_id.get_value());
    let body = expanded.then(|| post_body_html(&post));
    let created = display_date(&post.created_at).to_owned();

    view! {
        <article class="blog-card">
            <h3 class="blog-card__title" on:click=toggle>{post.title}</h3>
            {match body {
                Some(html) => view! { <div class="blog-card__body" inner_html=html></div> }.into_any(),
                None => view! { <p class="blog-card__excerpt">{post.excerpt}</p> }.into_any(),
            }}
            <div class="blog-card__meta">
                <span>"👤 " {post.author}</span>
                <span>{created}</span>
            </div>
            <button class="blog-card__toggle" on:click=toggle>
                {if expanded { "Show less" } else { "Read more" }}
            </button>
            <div class="chip-row">
                {post.tags.into_iter().map(|tag| view! { <span class="chip">{format!("#{tag}")}</span> }).collect_view()}
            </div>
        </article>
    }
}
