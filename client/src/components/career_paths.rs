//! Career path catalogue with a detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalogue loads once on mount. Opening a card shows the list copy
//! immediately and then swaps in the full record from the detail endpoint if
//! the modal is still showing that path.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::CareerPath;
use crate::state::careers::{CareerPathsState, load_career_detail, load_career_paths, skill_preview};
use crate::util::scope::ViewScope;

#[component]
pub fn CareerPathsSection(api: ApiClient) -> impl IntoView {
    let state = RwSignal::new(CareerPathsState::default());
    let scope = StoredValue::new(ViewScope::install());
    let api = StoredValue::new(api);

    scope.with_value(|scope| {
        let api = api.get_value();
        scope.spawn(async move {
            let paths = load_career_paths(&api).await;
            state.update(|s| s.finish_loading(paths));
        });
    });

    let on_open = Callback::new(move |path_id: String| {
        state.update(|s| s.open(&path_id));
        let api = api.get_value();
        scope.with_value(|scope| {
            scope.spawn(async move {
                if let Some(fresh) = load_career_detail(&api, &path_id).await {
                    state.update(|s| s.refresh_selected(fresh));
                }
            });
        });
    });
    let on_close = Callback::new(move |()| state.update(CareerPathsState::close));

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! {
                <section class="section section--loading">
                    <div class="spinner"></div>
                    <p>"Loading career paths..."</p>
                </section>
            }
        >
            <section id="careers" class="section">
                <div class="section__header">
                    <h2>"Explore Tech Career Paths"</h2>
                    <p>
                        "Choose from exciting career paths in computer science and IT. "
                        "Each path includes a roadmap, resources and guidance."
                    </p>
                </div>
                <div class="card-grid">
                    {move || {
                        state
                            .with(|s| s.paths.clone())
                            .into_iter()
                            .map(|path| view! { <CareerCard path=path on_open=on_open/> })
                            .collect_view()
                    }}
                </div>
                {move || state.with(|s| s.selected.clone()).map(|path| view! { <CareerDetailModal path=path on_close=on_close/> })}
            </section>
        </Show>
    }
}

#[component]
fn CareerCard(path: CareerPath, on_open: Callback<String>) -> impl IntoView {
    let (shown, hidden) = skill_preview(&path.skills);
    let shown = shown.to_vec();
    let path_id = path.id.clone();

    view! {
        <div class="career-card" on:click=move |_| on_open.run(path_id.clone())>
            <div class="career-card__icon">{path.icon}</div>
            <h3 class="career-card__title">{path.title}</h3>
            <p class="career-card__description">{path.description}</p>
            <ul class="career-card__facts">
                <li class="career-card__fact career-card__fact--salary">{path.salary_range}</li>
                <li class="career-card__fact career-card__fact--outlook">{path.job_outlook}</li>
                <li class="career-card__fact career-card__fact--difficulty">{path.difficulty_level}</li>
            </ul>
            <div class="career-card__skills">
                {shown.into_iter().map(|skill| view! { <span class="chip">{skill}</span> }).collect_view()}
                {(hidden > 0).then(|| view! { <span class="career-card__more">{format!("+{hidden} more")}</span> })}
            </div>
        </div>
    }
}

#[component]
fn CareerDetailModal(path: CareerPath, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--career"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <div>
                        <div class="dialog__icon">{path.icon}</div>
                        <h2>{path.title}</h2>
                        <p class="dialog__lead">{path.description}</p>
                    </div>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                <div class="dialog__columns">
                    <div>
                        <h3>"📚 Learning Roadmap"</h3>
                        <ol class="roadmap">
                            {path
                                .roadmap
                                .into_iter()
                                .map(|step| view! {
                                    <li class="roadmap__step">
                                        <span class="roadmap__number">{step.step}</span>
                                        <h4>{step.title}</h4>
                                        <p>{step.description}</p>
                                        <span class="roadmap__duration">"Duration: " {step.duration}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </div>
                    <div>
                        <h3>"🛠️ Key Skills"</h3>
                        <div class="chip-row">
                            {path.skills.into_iter().map(|skill| view! { <span class="chip chip--muted">{skill}</span> }).collect_view()}
                        </div>
                        <h3>"📖 Free Resources"</h3>
                        <div class="resource-list">
                            {path
                                .resources
                                .into_iter()
                                .map(|resource| view! {
                                    <div class="resource">
                                        <h4>{resource.name}</h4>
                                        <p>"Type: " {resource.kind}</p>
                                        <a href=resource.url target="_blank" rel="noopener noreferrer">"Visit Resource →"</a>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
