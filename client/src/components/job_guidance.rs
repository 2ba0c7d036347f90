//! Jobs and career resources section: search, resume templates, the user's
//! applications and career tips, one tab at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates and guidance load on mount. Applications reload whenever the
//! auth phase becomes authenticated and are cleared when it leaves that state.
//! Search runs only on explicit submit.

use leptos::prelude::*;

use crate::components::application_modal::ApplicationModal;
use crate::net::types::{ApplicationRecord, GuidanceLink, JobGuidance, JobListing, ResumeTemplateSummary, display_date};
use crate::state::auth::{AuthContext, AuthPhase};
use crate::state::jobs::{
    ApplicationStatus, JobTypeFilter, JobsState, JobsTab, has_external_link, load_applications, load_guidance,
    load_templates, search, short_application_id, status_label, template_download,
};
use crate::util::browser::{alert, download_text_file};
use crate::util::scope::ViewScope;

#[component]
pub fn JobGuidanceSection(auth: AuthContext) -> impl IntoView {
    let state = RwSignal::new(JobsState::default());
    let scope = StoredValue::new(ViewScope::install());
    let api = StoredValue::new(auth.controller().api().clone());

    scope.with_value(|scope| {
        let api = api.get_value();
        scope.spawn(async move {
            let (templates, guidance) = futures::join!(load_templates(&api), load_guidance(&api));
            state.update(|s| {
                s.templates = templates;
                s.guidance = guidance;
            });
        });
    });

    let reload_applications = Callback::new(move |()| {
        let controller = auth.controller();
        scope.with_value(|scope| {
            scope.spawn(async move {
                let applications = load_applications(&controller).await;
                let phase = auth.phase.get_untracked();
                state.update(|s| s.receive_applications(applications, &phase));
            });
        });
    });

    Effect::new(move |_| {
        if auth.phase.with(AuthPhase::is_authenticated) {
            reload_applications.run(());
        } else {
            state.update(|s| s.applications.clear());
        }
    });

    let on_search = Callback::new(move |()| {
        if state.with_untracked(|s| s.searching) {
            return;
        }
        let request = state.with_untracked(JobsState::search_request);
        state.update(|s| s.searching = true);
        let api = api.get_value();
        scope.with_value(|scope| {
            scope.spawn(async move {
                let results = search(&api, &request).await;
                state.update(|s| s.finish_search(results));
            });
        });
    });

    let on_apply = Callback::new(move |job: JobListing| {
        let phase = auth.phase.get_untracked();
        let mut opened = Ok(());
        state.update(|s| opened = s.open_application(job, &phase));
        if let Err(message) = opened {
            alert(message);
        }
    });

    let on_download = Callback::new(move |template_id: String| {
        let api = api.get_value();
        scope.with_value(|scope| {
            scope.spawn(async move {
                if let Some((filename, text)) = template_download(&api, &template_id).await {
                    download_text_file(&filename, &text);
                }
            });
        });
    });

    let on_close_application = Callback::new(move |()| state.update(JobsState::close_application));
    let on_submitted = Callback::new(move |()| {
        state.update(JobsState::close_application);
        reload_applications.run(());
    });

    let tab_buttons = move || {
        JobsTab::ALL
            .into_iter()
            .map(|tab| {
                let class = move || {
                    if state.with(|s| s.tab == tab) { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                };
                view! {
                    <button class=class on:click=move |_| state.update(|s| s.tab = tab)>
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let active_panel = move || match state.with(|s| s.tab) {
        JobsTab::Search => view! { <SearchPanel state=state on_search=on_search on_apply=on_apply/> }.into_any(),
        JobsTab::Templates => {
            view! { <TemplatesPanel templates=state.with(|s| s.templates.clone()) on_download=on_download/> }.into_any()
        }
        JobsTab::Applications => view! { <ApplicationsPanel auth=auth state=state/> }.into_any(),
        JobsTab::Tips => view! { <TipsPanel guidance=state.with(|s| s.guidance.clone())/> }.into_any(),
    };

    view! {
        <section id="jobs" class="section section--tinted">
            <div class="section__header">
                <h2>"Jobs & Career Resources"</h2>
                <p>
                    "Find real job opportunities, apply directly, and access professional resume templates "
                    "to boost your career in tech."
                </p>
            </div>
            <div class="tab-bar">{tab_buttons}</div>
            {active_panel}
            {move || {
                state
                    .with(|s| s.applying_to.clone())
                    .map(|job| view! {
                        <ApplicationModal job=job auth=auth on_close=on_close_application on_submitted=on_submitted/>
                    })
            }}
        </section>
    }
}

#[component]
fn SearchPanel(state: RwSignal<JobsState>, on_search: Callback<()>, on_apply: Callback<JobListing>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <div>
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Job title or keyword"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || state.with(|s| s.location.clone())
                    on:input=move |ev| state.update(|s| s.location = event_target_value(&ev))
                />
                <select
                    prop:value=move || state.with(|s| s.job_type.value())
                    on:change=move |ev| state.update(|s| s.job_type = JobTypeFilter::from_value(&event_target_value(&ev)))
                >
                    {JobTypeFilter::ALL
                        .into_iter()
                        .map(|filter| view! { <option value=filter.value()>{filter.label()}</option> })
                        .collect_view()}
                </select>
                <button type="submit" class="btn btn--primary" disabled=move || state.with(|s| s.searching)>
                    {move || if state.with(|s| s.searching) { "Searching..." } else { "Search Jobs" }}
                </button>
            </form>
            <div class="job-list">
                {move || {
                    state
                        .with(|s| s.results.clone())
                        .into_iter()
                        .map(|job| view! { <JobCard job=job on_apply=on_apply/> })
                        .collect_view()
                }}
                <Show when=move || state.with(|s| s.results.is_empty() && !s.searching)>
                    <p class="empty-state">"No jobs found. Try searching with different keywords."</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn JobCard(job: JobListing, on_apply: Callback<JobListing>) -> impl IntoView {
    let external = has_external_link(&job).then(|| job.apply_url.clone().unwrap_or_default());
    let posted = display_date(&job.posted_date).to_owned();
    let apply_job = job.clone();

    view! {
        <article class="job-card">
            <h3 class="job-card__title">{job.title}</h3>
            <p class="job-card__company">{job.company}</p>
            <p class="job-card__location">"📍 " {job.location}</p>
            <div class="job-card__meta">
                <span>"💰 " {job.salary}</span>
                <span>"📅 " {posted}</span>
                <span class="chip chip--success">{job.job_type}</span>
            </div>
            <p class="job-card__description">{job.description}</p>
            <div class="job-card__actions">
                <button class="btn btn--primary" on:click=move |_| on_apply.run(apply_job.clone())>"Apply Now"</button>
                {external.map(|url| view! {
                    <a class="btn btn--outline" href=url target="_blank" rel="noopener noreferrer">"View Original"</a>
                })}
            </div>
        </article>
    }
}

#[component]
fn TemplatesPanel(templates: Vec<ResumeTemplateSummary>, on_download: Callback<String>) -> impl IntoView {
    view! {
        <div class="template-grid">
            {templates
                .into_iter()
                .map(|template| {
                    let template_id = template.id.clone();
                    view! {
                        <div class="template-card">
                            <img class="template-card__preview" src=template.preview_url alt=template.name.clone()/>
                            <div class="template-card__body">
                                <h3>{template.name}</h3>
                                <p>{template.description}</p>
                                <span class="chip">{template.category}</span>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_download.run(template_id.clone())
                                >
                                    "Download Template"
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ApplicationsPanel(auth: AuthContext, state: RwSignal<JobsState>) -> impl IntoView {
    view! {
        <Show
            when=move || auth.phase.with(AuthPhase::is_authenticated)
            fallback=move || view! {
                <div class="panel panel--centered">
                    <p>"Please sign in to view your applications"</p>
                    <button class="btn btn--primary" on:click=move |_| auth.login()>"Sign In"</button>
                </div>
            }
        >
            <div class="application-list">
                {move || {
                    state
                        .with(|s| s.applications.clone())
                        .into_iter()
                        .map(|record| view! { <ApplicationRow record=record/> })
                        .collect_view()
                }}
                <Show when=move || state.with(|s| s.applications.is_empty())>
                    <div class="panel panel--centered">
                        <p>"You haven't submitted any applications yet."</p>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn ApplicationRow(record: ApplicationRecord) -> impl IntoView {
    let badge = ApplicationStatus::parse(&record.status).badge_class();
    let title = format!("Application #{}", short_application_id(&record.id));
    let applied = format!("Applied: {}", display_date(&record.applied_at));

    view! {
        <div class="panel application-row">
            <h3>{title}</h3>
            <p>{applied}</p>
            <span class=badge>{status_label(&record.status)}</span>
        </div>
    }
}

#[component]
fn TipsPanel(guidance: Option<JobGuidance>) -> impl IntoView {
    let Some(guidance) = guidance else {
        return view! { <p class="empty-state">"Career tips are unavailable right now."</p> }.into_any();
    };

    view! {
        <div class="tips-grid">
            <TipList title="🎓 Internship Tips" items=guidance.internship_tips/>
            <TipList title="📝 Application Process" items=guidance.application_process/>
            <TipList title="🎤 Interview Prep" items=guidance.interview_prep/>
            <div class="panel">
                <h3>"📄 Resume Resources"</h3>
                <ul class="tip-links">
                    {guidance.resume_templates.into_iter().map(resource_link).collect_view()}
                </ul>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn TipList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="panel">
            <h3>{title}</h3>
            <ul class="tip-list">{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        </div>
    }
}

fn resource_link(link: GuidanceLink) -> impl IntoView {
    view! {
        <li>
            <a href=link.url target="_blank" rel="noopener noreferrer">{link.name}</a>
            <p>{link.description}</p>
        </li>
    }
}
