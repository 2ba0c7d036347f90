//! Job application form dialog.

use leptos::prelude::*;

use crate::net::types::{ApplicationForm, JobListing};
use crate::state::auth::AuthContext;
use crate::state::jobs::{SubmitOutcome, submit_application, validate_application};
use crate::util::browser::alert;
use crate::util::scope::ViewScope;

/// Modal form for applying to `job`. `on_submitted` runs after the backend
/// accepts the application; the caller closes the dialog.
#[component]
pub fn ApplicationModal(
    job: JobListing,
    auth: AuthContext,
    on_close: Callback<()>,
    on_submitted: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let cover_letter = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let scope = StoredValue::new(ViewScope::install());
    let job_id = StoredValue::new(job.id.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = ApplicationForm {
            applicant_name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            cover_letter: cover_letter.get_untracked(),
        };
        if let Err(message) = validate_application(&form) {
            alert(message);
            return;
        }

        submitting.set(true);
        let controller = auth.controller();
        let phase = auth.phase.get_untracked();
        let job_id = job_id.get_value();
        scope.with_value(|scope| {
            scope.spawn(async move {
                let outcome = submit_application(&controller, &phase, &job_id, &form).await;
                alert(outcome.message());
                submitting.set(false);
                if outcome == SubmitOutcome::Submitted {
                    on_submitted.run(());
                }
            });
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--application" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <div>
                        <h2>"Apply for Position"</h2>
                        <p class="dialog__job-title">{job.title}</p>
                        <p class="dialog__job-meta">{job.company} " - " {job.location}</p>
                    </div>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form class="application-form" on:submit=on_submit>
                    <label class="application-form__field">
                        "Full Name *"
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="application-form__field">
                        "Email Address *"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="application-form__field">
                        "Phone Number"
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="application-form__field">
                        "Cover Letter *"
                        <textarea
                            required
                            rows="6"
                            placeholder="Tell us why you're interested in this position and what makes you a great fit..."
                            prop:value=move || cover_letter.get()
                            on:input=move |ev| cover_letter.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn btn--outline" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
