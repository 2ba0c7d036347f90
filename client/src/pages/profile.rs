//! Profile view: identity-provider callback completion and account details.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects here with `#session_id=...`. The fragment never
//! reaches the server, so it is read after hydration. A successful exchange
//! stores the token and reloads `/`; a failed one shows an error with a way to
//! start sign-in again.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::net::types::{User, display_date};
use crate::state::auth::{AuthContext, AuthPhase};
use crate::state::profile::{CallbackPhase, SIGN_IN_FAILED, avatar_initial};
use crate::util::browser::{current_fragment, navigate_to};
use crate::util::scope::ViewScope;

#[component]
pub fn ProfilePage(auth: AuthContext) -> impl IntoView {
    let phase = RwSignal::new(CallbackPhase::Idle);
    let scope = StoredValue::new(ViewScope::install());

    Effect::new(move |_| {
        let fragment = current_fragment();
        let initial = CallbackPhase::for_fragment(&fragment);
        if !initial.is_busy() {
            return;
        }
        phase.set(initial);
        let controller = auth.controller();
        scope.with_value(|scope| {
            scope.spawn(async move {
                let next = CallbackPhase::after(&controller.complete_from_fragment(&fragment).await);
                if next == CallbackPhase::Redirecting {
                    navigate_to("/");
                }
                phase.set(next);
            });
        });
    });

    let body = move || match phase.get() {
        current if current.is_busy() => view! {
            <div class="panel panel--centered">
                <div class="spinner"></div>
                <h2>"Completing Authentication"</h2>
                <p>"Please wait while we set up your account..."</p>
            </div>
        }
        .into_any(),
        CallbackPhase::Failed(detail) => view! {
            <div class="panel panel--centered panel--error">
                <h2>{SIGN_IN_FAILED}</h2>
                <p class="panel__detail">{detail}</p>
                <button class="btn btn--primary" on:click=move |_| auth.login()>"Try signing in again"</button>
                <a class="btn btn--outline" href="/" rel="external">"Back to home"</a>
            </div>
        }
        .into_any(),
        _ => view! { <AccountPanel auth=auth/> }.into_any(),
    };

    view! {
        <div class="app-root">
            <Header auth=auth/>
            <main class="profile-page">{body}</main>
        </div>
    }
}

#[component]
fn AccountPanel(auth: AuthContext) -> impl IntoView {
    move || match auth.phase.get() {
        AuthPhase::Loading => view! { <div class="panel panel--centered"><div class="spinner"></div></div> }.into_any(),
        AuthPhase::Authenticated(user) => view! { <ProfileCard user=user/> }.into_any(),
        AuthPhase::Unauthenticated => view! {
            <div class="panel panel--centered">
                <h2>"Please Sign In"</h2>
                <p>"You need to be signed in to view your profile."</p>
                <button class="btn btn--primary" on:click=move |_| auth.login()>"Sign In"</button>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let initial = avatar_initial(&user);
    let member_since = display_date(&user.created_at).to_owned();
    let last_login = user.last_login.as_deref().map(|ts| display_date(ts).to_owned());

    view! {
        <div class="panel profile-card">
            <h1>"My Profile"</h1>
            <div class="profile-card__grid">
                <div class="profile-card__identity">
                    {match user.picture {
                        Some(src) => view! { <img class="profile-card__avatar" src=src alt="Profile"/> }.into_any(),
                        None => view! { <span class="profile-card__avatar profile-card__avatar--initial">{initial}</span> }.into_any(),
                    }}
                    <h2>{user.name.clone()}</h2>
                    <p>{user.email.clone()}</p>
                </div>
                <dl class="profile-card__details">
                    <dt>"Email"</dt>
                    <dd>{user.email}</dd>
                    <dt>"Name"</dt>
                    <dd>{user.name}</dd>
                    <dt>"Member Since"</dt>
                    <dd>{member_since}</dd>
                    {last_login.map(|date| view! {
                        <dt>"Last Login"</dt>
                        <dd>{date}</dd>
                    })}
                </dl>
            </div>
        </div>
    }
}
