//! Sticky site header with section links, sign-in controls and a mobile menu.

use leptos::prelude::*;

use crate::state::auth::{AuthContext, AuthPhase};

const NAV_LINKS: [(&str, &str); 4] = [("#home", "Home"), ("#careers", "Careers"), ("#jobs", "Jobs"), ("#blog", "Blog")];

fn nav_links(class: &'static str) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|(href, label)| view! { <a class=class href=*href>{*label}</a> })
        .collect_view()
}

#[component]
pub fn Header(auth: AuthContext) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let account = move || match auth.phase.get() {
        AuthPhase::Loading => view! { <span class="site-header__pending">"…"</span> }.into_any(),
        AuthPhase::Authenticated(user) => view! {
            <div class="site-header__user">
                {user.picture.map(|src| view! { <img class="site-header__avatar" src=src alt="Profile"/> })}
                // Full page load so the profile view is selected.
                <a class="site-header__user-name" href="/profile" rel="external">{user.name}</a>
                <button class="btn btn--danger" on:click=move |_| auth.logout()>"Logout"</button>
            </div>
        }
        .into_any(),
        AuthPhase::Unauthenticated => view! {
            <button class="btn btn--primary" on:click=move |_| auth.login()>"Sign In"</button>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a class="site-header__brand" href="/" rel="external">
                    <span class="brand-mark">"DS"</span>
                    <span class="site-header__name">"Devset"</span>
                </a>
                <nav class="site-header__nav">{nav_links("site-header__link")}</nav>
                <div class="site-header__actions">
                    {account}
                    <button
                        class="site-header__menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile-nav" on:click=move |_| menu_open.set(false)>
                    {nav_links("site-header__mobile-link")}
                </nav>
            </Show>
        </header>
    }
}
