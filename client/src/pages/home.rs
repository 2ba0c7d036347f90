//! Landing page composed of the site sections.

use leptos::prelude::*;

use crate::components::blog::BlogSection;
use crate::components::career_paths::CareerPathsSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::job_guidance::JobGuidanceSection;
use crate::state::auth::AuthContext;

#[component]
pub fn MainPage(auth: AuthContext) -> impl IntoView {
    let api = auth.controller().api().clone();

    view! {
        <div class="app-root">
            <Header auth=auth/>
            <main>
                <Hero/>
                <CareerPathsSection api=api.clone()/>
                <JobGuidanceSection auth=auth/>
                <BlogSection api=api/>
            </main>
            <Footer/>
        </div>
    }
}
