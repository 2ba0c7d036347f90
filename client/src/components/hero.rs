//! Landing hero banner.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        "Discover Your Path in " <span class="hero__accent">"Tech"</span>
                    </h1>
                    <p class="hero__lead">
                        "Explore exciting computer science and IT careers with comprehensive roadmaps, "
                        "free resources, and guidance tailored for students aged 16-25."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--primary btn--large" href="#careers">"Start Exploring"</a>
                        <a class="btn btn--outline btn--large" href="#jobs">"Find Jobs"</a>
                    </div>
                </div>
                <img
                    class="hero__image"
                    src="https://images.unsplash.com/photo-1637249769470-3c4f4506a263"
                    alt="Student learning technology"
                />
            </div>
        </section>
    }
}
