//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__about">
                    <div class="site-footer__brand">
                        <span class="brand-mark">"DS"</span>
                        <h3>"Devset"</h3>
                    </div>
                    <p>
                        "Empowering the next generation of tech professionals with career guidance "
                        "and learning resources."
                    </p>
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul class="site-footer__links">
                        <li><a href="#home">"Home"</a></li>
                        <li><a href="#careers">"Career Paths"</a></li>
                        <li><a href="#jobs">"Job Guidance"</a></li>
                        <li><a href="#blog">"Blog"</a></li>
                    </ul>
                </div>
            </div>
            <p class="site-footer__legal">"© 2025 Devset. Built for students, by students."</p>
        </footer>
    }
}
