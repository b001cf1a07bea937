use crate::components::{CertificatesSection, CommentSection, EducationSection, ProjectsSection};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container">
            <header class="hero">
                <h1>"Hi, I'm a web developer"</h1>
                <p class="tagline">"IT graduate building fast, friendly websites"</p>
            </header>

            <EducationSection/>
            <ProjectsSection/>
            <CertificatesSection/>
            <CommentSection/>

            <footer>
                <p>"Built with Rust and Leptos" " · " "© 2025"</p>
            </footer>
        </main>
    }
}
