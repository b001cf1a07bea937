use crate::components::{CertificateViewer, ProjectCard};
use crate::data::{CERTIFICATES, EDUCATION, PROJECTS};
use leptos::*;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="education">
            <h2>"Education"</h2>
            <p class="section-tagline">"My academic journey and qualifications"</p>
            <div class="education-list">
                {EDUCATION
                    .iter()
                    .map(|edu| view! {
                        <div class="education-card card">
                            <div class="education-header">
                                <div>
                                    <h3>{edu.degree}</h3>
                                    <p class="institution">{edu.institution}</p>
                                </div>
                                <span class="period">{edu.period}</span>
                            </div>
                            <p>{edu.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <h2>"Projects"</h2>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|&project| view! { <ProjectCard project=project/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CertificatesSection() -> impl IntoView {
    view! {
        <section id="certificates" class="certificates">
            <h2>"Certificates"</h2>
            <div class="certificate-grid">
                {CERTIFICATES
                    .iter()
                    .map(|cert| view! { <CertificateViewer image=cert.image title=cert.title/> })
                    .collect_view()}
            </div>
        </section>
    }
}
