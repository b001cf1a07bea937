use crate::data::{badge_initial, find_project, tech_icon, LinkAction};
use crate::notify::alert;
use leptos::*;
use leptos_router::{use_params_map, A};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || params.with(|p| p.get("id").and_then(|id| find_project(id)));

    move || match project() {
        Some(project) => {
            let demo = project.demo_link();
            view! {
                <main class="container project-page">
                    <nav class="back-nav">
                        <A href="/#projects">"< Back to projects"</A>
                    </nav>

                    <header>
                        <h1>{project.title}</h1>
                        <p class="tagline">{project.description}</p>
                    </header>

                    <img class="project-hero" src=project.image alt=project.title/>

                    <section class="project-section">
                        <h2>"Technologies"</h2>
                        <ul class="tech-list">
                            {project
                                .technologies
                                .iter()
                                .map(|&tech| view! {
                                    <li class="tech-badge" title=tech>
                                        {match tech_icon(tech) {
                                            Some(icon) => view! { <img src=icon alt=tech/> }.into_view(),
                                            None => view! { <span>{badge_initial(tech)}</span> }.into_view(),
                                        }}
                                        <span class="tech-name">{tech}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </section>

                    <section class="project-section project-links">
                        {match demo {
                            LinkAction::Navigate(url) => view! {
                                <a href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a>
                            }
                            .into_view(),
                            LinkAction::Blocked(reason) => view! {
                                <button class="demo-link unavailable" on:click=move |_| alert(reason)>
                                    "Live Demo"
                                </button>
                            }
                            .into_view(),
                        }}
                        <a href=project.github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    </section>
                </main>
            }
            .into_view()
        }
        None => view! {
            <main class="container project-page">
                <header>
                    <h1>"Project not found"</h1>
                </header>
                <nav class="back-nav">
                    <A href="/#projects">"< Back to projects"</A>
                </nav>
            </main>
        }
        .into_view(),
    }
}
