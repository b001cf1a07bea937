use crate::data::{badge_initial, tech_icon, visible_badges, LinkAction, ProjectRecord};
use crate::notify::alert;
use leptos::*;

fn href_for(action: &LinkAction) -> String {
    match action {
        LinkAction::Navigate(url) => url.clone(),
        LinkAction::Blocked(_) => "#".to_string(),
    }
}

/// Click handler that cancels navigation for blocked links.
fn guard_click(action: LinkAction) -> impl Fn(ev::MouseEvent) + 'static {
    move |ev: ev::MouseEvent| {
        if let LinkAction::Blocked(reason) = &action {
            ev.prevent_default();
            alert(reason);
        }
    }
}

#[component]
fn TechBadge(name: &'static str) -> impl IntoView {
    view! {
        <div class="tech-badge" title=name>
            {match tech_icon(name) {
                Some(icon) => view! { <img src=icon alt=name/> }.into_view(),
                None => view! { <span>{badge_initial(name)}</span> }.into_view(),
            }}
            <span class="tech-tooltip">{name}</span>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let (badges, overflow) = visible_badges(project.technologies);
    let demo = project.demo_link();
    let details = project.details_link();
    let demo_blocked = matches!(demo, LinkAction::Blocked(_));

    view! {
        <article class="project-card card">
            <div class="project-image">
                <img src=project.image alt=project.title/>
            </div>

            <h3>{project.title}</h3>
            <p class="project-description">{project.description}</p>

            {(!badges.is_empty()).then(|| view! {
                <div class="tech-badges">
                    {badges.iter().map(|&name| view! { <TechBadge name=name/> }).collect_view()}
                    {(overflow > 0).then(|| view! {
                        <div class="tech-badge overflow" title=format!("{} more technologies", overflow)>
                            <span>{format!("+{}", overflow)}</span>
                        </div>
                    })}
                </div>
            })}

            <div class="project-links">
                <a
                    href=href_for(&demo)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="demo-link"
                    class:unavailable=demo_blocked
                    on:click=guard_click(demo.clone())
                >
                    "Live Demo"
                </a>
                <a
                    href=href_for(&details)
                    class="details-link"
                    on:click=guard_click(details.clone())
                >
                    "Details"
                </a>
                <a href=project.github target="_blank" rel="noopener noreferrer" class="github-link">
                    "GitHub"
                </a>
            </div>
        </article>
    }
}
