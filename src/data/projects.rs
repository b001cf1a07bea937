/// Badges shown on a card before collapsing the rest into "+N".
pub const MAX_VISIBLE_BADGES: usize = 4;

/// A portfolio project as shown on its card and details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Slug used in `/project/{id}`. Projects without one have no details page.
    pub id: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub demo: Option<&'static str>,
}

/// Where a card link should go when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Navigate(String),
    /// Swallow the click and tell the visitor why.
    Blocked(&'static str),
}

impl ProjectRecord {
    pub fn demo_link(&self) -> LinkAction {
        match self.demo {
            Some(url) if !url.is_empty() => LinkAction::Navigate(url.to_string()),
            _ => LinkAction::Blocked("Live demo is not available for this project"),
        }
    }

    pub fn details_link(&self) -> LinkAction {
        match self.id {
            Some(id) if !id.is_empty() => LinkAction::Navigate(format!("/project/{}", id)),
            _ => LinkAction::Blocked("Project details are not available"),
        }
    }
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: Some("portfolio"),
        title: "Personal Portfolio",
        description: "This site: education, projects, certificates and a guestbook, \
                      rendered client-side from Rust compiled to WebAssembly.",
        image: "/projects/portfolio.png",
        technologies: &["Rust", "Leptos", "WebAssembly", "CSS", "HTML"],
        github: "https://github.com/portfolio-owner/portfolio",
        demo: Some("https://portfolio-owner.github.io"),
    },
    ProjectRecord {
        id: Some("task-board"),
        title: "Task Board",
        description: "Kanban-style task tracker with drag and drop columns and \
                      offline persistence.",
        image: "/projects/task-board.png",
        technologies: &["React", "Tailwind", "Firebase"],
        github: "https://github.com/portfolio-owner/task-board",
        demo: Some("https://task-board.vercel.app"),
    },
    ProjectRecord {
        id: Some("weather-station"),
        title: "Weather Station Dashboard",
        description: "Dashboard that charts readings from a campus weather station \
                      and flags unusual values.",
        image: "/projects/weather-station.png",
        technologies: &["Vue", "Node.js", "Express", "JavaScript", "Bootstrap", "Vercel"],
        github: "https://github.com/portfolio-owner/weather-station",
        demo: None,
    },
    ProjectRecord {
        id: None,
        title: "Library Catalogue",
        description: "School project: a searchable catalogue for the college library \
                      with borrowing records.",
        image: "/projects/library-catalogue.png",
        technologies: &["HTML", "CSS", "JavaScript", "Material UI"],
        github: "https://github.com/portfolio-owner/library-catalogue",
        demo: None,
    },
];

pub fn find_project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == Some(id))
}

/// Icon file for a technology, when one ships with the site.
pub fn tech_icon(name: &str) -> Option<&'static str> {
    let icon = match name {
        "React" => "/icons/reactjs.svg",
        "Node.js" | "Express" => "/icons/nodejs.svg",
        "Vue" => "/icons/vite.svg",
        "HTML" => "/icons/html.svg",
        "CSS" => "/icons/css.svg",
        "JavaScript" => "/icons/javascript.svg",
        "Tailwind" => "/icons/tailwind.svg",
        "Bootstrap" => "/icons/bootstrap.svg",
        "Material UI" => "/icons/MUI.svg",
        "Firebase" => "/icons/firebase.svg",
        "Vercel" => "/icons/vercel.svg",
        _ => return None,
    };
    Some(icon)
}

/// Fallback badge text when there is no icon.
pub fn badge_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Split technologies into the badges to draw and the count hidden behind "+N".
pub fn visible_badges<'a>(technologies: &'a [&'a str]) -> (&'a [&'a str], usize) {
    let shown = technologies.len().min(MAX_VISIBLE_BADGES);
    (&technologies[..shown], technologies.len() - shown)
}
