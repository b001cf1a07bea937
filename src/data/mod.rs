mod certificates;
mod education;
mod projects;

pub use certificates::{Certificate, CERTIFICATES};
pub use education::{EducationRecord, EDUCATION};
pub use projects::{
    badge_initial, find_project, tech_icon, visible_badges, LinkAction, ProjectRecord,
    MAX_VISIBLE_BADGES, PROJECTS,
};
