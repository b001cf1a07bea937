mod certificate_viewer;
mod comment_section;
mod nav_bar;
mod project_card;
mod sections;

pub use certificate_viewer::CertificateViewer;
pub use comment_section::CommentSection;
pub use nav_bar::NavBar;
pub use project_card::ProjectCard;
pub use sections::{CertificatesSection, EducationSection, ProjectsSection};
