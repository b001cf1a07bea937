mod home;
mod not_found;
mod project_detail;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use project_detail::ProjectDetailPage;
