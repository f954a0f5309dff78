mod auth;
mod dashboard;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
