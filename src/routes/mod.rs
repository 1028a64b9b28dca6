pub mod auth;

pub mod users;

pub mod tasks;

pub mod submissions;

pub mod teachers;

pub mod stats;

pub use auth::configure_auth_routes;
pub use stats::configure_stats_routes;
pub use submissions::configure_submissions_routes;
pub use tasks::configure_tasks_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_user_routes;
