pub mod auth;
pub mod ratings;
pub mod stats;
pub mod submissions;
pub mod tasks;
pub mod users;

pub use auth::AuthService;
pub use ratings::RatingService;
pub use stats::StatsService;
pub use submissions::SubmissionService;
pub use tasks::TaskService;
pub use users::UserService;
