pub mod auth;
pub mod common;
pub mod ratings;
pub mod stats;
pub mod submissions;
pub mod tasks;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};

/// 业务错误码（HTTP 响应 code 字段）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    RateLimitExceeded = 1004,
    InternalServerError = 1005,

    // 认证错误 2xxx
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNameAlreadyExists = 2002,
    UserNotFound = 2003,

    // 任务/提交错误 3xxx
    TaskNotFound = 3000,
    SubmissionNotFound = 3001,
    SubmissionAlreadyGraded = 3002,
    FileInvalid = 3003,
    OracleFailed = 3004,

    // 评价错误 4xxx
    TeacherNotFound = 4000,
    VoteInvalid = 4001,
}

/// 程序启动时间（用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
