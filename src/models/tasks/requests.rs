use serde::Deserialize;
use ts_rs::TS;

use super::entities::TaskType;

// 创建任务请求；teacher_id/teacher_name 取自会话身份
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct CreateTaskRequest {
    pub subject: String,
    pub class_name: String,
    pub task_type: TaskType,
    pub title: String,
    pub description: String,
    /// RFC 3339 日期时间
    pub deadline: String,
    pub pdf_data: Option<String>,
}

// 存储层创建参数：截止时间已解析，归属教师已从会话补全
#[derive(Debug, Clone)]
pub struct NewTask {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subject: String,
    pub class_name: String,
    pub task_type: TaskType,
    pub title: String,
    pub description: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub pdf_data: Option<String>,
}

// 任务列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct TaskListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_name: Option<String>,
    pub teacher_id: Option<i64>,
}
