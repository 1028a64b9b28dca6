use serde::Deserialize;
use ts_rs::TS;

use super::entities::{GradeDecision, SubmissionStatus};

// 创建提交请求：文件以 data URL 内联上传，学生身份取自会话
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub task_id: i64,
    /// data URL（data:<mime>;base64,<payload>）
    pub file_data: String,
    /// 声明的媒体类型，须与文件内容匹配
    pub file_type: String,
}

// 存储层创建参数：学生身份与 AI 结果已补全
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub task_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_class: String,
    pub file_data: String,
    pub file_type: String,
    pub accuracy: i32,
    pub ai_comment: String,
    pub alternatives: Vec<String>,
}

// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub decision: GradeDecision,
    /// 空字符串/缺省不覆盖已有评语
    pub comment: Option<String>,
}

// 提交列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub task_id: Option<i64>,
    pub student_id: Option<i64>,
    /// 限定任务归属教师（教师视角列表）
    pub teacher_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}
