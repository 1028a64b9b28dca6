use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;

/// 每位教师一行的总览统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct TeacherStatsRow {
    pub teacher_id: i64,
    pub full_name: String,
    /// excellent + satisfied - unsatisfied
    pub net_rating: i64,
    pub task_count: i64,
}

/// 管理员总览统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct OverviewStatsResponse {
    pub total_users: i64,
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_tasks: i64,
    pub total_submissions: i64,
    pub teachers: Vec<TeacherStatsRow>,
}

/// 每位学生一行的活跃报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct StudentStatsRow {
    pub student_id: i64,
    pub full_name: String,
    pub class_name: Option<String>,
    pub submission_count: i64,
}

/// 学生报表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct StudentStatsResponse {
    pub items: Vec<StudentStatsRow>,
    pub pagination: PaginationInfo,
}
