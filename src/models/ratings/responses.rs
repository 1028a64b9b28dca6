use serde::Serialize;
use ts_rs::TS;

use super::entities::{ClassVote, RatingCounters, RatingShares};

/// 教师及其评价汇总（列表/详情共用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct TeacherRatingResponse {
    pub teacher_id: i64,
    pub full_name: String,
    pub subject: Option<String>,
    pub counters: RatingCounters,
    /// 展示用百分比份额，派生字段
    pub shares: RatingShares,
    pub votes_by_class: Vec<ClassVote>,
}

/// 教师列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct TeacherListResponse {
    pub items: Vec<TeacherRatingResponse>,
}
