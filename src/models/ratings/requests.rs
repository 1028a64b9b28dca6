use serde::Deserialize;
use ts_rs::TS;

use super::entities::VoteCategory;

// 投票请求：投票学生所在班级 + 类别
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct SubmitVoteRequest {
    pub class_name: String,
    pub category: VoteCategory,
}
