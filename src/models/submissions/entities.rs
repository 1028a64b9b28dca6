use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态机：PENDING 为唯一初始状态，APPROVED/REJECTED 为终态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";

    /// 是否为终态（终态不再接受任何迁移）
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionStatus::Pending)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::PENDING => Ok(SubmissionStatus::Pending),
            SubmissionStatus::APPROVED => Ok(SubmissionStatus::Approved),
            SubmissionStatus::REJECTED => Ok(SubmissionStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Approved => write!(f, "{}", SubmissionStatus::APPROVED),
            SubmissionStatus::Rejected => write!(f, "{}", SubmissionStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 评分决定：仅允许 PENDING -> APPROVED/REJECTED
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum GradeDecision {
    Approved,
    Rejected,
}

impl GradeDecision {
    pub fn into_status(self) -> SubmissionStatus {
        match self {
            GradeDecision::Approved => SubmissionStatus::Approved,
            GradeDecision::Rejected => SubmissionStatus::Rejected,
        }
    }
}

impl<'de> Deserialize<'de> for GradeDecision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "approved" => Ok(GradeDecision::Approved),
            "rejected" => Ok(GradeDecision::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的评分决定: '{s}'. 支持的决定: approved, rejected"
            ))),
        }
    }
}

// 提交实体：AI 派生字段在创建时固定，评分动作恰好改变一次状态
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub task_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_class: String,
    // 内联编码的作业文件 (data URL)
    pub file_data: String,
    pub file_type: String,
    // AI 判定的正确率 0-100
    pub accuracy: i32,
    pub ai_comment: String,
    pub alternatives: Vec<String>,
    pub teacher_comment: Option<String>,
    pub status: SubmissionStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(SubmissionStatus::Approved.is_terminal());
        assert!(SubmissionStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_decision_into_status() {
        assert_eq!(
            GradeDecision::Approved.into_status(),
            SubmissionStatus::Approved
        );
        assert_eq!(
            GradeDecision::Rejected.into_status(),
            SubmissionStatus::Rejected
        );
    }

    #[test]
    fn test_status_roundtrip() {
        for s in ["pending", "approved", "rejected"] {
            let status: SubmissionStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("graded".parse::<SubmissionStatus>().is_err());
    }
}
