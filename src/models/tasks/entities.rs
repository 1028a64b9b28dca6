use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 任务类型：BSB/CHSB 为正式测评，ODDIY 为普通作业
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub enum TaskType {
    Bsb,
    Chsb,
    Oddiy,
}

impl TaskType {
    pub const BSB: &'static str = "bsb";
    pub const CHSB: &'static str = "chsb";
    pub const ODDIY: &'static str = "oddiy";
}

impl<'de> Deserialize<'de> for TaskType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            TaskType::BSB => Ok(TaskType::Bsb),
            TaskType::CHSB => Ok(TaskType::Chsb),
            TaskType::ODDIY => Ok(TaskType::Oddiy),
            _ => Err(serde::de::Error::custom(format!(
                "无效的任务类型: '{s}'. 支持的类型: bsb, chsb, oddiy"
            ))),
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::Bsb => write!(f, "{}", TaskType::BSB),
            TaskType::Chsb => write!(f, "{}", TaskType::CHSB),
            TaskType::Oddiy => write!(f, "{}", TaskType::ODDIY),
        }
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bsb" => Ok(TaskType::Bsb),
            "chsb" => Ok(TaskType::Chsb),
            "oddiy" => Ok(TaskType::Oddiy),
            _ => Err(format!("Invalid task type: {s}")),
        }
    }
}

// 任务实体：教师布置后不可变
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct Task {
    pub id: i64,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subject: String,
    pub class_name: String,
    pub task_type: TaskType,
    pub title: String,
    pub description: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    // 内联编码的 PDF 附件 (data URL)
    pub pdf_data: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
