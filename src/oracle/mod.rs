//! AI 评分服务客户端
//!
//! 外部评分服务是无状态的单次调用：输入作业文件，输出正确率、
//! 讲解与备选解法。每次上传只尝试一次，失败即视为本次无结果，
//! 由学生重新上传触发重试。

mod gemini;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::AppConfig;
use crate::errors::{MaktabError, Result};

/// 评分结果（各字段原样写入提交记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analysis.ts")]
pub struct AnalysisResult {
    /// 正确率 0-100
    pub accuracy: i32,
    /// 识别出的错误列表
    pub errors: Vec<String>,
    /// 正确解法的讲解
    pub explanation: String,
    /// 备选解法（至少 3 种，由提示词约束）
    pub alternatives: Vec<String>,
    /// 给学生的个性化建议
    pub advice: String,
}

/// 评分服务抽象。实现必须无状态，失败时返回错误而非部分结果。
#[async_trait::async_trait]
pub trait ScoringOracle: Send + Sync {
    /// 分析一份作业。`file_base64` 为不含 data URL 前缀的 base64 载荷。
    async fn analyze(&self, file_base64: &str, mime_type: &str) -> Result<AnalysisResult>;
}

pub async fn create_oracle() -> Result<Arc<dyn ScoringOracle>> {
    let config = AppConfig::get();
    match config.oracle.backend.as_str() {
        "gemini" => Ok(Arc::new(gemini::GeminiOracle::new()?)),
        other => Err(MaktabError::validation(format!(
            "未知的评分服务后端: {other}. 支持: gemini"
        ))),
    }
}
