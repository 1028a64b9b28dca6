use serde_json::json;
use tracing::{debug, info};

use super::{AnalysisResult, ScoringOracle};
use crate::config::AppConfig;
use crate::errors::{MaktabError, Result};
use crate::utils::validate::validate_accuracy;

/// 固定的评分指令。响应被 response_schema 约束为 JSON。
const ANALYSIS_INSTRUCTION: &str = "Analyze this homework submission (OCR the image first). \
Respond ONLY as JSON, with all text fields written in Uzbek. \
The result must contain: \
1. accuracy: correctness percentage (0-100). \
2. errors: list of mistakes found. \
3. explanation: a detailed walkthrough of the correct solution. \
4. alternatives: at least 3 different alternative ways to solve the problem. \
5. advice: individual advice for the student.";

/// Gemini generateContent 客户端
pub struct GeminiOracle {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiOracle {
    pub fn new() -> Result<Self> {
        let config = AppConfig::get();

        if config.oracle.api_key.is_empty() {
            return Err(MaktabError::validation(
                "评分服务 API key 未配置 (ORACLE_API_KEY)",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.oracle.timeout))
            .build()
            .map_err(|e| MaktabError::oracle_unavailable(format!("构建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            client,
            api_url: config.oracle.api_url.clone(),
            api_key: config.oracle.api_key.clone(),
            model: config.oracle.model.clone(),
        })
    }

    fn request_body(file_base64: &str, mime_type: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [
                    { "text": ANALYSIS_INSTRUCTION },
                    { "inline_data": { "mime_type": mime_type, "data": file_base64 } }
                ]
            }],
            "generationConfig": {
                "response_mime_type": "application/json",
                "response_schema": {
                    "type": "OBJECT",
                    "properties": {
                        "accuracy": { "type": "NUMBER" },
                        "errors": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "explanation": { "type": "STRING" },
                        "alternatives": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "advice": { "type": "STRING" }
                    },
                    "required": ["accuracy", "errors", "explanation", "alternatives", "advice"]
                }
            }
        })
    }
}

/// 解析模型返回的 JSON 文本
fn parse_analysis(text: &str) -> Result<AnalysisResult> {
    #[derive(serde::Deserialize)]
    struct Wire {
        accuracy: f64,
        errors: Vec<String>,
        explanation: String,
        alternatives: Vec<String>,
        advice: String,
    }

    let wire: Wire = serde_json::from_str(text.trim())
        .map_err(|e| MaktabError::oracle_response(format!("评分结果解析失败: {e}")))?;

    let accuracy = wire.accuracy.round() as i32;
    validate_accuracy(accuracy).map_err(MaktabError::oracle_response)?;

    Ok(AnalysisResult {
        accuracy,
        errors: wire.errors,
        explanation: wire.explanation,
        alternatives: wire.alternatives,
        advice: wire.advice,
    })
}

#[async_trait::async_trait]
impl ScoringOracle for GeminiOracle {
    async fn analyze(&self, file_base64: &str, mime_type: &str) -> Result<AnalysisResult> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        debug!("Calling scoring oracle, model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .json(&Self::request_body(file_base64, mime_type))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(MaktabError::oracle_unavailable(format!(
                "评分服务返回 HTTP {status}"
            )));
        }

        let body: serde_json::Value = response.json().await?;

        // candidates[0].content.parts[0].text 为受 schema 约束的 JSON 文本
        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| MaktabError::oracle_response("评分服务响应缺少文本内容"))?;

        let result = parse_analysis(text)?;
        info!("Scoring oracle returned accuracy: {}", result.accuracy);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis() {
        let text = r#"{
            "accuracy": 78,
            "errors": ["2-misolda xato"],
            "explanation": "To'g'ri yechim...",
            "alternatives": ["usul 1", "usul 2", "usul 3"],
            "advice": "Ko'proq mashq qiling"
        }"#;
        let result = parse_analysis(text).unwrap();
        assert_eq!(result.accuracy, 78);
        assert_eq!(result.alternatives.len(), 3);
    }

    #[test]
    fn test_parse_analysis_rounds_fractional_accuracy() {
        let text = r#"{"accuracy": 77.6, "errors": [], "explanation": "x",
                       "alternatives": [], "advice": "y"}"#;
        let result = parse_analysis(text).unwrap();
        assert_eq!(result.accuracy, 78);
    }

    #[test]
    fn test_parse_analysis_rejects_out_of_range() {
        let text = r#"{"accuracy": 140, "errors": [], "explanation": "x",
                       "alternatives": [], "advice": "y"}"#;
        assert!(parse_analysis(text).is_err());
    }

    #[test]
    fn test_parse_analysis_rejects_malformed() {
        assert!(parse_analysis("not json").is_err());
        assert!(parse_analysis(r#"{"accuracy": 50}"#).is_err());
    }
}
