use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::{CreateSubmissionRequest, NewSubmission};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::{decode_payload, split_data_url, validate_magic_bytes};

/// 创建提交。
///
/// 评分服务每次上传只调用一次；调用失败时不创建任何提交，
/// 学生重新上传即重试。成功后提交以 PENDING 状态落库，
/// AI 派生字段从此不再变化。
/// POST /submissions
pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户（路由层已限定学生角色）
    let student = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 1. 解析 data URL 并校验声明类型与实际内容一致
    let Some((mime, payload)) = split_data_url(&req.file_data) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileInvalid,
            "文件必须为 data URL 格式 (data:<mime>;base64,...)",
        )));
    };

    if mime != req.file_type {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileInvalid,
            "声明的文件类型与 data URL 不一致",
        )));
    }

    let Some(bytes) = decode_payload(payload) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileInvalid,
            "文件内容不是有效的 base64",
        )));
    };

    if !validate_magic_bytes(&bytes, mime) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileInvalid,
            "文件内容与声明的类型不匹配，仅支持 JPEG/PNG/WebP/PDF",
        )));
    }

    // 2. 目标任务必须存在
    let task = match storage.get_task_by_id(req.task_id).await {
        Ok(Some(task)) => task,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TaskNotFound,
                "任务不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务失败: {e}"),
                )),
            );
        }
    };

    // 3. 调用评分服务（单次尝试，失败即无提交）
    let oracle = service.get_oracle(request);
    let analysis = match oracle.analyze(payload, mime).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                "Scoring oracle failed for student {} on task {}: {}",
                student.id,
                task.id,
                e
            );
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::OracleFailed,
                "AI 评分暂不可用，请重新上传",
            )));
        }
    };

    // 4. 落库，状态 PENDING
    let new_submission = NewSubmission {
        task_id: task.id,
        student_id: student.id,
        student_name: student.full_name.clone(),
        student_class: student.class_name.clone().unwrap_or_default(),
        file_data: req.file_data,
        file_type: req.file_type,
        accuracy: analysis.accuracy,
        ai_comment: analysis.explanation,
        alternatives: analysis.alternatives,
    };

    match storage.create_submission(new_submission).await {
        Ok(submission) => {
            tracing::info!(
                "Student {} submitted task {} (accuracy: {})",
                student.id,
                task.id,
                submission.accuracy
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(submission, "提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建提交失败: {e}"),
            )),
        ),
    }
}
