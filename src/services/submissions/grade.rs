use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 评分：PENDING -> APPROVED/REJECTED，终态不再迁移。
///
/// 授权规则在数据层入口处执行：评分教师必须是任务归属教师，
/// 管理员除外。空评语不覆盖已有评语。
/// POST /submissions/{id}/grade
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let grader = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 获取提交
    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(sub)) => sub,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    // 所有权检查：评分人必须是任务归属教师（管理员放行）
    if grader.role != UserRole::Admin {
        let task = match storage.get_task_by_id(submission.task_id).await {
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

        if task.teacher_id != grader.id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只有任务归属教师可以评分",
            )));
        }
    }

    // 终态不可再评
    if submission.status.is_terminal() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SubmissionAlreadyGraded,
            "该提交已评分",
        )));
    }

    // 空评语视为"不修改"，保留已有评语
    let comment = req.comment.filter(|c| !c.is_empty());

    match storage
        .grade_submission(submission_id, req.decision.into_status(), comment)
        .await
    {
        // 条件更新未命中说明并发下已被他人评掉
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SubmissionAlreadyGraded,
            "该提交已评分",
        ))),
        Ok(true) => {
            tracing::info!(
                "Submission {} graded {} by teacher {}",
                submission_id,
                req.decision.into_status(),
                grader.id
            );
            match storage.get_submission_by_id(submission_id).await {
                Ok(Some(updated)) => {
                    Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "评分成功")))
                }
                _ => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("评分成功"))),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
