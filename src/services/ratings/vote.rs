use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RatingService;
use crate::middlewares::RequireJWT;
use crate::models::ratings::requests::SubmitVoteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_class_name;

/// 投票。每次调用都是独立的一票，不按投票人去重。
///
/// 全局计数器与班级计数器由存储层在同一事务内同时自增；
/// 教师不存在时不产生任何状态变化。
/// POST /teachers/{id}/votes
pub async fn submit_vote(
    service: &RatingService,
    request: &HttpRequest,
    teacher_id: i64,
    req: SubmitVoteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let voter = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 有班级归属的学生投本班的票
    let class_name = voter.class_name.clone().unwrap_or(req.class_name);

    if let Err(msg) = validate_class_name(&class_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::VoteInvalid, msg)));
    }

    match storage
        .record_vote(teacher_id, &class_name, req.category)
        .await
    {
        Ok(true) => {
            tracing::info!(
                "Vote recorded: teacher {} <- {} from class {}",
                teacher_id,
                req.category,
                class_name
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("投票成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "教师不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("投票失败: {e}"),
            )),
        ),
    }
}
