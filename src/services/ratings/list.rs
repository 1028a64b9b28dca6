use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RatingService;
use crate::models::ratings::responses::{TeacherListResponse, TeacherRatingResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 列出所有教师及其评价汇总（计数器 + 派生百分比 + 班级明细）
/// GET /teachers
pub async fn list_teachers(
    service: &RatingService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers_with_ratings().await {
        Ok(teachers) => {
            let items = teachers
                .into_iter()
                .map(|(user, rating)| TeacherRatingResponse {
                    teacher_id: user.id,
                    full_name: user.full_name,
                    subject: user.subject,
                    shares: rating.counters.shares(),
                    counters: rating.counters,
                    votes_by_class: rating.votes_by_class,
                })
                .collect();

            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(TeacherListResponse { items }, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师列表失败: {e}"),
            )),
        ),
    }
}

/// 单个教师的评价详情
/// GET /teachers/{id}
pub async fn get_teacher(
    service: &RatingService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(teacher_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "教师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    };

    match storage.get_rating_by_teacher_id(teacher_id).await {
        Ok(Some(rating)) => {
            let response = TeacherRatingResponse {
                teacher_id: user.id,
                full_name: user.full_name,
                subject: user.subject,
                shares: rating.counters.shares(),
                counters: rating.counters,
                votes_by_class: rating.votes_by_class,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "教师不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评价记录失败: {e}"),
            )),
        ),
    }
}
