use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::StatsService;
use crate::models::stats::responses::{StudentStatsResponse, StudentStatsRow};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::UserListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 学生活跃报表：每位学生一行，附提交次数。
/// GET /stats/students
pub async fn get_student_stats(
    service: &StatsService,
    request: &HttpRequest,
    page: Option<i64>,
    size: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match storage
        .list_users_with_pagination(UserListQuery {
            page,
            size,
            role: Some(UserRole::Student),
            search: None,
        })
        .await
    {
        Ok(response) => response,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生列表失败: {e}"),
                )),
            );
        }
    };

    let counts: HashMap<i64, i64> = match storage.count_submissions_by_student().await {
        Ok(rows) => rows.into_iter().collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计学生提交失败: {e}"),
                )),
            );
        }
    };

    let items = students
        .items
        .into_iter()
        .map(|user| StudentStatsRow {
            submission_count: counts.get(&user.id).copied().unwrap_or(0),
            student_id: user.id,
            full_name: user.full_name,
            class_name: user.class_name,
        })
        .collect();

    let response = StudentStatsResponse {
        items,
        pagination: students.pagination,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
