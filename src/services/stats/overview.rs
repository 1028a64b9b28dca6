use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatsService;
use crate::models::stats::responses::{OverviewStatsResponse, TeacherStatsRow};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 管理员总览：用户/任务/提交计数 + 每位教师的净评分与任务数。
/// 净评分 = excellent + satisfied - unsatisfied。
/// GET /stats/overview
pub async fn get_overview(
    service: &StatsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let total_users = match storage.count_users(None).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error(format!("统计用户失败: {e}"))),
    };
    let total_students = match storage.count_users(Some(UserRole::Student)).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error(format!("统计学生失败: {e}"))),
    };
    let total_teachers = match storage.count_users(Some(UserRole::Teacher)).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error(format!("统计教师失败: {e}"))),
    };
    let total_tasks = match storage.count_tasks(None).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error(format!("统计任务失败: {e}"))),
    };
    let total_submissions = match storage.count_submissions(None).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error(format!("统计提交失败: {e}"))),
    };

    // 每位教师一行：净评分 + 布置的任务数
    let teacher_ratings = match storage.list_teachers_with_ratings().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error(format!("查询教师评价失败: {e}"))),
    };

    let mut teachers = Vec::with_capacity(teacher_ratings.len());
    for (user, rating) in teacher_ratings {
        let task_count = match storage.count_tasks(Some(user.id)).await {
            Ok(count) => count,
            Err(e) => return Ok(internal_error(format!("统计教师任务失败: {e}"))),
        };
        teachers.push(TeacherStatsRow {
            teacher_id: user.id,
            full_name: user.full_name,
            net_rating: rating.counters.excellent + rating.counters.satisfied
                - rating.counters.unsatisfied,
            task_count,
        });
    }

    let response = OverviewStatsResponse {
        total_users,
        total_students,
        total_teachers,
        total_tasks,
        total_submissions,
        teachers,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}

fn internal_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, message))
}
