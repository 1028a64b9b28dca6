use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::middlewares::RequireJWT;
use crate::models::tasks::requests::TaskListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出任务。
/// 学生固定看到本班任务，教师默认看到自己布置的任务，管理员不受限。
/// GET /tasks
pub async fn list_tasks(
    service: &TaskService,
    request: &HttpRequest,
    mut query: TaskListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match user.role {
        UserRole::Student => {
            // 学生视角：强制按自己的班级过滤
            query.class_name = user.class_name.clone();
            query.teacher_id = None;
        }
        UserRole::Teacher => {
            if query.teacher_id.is_none() && query.class_name.is_none() {
                query.teacher_id = Some(user.id);
            }
        }
        UserRole::Admin => {}
    }

    match storage.list_tasks_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询任务列表失败: {e}"),
            )),
        ),
    }
}
