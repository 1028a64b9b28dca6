use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取任务详情
/// GET /tasks/{id}
pub async fn get_task(
    service: &TaskService,
    request: &HttpRequest,
    task_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_task_by_id(task_id).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(ApiResponse::success(task, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::TaskNotFound, "任务不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询任务失败: {e}"),
            )),
        ),
    }
}
