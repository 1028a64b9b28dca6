use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::middlewares::RequireJWT;
use crate::models::tasks::requests::{CreateTaskRequest, NewTask};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_class_name, validate_subject};

/// 创建任务。归属教师取自会话身份，任务创建后不可变。
/// POST /tasks
pub async fn create_task(
    service: &TaskService,
    request: &HttpRequest,
    req: CreateTaskRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户（路由层已限定教师角色）
    let teacher = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 校验目标班级与科目
    if let Err(msg) = validate_class_name(&req.class_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Err(msg) = validate_subject(&req.subject) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 解析截止时间
    let deadline = match chrono::DateTime::parse_from_rfc3339(&req.deadline) {
        Ok(dt) => dt.with_timezone(&chrono::Utc),
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("无效的截止时间: {e}"),
            )));
        }
    };

    let new_task = NewTask {
        teacher_id: teacher.id,
        teacher_name: teacher.full_name.clone(),
        subject: req.subject,
        class_name: req.class_name,
        task_type: req.task_type,
        title: req.title,
        description: req.description,
        deadline,
        pdf_data: req.pdf_data,
    };

    match storage.create_task(new_task).await {
        Ok(task) => {
            tracing::info!(
                "Teacher {} created task {} for class {}",
                teacher.id,
                task.id,
                task.class_name
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(task, "任务创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建任务失败: {e}"),
            )),
        ),
    }
}
