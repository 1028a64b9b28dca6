use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::tasks::requests::{CreateTaskRequest, TaskListQuery};
use crate::models::users::entities::UserRole;
use crate::services::TaskService;

// 懒加载的全局 TaskService 实例
static TASK_SERVICE: Lazy<TaskService> = Lazy::new(TaskService::new_lazy);

pub async fn create_task(
    req: HttpRequest,
    task_data: web::Json<CreateTaskRequest>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE.create_task(&req, task_data.into_inner()).await
}

pub async fn get_task(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    TASK_SERVICE.get_task(&req, path.into_inner()).await
}

pub async fn list_tasks(
    req: HttpRequest,
    query: web::Query<TaskListQuery>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE.list_tasks(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_tasks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tasks")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    // 列出任务 - 所有登录用户可访问（业务层按角色过滤）
                    .route(web::get().to(list_tasks))
                    // 创建任务 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_task)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 获取任务详情 - 所有登录用户可访问
            .service(web::resource("/{id}").route(web::get().to(get_task))),
    );
}
