use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RateLimit, RequireJWT, RequireRole};
use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListQuery,
};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

pub async fn get_submission(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, path.into_inner())
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    // 列出提交 - 所有登录用户可访问（业务层按角色过滤）
                    .route(web::get().to(list_submissions))
                    // 创建提交 - 仅学生；每次上传触发一次评分调用，限流
                    .route(
                        web::post()
                            .to(create_submission)
                            .wrap(RateLimit::submission_upload())
                            .wrap(RequireRole::new_any(UserRole::student_roles())),
                    ),
            )
            // 获取提交详情 - 可见性在业务层检查
            .service(web::resource("/{id}").route(web::get().to(get_submission)))
            // 评分 - 仅教师和管理员；归属检查在业务层
            .service(
                web::resource("/{id}/grade").route(
                    web::post()
                        .to(grade_submission)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
