use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RateLimit, RequireJWT, RequireRole};
use crate::models::ratings::requests::SubmitVoteRequest;
use crate::models::users::entities::UserRole;
use crate::services::RatingService;

// 懒加载的全局 RatingService 实例
static RATING_SERVICE: Lazy<RatingService> = Lazy::new(RatingService::new_lazy);

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    RATING_SERVICE.list_teachers(&req).await
}

pub async fn get_teacher(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    RATING_SERVICE.get_teacher(&req, path.into_inner()).await
}

pub async fn submit_vote(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SubmitVoteRequest>,
) -> ActixResult<HttpResponse> {
    RATING_SERVICE
        .submit_vote(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(RequireJWT)
            // 教师评价列表/详情 - 所有登录用户可访问
            .service(web::resource("").route(web::get().to(list_teachers)))
            .service(web::resource("/{id}").route(web::get().to(get_teacher)))
            // 投票 - 仅学生
            .service(
                web::resource("/{id}/votes").route(
                    web::post()
                        .to(submit_vote)
                        .wrap(RateLimit::vote())
                        .wrap(RequireRole::new_any(UserRole::student_roles())),
                ),
            ),
    );
}
