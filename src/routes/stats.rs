use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::UserRole;
use crate::services::StatsService;

// 懒加载的全局 StatsService 实例
static STATS_SERVICE: Lazy<StatsService> = Lazy::new(StatsService::new_lazy);

pub async fn get_overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATS_SERVICE.get_overview(&req).await
}

pub async fn get_student_stats(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    STATS_SERVICE
        .get_student_stats(&req, Some(query.page), Some(query.size))
        .await
}

// 配置路由（管理员）
pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/stats")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireJWT)
            .route("/overview", web::get().to(get_overview))
            .route("/students", web::get().to(get_student_stats)),
    );
}
