pub mod list;
pub mod vote;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ratings::requests::SubmitVoteRequest;
use crate::storage::Storage;

pub struct RatingService {
    storage: Option<Arc<dyn Storage>>,
}

impl RatingService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 对教师投票（学生）
    pub async fn submit_vote(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        req: SubmitVoteRequest,
    ) -> ActixResult<HttpResponse> {
        vote::submit_vote(self, request, teacher_id, req).await
    }

    /// 列出教师及评价汇总
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request).await
    }

    /// 单个教师的评价详情
    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_teacher(self, request, teacher_id).await
    }
}
