pub mod create;
pub mod detail;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tasks::requests::{CreateTaskRequest, TaskListQuery};
use crate::storage::Storage;

pub struct TaskService {
    storage: Option<Arc<dyn Storage>>,
}

impl TaskService {
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

    /// 创建任务（教师）
    pub async fn create_task(
        &self,
        request: &HttpRequest,
        req: CreateTaskRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_task(self, request, req).await
    }

    /// 获取任务详情
    pub async fn get_task(
        &self,
        request: &HttpRequest,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_task(self, request, task_id).await
    }

    /// 列出任务
    pub async fn list_tasks(
        &self,
        request: &HttpRequest,
        query: TaskListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_tasks(self, request, query).await
    }
}
