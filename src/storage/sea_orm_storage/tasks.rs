use super::SeaOrmStorage;
use crate::entity::tasks::{ActiveModel, Column, Entity as Tasks};
use crate::errors::{MaktabError, Result};
use crate::models::{
    PaginationInfo,
    tasks::{
        entities::Task,
        requests::{NewTask, TaskListQuery},
        responses::TaskListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建任务（创建后不可变，无更新路径）
    pub async fn create_task_impl(&self, task: NewTask) -> Result<Task> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(task.teacher_id),
            teacher_name: Set(task.teacher_name),
            subject: Set(task.subject),
            class_name: Set(task.class_name),
            task_type: Set(task.task_type.to_string()),
            title: Set(task.title),
            description: Set(task.description),
            deadline: Set(task.deadline.timestamp()),
            pdf_data: Set(task.pdf_data),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("创建任务失败: {e}")))?;

        Ok(result.into_task())
    }

    /// 通过 ID 获取任务
    pub async fn get_task_by_id_impl(&self, task_id: i64) -> Result<Option<Task>> {
        let result = Tasks::find_by_id(task_id)
            .one(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询任务失败: {e}")))?;

        Ok(result.map(|m| m.into_task()))
    }

    /// 分页列出任务
    pub async fn list_tasks_with_pagination_impl(
        &self,
        query: TaskListQuery,
    ) -> Result<TaskListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Tasks::find();

        // 班级筛选（学生视角）
        if let Some(ref class_name) = query.class_name {
            select = select.filter(Column::ClassName.eq(class_name));
        }

        // 归属教师筛选（教师视角）
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 最新的在前
        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询任务总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询任务页数失败: {e}")))?;

        let tasks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(TaskListResponse {
            items: tasks.into_iter().map(|m| m.into_task()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计任务数量（可按归属教师）
    pub async fn count_tasks_impl(&self, teacher_id: Option<i64>) -> Result<i64> {
        let mut select = Tasks::find();

        if let Some(teacher_id) = teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("统计任务数量失败: {e}")))?;

        Ok(count as i64)
    }
}
