use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::{submissions, tasks};
use crate::errors::{MaktabError, Result};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{NewSubmission, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建提交。状态固定为 PENDING，AI 派生字段此后不再变化。
    pub async fn create_submission_impl(&self, submission: NewSubmission) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let alternatives = serde_json::to_string(&submission.alternatives)
            .map_err(|e| MaktabError::serialization(format!("序列化备选解法失败: {e}")))?;

        let model = ActiveModel {
            task_id: Set(submission.task_id),
            student_id: Set(submission.student_id),
            student_name: Set(submission.student_name),
            student_class: Set(submission.student_class),
            file_data: Set(submission.file_data),
            file_type: Set(submission.file_type),
            accuracy: Set(submission.accuracy),
            ai_comment: Set(submission.ai_comment),
            alternatives: Set(alternatives),
            teacher_comment: Set(None),
            status: Set(SubmissionStatus::Pending.to_string()),
            submitted_at: Set(now),
            graded_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 评分。条件更新只命中 PENDING 行，终态行不受影响；
    /// comment 为 None 时不触碰已有评语列。
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        status: SubmissionStatus,
        comment: Option<String>,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let mut update = Submissions::update_many()
            .col_expr(Column::Status, Expr::value(status.to_string()))
            .col_expr(Column::GradedAt, Expr::value(now));

        if let Some(comment) = comment {
            update = update.col_expr(Column::TeacherComment, Expr::value(comment));
        }

        let result = update
            .filter(Column::Id.eq(submission_id))
            .filter(Column::Status.eq(SubmissionStatus::Pending.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("更新提交状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出提交
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        if let Some(task_id) = query.task_id {
            select = select.filter(Column::TaskId.eq(task_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 教师视角：按任务归属教师过滤，须联结任务表
        if let Some(teacher_id) = query.teacher_id {
            select = select
                .join(JoinType::InnerJoin, submissions::Relation::Task.def())
                .filter(tasks::Column::TeacherId.eq(teacher_id));
        }

        // 最新的在前
        select = select.order_by_desc(Column::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询提交页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(SubmissionListResponse {
            items: items.into_iter().map(|m| m.into_submission()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计提交数量（可按学生）
    pub async fn count_submissions_impl(&self, student_id: Option<i64>) -> Result<i64> {
        let mut select = Submissions::find();

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("统计提交数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 按学生分组统计提交数量，返回 (student_id, count) 列表
    pub async fn count_submissions_by_student_impl(&self) -> Result<Vec<(i64, i64)>> {
        let rows: Vec<(i64, i64)> = Submissions::find()
            .select_only()
            .column(Column::StudentId)
            .column_as(Column::Id.count(), "submission_count")
            .group_by(Column::StudentId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("统计学生提交失败: {e}")))?;

        Ok(rows)
    }
}
