use std::sync::Arc;

use crate::models::{
    ratings::entities::{TeacherRating, VoteCategory},
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{NewSubmission, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    tasks::{
        entities::Task,
        requests::{NewTask, TaskListQuery},
        responses::TaskListResponse,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户；教师注册时在同一事务内创建零值评价记录
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息（精确匹配，区分大小写）
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（可按角色）
    async fn count_users(&self, role: Option<UserRole>) -> Result<i64>;

    /// 教师评价方法
    // 记录一票：全局计数器与班级计数器在同一事务内自增。
    // 教师无评价记录时返回 false 且不做任何修改。
    async fn record_vote(
        &self,
        teacher_id: i64,
        class_name: &str,
        category: VoteCategory,
    ) -> Result<bool>;
    // 获取某位教师的评价记录（含按班级明细）
    async fn get_rating_by_teacher_id(&self, teacher_id: i64) -> Result<Option<TeacherRating>>;
    // 列出所有教师及其评价记录
    async fn list_teachers_with_ratings(&self) -> Result<Vec<(User, TeacherRating)>>;

    /// 任务管理方法
    // 创建任务（创建后不可变）
    async fn create_task(&self, task: NewTask) -> Result<Task>;
    // 通过ID获取任务
    async fn get_task_by_id(&self, task_id: i64) -> Result<Option<Task>>;
    // 列出任务
    async fn list_tasks_with_pagination(&self, query: TaskListQuery) -> Result<TaskListResponse>;
    // 统计任务数量（可按归属教师）
    async fn count_tasks(&self, teacher_id: Option<i64>) -> Result<i64>;

    /// 提交管理方法
    // 创建提交（初始状态 PENDING，AI 派生字段永久固定）
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 评分：仅对 PENDING 提交生效，返回是否有行被更新。
    // comment 为 None 时保留已有评语。
    async fn grade_submission(
        &self,
        submission_id: i64,
        status: SubmissionStatus,
        comment: Option<String>,
    ) -> Result<bool>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 统计提交数量（可按学生）
    async fn count_submissions(&self, student_id: Option<i64>) -> Result<i64>;
    // 按学生分组统计提交数量
    async fn count_submissions_by_student(&self) -> Result<Vec<(i64, i64)>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
