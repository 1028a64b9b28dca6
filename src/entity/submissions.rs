//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_class: String,
    #[sea_orm(column_type = "Text")]
    pub file_data: String,
    pub file_type: String,
    pub accuracy: i32,
    #[sea_orm(column_type = "Text")]
    pub ai_comment: String,
    // JSON 数组编码的备选解法列表
    #[sea_orm(column_type = "Text")]
    pub alternatives: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub teacher_comment: Option<String>,
    pub status: String,
    pub submitted_at: i64,
    pub graded_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tasks::Entity",
        from = "Column::TaskId",
        to = "super::tasks::Column::Id"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus};
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            task_id: self.task_id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_class: self.student_class,
            file_data: self.file_data,
            file_type: self.file_type,
            accuracy: self.accuracy,
            ai_comment: self.ai_comment,
            alternatives: serde_json::from_str(&self.alternatives).unwrap_or_default(),
            teacher_comment: self.teacher_comment,
            status: self
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Pending),
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
            graded_at: self
                .graded_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}
