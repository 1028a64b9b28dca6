//! 教师评价实体（全局计数器）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub teacher_id: i64,
    pub excellent: i64,
    pub satisfied: i64,
    pub unsatisfied: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::class_votes::Entity")]
    ClassVotes,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::class_votes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassVotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rating(
        self,
        votes_by_class: Vec<super::class_votes::Model>,
    ) -> crate::models::ratings::entities::TeacherRating {
        use crate::models::ratings::entities::{RatingCounters, TeacherRating};

        TeacherRating {
            teacher_id: self.teacher_id,
            counters: RatingCounters {
                excellent: self.excellent,
                satisfied: self.satisfied,
                unsatisfied: self.unsatisfied,
            },
            votes_by_class: votes_by_class
                .into_iter()
                .map(|v| v.into_class_vote())
                .collect(),
        }
    }
}
