//! 班级投票实体（每个 (评价, 班级) 一行）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_votes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rating_id: i64,
    pub class_name: String,
    pub excellent: i64,
    pub satisfied: i64,
    pub unsatisfied: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher_ratings::Entity",
        from = "Column::RatingId",
        to = "super::teacher_ratings::Column::Id"
    )]
    Rating,
}

impl Related<super::teacher_ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class_vote(self) -> crate::models::ratings::entities::ClassVote {
        use crate::models::ratings::entities::{ClassVote, RatingCounters};

        ClassVote {
            class_name: self.class_name,
            counters: RatingCounters {
                excellent: self.excellent,
                satisfied: self.satisfied,
                unsatisfied: self.unsatisfied,
            },
        }
    }
}
