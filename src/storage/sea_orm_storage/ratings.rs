use super::SeaOrmStorage;
use crate::entity::class_votes::{
    ActiveModel as ClassVoteActiveModel, Column as ClassVoteColumn, Entity as ClassVotes,
};
use crate::entity::teacher_ratings::{
    ActiveModel as RatingActiveModel, Column as RatingColumn, Entity as TeacherRatings,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{MaktabError, Result};
use crate::models::{
    ratings::entities::{TeacherRating, VoteCategory},
    users::entities::{User, UserRole},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 记录一票。
    ///
    /// 不变量：全局三项计数器始终等于该教师所有班级行的逐列求和，
    /// 因此两处自增必须在同一事务内完成。教师无评价记录时返回
    /// false，库中任何行均不被触碰。
    pub async fn record_vote_impl(
        &self,
        teacher_id: i64,
        class_name: &str,
        category: VoteCategory,
    ) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| MaktabError::database_operation(format!("开启事务失败: {e}")))?;

        let rating = TeacherRatings::find()
            .filter(RatingColumn::TeacherId.eq(teacher_id))
            .one(&txn)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询评价记录失败: {e}")))?;

        let Some(rating) = rating else {
            txn.rollback()
                .await
                .map_err(|e| MaktabError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(false);
        };

        // 全局计数器自增
        let mut active: RatingActiveModel = rating.clone().into();
        match category {
            VoteCategory::Excellent => active.excellent = Set(rating.excellent + 1),
            VoteCategory::Satisfied => active.satisfied = Set(rating.satisfied + 1),
            VoteCategory::Unsatisfied => active.unsatisfied = Set(rating.unsatisfied + 1),
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());
        active
            .update(&txn)
            .await
            .map_err(|e| MaktabError::database_operation(format!("更新全局计数器失败: {e}")))?;

        // 班级行：首次投票时惰性创建，(rating_id, class_name) 唯一
        let class_vote = ClassVotes::find()
            .filter(ClassVoteColumn::RatingId.eq(rating.id))
            .filter(ClassVoteColumn::ClassName.eq(class_name))
            .one(&txn)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询班级投票失败: {e}")))?;

        match class_vote {
            Some(vote) => {
                let mut active: ClassVoteActiveModel = vote.clone().into();
                match category {
                    VoteCategory::Excellent => active.excellent = Set(vote.excellent + 1),
                    VoteCategory::Satisfied => active.satisfied = Set(vote.satisfied + 1),
                    VoteCategory::Unsatisfied => active.unsatisfied = Set(vote.unsatisfied + 1),
                }
                active.update(&txn).await.map_err(|e| {
                    MaktabError::database_operation(format!("更新班级计数器失败: {e}"))
                })?;
            }
            None => {
                let model = ClassVoteActiveModel {
                    rating_id: Set(rating.id),
                    class_name: Set(class_name.to_string()),
                    excellent: Set((category == VoteCategory::Excellent) as i64),
                    satisfied: Set((category == VoteCategory::Satisfied) as i64),
                    unsatisfied: Set((category == VoteCategory::Unsatisfied) as i64),
                    ..Default::default()
                };
                model.insert(&txn).await.map_err(|e| {
                    MaktabError::database_operation(format!("创建班级投票失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| MaktabError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 获取某位教师的评价记录（含按班级明细）
    pub async fn get_rating_by_teacher_id_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Option<TeacherRating>> {
        let rating = TeacherRatings::find()
            .filter(RatingColumn::TeacherId.eq(teacher_id))
            .one(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询评价记录失败: {e}")))?;

        let Some(rating) = rating else {
            return Ok(None);
        };

        let votes = ClassVotes::find()
            .filter(ClassVoteColumn::RatingId.eq(rating.id))
            .order_by_asc(ClassVoteColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询班级投票失败: {e}")))?;

        Ok(Some(rating.into_rating(votes)))
    }

    /// 列出所有教师及其评价记录
    pub async fn list_teachers_with_ratings_impl(&self) -> Result<Vec<(User, TeacherRating)>> {
        let teachers = Users::find()
            .filter(UserColumn::Role.eq(UserRole::Teacher.to_string()))
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| MaktabError::database_operation(format!("查询教师列表失败: {e}")))?;

        let mut result = Vec::with_capacity(teachers.len());
        for teacher in teachers {
            // 评价记录在注册时创建；缺失的教师（历史数据修复前）跳过
            if let Some(rating) = self.get_rating_by_teacher_id_impl(teacher.id).await? {
                result.push((teacher.into_user(), rating));
            }
        }

        Ok(result)
    }
}
