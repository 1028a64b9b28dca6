use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Subject).string().null())
                    .col(ColumnDef::new(Users::ClassName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师评价表（每位教师一行，全局计数器）
        manager
            .create_table(
                Table::create()
                    .table(TeacherRatings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherRatings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherRatings::TeacherId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherRatings::Excellent)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeacherRatings::Satisfied)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeacherRatings::Unsatisfied)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeacherRatings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherRatings::Table, TeacherRatings::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级投票表（每个 (评价, 班级) 一行，惰性创建）
        manager
            .create_table(
                Table::create()
                    .table(ClassVotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassVotes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassVotes::RatingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassVotes::ClassName).string().not_null())
                    .col(
                        ColumnDef::new(ClassVotes::Excellent)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassVotes::Satisfied)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassVotes::Unsatisfied)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassVotes::Table, ClassVotes::RatingId)
                            .to(TeacherRatings::Table, TeacherRatings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // (rating_id, class_name) 唯一：一个班级对一位教师只有一行
        manager
            .create_index(
                Index::create()
                    .name("idx_class_votes_rating_class")
                    .table(ClassVotes::Table)
                    .col(ClassVotes::RatingId)
                    .col(ClassVotes::ClassName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建任务表
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::TeacherName).string().not_null())
                    .col(ColumnDef::new(Tasks::Subject).string().not_null())
                    .col(ColumnDef::new(Tasks::ClassName).string().not_null())
                    .col(ColumnDef::new(Tasks::TaskType).string().not_null())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Description).text().not_null())
                    .col(ColumnDef::new(Tasks::Deadline).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::PdfData).text().null())
                    .col(ColumnDef::new(Tasks::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tasks::Table, Tasks::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Submissions::TaskId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Submissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::StudentName).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::StudentClass)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::FileData).text().not_null())
                    .col(ColumnDef::new(Submissions::FileType).string().not_null())
                    .col(ColumnDef::new(Submissions::Accuracy).integer().not_null())
                    .col(ColumnDef::new(Submissions::AiComment).text().not_null())
                    .col(ColumnDef::new(Submissions::Alternatives).text().not_null())
                    .col(ColumnDef::new(Submissions::TeacherComment).text().null())
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::GradedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassVotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherRatings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    FullName,
    Role,
    Subject,
    ClassName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherRatings {
    Table,
    Id,
    TeacherId,
    Excellent,
    Satisfied,
    Unsatisfied,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassVotes {
    Table,
    Id,
    RatingId,
    ClassName,
    Excellent,
    Satisfied,
    Unsatisfied,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    TeacherId,
    TeacherName,
    Subject,
    ClassName,
    TaskType,
    Title,
    Description,
    Deadline,
    PdfData,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    TaskId,
    StudentId,
    StudentName,
    StudentClass,
    FileData,
    FileType,
    Accuracy,
    AiComment,
    Alternatives,
    TeacherComment,
    Status,
    SubmittedAt,
    GradedAt,
}
