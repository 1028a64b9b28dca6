//! Storage 层集成测试
//!
//! 使用内存 SQLite + 真实迁移验证注册、投票聚合与提交状态机的语义。

use rust_maktab_next::models::ratings::entities::VoteCategory;
use rust_maktab_next::models::submissions::entities::SubmissionStatus;
use rust_maktab_next::models::submissions::requests::{NewSubmission, SubmissionListQuery};
use rust_maktab_next::models::tasks::entities::TaskType;
use rust_maktab_next::models::tasks::requests::NewTask;
use rust_maktab_next::models::users::entities::{User, UserRole};
use rust_maktab_next::models::users::requests::CreateUserRequest;
use rust_maktab_next::storage::Storage;
use rust_maktab_next::storage::sea_orm_storage::SeaOrmStorage;

// 内存库必须单连接，连接池各拿一份内存库会互相看不见
async fn test_storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_url(":memory:", 1, 5)
        .await
        .expect("in-memory storage should initialize")
}

fn teacher_request(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: "argon2-hash-placeholder".to_string(),
        full_name: format!("Teacher {username}"),
        role: UserRole::Teacher,
        subject: Some("Matematika".to_string()),
        class_name: None,
    }
}

fn student_request(username: &str, class_name: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: "argon2-hash-placeholder".to_string(),
        full_name: format!("Student {username}"),
        role: UserRole::Student,
        subject: None,
        class_name: Some(class_name.to_string()),
    }
}

async fn create_task_for(storage: &SeaOrmStorage, teacher: &User, class_name: &str) -> i64 {
    let task = storage
        .create_task(NewTask {
            teacher_id: teacher.id,
            teacher_name: teacher.full_name.clone(),
            subject: "Matematika".to_string(),
            class_name: class_name.to_string(),
            task_type: TaskType::Oddiy,
            title: "Tenglamalar".to_string(),
            description: "5 ta misol yeching".to_string(),
            deadline: chrono::Utc::now() + chrono::Duration::days(7),
            pdf_data: None,
        })
        .await
        .expect("task should be created");
    task.id
}

fn submission_for(task_id: i64, student: &User, accuracy: i32) -> NewSubmission {
    NewSubmission {
        task_id,
        student_id: student.id,
        student_name: student.full_name.clone(),
        student_class: student.class_name.clone().unwrap_or_default(),
        file_data: "data:image/jpeg;base64,/9j/AAA=".to_string(),
        file_type: "image/jpeg".to_string(),
        accuracy,
        ai_comment: "To'g'ri yechim tushuntirishi".to_string(),
        alternatives: vec!["usul 1".to_string(), "usul 2".to_string(), "usul 3".to_string()],
    }
}

#[tokio::test]
async fn teacher_registration_provisions_zeroed_rating() {
    let storage = test_storage().await;

    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();

    assert_eq!(storage.count_users(None).await.unwrap(), 1);

    let rating = storage
        .get_rating_by_teacher_id(teacher.id)
        .await
        .unwrap()
        .expect("teacher must have a rating record");
    assert_eq!(rating.counters.excellent, 0);
    assert_eq!(rating.counters.satisfied, 0);
    assert_eq!(rating.counters.unsatisfied, 0);
    assert!(rating.votes_by_class.is_empty());
}

#[tokio::test]
async fn student_registration_has_no_rating_record() {
    let storage = test_storage().await;

    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();

    assert!(storage.get_rating_by_teacher_id(student.id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_fails_and_leaves_users_unchanged() {
    let storage = test_storage().await;

    storage.create_user(student_request("x", "9-A")).await.unwrap();
    let before = storage.count_users(None).await.unwrap();

    let result = storage.create_user(student_request("x", "10-B")).await;
    assert!(result.is_err());

    assert_eq!(storage.count_users(None).await.unwrap(), before);
}

#[tokio::test]
async fn username_lookup_is_case_sensitive_exact_match() {
    let storage = test_storage().await;

    storage.create_user(student_request("bobur", "9-A")).await.unwrap();

    assert!(storage.get_user_by_username("bobur").await.unwrap().is_some());
    assert!(storage.get_user_by_username("Bobur").await.unwrap().is_none());
    assert!(storage.get_user_by_username("bobu").await.unwrap().is_none());
}

#[tokio::test]
async fn vote_increments_global_and_class_counters_together() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();

    assert!(storage.record_vote(teacher.id, "9-A", VoteCategory::Excellent).await.unwrap());
    assert!(storage.record_vote(teacher.id, "9-A", VoteCategory::Excellent).await.unwrap());
    assert!(storage.record_vote(teacher.id, "9-A", VoteCategory::Satisfied).await.unwrap());
    assert!(storage.record_vote(teacher.id, "7-B", VoteCategory::Unsatisfied).await.unwrap());
    assert!(storage.record_vote(teacher.id, "7-B", VoteCategory::Excellent).await.unwrap());

    let rating = storage
        .get_rating_by_teacher_id(teacher.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(rating.counters.excellent, 3);
    assert_eq!(rating.counters.satisfied, 1);
    assert_eq!(rating.counters.unsatisfied, 1);

    // 不变量：全局计数器等于所有班级行的逐列求和
    let class_excellent: i64 = rating.votes_by_class.iter().map(|v| v.counters.excellent).sum();
    let class_satisfied: i64 = rating.votes_by_class.iter().map(|v| v.counters.satisfied).sum();
    let class_unsatisfied: i64 = rating.votes_by_class.iter().map(|v| v.counters.unsatisfied).sum();
    assert_eq!(rating.counters.excellent, class_excellent);
    assert_eq!(rating.counters.satisfied, class_satisfied);
    assert_eq!(rating.counters.unsatisfied, class_unsatisfied);

    // 每个班级恰好一行，首次投票时惰性创建
    assert_eq!(rating.votes_by_class.len(), 2);
    let class_9a = rating
        .votes_by_class
        .iter()
        .find(|v| v.class_name == "9-A")
        .unwrap();
    assert_eq!(class_9a.counters.excellent, 2);
    assert_eq!(class_9a.counters.satisfied, 1);
    assert_eq!(class_9a.counters.unsatisfied, 0);
}

#[tokio::test]
async fn vote_for_unknown_teacher_changes_nothing() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();
    storage.record_vote(teacher.id, "9-A", VoteCategory::Excellent).await.unwrap();

    let recorded = storage
        .record_vote(teacher.id + 1000, "9-A", VoteCategory::Excellent)
        .await
        .unwrap();
    assert!(!recorded);

    // 现有教师的记录原样保留
    let rating = storage
        .get_rating_by_teacher_id(teacher.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rating.counters.excellent, 1);
    assert_eq!(rating.votes_by_class.len(), 1);
    assert!(
        storage
            .get_rating_by_teacher_id(teacher.id + 1000)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn votes_are_not_deduplicated_by_voter() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();

    // 同一来源重复投票：每次调用都是独立的一票
    for _ in 0..5 {
        storage.record_vote(teacher.id, "9-A", VoteCategory::Excellent).await.unwrap();
    }

    let rating = storage
        .get_rating_by_teacher_id(teacher.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rating.counters.excellent, 5);
}

#[tokio::test]
async fn submission_starts_pending_with_oracle_fields_fixed() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();
    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();
    let task_id = create_task_for(&storage, &teacher, "9-A").await;

    let submission = storage
        .create_submission(submission_for(task_id, &student, 78))
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.accuracy, 78);
    assert_eq!(submission.alternatives.len(), 3);
    assert!(submission.teacher_comment.is_none());
    assert!(submission.graded_at.is_none());
}

#[tokio::test]
async fn grade_sets_status_and_comment() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();
    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();
    let task_id = create_task_for(&storage, &teacher, "9-A").await;
    let submission = storage
        .create_submission(submission_for(task_id, &student, 90))
        .await
        .unwrap();

    let updated = storage
        .grade_submission(
            submission.id,
            SubmissionStatus::Approved,
            Some("good job".to_string()),
        )
        .await
        .unwrap();
    assert!(updated);

    let graded = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Approved);
    assert_eq!(graded.teacher_comment.as_deref(), Some("good job"));
    assert!(graded.graded_at.is_some());
}

#[tokio::test]
async fn grade_without_comment_leaves_comment_untouched() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();
    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();
    let task_id = create_task_for(&storage, &teacher, "9-A").await;
    let submission = storage
        .create_submission(submission_for(task_id, &student, 55))
        .await
        .unwrap();

    // 空评语（服务层过滤为 None）不触碰评语列
    let updated = storage
        .grade_submission(submission.id, SubmissionStatus::Approved, None)
        .await
        .unwrap();
    assert!(updated);

    let graded = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Approved);
    assert!(graded.teacher_comment.is_none());
}

#[tokio::test]
async fn terminal_submission_cannot_be_regraded() {
    let storage = test_storage().await;
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();
    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();
    let task_id = create_task_for(&storage, &teacher, "9-A").await;
    let submission = storage
        .create_submission(submission_for(task_id, &student, 40))
        .await
        .unwrap();

    storage
        .grade_submission(
            submission.id,
            SubmissionStatus::Approved,
            Some("good job".to_string()),
        )
        .await
        .unwrap();

    // 二次评分不命中任何行，状态与评语都不变
    let updated = storage
        .grade_submission(
            submission.id,
            SubmissionStatus::Rejected,
            Some("overwrite attempt".to_string()),
        )
        .await
        .unwrap();
    assert!(!updated);

    let graded = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Approved);
    assert_eq!(graded.teacher_comment.as_deref(), Some("good job"));
}

#[tokio::test]
async fn grade_unknown_submission_hits_nothing() {
    let storage = test_storage().await;

    let updated = storage
        .grade_submission(9999, SubmissionStatus::Approved, None)
        .await
        .unwrap();
    assert!(!updated);
}

#[tokio::test]
async fn submissions_list_filters_by_task_owner() {
    let storage = test_storage().await;
    let teacher_a = storage.create_user(teacher_request("karimova")).await.unwrap();
    let teacher_b = storage.create_user(teacher_request("rustamov")).await.unwrap();
    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();

    let task_a = create_task_for(&storage, &teacher_a, "9-A").await;
    let task_b = create_task_for(&storage, &teacher_b, "9-A").await;

    storage.create_submission(submission_for(task_a, &student, 70)).await.unwrap();
    storage.create_submission(submission_for(task_b, &student, 80)).await.unwrap();

    let for_a = storage
        .list_submissions_with_pagination(SubmissionListQuery {
            page: None,
            size: None,
            task_id: None,
            student_id: None,
            teacher_id: Some(teacher_a.id),
            status: None,
        })
        .await
        .unwrap();

    assert_eq!(for_a.items.len(), 1);
    assert_eq!(for_a.items[0].task_id, task_a);
}

#[tokio::test]
async fn end_to_end_submission_lifecycle() {
    let storage = test_storage().await;

    // 学生注册
    let student = storage.create_user(student_request("bobur", "9-A")).await.unwrap();
    assert_eq!(student.class_name.as_deref(), Some("9-A"));

    // 登录路径：按用户名取回
    let fetched = storage.get_user_by_username("bobur").await.unwrap().unwrap();
    assert_eq!(fetched.id, student.id);

    // 教师布置任务，学生提交（评分服务返回 78）
    let teacher = storage.create_user(teacher_request("karimova")).await.unwrap();
    let task_id = create_task_for(&storage, &teacher, "9-A").await;
    let submission = storage
        .create_submission(submission_for(task_id, &student, 78))
        .await
        .unwrap();
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.accuracy, 78);

    // 教师驳回
    let updated = storage
        .grade_submission(
            submission.id,
            SubmissionStatus::Rejected,
            Some("redo part 2".to_string()),
        )
        .await
        .unwrap();
    assert!(updated);

    // 重新读取：终态 + 评语
    let graded = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Rejected);
    assert_eq!(graded.teacher_comment.as_deref(), Some("redo part 2"));

    // 学生报表看得到这次提交
    assert_eq!(storage.count_submissions(Some(student.id)).await.unwrap(), 1);
    let by_student = storage.count_submissions_by_student().await.unwrap();
    assert_eq!(by_student, vec![(student.id, 1)]);
}
