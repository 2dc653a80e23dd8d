//! Deserialization of backend payloads into tasklog entities.

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tasklog_core::entities::{Project, Task, User, VisibleUser};
use tasklog_core::enums::{Role, TaskStatus, TaskType};
use tasklog_core::{Session, UserProfile};

#[test]
fn task_from_backend_row_with_legacy_field_names() {
    let json = r#"{
        "id": 7,
        "user_id": 3,
        "created_by": 1,
        "project_id": 2,
        "task_title": "Fix login",
        "task_details": "401 loop",
        "date": "2024-01-01",
        "start_time": "2024-01-01T09:00:00",
        "end_time": "2024-01-01T10:30:00",
        "task_type": "Customer Interaction",
        "status": "To Be Approved",
        "is_backdated": true,
        "is_approved": false,
        "total_time_minutes": 90.0,
        "reviewer_id": null
    }"#;

    let task: Task = serde_json::from_str(json).expect("task should parse");
    assert_eq!(task.title, "Fix login");
    assert_eq!(task.details.as_deref(), Some("401 loop"));
    assert_eq!(task.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(task.start_time, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    assert_eq!(
        task.end_time,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap())
    );
    assert_eq!(task.task_type, TaskType::CustomerInteraction);
    assert_eq!(task.status, Some(TaskStatus::ToBeApproved));
    assert_eq!(task.total_time_minutes, Some(90.0));
    assert!(task.entered_by_other());
    assert!(task.is_owned_by(3));
}

#[test]
fn task_with_open_end_time_and_minimal_fields() {
    let json = r#"{
        "id": 1, "user_id": 1, "created_by": 1, "project_id": 1,
        "title": "Standup", "start_time": "2024-03-05T08:00:00Z",
        "end_time": null, "task_type": "Internal Discussion", "status": "In Progress"
    }"#;

    let task: Task = serde_json::from_str(json).expect("task should parse");
    assert!(task.end_time.is_none());
    assert!(task.details.is_none());
    assert!(!task.is_backdated);
    assert!(!task.entered_by_other());
}

#[test]
fn task_serializes_utc_timestamps_with_zulu_suffix() {
    let json = r#"{
        "id": 1, "user_id": 1, "created_by": 1, "project_id": 1,
        "title": "Standup", "start_time": "2024-03-05T13:30:00+05:30",
        "task_type": "Review"
    }"#;
    let task: Task = serde_json::from_str(json).expect("task should parse");
    let value = serde_json::to_value(&task).expect("serialize");
    assert_eq!(value["start_time"], "2024-03-05T08:00:00Z");
    assert_eq!(value["task_type"], "Review");
}

#[test]
fn login_profile_and_session() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"id": 4, "name": "Asha", "username": "asha", "role": "TL"}"#)
            .expect("profile should parse");
    assert_eq!(profile.role, Role::TeamLead);

    let session = Session {
        token: "jwt".into(),
        user: profile,
    };
    assert_eq!(session.user_id(), 4);
    assert_eq!(session.role(), Role::TeamLead);

    let stored = serde_json::to_string(&session).expect("serialize");
    let restored: Session = serde_json::from_str(&stored).expect("deserialize");
    assert_eq!(restored, session);
}

#[test]
fn user_directory_records() {
    let user: User = serde_json::from_str(
        r#"{"id": 2, "EmpCode": "E-002", "name": "Ravi", "username": "ravi",
            "department": "QA", "reporting_manager": 9, "TL": 4,
            "role": "Employee", "is_active": true}"#,
    )
    .expect("user should parse");
    assert_eq!(user.emp_code.as_deref(), Some("E-002"));
    assert_eq!(user.team_lead, Some(4));
    assert_eq!(user.role, Role::Employee);

    let visible: Vec<VisibleUser> =
        serde_json::from_str(r#"[{"id": 2, "name": "Ravi", "role": "Employee", "email": null}]"#)
            .expect("visible users should parse");
    assert_eq!(visible.len(), 1);
}

#[test]
fn project_defaults_to_active() {
    let project: Project =
        serde_json::from_str(r#"{"id": 1, "project_name": "Billing"}"#).expect("project");
    assert!(project.is_active);
    assert!(project.project_code.is_none());
}
