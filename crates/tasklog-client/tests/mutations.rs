//! Create, edit, and status transitions against a loopback backend.

mod support;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{Canned, MockServer, session, task_json};
use tasklog_client::{ClientError, FormField, TaskForm};
use tasklog_core::enums::{Role, TaskType};

fn at(raw: &str) -> Option<DateTime<chrono::FixedOffset>> {
    Some(DateTime::parse_from_rfc3339(raw).expect("timestamp"))
}

#[tokio::test]
async fn backdated_create_sends_derived_fields() {
    let server = MockServer::start(vec![Canned::json(
        200,
        &task_json(40, "Client call", 3, "2024-01-01T09:00:00"),
    )]);
    let client = server.client(Some(session(2, Role::Manager)));
    let form = TaskForm {
        project_id: Some(3),
        title: "Client call".into(),
        details: "Quarterly review".into(),
        task_type: Some(TaskType::CustomerInteraction),
        start_time: at("2024-01-01T14:30:00+05:30"),
        end_time: at("2024-01-01T16:00:00+05:30"),
        user_id: Some(11),
        backdated: true,
        ..TaskForm::default()
    };

    let task = client.create_task(&form).await.expect("create");
    assert_eq!(task.id, 40);

    let request = server.only_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/api/tasks/create");
    assert_eq!(
        request.json(),
        json!({
            "user_id": 11,
            "created_by": 2,
            "project_id": 3,
            "title": "Client call",
            "details": "Quarterly review",
            "task_type": "Customer Interaction",
            "date": "2024-01-01",
            "start_time": "2024-01-01T09:00:00Z",
            "end_time": "2024-01-01T10:30:00Z",
            "reviewer_id": null,
            "is_backdated": true,
            "status": "To Be Approved",
            "total_time_minutes": 90
        })
    );
}

#[tokio::test]
async fn invalid_form_is_rejected_locally() {
    let server = MockServer::start(Vec::new());
    let client = server.client(Some(session(7, Role::Employee)));
    let form = TaskForm {
        title: "Half filled".into(),
        backdated: true,
        ..TaskForm::default()
    };

    let err = client.create_task(&form).await.expect_err("invalid");
    match err {
        ClientError::Validation(validation) => assert_eq!(
            validation.fields,
            vec![
                FormField::ProjectId,
                FormField::TaskType,
                FormField::StartTime,
                FormField::EndTime
            ]
        ),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn create_requires_a_session() {
    let server = MockServer::start(Vec::new());
    let client = server.client(None);

    let err = client
        .create_task(&TaskForm::default())
        .await
        .expect_err("anonymous");
    assert!(matches!(err, ClientError::Session(_)));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn server_rejection_detail_is_verbatim() {
    let server = MockServer::start(vec![Canned::json(
        400,
        &json!({"detail": "You can only add 2 backdated tasks per month"}),
    )]);
    let client = server.client(Some(session(7, Role::Employee)));
    let form = TaskForm {
        project_id: Some(1),
        title: "Late entry".into(),
        task_type: Some(TaskType::Testing),
        start_time: at("2024-01-01T09:00:00Z"),
        end_time: at("2024-01-01T09:45:00Z"),
        backdated: true,
        ..TaskForm::default()
    };

    let err = client.create_task(&form).await.expect_err("rejected");
    assert_eq!(
        err.user_message(),
        "You can only add 2 backdated tasks per month"
    );
    assert_eq!(server.only_request().json()["user_id"], 7);
}

#[tokio::test]
async fn edit_puts_to_task_path() {
    let server = MockServer::start(vec![Canned::json(
        200,
        &task_json(9, "Renamed", 1, "2024-03-01T09:00:00"),
    )]);
    let client = server.client(Some(session(7, Role::Employee)));
    let form = TaskForm {
        project_id: Some(1),
        title: "Renamed".into(),
        task_type: Some(TaskType::Development),
        start_time: at("2024-03-01T09:00:00Z"),
        ..TaskForm::default()
    };

    let task = client.edit_task(9, &form).await.expect("edit");
    assert_eq!(task.title, "Renamed");

    let request = server.only_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path(), "/api/tasks/9/edit");
    assert_eq!(request.json()["status"], "In Progress");
    assert_eq!(request.json()["total_time_minutes"], 0);
}

#[tokio::test]
async fn complete_passes_optional_end_time() {
    let mut done = task_json(5, "Ship it", 1, "2024-03-01T09:00:00");
    done["status"] = json!("Done");
    done["end_time"] = json!("2024-03-01T12:00:00");
    let server = MockServer::start(vec![Canned::json(200, &done), Canned::json(200, &done)]);
    let client = server.client(Some(session(7, Role::Employee)));

    let end = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let task = client.complete_task(5, Some(end)).await.expect("complete");
    assert_eq!(task.end_time, Some(end));
    client.complete_task(5, None).await.expect("complete");

    let requests = server.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path(), "/api/tasks/5/complete");
    assert_eq!(
        requests[0].query_pairs(),
        vec![("end_time".to_string(), "2024-03-01T12:00:00Z".to_string())]
    );
    assert!(requests[1].query_pairs().is_empty());
}

#[tokio::test]
async fn approve_and_delete_hit_their_endpoints() {
    let mut approved = task_json(6, "Backfill", 1, "2024-02-01T09:00:00");
    approved["status"] = json!("Approved");
    approved["is_approved"] = json!(true);
    let server = MockServer::start(vec![
        Canned::json(200, &approved),
        Canned::json(200, &json!({"message": "Task deleted"})),
    ]);
    let client = server.client(Some(session(2, Role::Manager)));

    let task = client.approve_task(6).await.expect("approve");
    assert!(task.is_approved);
    client.delete_task(6).await.expect("delete");

    let requests = server.requests();
    assert_eq!(
        requests
            .iter()
            .map(|r| (r.method.as_str(), r.path()))
            .collect::<Vec<_>>(),
        vec![("PUT", "/api/tasks/6/approve"), ("DELETE", "/api/tasks/6")]
    );
}
