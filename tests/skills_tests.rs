mod test_utils;

use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::{go_course, TestApp};

#[actix_rt::test]
async fn test_create_skill_applies_defaults() {
    let app = TestApp::spawn().await;

    let response = app.create_skill(&go_course()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["skill_name"], "Go");
    assert_eq!(body["resource_type"], "course");
    assert_eq!(body["platform"], "Udemy");
    assert_eq!(body["progress"], "started");
    assert_eq!(body["hours_spent"], 0.0);
    assert_eq!(body["difficulty"], 1);
    assert!(body["notes"].is_null());
}

#[actix_rt::test]
async fn test_create_skill_keeps_notes() {
    let app = TestApp::spawn().await;

    let skill = app
        .insert_skill(&json!({
            "skill_name": "SQL",
            "resource_type": "book",
            "platform": "O'Reilly",
            "notes": "window functions"
        }))
        .await;

    assert_eq!(skill.notes.as_deref(), Some("window functions"));
}

#[actix_rt::test]
async fn test_created_skill_appears_once_in_listing() {
    let app = TestApp::spawn().await;
    assert!(app.list_skills().await.is_empty());

    let created = app.insert_skill(&go_course()).await;

    let skills = app.list_skills().await;
    assert_eq!(skills.iter().filter(|s| s.id == created.id).count(), 1);
    assert_eq!(skills[0], created);
}

#[actix_rt::test]
async fn test_listing_is_ordered_and_repeatable() {
    let app = TestApp::spawn().await;

    let first = app.insert_skill(&go_course()).await;
    let second = app
        .insert_skill(&json!({"skill_name": "Rust", "resource_type": "book", "platform": "No Starch"}))
        .await;

    let listing = app.list_skills().await;
    assert_eq!(listing, vec![first, second]);
    assert_eq!(app.list_skills().await, listing);
}

#[actix_rt::test]
async fn test_missing_required_field_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .create_skill(&json!({"skill_name": "Go", "resource_type": "course"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(app.list_skills().await.is_empty());
}

#[actix_rt::test]
async fn test_overlong_skill_name_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .create_skill(&json!({
            "skill_name": "x".repeat(101),
            "resource_type": "course",
            "platform": "Udemy"
        }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "skill_name");
}

#[actix_rt::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/skills"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_partial_update_changes_only_named_fields() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let response = app.update_skill(created.id, &json!({"progress": "done"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], created.id);
    assert_eq!(body["progress"], "done");
    assert_eq!(body["platform"], "Udemy");
    assert_eq!(body["skill_name"], "Go");
    assert_eq!(body["hours_spent"], 0.0);
}

#[actix_rt::test]
async fn test_update_sets_several_fields_at_once() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let response = app
        .update_skill(
            created.id,
            &json!({"hours_spent": 12.5, "difficulty": 4, "notes": "goroutines"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = app.list_skills().await.remove(0);
    assert_eq!(stored.hours_spent, 12.5);
    assert_eq!(stored.difficulty, 4);
    assert_eq!(stored.notes.as_deref(), Some("goroutines"));
    assert_eq!(stored.progress, "started");
}

#[actix_rt::test]
async fn test_update_can_clear_nullable_column() {
    let app = TestApp::spawn().await;
    let created = app
        .insert_skill(&json!({
            "skill_name": "Go",
            "resource_type": "course",
            "platform": "Udemy",
            "notes": "channels"
        }))
        .await;

    let response = app.update_skill(created.id, &json!({"notes": null})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert!(body["notes"].is_null());
}

#[actix_rt::test]
async fn test_update_rejects_null_for_required_column() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let response = app.update_skill(created.id, &json!({"progress": null})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.list_skills().await[0].progress, "started");
}

#[actix_rt::test]
async fn test_update_rejects_unknown_key() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let response = app
        .update_skill(created.id, &json!({"progress": "done", "favourite": true}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
    assert_eq!(app.list_skills().await[0], created);
}

#[actix_rt::test]
async fn test_update_accepts_echoed_record() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let mut echoed = serde_json::to_value(&created).unwrap();
    echoed["progress"] = json!("halfway");

    let response = app.update_skill(created.id, &echoed).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["progress"], "halfway");
    assert_eq!(body["id"], created.id);
}

#[actix_rt::test]
async fn test_update_rejects_changed_id() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let response = app
        .update_skill(created.id, &json!({"id": created.id + 100, "progress": "done"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.list_skills().await[0].id, created.id);
}

#[actix_rt::test]
async fn test_update_of_missing_skill_returns_404() {
    let app = TestApp::spawn().await;

    let response = app.update_skill(4242, &json!({"progress": "done"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Skill not found"}));
}

#[actix_rt::test]
async fn test_delete_removes_skill() {
    let app = TestApp::spawn().await;
    let created = app.insert_skill(&go_course()).await;

    let response = app.delete_skill(created.id).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.text().await.unwrap().is_empty());

    assert!(app.list_skills().await.iter().all(|s| s.id != created.id));

    let again = app.delete_skill(created.id).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    let body: Value = again.json().await.unwrap();
    assert_eq!(body, json!({"error": "Skill not found"}));

    let update = app.update_skill(created.id, &json!({"progress": "done"})).await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = TestApp::spawn().await;
    let first = app.insert_skill(&go_course()).await;

    app.delete_skill(first.id).await;

    let second = app.insert_skill(&go_course()).await;
    assert!(second.id > first.id);
}

#[actix_rt::test]
async fn test_non_numeric_id_is_not_routed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .delete(app.url("/skills/abc"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_trailing_slash_is_accepted() {
    let app = TestApp::spawn().await;
    app.insert_skill(&go_course()).await;

    let response = app.client.get(app.url("/skills/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 1);
}

#[actix_rt::test]
async fn test_table_is_recreated_on_next_request() {
    let app = TestApp::spawn().await;
    app.insert_skill(&go_course()).await;

    sqlx::query("DROP TABLE skill")
        .execute(&app.db_pool)
        .await
        .unwrap();

    assert!(app.list_skills().await.is_empty());

    let created = app.insert_skill(&go_course()).await;
    assert_eq!(app.list_skills().await, vec![created]);
}

#[actix_rt::test]
async fn test_long_notes_are_stored_and_updated() {
    let app = TestApp::spawn().await;
    let notes = "n".repeat(3 * 1024 * 1024);

    let response = app
        .create_skill(&json!({
            "skill_name": "Go",
            "resource_type": "course",
            "platform": "Udemy",
            "notes": notes
        }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.unwrap();
    assert_eq!(created["notes"].as_str().map(str::len), Some(notes.len()));

    let longer = "m".repeat(4 * 1024 * 1024);
    let id = created["id"].as_i64().unwrap();
    let response = app.update_skill(id, &json!({"notes": longer})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = app.list_skills().await.remove(0);
    assert_eq!(stored.notes.map(|n| n.len()), Some(longer.len()));
}
