use crate::helpers::MockFoodApi;
use foody_checks::scenario::{self, CheckFailure, STEP_ORDER, Step};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn the_full_scenario_passes_against_a_conforming_service() {
    // Arrange
    let app = MockFoodApi::start().await;
    let client = app.authenticated_client().await;
    app.mount_create(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "foodId": "f-1" })),
    )
    .await;
    // The happy-path edit and delete are consumed once; the later calls to
    // the same routes fall through to the stale-id responses below.
    app.mount_edit_once(
        "f-1",
        ResponseTemplate::new(200).set_body_string("Successfully edited the food revue!"),
    )
    .await;
    app.mount_all(ResponseTemplate::new(200).set_body_json(serde_json::json!(["f-1"])))
        .await;
    app.mount_delete_once(
        "f-1",
        ResponseTemplate::new(200).set_body_string("Deleted successfully!"),
    )
    .await;
    app.mount_edit("f-1", ResponseTemplate::new(404)).await;
    app.mount_edit("55", ResponseTemplate::new(404).set_body_string("No food revues..."))
        .await;
    app.mount_delete(
        "f-1",
        ResponseTemplate::new(400).set_body_string("Unable to delete this food revue!"),
    )
    .await;

    // Act
    let report = scenario::run(&client).await;

    // Assert
    assert!(report.passed(), "{report}");
    assert_eq!(report.outcomes.len(), STEP_ORDER.len());
}

#[tokio::test]
async fn the_scenario_hits_the_service_in_the_declared_order() {
    // Arrange
    let app = MockFoodApi::start().await;
    let client = app.authenticated_client().await;
    app.mount_create(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "foodId": "f-1" })),
    )
    .await;
    app.mount_edit_once(
        "f-1",
        ResponseTemplate::new(200).set_body_string("Successfully edited the food revue!"),
    )
    .await;
    app.mount_all(ResponseTemplate::new(200).set_body_json(serde_json::json!(["f-1"])))
        .await;
    app.mount_delete_once(
        "f-1",
        ResponseTemplate::new(200).set_body_string("Deleted successfully!"),
    )
    .await;
    app.mount_edit("f-1", ResponseTemplate::new(404)).await;
    app.mount_edit("55", ResponseTemplate::new(404).set_body_string("No food revues..."))
        .await;
    app.mount_delete(
        "f-1",
        ResponseTemplate::new(400).set_body_string("Unable to delete this food revue!"),
    )
    .await;

    // Act
    scenario::run(&client).await;

    // Assert
    let requests = app.server.received_requests().await.unwrap();
    let calls: Vec<(String, String)> = requests
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_owned()))
        .collect();
    let expected = [
        ("POST", "/api/User/Authentication"),
        ("POST", "/api/Food/Create"),
        ("PATCH", "/api/Food/Edit/f-1"),
        ("GET", "/api/Food/All"),
        ("DELETE", "/api/Food/Delete/f-1"),
        ("PATCH", "/api/Food/Edit/f-1"),
        ("PATCH", "/api/Food/Edit/55"),
        ("DELETE", "/api/Food/Delete/f-1"),
    ];
    assert_eq!(calls.len(), expected.len());
    for (actual, (method, path)) in calls.iter().zip(expected) {
        assert_eq!(actual.0, method);
        assert_eq!(actual.1, path);
    }
}

#[tokio::test]
async fn a_failed_create_does_not_stop_the_remaining_steps() {
    // Arrange
    let app = MockFoodApi::start().await;
    let client = app.authenticated_client().await;
    app.mount_create(ResponseTemplate::new(400)).await;
    app.mount_all(ResponseTemplate::new(200).set_body_json(serde_json::json!(["f-1"])))
        .await;
    app.mount_edit("55", ResponseTemplate::new(404).set_body_string("No food revues..."))
        .await;

    // Act
    let report = scenario::run(&client).await;

    // Assert
    assert!(!report.passed());
    assert_eq!(report.outcomes.len(), STEP_ORDER.len());
    // The independent steps still ran to completion.
    assert!(report.outcome(Step::ListAllFoods).unwrap().passed());
    assert!(report.outcome(Step::EditUnknownId).unwrap().passed());
    // The dependent steps name the missing id as their failure, not some
    // downstream symptom.
    for step in [
        Step::EditFoodName,
        Step::DeleteFood,
        Step::EditDeletedFood,
        Step::DeleteDeletedFood,
    ] {
        let outcome = report.outcome(step).unwrap();
        assert!(
            matches!(outcome.failures.as_slice(), [CheckFailure::NoCapturedFoodId]),
            "unexpected failures for {:?}: {:?}",
            step,
            outcome.failures
        );
    }
}
