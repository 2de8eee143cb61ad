use super::Step;
use super::checks::{self, CheckFailure};
use super::context::ScenarioContext;
use crate::client::FoodApiClient;
use crate::domain::{CreatedFood, NewFood, PatchOperation};
use reqwest::StatusCode;

// Literal payloads and confirmation phrases the remote service contracts on.
// The 404/404/400 split across the three failure cases mirrors the service's
// actual behavior and must not be "corrected" to textbook REST semantics.
const CREATE_BODY: NewFood<'static> = NewFood {
    name: "Pizza",
    description: "Delicious",
    url: "",
};
const RENAME_VALUE: &str = "Update food name";
const UNKNOWN_FOOD_ID: &str = "55";
const EDITED_MARKER: &str = "Successfully edited";
const DELETED_MARKER: &str = "Deleted successfully!";
const NO_RESULTS_MARKER: &str = "No food revues...";
const UNDELETABLE_MARKER: &str = "Unable to delete this food revue!";

pub(super) async fn execute(
    step: Step,
    client: &FoodApiClient,
    context: &mut ScenarioContext,
) -> Vec<CheckFailure> {
    match step {
        Step::CreateFood => create_food(client, context).await,
        Step::EditFoodName => edit_food_name(client, context).await,
        Step::ListAllFoods => list_all_foods(client).await,
        Step::DeleteFood => delete_food(client, context).await,
        Step::EditDeletedFood => edit_deleted_food(client, context).await,
        Step::EditUnknownId => edit_unknown_id(client).await,
        Step::DeleteDeletedFood => delete_deleted_food(client, context).await,
    }
}

async fn create_food(client: &FoodApiClient, context: &mut ScenarioContext) -> Vec<CheckFailure> {
    let response = match client.create_food(&CREATE_BODY).await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::CREATED, &response, &mut failures);
    // The id is only worth capturing from a response the service meant as a
    // successful create.
    if response.status() == StatusCode::CREATED {
        match response.json::<CreatedFood>() {
            Ok(created) if !created.food_id.is_empty() => {
                context.created_food_id = Some(created.food_id);
            }
            _ => failures.push(CheckFailure::MissingFoodId),
        }
    }
    failures
}

async fn edit_food_name(
    client: &FoodApiClient,
    context: &mut ScenarioContext,
) -> Vec<CheckFailure> {
    let Some(food_id) = context.food_id() else {
        return vec![CheckFailure::NoCapturedFoodId];
    };
    let patch = [PatchOperation::replace("/name", RENAME_VALUE)];
    let response = match client.edit_food(food_id, &patch).await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::OK, &response, &mut failures);
    checks::expect_body_contains(EDITED_MARKER, &response, &mut failures);
    failures
}

async fn list_all_foods(client: &FoodApiClient) -> Vec<CheckFailure> {
    let response = match client.get_all_foods().await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::OK, &response, &mut failures);
    // The entries themselves are opaque; the contract is only that the
    // collection is a non-empty JSON array.
    match response.json::<Vec<serde_json::Value>>() {
        Ok(foods) if foods.is_empty() => failures.push(CheckFailure::EmptyFoodList),
        Ok(_) => {}
        Err(e) => failures.push(e.into()),
    }
    failures
}

async fn delete_food(client: &FoodApiClient, context: &mut ScenarioContext) -> Vec<CheckFailure> {
    let Some(food_id) = context.food_id() else {
        return vec![CheckFailure::NoCapturedFoodId];
    };
    let response = match client.delete_food(food_id).await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::OK, &response, &mut failures);
    checks::expect_body_contains(DELETED_MARKER, &response, &mut failures);
    failures
}

async fn edit_deleted_food(
    client: &FoodApiClient,
    context: &mut ScenarioContext,
) -> Vec<CheckFailure> {
    let Some(food_id) = context.food_id() else {
        return vec![CheckFailure::NoCapturedFoodId];
    };
    let patch = [PatchOperation::replace("/name", RENAME_VALUE)];
    let response = match client.edit_food(food_id, &patch).await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::NOT_FOUND, &response, &mut failures);
    failures
}

async fn edit_unknown_id(client: &FoodApiClient) -> Vec<CheckFailure> {
    let patch = [PatchOperation::replace("/name", RENAME_VALUE)];
    let response = match client.edit_food(UNKNOWN_FOOD_ID, &patch).await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::NOT_FOUND, &response, &mut failures);
    checks::expect_body_contains(NO_RESULTS_MARKER, &response, &mut failures);
    failures
}

async fn delete_deleted_food(
    client: &FoodApiClient,
    context: &mut ScenarioContext,
) -> Vec<CheckFailure> {
    let Some(food_id) = context.food_id() else {
        return vec![CheckFailure::NoCapturedFoodId];
    };
    let response = match client.delete_food(food_id).await {
        Ok(response) => response,
        Err(e) => return vec![e.into()],
    };
    let mut failures = Vec::new();
    checks::expect_status(StatusCode::BAD_REQUEST, &response, &mut failures);
    checks::expect_body_contains(UNDELETABLE_MARKER, &response, &mut failures);
    failures
}
