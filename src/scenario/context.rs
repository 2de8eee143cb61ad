/// Mutable state threaded through the ordered steps.
///
/// The create step is the only writer; every dependent step reads through
/// [`food_id`], which treats an empty capture the same as a missing one.
///
/// [`food_id`]: ScenarioContext::food_id
#[derive(Debug, Default)]
pub struct ScenarioContext {
    pub created_food_id: Option<String>,
}

impl ScenarioContext {
    pub fn food_id(&self) -> Option<&str> {
        self.created_food_id.as_deref().filter(|id| !id.is_empty())
    }
}
