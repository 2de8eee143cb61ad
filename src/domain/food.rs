/// A food revue as the remote service returns it.
///
/// The service capitalizes `Description` on the wire while keeping the other
/// field names lowercase; every field is nullable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FoodDto {
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Request body for creating a food revue.
#[derive(Debug, serde::Serialize)]
pub struct NewFood<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub url: &'a str,
}

/// The relevant slice of a create response: the identifier every dependent
/// call needs.
#[derive(Debug, serde::Deserialize)]
pub struct CreatedFood {
    #[serde(rename = "foodId")]
    pub food_id: String,
}
