/// A single JSON-Patch operation, as the edit endpoint consumes them.
#[derive(Debug, serde::Serialize)]
pub struct PatchOperation<'a> {
    pub path: &'a str,
    pub op: &'a str,
    pub value: &'a str,
}

impl<'a> PatchOperation<'a> {
    pub fn replace(path: &'a str, value: &'a str) -> Self {
        Self {
            path,
            op: "replace",
            value,
        }
    }
}
