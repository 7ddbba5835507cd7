use serde::Serialize;

/// Response DTO for the group listing
#[derive(Debug, Clone, Serialize)]
pub struct GroupListResponse {
    pub groups: Vec<String>,
}
