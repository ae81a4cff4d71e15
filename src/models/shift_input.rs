use serde::{Deserialize, Serialize};

/// Input DTO for creating a new shift
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateShiftReq {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Input DTO for updating an existing shift; the backend replaces every field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateShiftReq {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_active: bool,
}

/// Filter for the shift list.
/// `limit` goes through the configured shift-list paging policy, `offset` is sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetShiftListReq {
    pub show_only_unassigned: bool,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetShiftRequestListReq {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetShiftAssignmentListReq {
    pub user_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateShiftRequestReq {
    pub user_id: i64,
    pub shift_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectShiftRequestReq {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_shift_omits_missing_location() {
        let req = CreateShiftReq {
            date: "2024-01-15T00:00:00Z".to_string(),
            start_time: "2024-01-15T08:00:00Z".to_string(),
            end_time: "2024-01-15T16:00:00Z".to_string(),
            role_id: 2,
            location: None,
        };

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({
                "date": "2024-01-15T00:00:00Z",
                "start_time": "2024-01-15T08:00:00Z",
                "end_time": "2024-01-15T16:00:00Z",
                "role_id": 2
            })
        );
    }
}
