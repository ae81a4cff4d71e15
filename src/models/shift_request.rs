use serde::{Deserialize, Serialize};

use super::common::PaginationMeta;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// A worker's request to take a shift, resolved by an admin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftRequest {
    pub id: i64,
    pub user_id: i64,
    pub shift_id: i64,
    pub shift_date: String,
    pub shift_start_time: String,
    pub shift_end_time: String,
    pub shift_role_id: i64,
    pub shift_role_name: String,
    pub status: String,
    pub requested_by: String,
    pub admin_actor: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_at: Option<String>,
    pub deleted_by: Option<String>,
}

impl ShiftRequest {
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_PENDING)
    }

    pub fn is_approved(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_APPROVED)
    }

    pub fn is_rejected(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_REJECTED)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftRequestListData {
    #[serde(default)]
    pub request_shifts: Vec<ShiftRequest>,
    pub meta: PaginationMeta,
}
