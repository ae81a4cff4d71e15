use serde::{Deserialize, Serialize};

use super::common::PaginationMeta;
use crate::util::date;
use crate::ClientResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub role_id: i64,
    #[serde(default)]
    pub role_name: String, // Absent on the single-shift endpoint
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub created_by: String,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_at: Option<String>,
    pub deleted_by: Option<String>,
}

impl Shift {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn local_start(&self, format: Option<&str>) -> ClientResult<String> {
        date::utc_to_local(&self.start_time, format)
    }

    pub fn local_end(&self, format: Option<&str>) -> ClientResult<String> {
        date::utc_to_local(&self.end_time, format)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftListData {
    #[serde(default)]
    pub shifts: Vec<Shift>,
    pub meta: PaginationMeta,
}

/// A worker's confirmed placement on a shift
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftAssignment {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub shift_id: i64,
    pub shift_date: String,
    pub shift_start_time: String,
    pub shift_end_time: String,
    pub shift_role_name: String,
    pub assigned_at: String,
    #[serde(rename = "assigned_by_by")]
    pub assigned_by: String,
    pub created_at: String,
    pub created_by: String,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_at: Option<String>,
    pub deleted_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftAssignmentListData {
    #[serde(default)]
    pub shifts: Vec<ShiftAssignment>,
    pub meta: PaginationMeta,
}
