pub mod common;
pub mod shift;
pub mod shift_input;
pub mod shift_request;
pub mod user;
pub mod user_input;

pub use common::{ApiFailure, ApiResponse, ErrorMeta, Pagination, PaginationMeta, SUCCESS_MARKER};
pub use shift::{Shift, ShiftAssignment, ShiftAssignmentListData, ShiftListData};
pub use shift_input::{
    CreateShiftReq, CreateShiftRequestReq, GetShiftAssignmentListReq, GetShiftListReq, GetShiftRequestListReq,
    RejectShiftRequestReq, UpdateShiftReq,
};
pub use shift_request::{ShiftRequest, ShiftRequestListData};
pub use user::User;
pub use user_input::{LoginReq, RegisterReq};
