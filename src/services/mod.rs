pub mod auth_service;
pub mod shift_service;
pub mod user_service;

pub use auth_service::{login, register};
pub use shift_service::{
    approve_shift_request, create_shift, create_shift_request, delete_shift, fetch_shift_assignments,
    fetch_shift_requests, fetch_shifts, get_shift, reject_shift_request, update_shift,
};
pub use user_service::fetch_workers;
