//! Client data layer for the RMS shift-scheduling API.
//!
//! Service functions take an [`ApiClient`] and a [`TokenStore`]; they issue one
//! request each and return the backend's envelope as [`models::ApiResponse`].

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod util;

pub use auth::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use client::ApiClient;
pub use config::{ClientConfig, LimitPolicy, ListPaging};
pub use error::{ClientError, ClientResult};
