pub mod date;

pub use date::{utc_to_local, utc_to_timezone};
