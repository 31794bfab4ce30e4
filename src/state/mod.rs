//! Application state module

mod address;
mod app_state;
mod error;
mod forms;

pub use address::*;
pub use app_state::*;
pub use error::*;
pub use forms::*;
