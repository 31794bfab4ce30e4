//! Lookup and submission workflows driven by the app

mod lookup;
mod submission;

pub use lookup::lookup;
pub use submission::submit;
