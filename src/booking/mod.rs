//! Consultation booking: form data, the three-step wizard and the simulated
//! submission.

pub mod form;
pub mod submission;
pub mod wizard;

pub use form::*;
pub use submission::*;
pub use wizard::*;

#[cfg(test)]
mod tests;
