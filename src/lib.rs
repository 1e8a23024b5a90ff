//! Plain, editable mirrors of DynamoDB request structures and their
//! conversion to native SDK objects.
//!
//! See [`model`] for the records and the optional-field convention, and
//! [`native`] for the conversion targets. SDK conversion requires the
//! `aws-sdk` feature (on by default).

pub mod error;
pub mod model;
pub mod native;

#[cfg(test)]
mod tests;
