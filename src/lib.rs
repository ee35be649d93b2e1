//! Leave Engine for staff leave requests
//!
//! This crate charges leave requests in business days. Weekends and
//! configured public holidays are free, the first and last day of a request
//! may be taken as a half day, and every result carries an audit trace of
//! how the total was reached. When a leave type is given the engine also
//! selects the approval chain its rules require for the charged duration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
