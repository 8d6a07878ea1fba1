//! Office attendance tracking for hybrid workers.
//!
//! This crate classifies each day of a month as a working day, weekend or
//! bank holiday, records which working days were attended or taken as annual
//! leave, and computes the monthly attendance rate against a minimum target.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
