//! Domain layer for the duty console.
//!
//! This crate contains:
//! - Domain models (Officer, Duty, VerificationStatus, map view)
//! - Pure services (roster merge, assignment form, dashboard state machine)
//! - Form error types

pub mod models;
pub mod services;
