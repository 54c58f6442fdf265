//! Shared utilities and common types for the duty console.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic
//! - Marker palette and per-officer color hash
//! - Bearer token claim inspection

pub mod jwt;
pub mod palette;
pub mod validation;
