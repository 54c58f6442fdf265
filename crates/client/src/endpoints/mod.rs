//! Trait implementations for [`crate::ApiClient`], one module per resource.

mod auth;
mod duties;
mod officer;
