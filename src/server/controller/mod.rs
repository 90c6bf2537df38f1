//! HTTP request handlers.
//!
//! Controllers authenticate the caller through the `Principal` extractor, apply
//! `AuthGuard` permissions, convert DTOs to domain parameters, and convert domain
//! results back to DTOs.

pub mod auth;
pub mod booking;
pub mod role;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
