//! Data transfer objects exchanged over the REST API.
//!
//! These types define the JSON wire format. Field names are camelCase on the wire
//! so that existing hotel front-ends keep working against this backend.

pub mod api;
pub mod auth;
pub mod booking;
pub mod role;
pub mod room;
pub mod user;
