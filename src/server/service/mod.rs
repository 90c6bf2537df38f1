//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing booking, catalog and account rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Holding room locks and transactions for booking creation

pub mod auth;
pub mod availability;
pub mod booking;
pub mod role;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
