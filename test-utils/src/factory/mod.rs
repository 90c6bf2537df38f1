//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the identifiers of the records they depend
//! on, and `helpers` offers shortcuts that create those dependencies too.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let room = factory::room::create_room(&db).await?;
//!     let booking = factory::booking::create_booking(&db, room.id).await?;
//!
//!     // Create with all dependencies
//!     let (room, booking) = factory::helpers::create_room_with_booking(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let room = factory::room::RoomFactory::new(&db)
//!     .room_type("Suite")
//!     .price(Decimal::new(45000, 2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `room` - Create room entities
//! - `booking` - Create booking entities for an existing room
//! - `user` - Create user entities
//! - `role` - Create roles and user-role assignments
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod helpers;
pub mod role;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use role::{assign_role, create_role};
pub use room::create_room;
pub use user::create_user;
