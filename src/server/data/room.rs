//! Room data repository for database operations.
//!
//! This module provides the `RoomRepository` for managing the room catalog. It converts
//! between entity models and room domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::room::{CreateRoomParam, Room, UpdateRoomParam};

/// Repository providing database operations for the room catalog.
///
/// Generic over the connection so it can run inside a transaction.
pub struct RoomRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `RoomRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new room.
    ///
    /// # Arguments
    /// - `param` - Room type, price and optional photo bytes
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            room_type: ActiveValue::Set(param.room_type),
            room_price: ActiveValue::Set(param.room_price),
            photo: ActiveValue::Set(param.photo),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Finds a room by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets all rooms ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets all rooms whose type matches exactly, ordered by ID.
    ///
    /// # Arguments
    /// - `room_type` - Room type to match (case-sensitive)
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching rooms (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_by_type(&self, room_type: &str) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomType.eq(room_type))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets the distinct room types in the catalog, sorted alphabetically.
    pub async fn get_room_types(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Room::find()
            .select_only()
            .column(entity::room::Column::RoomType)
            .distinct()
            .order_by_asc(entity::room::Column::RoomType)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Updates a room in place.
    ///
    /// Only fields present in `param` are written; an absent photo keeps the
    /// stored photo.
    ///
    /// # Arguments
    /// - `id` - ID of the room to update
    /// - `param` - Optional new type, price and photo
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The room after the update
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: UpdateRoomParam) -> Result<Option<Room>, DbErr> {
        let Some(existing) = entity::prelude::Room::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = existing.clone().into();
        if let Some(room_type) = param.room_type {
            active.room_type = ActiveValue::Set(room_type);
        }
        if let Some(room_price) = param.room_price {
            active.room_price = ActiveValue::Set(room_price);
        }
        if let Some(photo) = param.photo {
            active.photo = ActiveValue::Set(Some(photo));
        }

        if !active.is_changed() {
            return Ok(Some(Room::from_entity(existing)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Room::from_entity(updated)))
    }

    /// Deletes a room by ID.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rooms deleted (0 or 1)
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   room still has bookings
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
