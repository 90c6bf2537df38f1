use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000004_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::RoomId))
                    .col(string(Booking::GuestFullName))
                    .col(string(Booking::GuestEmail))
                    .col(date(Booking::CheckInDate))
                    .col(date(Booking::CheckOutDate))
                    .col(integer(Booking::NumOfAdults))
                    .col(integer(Booking::NumOfChildren))
                    .col(integer(Booking::TotalNumOfGuests))
                    .col(string_uniq(Booking::ConfirmationCode))
                    // Rooms with bookings cannot be deleted out from under them.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_dates")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::CheckInDate)
                    .col(Booking::CheckOutDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    RoomId,
    GuestFullName,
    GuestEmail,
    CheckInDate,
    CheckOutDate,
    NumOfAdults,
    NumOfChildren,
    TotalNumOfGuests,
    ConfirmationCode,
}
