use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParam, UpdateRoomParam},
};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_by_type;
mod get_room_types;
mod update;
