use crate::server::data::role::RoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod assign;
mod get_or_create;
