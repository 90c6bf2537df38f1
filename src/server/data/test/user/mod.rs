use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod get_all;

fn user_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$hash".to_string(),
    }
}
