//! Role domain model.

use crate::model::role::RoleDto;

/// Name of the role granted to every registered user.
pub const ROLE_USER: &str = "USER";

/// Name of the role required for catalog and administration operations.
pub const ROLE_ADMIN: &str = "ADMIN";

/// Named role that can be assigned to users.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
        }
    }
}
