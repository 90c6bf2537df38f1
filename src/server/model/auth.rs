//! Authenticated principal and login parameters.

use crate::server::model::role::ROLE_ADMIN;

/// Identity attached to an authenticated request.
///
/// Built from a verified token; role names are taken from the token claims as
/// they were when the token was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub id: i32,
    pub email: String,
    pub roles: Vec<String>,
}

impl Principal {
    /// Returns whether the principal holds the named role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<crate::model::auth::RegisterUserDto> for RegisterParam {
    fn from(dto: crate::model::auth::RegisterUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_admin_role() {
        let principal = Principal {
            id: 1,
            email: "admin@example.com".to_string(),
            roles: vec!["USER".to_string(), "ADMIN".to_string()],
        };

        assert!(principal.is_admin());
        assert!(principal.has_role("USER"));
    }

    #[test]
    fn plain_user_is_not_admin() {
        let principal = Principal {
            id: 2,
            email: "guest@example.com".to_string(),
            roles: vec!["USER".to_string()],
        };

        assert!(!principal.is_admin());
    }
}
