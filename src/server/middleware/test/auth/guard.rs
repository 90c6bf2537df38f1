use super::*;

/// Tests the admin permission for an admin principal.
///
/// Expected: Ok with the same principal
#[test]
fn admin_passes_admin_check() {
    let principal = admin();

    let result = AuthGuard::new(&principal).require(&[Permission::Admin]);

    assert_eq!(result.unwrap().id, principal.id);
}

/// Tests the admin permission for a plain user.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user's ID
#[test]
fn user_fails_admin_check() {
    let principal = guest();

    let result = AuthGuard::new(&principal).require(&[Permission::Admin]);

    assert!(matches!(result, Err(AuthError::AccessDenied(2, _))));
}

/// Tests access to a user's own resources.
///
/// Expected: Ok for the owner and for an admin, Err for anyone else
#[test]
fn self_or_admin_allows_owner_and_admin() {
    let owner = guest();
    let other = Principal {
        id: 3,
        email: "other@hotel.test".to_string(),
        roles: vec!["USER".to_string()],
    };
    let permission = || [Permission::SelfOrAdmin("guest@hotel.test".to_string())];

    assert!(AuthGuard::new(&owner).require(&permission()).is_ok());
    assert!(AuthGuard::new(&admin()).require(&permission()).is_ok());
    assert!(matches!(
        AuthGuard::new(&other).require(&permission()),
        Err(AuthError::AccessDenied(3, _))
    ));
}

/// Tests that an empty permission list only requires authentication.
///
/// Expected: Ok
#[test]
fn empty_permissions_pass() {
    assert!(AuthGuard::new(&guest()).require(&[]).is_ok());
}

/// Tests checking a named role directly.
///
/// Expected: Ok when held, Err(AuthError::AccessDenied) otherwise
#[test]
fn require_role_checks_membership() {
    assert!(require_role(&guest(), "USER").is_ok());
    assert!(matches!(
        require_role(&guest(), "ADMIN"),
        Err(AuthError::AccessDenied(_, _))
    ));
}
