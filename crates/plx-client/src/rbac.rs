//! Users, roles and permissions.

use plx_core::entities::{NewRole, NewUser, Permission, Role, User};
use reqwest::Method;

use crate::{ApiClient, ApiError, Query};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_users(&self, limit: Option<u32>) -> Result<Vec<User>, ApiError> {
        let path = Query::new().push_opt("limit", limit).apply("rbac/users");
        self.get_list(&path, "users").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the user.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.send_json(Method::POST, "rbac/users", user).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.get_list("rbac/roles", "roles").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the role.
    pub async fn create_role(&self, role: &NewRole) -> Result<Role, ApiError> {
        self.send_json(Method::POST, "rbac/roles", role).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_permissions(&self) -> Result<Vec<Permission>, ApiError> {
        self.get_list("rbac/permissions", "permissions").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_fixture_parses() {
        let fixture = serde_json::json!([
            {"id": "r-1", "name": "admin", "permissions": ["secrets:read", "secrets:write"]},
            {"id": "r-2", "name": "viewer", "description": "Read only"}
        ]);
        let roles: Vec<Role> = crate::envelope::extract_list(fixture, "roles").unwrap();
        assert_eq!(roles[0].permissions.len(), 2);
        assert!(roles[1].permissions.is_empty());
    }
}
