//! Login action

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::common::ApiError;
use crate::domains::auth::models::User;
use crate::kernel::ServerDeps;

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Exchange a user identifier for a signed session token.
///
/// Unknown or absent identifiers fail with `InvalidCredentials` before the
/// signing secret is consulted. Nothing is recorded server-side.
pub async fn login(id: Option<&str>, deps: &ServerDeps) -> Result<LoginResult, ApiError> {
    let user = match id {
        Some(id) => deps.users.find_user(id).await?,
        None => None,
    };

    let Some(user) = user else {
        warn!("Login rejected for unknown identifier {:?}", id);
        return Err(ApiError::InvalidCredentials);
    };

    let token = deps.jwt()?.create_token(&user)?;

    info!("Issued session token for {} ({})", user.id, user.role);
    Ok(LoginResult { token, user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::Role;
    use crate::kernel::TestDependencies;

    #[tokio::test]
    async fn test_login_known_user() {
        let deps = TestDependencies::new().into_server_deps();

        let result = login(Some("u2"), &deps).await.unwrap();
        assert_eq!(result.user, User::new("u2", Role::Admin));

        let claims = deps.jwt().unwrap().verify_token(&result.token).unwrap();
        assert_eq!(claims.id, "u2");
        assert_eq!(claims.role, "admin");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let deps = TestDependencies::new().into_server_deps();

        let err = login(Some("999"), &deps).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));

        let err = login(None, &deps).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_without_secret() {
        let deps = TestDependencies::new().without_secret().into_server_deps();

        let err = login(Some("u1"), &deps).await.unwrap_err();
        assert!(matches!(err, ApiError::MisconfiguredServer));

        // identity is checked before the secret
        let err = login(Some("nobody"), &deps).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }
}
