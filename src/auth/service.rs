//! Auth service (facade over store, hasher and token issuer)

use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{
    config::AuthConfig,
    core::{PasswordService, TokenService},
    errors::AuthError,
    storage::UserStorage,
    types::*,
    validators::is_valid_email,
};

/// Auth service
///
/// Cheap to share behind an `Arc`; all state lives in the storage handle.
pub struct AuthService {
    storage: Arc<dyn UserStorage>,
    token_service: Arc<TokenService>,
    password_service: Arc<PasswordService>,
}

impl AuthService {
    pub fn new<S: UserStorage + 'static>(storage: S, config: &AuthConfig) -> Self {
        Self::with_storage(Arc::new(storage), config)
    }

    /// Build around an already shared storage handle.
    pub fn with_storage(storage: Arc<dyn UserStorage>, config: &AuthConfig) -> Self {
        Self {
            storage,
            token_service: Arc::new(TokenService::new(
                &config.jwt_secret,
                config.token_expiry_minutes,
            )),
            password_service: Arc::new(PasswordService::new(config.password)),
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Register a user
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthOutcome, AuthError> {
        // 1. email format
        if !is_valid_email(&req.email) {
            return Err(AuthError::InvalidEmail);
        }

        // 2. digest
        let Some(password) = req.password else {
            return Err(AuthError::HashingError("no password supplied".to_string()));
        };
        let password_hash = self.hash_password(password).await?;

        // 3. record
        let record = UserRecord::new(req.email, password_hash);
        let user = record.to_public();
        self.storage.append(record).await;

        // 4. token
        let token = self.token_service.issue(user.id)?;

        info!(email = %user.email, "New user registered");
        Ok(AuthOutcome { token, user })
    }

    /// Log a user in
    ///
    /// With duplicate emails in the store the first registered record wins.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthOutcome, AuthError> {
        // 1. lookup
        let record = self
            .storage
            .find_by_email(&req.email)
            .await
            .ok_or(AuthError::UserNotFound)?;

        // 2. password
        let Some(password) = req.password else {
            return Err(AuthError::InvalidCredentials);
        };
        let valid = match self
            .verify_password(password, record.password_hash.clone())
            .await
        {
            Ok(valid) => valid,
            Err(e) => {
                warn!(id = %record.id, error = %e, "stored digest could not be verified");
                false
            }
        };
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        // 3. token
        let token = self.token_service.issue(record.id)?;

        info!(email = %record.email, "User logged in");
        Ok(AuthOutcome {
            token,
            user: record.to_public(),
        })
    }

    /// Every user, in registration order, without digests.
    pub async fn list_users(&self) -> Vec<PublicUser> {
        self.storage
            .list_all()
            .await
            .iter()
            .map(UserRecord::to_public)
            .collect()
    }

    // bcrypt is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.password_service);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AuthError::HashingError(format!("hashing task failed: {e}")))?
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.password_service);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::HashingError(format!("verify task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{config::PasswordConfig, storage::MemoryStorage};

    const SECRET: &str = "unit-check-signing-key-0123456789abcdef";

    fn config() -> AuthConfig {
        AuthConfig {
            password: PasswordConfig { bcrypt_cost: 4 },
            ..AuthConfig::with_secret(SECRET)
        }
    }

    fn service() -> (AuthService, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let service = AuthService::with_storage(storage.clone(), &config());
        (service, storage)
    }

    fn register_req(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: Some(password.to_string()),
        }
    }

    fn login_req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email_without_touching_store() {
        let (service, storage) = service();

        let result = service.register(register_req("notanemail", "password123")).await;

        assert!(matches!(result, Err(AuthError::InvalidEmail)));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (service, storage) = service();

        let registered = service.register(register_req("a@x.com", "p1")).await.unwrap();
        assert_eq!(registered.user.email, "a@x.com");
        assert_eq!(storage.len(), 1);

        let stored = storage.find_by_email("a@x.com").await.unwrap();
        assert_ne!(stored.password_hash, "p1");

        let logged_in = service.login(login_req("a@x.com", "p1")).await.unwrap();
        assert_eq!(logged_in.user, registered.user);

        let tokens = service.token_service();
        let s1 = tokens.verify(&registered.token).unwrap().sub;
        let s2 = tokens.verify(&logged_in.token).unwrap().sub;
        assert_eq!(s1, s2);
        assert_eq!(s1, registered.user.id.to_string());
    }

    #[tokio::test]
    async fn test_login_failures() {
        let (service, _) = service();
        service.register(register_req("a@x.com", "p1")).await.unwrap();

        let wrong = service.login(login_req("a@x.com", "wrong")).await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

        let missing = service.login(login_req("b@x.com", "p1")).await;
        assert!(matches!(missing, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_email_logs_into_first_record() {
        let (service, storage) = service();
        let first = service.register(register_req("dup@x.com", "one")).await.unwrap();
        let second = service.register(register_req("dup@x.com", "two")).await.unwrap();
        assert_ne!(first.user.id, second.user.id);
        assert_eq!(storage.len(), 2);

        let ok = service.login(login_req("dup@x.com", "one")).await.unwrap();
        assert_eq!(ok.user.id, first.user.id);

        // the second record is shadowed by the first
        let shadowed = service.login(login_req("dup@x.com", "two")).await;
        assert!(matches!(shadowed, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_malformed_digest_answers_invalid_credentials() {
        let (service, storage) = service();
        storage
            .append(UserRecord::new("odd@x.com".to_string(), "garbage".to_string()))
            .await;

        let result = service.login(login_req("odd@x.com", "anything")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_hashing_failure_propagates() {
        let storage = Arc::new(MemoryStorage::new());
        let config = AuthConfig {
            password: PasswordConfig { bcrypt_cost: 99 },
            ..AuthConfig::with_secret(SECRET)
        };
        let service = AuthService::with_storage(storage.clone(), &config);

        let result = service.register(register_req("a@x.com", "p1")).await;
        assert!(matches!(result, Err(AuthError::HashingError(_))));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_register_without_password_is_a_hash_error() {
        let (service, storage) = service();

        let result = service
            .register(RegisterRequest {
                email: "a@x.com".to_string(),
                password: None,
            })
            .await;

        assert!(matches!(result, Err(AuthError::HashingError(_))));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_empty_password_is_a_real_password() {
        let (service, _) = service();
        service.register(register_req("empty@x.com", "")).await.unwrap();

        service.login(login_req("empty@x.com", "")).await.unwrap();

        let missing = service
            .login(LoginRequest {
                email: "empty@x.com".to_string(),
                password: None,
            })
            .await;
        assert!(matches!(missing, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_list_users_in_registration_order() {
        let (service, _) = service();
        assert!(service.list_users().await.is_empty());

        service.register(register_req("first@x.com", "p")).await.unwrap();
        service.register(register_req("second@x.com", "p")).await.unwrap();

        let users = service.list_users().await;
        let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["first@x.com", "second@x.com"]);

        let json = serde_json::to_string(&users).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
    }
}
