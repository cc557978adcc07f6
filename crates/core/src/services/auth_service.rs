use log::{error, info, warn};

use crate::errors::CoreError;
use crate::models::value::FieldValue;
use crate::models::user::{NewUser, SessionUser, UserRecord, DEFAULT_ROLE};
use crate::providers::traits::UserDirectory;
use crate::security::password::{hash_password, verify_password, KdfParams};

/// Message surfaced for every failed login. Logs carry the actual reason.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Base of the generated placeholder avatar URLs.
const AVATAR_BASE_URL: &str = "https://via.placeholder.com/150";

/// The in-memory login state of one client.
///
/// Nothing is persisted: dropping the session logs the user out.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user, or `NotAuthenticated`.
    pub fn require_user(&self) -> Result<&SessionUser, CoreError> {
        self.user.as_ref().ok_or(CoreError::NotAuthenticated)
    }

    fn set_user(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    fn clear(&mut self) {
        self.user = None;
    }
}

/// Login, logout and registration against an external user directory.
///
/// Passwords are checked against Argon2id hashes stored on the user
/// record; plaintext passwords are never stored or compared.
pub struct AuthService {
    directory: Box<dyn UserDirectory>,
    hashing: KdfParams,
}

impl AuthService {
    pub fn new(directory: Box<dyn UserDirectory>, hashing: KdfParams) -> Self {
        Self { directory, hashing }
    }

    /// Verify credentials and, on success, store the user in `session`.
    ///
    /// Unknown email and wrong password both fail with the same
    /// `Authentication` message.
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, CoreError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(CoreError::ValidationError(
                "Email and password are required".into(),
            ));
        }

        let Some(record) = self.directory.find_by_email(email).await? else {
            warn!("Login failed: user not found for {email}");
            return Err(CoreError::Authentication(INVALID_CREDENTIALS.into()));
        };

        let Some(stored_hash) = record.password_hash.as_deref() else {
            warn!("Login failed: no stored credential for {email}");
            return Err(CoreError::Authentication(INVALID_CREDENTIALS.into()));
        };

        match verify_password(password, stored_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!("Login failed: invalid password for {email}");
                return Err(CoreError::Authentication(INVALID_CREDENTIALS.into()));
            }
            Err(e) => {
                error!("Login failed: unreadable credential for {email}: {e}");
                return Err(CoreError::Authentication(INVALID_CREDENTIALS.into()));
            }
        }

        let user = record.to_session_user();
        info!("Login successful for {}", user.email);
        session.set_user(user.clone());
        Ok(user)
    }

    /// Clear the session. Always succeeds, logged in or not.
    pub fn logout(&self, session: &mut Session) {
        if let Some(user) = session.user() {
            info!("Logout for {}", user.email);
        }
        session.clear();
    }

    /// Create a user in the directory.
    ///
    /// The record gets a millisecond-timestamp id, a placeholder avatar
    /// and a salted hash of the password. The returned record carries no
    /// credential.
    pub async fn register(&self, new_user: NewUser) -> Result<UserRecord, CoreError> {
        let name = new_user.name.trim();
        let email = new_user.email.trim();
        if name.is_empty() || email.is_empty() || new_user.password.is_empty() {
            return Err(CoreError::ValidationError(
                "Name, email and password are required".into(),
            ));
        }

        let record = UserRecord {
            id: FieldValue::Integer(chrono::Utc::now().timestamp_millis()),
            email: email.to_string(),
            name: name.to_string(),
            role: new_user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            avatar: placeholder_avatar_url(random_color()?, name),
            password_hash: Some(hash_password(&new_user.password, &self.hashing)?),
        };

        let mut created = self.directory.create_user(&record).await.map_err(|e| {
            error!("Registration error for {email}: {e}");
            e
        })?;
        created.password_hash = None;

        info!("Registered user {} ({})", created.email, created.id);
        Ok(created)
    }
}

/// Placeholder avatar: coloured square with the name's initial.
///
/// `color` is a 24-bit RGB value rendered as unpadded lowercase hex.
pub fn placeholder_avatar_url(color: u32, name: &str) -> String {
    let initial: String = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    format!(
        "{AVATAR_BASE_URL}/{:x}/FFFFFF?text={initial}",
        color & 0x00FF_FFFF
    )
}

fn random_color() -> Result<u32, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| CoreError::Credential(format!("Failed to generate avatar colour: {e}")))?;
    Ok(u32::from_le_bytes(bytes) % 0x00FF_FFFF)
}
