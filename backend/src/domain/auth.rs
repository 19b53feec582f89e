//! Authentication primitives such as login credentials and registration
//! payloads.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{DisplayName, EmailAddress, UserId, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased, and must not be empty.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use leaderboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Ada@Example.com", "password").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_lowercase(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email suitable for credential lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Field of a registration payload that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Name, email, or password was absent or blank.
    MissingField(&'static str),
    /// Display name failed the format rules.
    InvalidName(UserValidationError),
    /// Email failed the format rules.
    InvalidEmail(UserValidationError),
}

impl RegistrationValidationError {
    /// Name of the offending payload field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
            Self::InvalidName(_) => "name",
            Self::InvalidEmail(_) => "email",
        }
    }
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(_) => write!(f, "Please provide name, email, and password"),
            Self::InvalidName(err) | Self::InvalidEmail(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Validated request to create an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    name: DisplayName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl NewAccount {
    /// Validate raw registration inputs. Absent values are treated the same
    /// as blank ones.
    ///
    /// # Examples
    /// ```
    /// use leaderboard::domain::NewAccount;
    ///
    /// let account = NewAccount::try_from_parts(Some("Ada"), Some("ada@example.com"), Some("pw"))
    ///     .expect("valid registration");
    /// assert_eq!(account.name().as_ref(), "Ada");
    /// ```
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, RegistrationValidationError> {
        let name = present(name, "name")?;
        let email = present(email, "email")?;
        let password = password
            .filter(|value| !value.is_empty())
            .ok_or(RegistrationValidationError::MissingField("password"))?;

        Ok(Self {
            name: DisplayName::new(name).map_err(RegistrationValidationError::InvalidName)?,
            email: EmailAddress::new(email).map_err(RegistrationValidationError::InvalidEmail)?,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested display name.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Requested login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password, zeroised on drop.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn present<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, RegistrationValidationError> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(RegistrationValidationError::MissingField(field))
}

/// Opaque password hash, typically a PHC string. Never serialised.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap an encoded hash produced by a credential hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash for persistence.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(..)")
    }
}

/// Stored credential record looked up during login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub user_id: UserId,
    pub password_hash: HashedPassword,
    pub active: bool,
}
