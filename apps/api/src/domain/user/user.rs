use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use super::status::UserStatus;
use super::value_objects::Email;

/// Rule a user field failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Field is empty or whitespace only
    Required,
    /// Field is not a valid email address
    Email,
    /// Status value is not one of the known statuses
    StatusRange(i64),
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Required => write!(f, "is required"),
            ValidationRule::Email => write!(f, "must be a valid email address"),
            ValidationRule::StatusRange(value) => write!(
                f,
                "must be 0 (inactive), 1 (active) or 2 (terminated), got {}",
                value
            ),
        }
    }
}

/// First rule violated by a candidate user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {field} {rule}")]
pub struct ValidationError {
    pub field: &'static str,
    pub rule: ValidationRule,
}

impl ValidationError {
    fn new(field: &'static str, rule: ValidationRule) -> Self {
        Self { field, rule }
    }
}

/// Untrusted user payload as sent by API clients
///
/// Missing fields decode to their empty value so that an absent field is
/// reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub id: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub user_status: i64,
}

/// Checks a candidate against the user field constraints
///
/// Rules are checked in field order and the first violation is returned.
/// The `id` is not inspected here; see [`User::existing`].
pub fn validate(candidate: &UserDraft) -> Result<(), ValidationError> {
    let required = [
        ("userName", &candidate.user_name),
        ("firstName", &candidate.first_name),
        ("lastName", &candidate.last_name),
        ("email", &candidate.email),
    ];
    for (field, value) in required {
        require(field, value)?;
    }

    if !Email::is_valid(&candidate.email) {
        return Err(ValidationError::new("email", ValidationRule::Email));
    }

    require("department", &candidate.department)?;

    UserStatus::try_from(candidate.user_status).map_err(|_| {
        ValidationError::new(
            "userStatus",
            ValidationRule::StatusRange(candidate.user_status),
        )
    })?;

    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, ValidationRule::Required))
    } else {
        Ok(())
    }
}

/// A validated member of the roster
///
/// # Invariants
/// - Name fields and department are never blank
/// - Email is well formed
/// - `id` is empty until the repository assigns one on creation
///
/// # Example
/// ```
/// use roster_api::domain::user::{User, UserDraft, UserStatus};
///
/// let user = User::new(UserDraft {
///     user_name: "willi".to_string(),
///     first_name: "john".to_string(),
///     last_name: "peter".to_string(),
///     email: "john@gmaily.com".to_string(),
///     department: "computer".to_string(),
///     user_status: 2,
///     ..Default::default()
/// })
/// .expect("valid user");
///
/// assert!(user.id().is_empty());
/// assert_eq!(user.status(), UserStatus::Terminated);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    user_name: String,
    first_name: String,
    last_name: String,
    email: Email,
    department: String,
    status: UserStatus,
}

impl User {
    /// Builds a user that has not been stored yet
    ///
    /// Any client supplied `id` is discarded; ids are assigned on creation.
    pub fn new(draft: UserDraft) -> Result<Self, ValidationError> {
        Self::validated(UserDraft {
            id: String::new(),
            ..draft
        })
    }

    /// Builds a user that refers to an already stored row
    ///
    /// # Errors
    /// Fails when `id` is blank or any field rule is violated.
    pub fn existing(draft: UserDraft) -> Result<Self, ValidationError> {
        require("id", &draft.id)?;
        Self::validated(draft)
    }

    fn validated(draft: UserDraft) -> Result<Self, ValidationError> {
        validate(&draft)?;

        let email = Email::new(draft.email)
            .map_err(|_| ValidationError::new("email", ValidationRule::Email))?;
        let status = UserStatus::try_from(draft.user_status).map_err(|_| {
            ValidationError::new("userStatus", ValidationRule::StatusRange(draft.user_status))
        })?;

        Ok(Self {
            id: draft.id,
            user_name: draft.user_name,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email,
            department: draft.department,
            status,
        })
    }

    /// Reconstitutes a user from a stored row
    pub fn from_persistence(
        id: String,
        user_name: String,
        first_name: String,
        last_name: String,
        email: Email,
        department: String,
        status: UserStatus,
    ) -> Self {
        Self {
            id,
            user_name,
            first_name,
            last_name,
            email,
            department,
            status,
        }
    }

    /// Returns the user with the id assigned by the store
    ///
    /// Replaces any id the value already carried.
    pub(crate) fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }
}
