use thiserror::Error;

/// Errors raised when converting a status to or from its persisted form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusCodecError {
    #[error("invalid status {0}")]
    InvalidStatus(i64),

    #[error("invalid status code: {0}")]
    InvalidCode(String),
}

/// Lifecycle status of a user
///
/// Carried as a small integer on the wire (`0`, `1`, `2`) and stored as a
/// single character code (`I`, `A`, `T`) in the `user_status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatus {
    /// User exists but is not active
    Inactive,
    /// User is active
    Active,
    /// User has been terminated
    Terminated,
}

impl UserStatus {
    /// Single character code persisted for this status
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::user::UserStatus;
    ///
    /// assert_eq!(UserStatus::Terminated.code(), "T");
    /// ```
    pub const fn code(self) -> &'static str {
        match self {
            UserStatus::Inactive => "I",
            UserStatus::Active => "A",
            UserStatus::Terminated => "T",
        }
    }

    /// Parses a persisted character code back into a status
    pub fn from_code(code: &str) -> Result<Self, StatusCodecError> {
        match code {
            "I" => Ok(UserStatus::Inactive),
            "A" => Ok(UserStatus::Active),
            "T" => Ok(UserStatus::Terminated),
            other => Err(StatusCodecError::InvalidCode(other.to_string())),
        }
    }
}

impl TryFrom<i64> for UserStatus {
    type Error = StatusCodecError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserStatus::Inactive),
            1 => Ok(UserStatus::Active),
            2 => Ok(UserStatus::Terminated),
            other => Err(StatusCodecError::InvalidStatus(other)),
        }
    }
}
