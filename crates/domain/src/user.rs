//! User and role entities for the approval workflow.

use chrono::{DateTime, Utc};
use gatehouse_core::{AppError, AppResult, NonEmptyString};

/// Opaque identifier of a user record.
///
/// Identifiers are issued by the registration flow and are treated as opaque
/// strings; the only rule enforced here is that they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(NonEmptyString);

impl UserId {
    /// Creates a user identifier from a submitted value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        NonEmptyString::new(value)
            .map(Self)
            .map_err(|_| AppError::Validation("user id must not be empty".to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Approval state of an account. Every user is in exactly one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStatus {
    /// Awaiting moderator approval.
    Pending,
    /// Granted access.
    Approved,
}

impl ApprovalStatus {
    /// Maps the persisted `is_approved` flag to a status.
    #[must_use]
    pub fn from_is_approved(is_approved: bool) -> Self {
        if is_approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }

    /// Returns the persisted `is_approved` flag for this status.
    #[must_use]
    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Returns a stable label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

/// Role attached to a user. Read-only for moderation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: String,
    name: String,
}

impl Role {
    /// Creates a role projection.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// User record with its role loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    display_name: String,
    status: ApprovalStatus,
    role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
        status: ApprovalStatus,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            status,
            role,
            created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the approval status.
    #[must_use]
    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    /// Returns whether the account has been approved.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }

    /// Returns the attached role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this user in the approved state.
    #[must_use]
    pub fn approved(mut self) -> Self {
        self.status = ApprovalStatus::Approved;
        self
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn blank_user_id_is_rejected() {
        assert!(matches!(UserId::new("  "), Err(AppError::Validation(_))));
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn user_id_is_kept_verbatim() {
        let user_id = UserId::new("cl9x0u1").unwrap_or_else(|_| panic!("test"));
        assert_eq!(user_id.as_str(), "cl9x0u1");
        assert_eq!(user_id.to_string(), "cl9x0u1");
    }

    #[test]
    fn approving_a_user_keeps_identity_and_role() {
        let user = User::new(
            UserId::new("u1").unwrap_or_else(|_| panic!("test")),
            "ada@example.com",
            "Ada",
            ApprovalStatus::Pending,
            Role::new("r1", "member"),
            Utc::now(),
        );

        let approved = user.clone().approved();
        assert!(approved.is_approved());
        assert_eq!(approved.id(), user.id());
        assert_eq!(approved.role().name(), "member");
    }

    proptest! {
        #[test]
        fn status_round_trips_through_flag(is_approved in any::<bool>()) {
            let status = ApprovalStatus::from_is_approved(is_approved);
            prop_assert_eq!(status.is_approved(), is_approved);
        }

        #[test]
        fn non_blank_ids_are_accepted(value in "[A-Za-z0-9_-]{1,32}") {
            let user_id = UserId::new(value.clone());
            prop_assert!(user_id.is_ok());
        }
    }
}
