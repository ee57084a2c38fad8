use std::str::FromStr;

use gatehouse_core::AppError;

/// Form actions available on the moderation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationAction {
    /// Marks a pending user as approved.
    Approve,
    /// Removes a pending applicant.
    Decline,
    /// Removes an already-approved user.
    DeleteApproved,
}

impl ModerationAction {
    /// Returns the transport name used by form submissions.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Decline => "decline",
            Self::DeleteApproved => "deleteApproved",
        }
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ModerationAction] = &[
            ModerationAction::Approve,
            ModerationAction::Decline,
            ModerationAction::DeleteApproved,
        ];

        ALL
    }

    /// Returns the message reported to the page when the action fails.
    #[must_use]
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Approve => "Failed to approve user",
            Self::Decline => "Failed to decline user",
            Self::DeleteApproved => "Failed to delete approved user",
        }
    }

    /// Returns the phrase used in operational logs.
    #[must_use]
    pub fn log_label(&self) -> &'static str {
        match self {
            Self::Approve => "approving user",
            Self::Decline => "declining user",
            Self::DeleteApproved => "deleting approved user",
        }
    }

    /// Parses a transport value into an action.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for ModerationAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "approve" => Ok(Self::Approve),
            "decline" => Ok(Self::Decline),
            "deleteApproved" => Ok(Self::DeleteApproved),
            _ => Err(AppError::Validation(format!(
                "unknown moderation action '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModerationAction;

    #[test]
    fn transport_names_parse_back() {
        for action in ModerationAction::all() {
            assert_eq!(ModerationAction::parse(action.as_str()).ok(), Some(*action));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(ModerationAction::parse("delete_approved").is_err());
        assert!(ModerationAction::parse("Approve").is_err());
    }

    #[test]
    fn failure_messages_are_action_specific() {
        assert_eq!(
            ModerationAction::Approve.failure_message(),
            "Failed to approve user"
        );
        assert_eq!(
            ModerationAction::Decline.failure_message(),
            "Failed to decline user"
        );
        assert_eq!(
            ModerationAction::DeleteApproved.failure_message(),
            "Failed to delete approved user"
        );
    }
}
