//! Registered users.
//!
//! Users carry no constraints beyond their identifier. Every profile field is
//! optional free text and is stored exactly as submitted.

use super::entity_id::define_entity_id;

define_entity_id! {
    /// Identifier assigned to a user at registration.
    UserId
}

/// Profile fields submitted when registering a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Login handle.
    pub username: Option<String>,
    /// Contact address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

/// A persisted user.
///
/// # Examples
/// ```
/// use print_broker::domain::{User, UserDraft, UserId};
///
/// let draft = UserDraft {
///     username: Some("ada".into()),
///     ..UserDraft::default()
/// };
/// let user = User::new(UserId::new(1), draft);
/// assert_eq!(user.id().get(), 1);
/// assert_eq!(user.profile().username.as_deref(), Some("ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    profile: UserDraft,
}

impl User {
    /// Pair a storage-assigned identifier with the submitted profile.
    #[must_use]
    pub const fn new(id: UserId, profile: UserDraft) -> Self {
        Self { id, profile }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Profile fields as submitted at registration.
    #[must_use]
    pub const fn profile(&self) -> &UserDraft {
        &self.profile
    }

    /// Split the user into its identifier and profile.
    #[must_use]
    pub fn into_parts(self) -> (UserId, UserDraft) {
        (self.id, self.profile)
    }
}
