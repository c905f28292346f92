//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Identifier.
    #[schema(example = "usr_XXXXXX")]
    pub id: String,
    /// The user's name.
    #[schema(example = "John")]
    pub name: String,
}

/// Response envelope for the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserList {
    /// A list of users.
    pub data: Vec<User>,
}
