//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers are positive integers handed out by the persistence layer and
//! the enumerated fields (roles, statuses, visa stages) are closed sets that
//! forms parse from their select values.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value is not one of the accepted choices.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(UserId, "Unique identifier for an admin user.");
id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(InquiryId, "Unique identifier for an inbound inquiry.");
id_newtype!(LogEntryId, "Unique identifier for an activity log entry.");

/// Macro to generate closed enumerations backed by their select values.
macro_rules! choice_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $value:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// The select value used by forms and categorical filters.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($value => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(other.to_string())),
                }
            }
        }
    };
}

choice_enum!(UserRole, "Access level granted to an admin user.", {
    Admin => "admin",
    Manager => "manager",
    Consultant => "consultant",
});

choice_enum!(UserStatus, "Whether a user account may sign in.", {
    Active => "active",
    Inactive => "inactive",
});

choice_enum!(ClientKind, "Legal kind of a client.", {
    Individual => "individual",
    Business => "business",
});

choice_enum!(VisaStatus, "Stage of the client's visa application.", {
    NotApplied => "not_applied",
    Pending => "pending",
    InReview => "in_review",
    Approved => "approved",
    Rejected => "rejected",
});

choice_enum!(InquiryStatus, "Handling state of an inbound inquiry.", {
    New => "new",
    InProgress => "in_progress",
    Resolved => "resolved",
});

choice_enum!(ActivityKind, "Kind of change recorded in the activity log.", {
    Created => "created",
    Updated => "updated",
    Deleted => "deleted",
    Replied => "replied",
    Settings => "settings",
});

/// Trims a free-text value, returning `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims and lower-cases an email address.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
