//! Movie catalog constants and policy settings.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// Body returned by `POST /movies` on success.
pub const MOVIE_ADDED: &str = "Movie Successfully Added";

/// Body returned by `PUT /movies/{id}`, whether or not a row matched.
pub const MOVIE_UPDATED: &str = "Movie Details Updated";

/// Body returned by `DELETE /movies/{id}`, whether or not a row matched.
pub const MOVIE_REMOVED: &str = "Movie Removed";

/// How strictly a movie's `director_id` is checked before it is written.
///
/// `Storage` leaves enforcement to the database (foreign keys, if the schema
/// declares them). `Strict` looks the director up first and rejects the write
/// with a validation error when it does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorCheck {
    #[default]
    Storage,
    Strict,
}

impl DirectorCheck {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectorCheck::Storage => "storage",
            DirectorCheck::Strict => "strict",
        }
    }

    /// Whether handlers must verify the director before writing a movie.
    pub fn is_strict(self) -> bool {
        self == DirectorCheck::Strict
    }
}

impl fmt::Display for DirectorCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectorCheck {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "storage" => Ok(DirectorCheck::Storage),
            "strict" => Ok(DirectorCheck::Strict),
            other => Err(CoreError::Validation(format!(
                "unknown director check '{other}', expected 'storage' or 'strict'"
            ))),
        }
    }
}
