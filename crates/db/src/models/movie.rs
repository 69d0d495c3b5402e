//! Movie models and DTOs.
//!
//! Column names stay snake_case in SQL; serde renames them to camelCase on
//! the wire. That renaming is the only shaping applied to query results.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A full row from the `movie` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: DbId,
    pub director_id: DbId,
    pub movie_name: String,
    pub lead_actor: String,
}

/// Name-only projection used by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieName {
    pub movie_name: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /movies` and `PUT /movies/{id}`. All fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub director_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub movie_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub lead_actor: String,
}
