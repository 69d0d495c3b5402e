//! Director rows. Directors are seeded outside the service and are read-only
//! through the API.

use cinedex_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `director` table, serialized with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub director_id: DbId,
    pub director_name: String,
}
