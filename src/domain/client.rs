//! src/domain/client.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A client row as stored in the `clients` table.
#[derive(serde::Serialize, serde::Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub business_name: String,
    pub created_at: DateTime<Utc>,
}
