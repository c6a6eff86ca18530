use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::datetime::deserialize_datetime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryDto {
    pub id: i64,
    pub username: String,
    pub action: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub created_at: NaiveDateTime,
}
