use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::datetime::deserialize_datetime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub occurred_at: NaiveDateTime,
    #[serde(default)]
    pub freezer_serial: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub description: String,
}
