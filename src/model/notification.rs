use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::datetime::deserialize_datetime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub created_at: NaiveDateTime,
    pub read: bool,
}
