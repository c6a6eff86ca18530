use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::datetime::deserialize_date;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceDto {
    pub id: i64,
    pub freezer_id: i64,
    #[serde(default)]
    pub freezer_serial: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technician: Option<String>,
}
