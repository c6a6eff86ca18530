use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub zone_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDto {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    #[serde(default)]
    pub client_count: u32,
}
