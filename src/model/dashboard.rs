use serde::{Deserialize, Serialize};

/// Summary metrics rendered on the dashboard
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummaryDto {
    pub total_freezers: u64,
    pub available_freezers: u64,
    pub assigned_freezers: u64,
    pub in_maintenance_freezers: u64,
    pub total_clients: u64,
    pub pending_maintenance: u64,
    pub events_today: u64,
}
