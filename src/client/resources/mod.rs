//! Listing views of the console and the lookups they depend on.
//!
//! Each type here is a [`ListResource`]: the collection endpoint, its filter schema and the
//! columns rendered in its table.

pub mod action;
pub mod edit;

pub use action::{perform_action, RowAction};
pub use edit::{ClientEdit, FreezerEdit};

use crate::{
    client::{
        api::{ApiClient, ApiTransport},
        error::ClientError,
        list::{FilterField, ListResource},
        session::{Role, Session},
        util::time::format_timestamp,
    },
    model::{
        audit::AuditEntryDto, client::ClientDto, dashboard::DashboardSummaryDto, event::EventDto,
        freezer::FreezerDto, maintenance::MaintenanceDto, user::UserDto, zone::DepartmentDto,
        zone::ZoneDto,
    },
};

pub const FREEZER_STATUSES: &[&str] = &["Disponible", "Asignado", "Mantenimiento", "Baja"];
pub const FREEZER_TYPES: &[&str] = &["Vertical", "Horizontal", "Exhibidor"];
pub const CLIENT_TYPES: &[&str] = &["Minorista", "Mayorista", "Distribuidor"];
pub const MAINTENANCE_TYPES: &[&str] = &["Preventivo", "Correctivo"];
pub const EVENT_TYPES: &[&str] = &["Alta", "Asignación", "Retiro", "Mantenimiento", "Baja"];
pub const USER_STATUSES: &[&str] = &["Activo", "Inactivo"];
pub const AUDIT_ACTIONS: &[&str] = &["Crear", "Editar", "Eliminar", "Asignar", "Login"];

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or("-")
        .to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreezerList;

impl FreezerList {
    /// Serial number of the listed freezer `id`, for copying to the clipboard.
    pub fn serial_number(&self, rows: &[FreezerDto], id: i64) -> Option<String> {
        rows.iter()
            .find(|freezer| freezer.id == id)
            .map(|freezer| freezer.serial_number.trim())
            .filter(|serial| !serial.is_empty())
            .map(str::to_string)
    }
}

impl ListResource for FreezerList {
    type Row = FreezerDto;

    fn title(&self) -> &'static str {
        "Freezers"
    }

    fn endpoint(&self) -> String {
        "/freezers".to_string()
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[
            FilterField::text("search", "Buscar"),
            FilterField::select("estado", "Estado", FREEZER_STATUSES),
            FilterField::select("tipo", "Tipo", FREEZER_TYPES),
            FilterField::text("zonaId", "Zona"),
        ];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["N° Serie", "Modelo", "Marca", "Tipo", "Estado", "Cliente", "Zona"]
    }

    fn cells(&self, row: &FreezerDto) -> Vec<String> {
        vec![
            row.serial_number.clone(),
            row.model.clone(),
            row.brand.clone(),
            row.kind.clone(),
            row.status.clone(),
            or_dash(row.client_name.as_deref()),
            or_dash(row.zone_name.as_deref()),
        ]
    }

    fn row_id(&self, row: &FreezerDto) -> i64 {
        row.id
    }
}

/// Maintenance history of a single freezer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreezerMaintenanceHistory {
    pub freezer_id: i64,
}

impl ListResource for FreezerMaintenanceHistory {
    type Row = MaintenanceDto;

    fn title(&self) -> &'static str {
        "Historial de mantenimiento"
    }

    fn endpoint(&self) -> String {
        format!("/freezers/{}/maintenance", self.freezer_id)
    }

    fn item_path(&self, id: i64) -> String {
        format!("/maintenance/{}", id)
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[FilterField::select("tipo", "Tipo", MAINTENANCE_TYPES)];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Fecha", "Tipo", "Técnico", "Descripción"]
    }

    fn cells(&self, row: &MaintenanceDto) -> Vec<String> {
        vec![
            row.date.format("%d/%m/%Y").to_string(),
            row.kind.clone(),
            or_dash(row.technician.as_deref()),
            row.description.clone(),
        ]
    }

    fn row_id(&self, row: &MaintenanceDto) -> i64 {
        row.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientList;

impl ListResource for ClientList {
    type Row = ClientDto;

    fn title(&self) -> &'static str {
        "Clientes"
    }

    fn endpoint(&self) -> String {
        "/clients".to_string()
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[
            FilterField::text("search", "Buscar"),
            FilterField::select("tipo", "Tipo", CLIENT_TYPES),
            FilterField::text("zonaId", "Zona"),
        ];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Nombre", "Tipo", "RUC", "Teléfono", "Dirección", "Zona", "Freezers"]
    }

    fn cells(&self, row: &ClientDto) -> Vec<String> {
        vec![
            row.name.clone(),
            row.kind.clone(),
            or_dash(row.tax_id.as_deref()),
            or_dash(row.phone.as_deref()),
            or_dash(row.address.as_deref()),
            or_dash(row.zone_name.as_deref()),
            row.freezer_count.to_string(),
        ]
    }

    fn row_id(&self, row: &ClientDto) -> i64 {
        row.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaintenanceList;

impl ListResource for MaintenanceList {
    type Row = MaintenanceDto;

    fn title(&self) -> &'static str {
        "Mantenimientos"
    }

    fn endpoint(&self) -> String {
        "/maintenance".to_string()
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[
            FilterField::text("search", "Buscar"),
            FilterField::select("tipo", "Tipo", MAINTENANCE_TYPES),
            FilterField::date("fechaDesde", "Desde"),
            FilterField::date("fechaHasta", "Hasta"),
        ];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Fecha", "Freezer", "Tipo", "Técnico", "Descripción"]
    }

    fn cells(&self, row: &MaintenanceDto) -> Vec<String> {
        vec![
            row.date.format("%d/%m/%Y").to_string(),
            row.freezer_serial
                .clone()
                .unwrap_or_else(|| format!("#{}", row.freezer_id)),
            row.kind.clone(),
            or_dash(row.technician.as_deref()),
            row.description.clone(),
        ]
    }

    fn row_id(&self, row: &MaintenanceDto) -> i64 {
        row.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventList;

impl ListResource for EventList {
    type Row = EventDto;

    fn title(&self) -> &'static str {
        "Eventos"
    }

    fn endpoint(&self) -> String {
        "/events".to_string()
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[
            FilterField::text("search", "Buscar"),
            FilterField::select("tipo", "Tipo", EVENT_TYPES),
            FilterField::date("fechaDesde", "Desde"),
            FilterField::date("fechaHasta", "Hasta"),
        ];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Fecha", "Tipo", "Freezer", "Cliente", "Descripción"]
    }

    fn cells(&self, row: &EventDto) -> Vec<String> {
        vec![
            format_timestamp(&row.occurred_at),
            row.kind.clone(),
            or_dash(row.freezer_serial.as_deref()),
            or_dash(row.client_name.as_deref()),
            row.description.clone(),
        ]
    }

    fn row_id(&self, row: &EventDto) -> i64 {
        row.id
    }
}

/// Users of one role; administrators and operators are listed separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserList {
    pub role: Role,
}

impl ListResource for UserList {
    type Row = UserDto;

    fn title(&self) -> &'static str {
        match self.role {
            Role::Administrator => "Administradores",
            Role::Operator => "Operadores",
        }
    }

    fn endpoint(&self) -> String {
        match self.role {
            Role::Administrator => "/users/administrators".to_string(),
            Role::Operator => "/users/operators".to_string(),
        }
    }

    fn item_path(&self, id: i64) -> String {
        format!("/users/{}", id)
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[
            FilterField::text("search", "Buscar"),
            FilterField::select("estado", "Estado", USER_STATUSES),
        ];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Usuario", "Nombre", "Correo", "Estado"]
    }

    fn cells(&self, row: &UserDto) -> Vec<String> {
        vec![
            row.username.clone(),
            row.full_name.clone(),
            or_dash(row.email.as_deref()),
            if row.active { "Activo" } else { "Inactivo" }.to_string(),
        ]
    }

    fn row_id(&self, row: &UserDto) -> i64 {
        row.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditList;

impl ListResource for AuditList {
    type Row = AuditEntryDto;

    fn title(&self) -> &'static str {
        "Auditoría"
    }

    fn endpoint(&self) -> String {
        "/audit".to_string()
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[
            FilterField::text("usuario", "Usuario"),
            FilterField::select("accion", "Acción", AUDIT_ACTIONS),
            FilterField::date("fechaDesde", "Desde"),
            FilterField::date("fechaHasta", "Hasta"),
        ];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Fecha", "Usuario", "Acción", "Entidad", "Detalle"]
    }

    fn cells(&self, row: &AuditEntryDto) -> Vec<String> {
        vec![
            format_timestamp(&row.created_at),
            row.username.clone(),
            row.action.clone(),
            row.entity.clone(),
            or_dash(row.detail.as_deref()),
        ]
    }

    fn row_id(&self, row: &AuditEntryDto) -> i64 {
        row.id
    }
}

/// Zones belonging to one department.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneList {
    pub department_id: i64,
}

impl ListResource for ZoneList {
    type Row = ZoneDto;

    fn title(&self) -> &'static str {
        "Zonas"
    }

    fn endpoint(&self) -> String {
        format!("/departments/{}/zones", self.department_id)
    }

    fn item_path(&self, id: i64) -> String {
        format!("/zones/{}", id)
    }

    fn filters(&self) -> &'static [FilterField] {
        const FILTERS: &[FilterField] = &[FilterField::text("search", "Buscar")];
        FILTERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Zona", "Clientes"]
    }

    fn cells(&self, row: &ZoneDto) -> Vec<String> {
        vec![row.name.clone(), row.client_count.to_string()]
    }

    fn row_id(&self, row: &ZoneDto) -> i64 {
        row.id
    }
}

/// Summary metrics for the dashboard.
pub async fn fetch_dashboard<T: ApiTransport>(
    client: &ApiClient<T>,
    session: &Session,
) -> Result<DashboardSummaryDto, ClientError> {
    client.get(session, "/dashboard").await
}

/// Every department, used to navigate into its zones.
pub async fn fetch_departments<T: ApiTransport>(
    client: &ApiClient<T>,
    session: &Session,
) -> Result<Vec<DepartmentDto>, ClientError> {
    client.get(session, "/departments").await
}
