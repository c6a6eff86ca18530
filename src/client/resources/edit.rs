//! Edit forms for freezer and client rows.
//!
//! A form starts from the listed row, keeps the editable fields as entered text and, once
//! submitted, produces a [`RowAction::Update`] carrying the whole row with the edits applied.

use crate::{
    client::{error::ClientError, resources::RowAction},
    model::{client::ClientDto, freezer::FreezerDto},
};

fn required(value: &str, label: &str) -> Result<String, ClientError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::Validation(format!("{} es obligatorio", label)));
    }

    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn update(id: i64, row: &impl serde::Serialize) -> Result<RowAction, ClientError> {
    Ok(RowAction::Update {
        id,
        body: serde_json::to_value(row)?,
    })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FreezerEdit {
    pub serial_number: String,
    pub model: String,
    pub brand: String,
    pub kind: String,
    pub status: String,
    pub capacity_liters: String,
}

impl FreezerEdit {
    pub fn from_row(freezer: &FreezerDto) -> Self {
        Self {
            serial_number: freezer.serial_number.clone(),
            model: freezer.model.clone(),
            brand: freezer.brand.clone(),
            kind: freezer.kind.clone(),
            status: freezer.status.clone(),
            capacity_liters: freezer
                .capacity_liters
                .map(|liters| liters.to_string())
                .unwrap_or_default(),
        }
    }

    /// Applies the form onto `freezer` and builds the `PUT` for it.
    pub fn into_action(self, freezer: &FreezerDto) -> Result<RowAction, ClientError> {
        let capacity_liters = match optional(&self.capacity_liters) {
            Some(liters) => Some(liters.parse::<u32>().map_err(|_| {
                ClientError::Validation("La capacidad debe ser un número entero".to_string())
            })?),
            None => None,
        };

        let edited = FreezerDto {
            serial_number: required(&self.serial_number, "El número de serie")?,
            model: self.model.trim().to_string(),
            brand: self.brand.trim().to_string(),
            kind: self.kind,
            status: required(&self.status, "El estado")?,
            capacity_liters,
            ..freezer.clone()
        };

        update(freezer.id, &edited)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientEdit {
    pub name: String,
    pub kind: String,
    pub tax_id: String,
    pub phone: String,
    pub address: String,
}

impl ClientEdit {
    pub fn from_row(client: &ClientDto) -> Self {
        Self {
            name: client.name.clone(),
            kind: client.kind.clone(),
            tax_id: client.tax_id.clone().unwrap_or_default(),
            phone: client.phone.clone().unwrap_or_default(),
            address: client.address.clone().unwrap_or_default(),
        }
    }

    /// Applies the form onto `client` and builds the `PUT` for it.
    pub fn into_action(self, client: &ClientDto) -> Result<RowAction, ClientError> {
        let edited = ClientDto {
            name: required(&self.name, "El nombre")?,
            kind: self.kind,
            tax_id: optional(&self.tax_id),
            phone: optional(&self.phone),
            address: optional(&self.address),
            ..client.clone()
        };

        update(client.id, &edited)
    }
}
