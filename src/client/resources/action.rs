//! Row-level actions issued from listing tables.
//!
//! Each action is a single independent request. Callers refresh the list after a success;
//! nothing is updated locally beforehand, so a failure needs no rollback.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, ApiTransport},
        error::ClientError,
        list::ListResource,
        session::Session,
    },
    model::{
        freezer::AssignFreezerDto,
        user::{PasswordResetDto, UserStatusDto},
    },
};

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub enum RowAction {
    Delete {
        id: i64,
    },
    /// Replace a row with the given JSON representation.
    Update {
        id: i64,
        body: serde_json::Value,
    },
    AssignFreezer {
        freezer_id: i64,
        client_id: i64,
    },
    UnassignFreezer {
        freezer_id: i64,
    },
    SetUserActive {
        user_id: i64,
        active: bool,
    },
    ResetPassword {
        user_id: i64,
        password: String,
        confirmation: String,
    },
}

impl RowAction {
    /// Local checks run before any request is issued.
    pub fn validate(&self) -> Result<(), ClientError> {
        if let Self::ResetPassword {
            password,
            confirmation,
            ..
        } = self
        {
            if password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(ClientError::Validation(format!(
                    "La contraseña debe tener al menos {} caracteres",
                    MIN_PASSWORD_LENGTH
                )));
            }
            if password != confirmation {
                return Err(ClientError::Validation(
                    "Las contraseñas no coinciden".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Delete { .. } => "delete",
            Self::Update { .. } => "update",
            Self::AssignFreezer { .. } => "assign freezer",
            Self::UnassignFreezer { .. } => "unassign freezer",
            Self::SetUserActive { .. } => "set user status",
            Self::ResetPassword { .. } => "reset password",
        }
    }
}

/// Validates and sends `action` against `resource`.
pub async fn perform_action<R: ListResource, T: ApiTransport>(
    client: &ApiClient<T>,
    resource: &R,
    session: &Session,
    action: &RowAction,
) -> Result<(), ClientError> {
    action.validate()?;

    let result = match action {
        RowAction::Delete { id } => client.delete(session, &resource.item_path(*id)).await,
        RowAction::Update { id, body } => {
            client
                .put(session, &resource.item_path(*id), Some(body))
                .await
        }
        RowAction::AssignFreezer {
            freezer_id,
            client_id,
        } => {
            client
                .put(
                    session,
                    &format!("/freezers/{}/assign", freezer_id),
                    Some(&AssignFreezerDto {
                        client_id: *client_id,
                    }),
                )
                .await
        }
        RowAction::UnassignFreezer { freezer_id } => {
            client
                .put::<()>(session, &format!("/freezers/{}/unassign", freezer_id), None)
                .await
        }
        RowAction::SetUserActive { user_id, active } => {
            client
                .put(
                    session,
                    &format!("/users/{}/status", user_id),
                    Some(&UserStatusDto { active: *active }),
                )
                .await
        }
        RowAction::ResetPassword {
            user_id, password, ..
        } => {
            client
                .put(
                    session,
                    &format!("/users/{}/password", user_id),
                    Some(&PasswordResetDto {
                        password: password.clone(),
                    }),
                )
                .await
        }
    };

    if let Err(err) = &result {
        tracing::error!("Failed to {}: {}", action.name(), err);
    }

    result
}
