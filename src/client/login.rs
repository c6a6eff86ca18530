//! Login and logout flows, the only writers of the session.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, ApiTransport},
        error::ClientError,
        gate::LOGIN_PATH,
        session::{Session, SessionContext, SessionState, SessionStorage},
        store::StateStore,
    },
    model::session::{LoginRequest, LoginResponse},
};

/// Dashboard entry reached after login.
pub const DASHBOARD_PATH: &str = "/";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Rejects blank fields before any request is made.
    pub fn validate(&self) -> Result<LoginRequest, ClientError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ClientError::Validation(
                "Ingrese su usuario".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(ClientError::Validation(
                "Ingrese su contraseña".to_string(),
            ));
        }

        Ok(LoginRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Exchanges credentials for a session without storing it.
pub async fn authenticate<T: ApiTransport>(
    client: &ApiClient<T>,
    credentials: &Credentials,
) -> Result<Session, ClientError> {
    let request = credentials.validate()?;

    let response: LoginResponse = client
        .post(None, "/auth/login", &request)
        .await
        .inspect_err(|err| tracing::warn!("Login failed: {}", err))?;

    Session::new(response.token, response.role)
        .ok_or_else(|| ClientError::Parse("Login response carried an empty token".to_string()))
}

/// Authenticates and, on success, establishes the session.
///
/// On failure the context is left untouched, so storage stays empty for a first login.
pub async fn login<T, S, C>(
    client: &ApiClient<T>,
    context: &mut C,
    credentials: &Credentials,
) -> Result<(), ClientError>
where
    T: ApiTransport,
    S: SessionStorage,
    C: StateStore<SessionContext<S>>,
{
    let session = authenticate(client, credentials).await?;
    context.update(|context| context.establish_session(session));

    Ok(())
}

pub fn logout<S: SessionStorage>(context: &mut SessionContext<S>) {
    context.clear_session();
}

/// Where the login page sends an already authenticated viewer, if anywhere.
pub fn entry_redirect(state: &SessionState) -> Option<&'static str> {
    state.session().map(|_| DASHBOARD_PATH)
}

/// Destination after a successful login: the preserved location when it is an internal
/// path other than the login page itself, otherwise the dashboard.
pub fn post_login_destination(from: &str) -> String {
    let from = from.trim();
    let internal = from.starts_with('/') && !from.starts_with("//");

    if internal && !from.starts_with(LOGIN_PATH) {
        from.to_string()
    } else {
        DASHBOARD_PATH.to_string()
    }
}
