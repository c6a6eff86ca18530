//! Session and role gate for protected views.

use crate::client::session::{Role, SessionState};

/// Public login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Destination when the viewer's role may not see a view.
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

/// Outcome of gating a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// The session is still being resolved; render a neutral loading state.
    Loading,
    /// No session; go to the login page, remembering where the viewer was headed.
    RedirectToLogin { from: String },
    /// The viewer's role is not permitted.
    AccessDenied,
    Allow,
}

/// Decides whether the viewer may reach `requested`.
///
/// `allowed_roles` of `None` admits every authenticated role.
pub fn decide(state: &SessionState, allowed_roles: Option<&[Role]>, requested: &str) -> GateDecision {
    let session = match state {
        SessionState::Resolving => return GateDecision::Loading,
        SessionState::Anonymous => {
            return GateDecision::RedirectToLogin {
                from: requested.to_string(),
            }
        }
        SessionState::Authenticated(session) => session,
    };

    match allowed_roles {
        Some(roles) if !roles.contains(&session.role()) => GateDecision::AccessDenied,
        _ => GateDecision::Allow,
    }
}

/// Login URL preserving the requested location.
pub fn login_url(from: &str) -> String {
    if from.is_empty() || from == "/" {
        LOGIN_PATH.to_string()
    } else {
        format!("{}?from={}", LOGIN_PATH, urlencoding::encode(from))
    }
}
