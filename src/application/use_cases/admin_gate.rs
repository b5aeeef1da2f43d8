use tracing::{debug, warn};

use crate::domain::credentials::{AuthRejection, BasicCredentials};

pub const ADMIN_PATH_PREFIX: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The path is outside the admin area.
    PassThrough,
    Authorized,
    Rejected(AuthRejection),
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, GateDecision::Rejected(_))
    }
}

pub fn is_admin_path(path: &str) -> bool {
    path.starts_with(ADMIN_PATH_PREFIX)
}

pub fn authorize(path: &str, authorization: Option<&str>) -> GateDecision {
    if !is_admin_path(path) {
        return GateDecision::PassThrough;
    }

    let Some(header) = authorization else {
        debug!(path = %path, "Admin request without credentials");
        return GateDecision::Rejected(AuthRejection::MissingHeader);
    };

    match BasicCredentials::from_header(header) {
        Ok(credentials) if credentials.is_admin() => GateDecision::Authorized,
        Ok(credentials) => {
            warn!(path = %path, username = %credentials.username, "Admin credentials rejected");
            GateDecision::Rejected(AuthRejection::CredentialMismatch)
        }
        Err(rejection) => {
            if rejection.is_decode_failure() {
                warn!(path = %path, reason = %rejection, "Failed to decode admin credentials");
            } else {
                debug!(path = %path, reason = %rejection, "Admin credentials rejected");
            }
            GateDecision::Rejected(rejection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn basic(raw: &str) -> String {
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }

    #[test]
    fn test_non_admin_paths_pass_through() {
        for path in ["/", "/checklist", "/processing", "/api/admin", "/robots.txt"] {
            assert_eq!(authorize(path, None), GateDecision::PassThrough);
            assert_eq!(authorize(path, Some("garbage")), GateDecision::PassThrough);
        }
    }

    #[test]
    fn test_admin_credentials_are_authorized() {
        let header = basic("admin:intentemoslo");
        assert_eq!(authorize("/admin", Some(&header)), GateDecision::Authorized);
        assert_eq!(authorize("/admin/events", Some(&header)), GateDecision::Authorized);
    }

    #[test]
    fn test_every_other_payload_is_rejected() {
        let cases = [
            (None, AuthRejection::MissingHeader),
            (Some("Bearer token".to_string()), AuthRejection::UnsupportedScheme),
            (Some("Basic %%%".to_string()), AuthRejection::MalformedBase64),
            (Some(basic("admin")), AuthRejection::MissingSeparator),
            (Some(basic("admin:wrong")), AuthRejection::CredentialMismatch),
            (Some(basic("Admin:intentemoslo")), AuthRejection::CredentialMismatch),
            (Some(basic("admin:intentemoslo ")), AuthRejection::CredentialMismatch),
            (Some(basic(":")), AuthRejection::CredentialMismatch),
        ];
        for (header, expected) in cases {
            let decision = authorize("/admin", header.as_deref());
            assert_eq!(decision, GateDecision::Rejected(expected));
            assert!(!decision.is_allowed());
        }
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/"));
        assert!(is_admin_path("/administrator"));
        assert!(!is_admin_path("/Admin"));
        assert!(!is_admin_path("/checkout/admin"));
    }
}
