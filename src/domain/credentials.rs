use base64::Engine as _;
use std::fmt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "intentemoslo";
pub const ADMIN_REALM: &str = "Secure Admin Area";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    MissingHeader,
    UnsupportedScheme,
    MalformedBase64,
    InvalidUtf8,
    MissingSeparator,
    CredentialMismatch,
}

impl AuthRejection {
    /// Rejections caused by a payload that could not be decoded at all.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            AuthRejection::MalformedBase64
                | AuthRejection::InvalidUtf8
                | AuthRejection::MissingSeparator
        )
    }
}

impl fmt::Display for AuthRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AuthRejection::MissingHeader => "missing Authorization header",
            AuthRejection::UnsupportedScheme => "Authorization scheme is not Basic",
            AuthRejection::MalformedBase64 => "credentials are not valid base64",
            AuthRejection::InvalidUtf8 => "decoded credentials are not valid UTF-8",
            AuthRejection::MissingSeparator => "decoded credentials have no ':' separator",
            AuthRejection::CredentialMismatch => "username or password does not match",
        };
        f.write_str(reason)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[masked]")
            .finish()
    }
}

impl BasicCredentials {
    /// Parses an `Authorization` header value of the form `Basic <base64(user:pass)>`.
    pub fn from_header(value: &str) -> Result<Self, AuthRejection> {
        let (scheme, payload) = value
            .trim()
            .split_once(' ')
            .ok_or(AuthRejection::UnsupportedScheme)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthRejection::UnsupportedScheme);
        }

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|_| AuthRejection::MalformedBase64)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthRejection::InvalidUtf8)?;

        // Only the first colon separates; passwords may contain more.
        let (username, password) = decoded
            .split_once(':')
            .ok_or(AuthRejection::MissingSeparator)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD
    }
}

pub fn challenge_header() -> String {
    format!("Basic realm=\"{}\"", ADMIN_REALM)
}
