//! The signed-in user's context, carried in a private cookie.
//!
//! Signing in is handled elsewhere. This module only reads the session and
//! provides [set_session_cookie] for the log-in flow.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key, SameSite},
};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The name of the cookie holding the JSON encoded [Session].
pub const COOKIE_SESSION: &str = "user";

/// The kind of account the user signed in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Who is using the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl Session {
    /// A session for the employee with `email`.
    pub fn employee(email: &str) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.to_owned(),
        }
    }

    /// Whether the user signed in as an employee.
    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}

/// Read the session from `jar`.
///
/// # Errors
///
/// Returns [Error::SessionMissing] if there is no session cookie and
/// [Error::InvalidSession] if the cookie does not hold a session.
pub fn get_session(jar: &PrivateCookieJar) -> Result<Session, Error> {
    let cookie = jar.get(COOKIE_SESSION).ok_or(Error::SessionMissing)?;

    serde_json::from_str(cookie.value()).map_err(|error| Error::InvalidSession(error.to_string()))
}

/// Add the session cookie for `session` to `jar`.
///
/// # Errors
///
/// Returns [Error::JSONSerializationError] if the session cannot be encoded.
pub fn set_session_cookie(
    jar: PrivateCookieJar,
    session: &Session,
) -> Result<PrivateCookieJar, Error> {
    let value = serde_json::to_string(session)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((COOKIE_SESSION, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    ))
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_headers(&parts.headers, Key::from_ref(state));

        get_session(&jar).inspect_err(|error| tracing::debug!("No usable session: {error}"))
    }
}

#[cfg(test)]
mod session_tests {
    use axum_extra::extract::{PrivateCookieJar, cookie::Cookie};

    use crate::{
        Error, create_cookie_key,
        session::{COOKIE_SESSION, Session, UserType, get_session, set_session_cookie},
    };

    fn get_jar() -> PrivateCookieJar {
        PrivateCookieJar::new(create_cookie_key("nafstenoas"))
    }

    #[test]
    fn session_round_trips_through_cookie() {
        let session = Session::employee("a@a");
        let jar = set_session_cookie(get_jar(), &session).expect("Could not set cookie");

        assert_eq!(get_session(&jar), Ok(session));
    }

    #[test]
    fn reads_json_written_by_log_in_page() {
        let jar = get_jar().add(Cookie::new(
            COOKIE_SESSION,
            r#"{"type":"Admin","email":"admin@test.tld"}"#,
        ));

        let session = get_session(&jar).expect("Could not read session");

        assert_eq!(session.user_type, UserType::Admin);
        assert_eq!(session.email, "admin@test.tld");
        assert!(!session.is_employee());
    }

    #[test]
    fn email_is_optional() {
        let jar = get_jar().add(Cookie::new(COOKIE_SESSION, r#"{"type":"Employee"}"#));

        let session = get_session(&jar).expect("Could not read session");

        assert!(session.is_employee());
        assert_eq!(session.email, "");
    }

    #[test]
    fn missing_cookie_is_an_error() {
        assert_eq!(get_session(&get_jar()), Err(Error::SessionMissing));
    }

    #[test]
    fn malformed_cookie_is_an_error() {
        let jar = get_jar().add(Cookie::new(COOKIE_SESSION, "not json"));

        assert!(matches!(get_session(&jar), Err(Error::InvalidSession(_))));
    }
}
