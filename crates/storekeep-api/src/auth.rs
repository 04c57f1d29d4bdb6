// Authentication endpoint.
//
// `login` is the only unauthenticated call in the API surface. On
// success the caller decides what to do with the token -- typically
// `ApiClient::set_token` for the live session plus persistence through
// `storekeep-config` (the localStorage counterpart).

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::LoginResponse;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// `POST /api/auth/login` → `{ token, user }`.
    ///
    /// Does NOT store the token on the client; call
    /// [`set_token`](ApiClient::set_token) with the result to
    /// authenticate subsequent requests.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<LoginResponse, Error> {
        let body = LoginRequest {
            email,
            password: password.expose_secret(),
        };

        self.post("auth/login", &body).await.map_err(|e| match e {
            // A 401 on login is bad credentials, not an expired session.
            Error::Unauthorized => Error::Authentication {
                message: "invalid email or password".into(),
            },
            Error::Api { status: 403, message } => Error::Authentication { message },
            other => other,
        })
    }
}
