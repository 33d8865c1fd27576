//! Login Form Extraction
//!
//! Browsers post the login form either url-encoded or, when built with
//! `FormData`, as multipart. Both carry the same two fields.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Form;

use crate::error::{AdminError, AdminResult};
use crate::presentation::dto::LoginForm;

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            read_multipart(multipart)
                .await
                .map_err(IntoResponse::into_response)
        } else {
            let Form(form) = Form::<LoginForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            Ok(form)
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

async fn read_multipart(mut multipart: Multipart) -> AdminResult<LoginForm> {
    let mut username = None;
    let mut password = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AdminError::InvalidLoginForm(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        let slot = match name.as_deref() {
            Some("username") => &mut username,
            Some("password") => &mut password,
            _ => continue,
        };

        let value = field
            .text()
            .await
            .map_err(|e| AdminError::InvalidLoginForm(e.body_text()))?;
        *slot = Some(value);
    }

    match (username, password) {
        (Some(username), Some(password)) => Ok(LoginForm { username, password }),
        (None, _) => Err(AdminError::InvalidLoginForm(
            "missing field `username`".to_string(),
        )),
        (_, None) => Err(AdminError::InvalidLoginForm(
            "missing field `password`".to_string(),
        )),
    }
}
