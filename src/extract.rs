//! Request extractors that report rejections as [AppError].
//!
//! axum's own `Json` and `Query` answer bad input with a plain-text body and,
//! for some JSON errors, status 422. These wrappers send it through
//! `AppError` instead, so clients always get a 400 with a JSON `message`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Deserialized query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
