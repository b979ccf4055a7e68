//! Path and query extractors that reject with the application error body.

use axum::extract::{FromRequestParts, Path, Query};

use crate::errors::AppError;

/// [`Path`] whose rejection renders as a generic bad request.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// [`Query`] whose rejection renders as a generic bad request.
///
/// A repeated parameter (`?search=a&search=b`) is rejected as well.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
