use crate::api::models::ProcessForm;
use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use std::convert::Infallible;
use tracing::warn;

const FIELD: &str = "ingredients";

/// Reads `ProcessForm` from either an urlencoded or a multipart body.
///
/// An unreadable body counts as no input, so validation reports it.
impl<S> FromRequest<S> for ProcessForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let form = if is_multipart {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await,
                Err(rejection) => {
                    warn!(reason = %rejection, "Rejected multipart body");
                    ProcessForm::default()
                }
            }
        } else {
            match Form::<ProcessForm>::from_request(req, state).await {
                Ok(Form(form)) => form,
                Err(rejection) => {
                    warn!(reason = %rejection, "Rejected form body");
                    ProcessForm::default()
                }
            }
        };

        Ok(form)
    }
}

/// First `ingredients` field wins; other fields are skipped
async fn read_multipart(mut multipart: Multipart) -> ProcessForm {
    let mut form = ProcessForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(reason = %e, "Failed to read multipart field");
                break;
            }
        };

        if field.name() != Some(FIELD) || form.ingredients.is_some() {
            continue;
        }

        match field.text().await {
            Ok(text) => form.ingredients = Some(text),
            Err(e) => {
                warn!(reason = %e, "Failed to read ingredients field");
                break;
            }
        }
    }

    form
}
