use crate::server::AppState;
use crate::templates;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use relay_client::ClientError;
use relay_core::{application_url, Workload};
use serde::{Deserialize, Serialize};

/// Serve the submission form
pub async fn index() -> Html<&'static str> {
    Html(templates::FORM_HTML)
}

/// Fields of the submission form. Absent fields fall back to the empty
/// string; no presence or format validation is performed.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub tenant_url: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub api_token: String,
}

/// Relay one workload-creation request and render the confirmation page.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<Html<String>, SubmitError> {
    let workload = Workload::demo_nginx(form.namespace.as_str());

    state
        .api
        .create_workload(&form.tenant_url, &form.namespace, &form.api_token, &workload)
        .await?;

    let url = application_url(&form.tenant_url, &form.namespace);
    Ok(Html(templates::success_page(&url)))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Submission failure. Every arm of the taxonomy (encoding, request
/// construction, transport, non-200 remote status) is terminal and collapses
/// to a 500 with a short plain-text message; a remote status is echoed in it.
#[derive(Debug)]
pub struct SubmitError(ClientError);

impl From<ClientError> for SubmitError {
    fn from(err: ClientError) -> Self {
        SubmitError(err)
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "workload submission failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
