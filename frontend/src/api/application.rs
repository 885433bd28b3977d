use serde::Deserialize;
use thiserror::Error;

use crate::fetch::endpoints::APPLICATION_LOOKUP;
use crate::fetch::envelope::Envelope;
use crate::fetch::transport::{FetchError, Transport};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    pub status: String,
    #[serde(default, alias = "remarks")]
    pub note: Option<String>,
    #[serde(alias = "date")]
    pub updated_at: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(alias = "documentName")]
    pub name: String,
    #[serde(default, alias = "fileUrl")]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatus {
    pub application_id: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub applicant_name: Option<String>,
    pub status: String,
    #[serde(default, alias = "createdAt")]
    pub submitted_at: Option<String>,
    #[serde(default, alias = "statusHistory")]
    pub history: Vec<StatusEvent>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Please enter your application ID")]
    EmptyId,
    #[error("No application found with ID {0}")]
    NotFound(String),
    #[error("Failed to fetch application status: {0}")]
    Fetch(#[from] FetchError),
}

pub async fn lookup_application<C: Transport>(
    transport: &C,
    base_url: &str,
    application_id: &str,
) -> Result<ApplicationStatus, LookupError> {
    let id = application_id.trim();
    if id.is_empty() {
        return Err(LookupError::EmptyId);
    }

    let url = format!("{}{}/{}", base_url, APPLICATION_LOOKUP, urlencoding::encode(id));
    let response = transport.get(&url).await?;
    if response.status == 404 {
        return Err(LookupError::NotFound(id.to_string()));
    }
    if !response.ok() {
        return Err(FetchError::Http { status: response.status }.into());
    }

    let mut application: ApplicationStatus = Envelope::SuccessFlag.unwrap_one(&response.body)?;
    // ISO-8601 strings sort chronologically
    application
        .history
        .sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    log::info!("Loaded application {} ({})", application.application_id, application.status);
    Ok(application)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::transport::testing::ScriptedTransport;
    use futures::executor::block_on;

    const FOUND: &str = r#"{
        "success": true,
        "data": {
            "applicationId": "GM-2026-0042",
            "serviceName": "FSSAI License",
            "applicantName": "Asha",
            "status": "Under Review",
            "createdAt": "2026-10-01T09:00:00Z",
            "statusHistory": [
                {"status": "Submitted", "updatedAt": "2026-10-01T09:00:00Z"},
                {"status": "Under Review", "remarks": "Documents verified", "updatedAt": "2026-10-03T11:15:00Z"}
            ],
            "documents": [{"documentName": "PAN Card", "fileUrl": "/uploads/pan.pdf", "status": "verified"}]
        }
    }"#;

    #[test]
    fn found_application_is_parsed_newest_first() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::respond(200, FOUND)]);

        let app = block_on(lookup_application(&transport, "", " GM-2026-0042 ")).unwrap();

        assert_eq!(
            transport.requests.borrow()[0],
            "/api/serviceApplications/admin/application/GM-2026-0042"
        );
        assert_eq!(app.status, "Under Review");
        assert_eq!(app.submitted_at.as_deref(), Some("2026-10-01T09:00:00Z"));
        assert_eq!(app.history[0].status, "Under Review");
        assert_eq!(app.history[0].note.as_deref(), Some("Documents verified"));
        assert_eq!(app.documents[0].name, "PAN Card");
    }

    #[test]
    fn id_is_url_encoded() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::respond(404, "")]);
        let _ = block_on(lookup_application(&transport, "", "GM 1/2"));
        assert!(transport.requests.borrow()[0].ends_with("/GM%201%2F2"));
    }

    #[test]
    fn blank_id_is_rejected_locally() {
        let transport = ScriptedTransport::default();
        assert_eq!(
            block_on(lookup_application(&transport, "", "  ")),
            Err(LookupError::EmptyId)
        );
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn not_found_names_the_id() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::respond(404, r#"{"success":false}"#)]);
        let err = block_on(lookup_application(&transport, "", "GM-1")).unwrap_err();
        assert_eq!(err.to_string(), "No application found with ID GM-1");
    }

    #[test]
    fn server_error_and_bad_shape_are_fetch_errors() {
        let transport = ScriptedTransport::new(vec![
            ScriptedTransport::respond(500, ""),
            ScriptedTransport::respond(200, r#"{"success":false,"data":null}"#),
        ]);
        assert_eq!(
            block_on(lookup_application(&transport, "", "GM-1")),
            Err(LookupError::Fetch(FetchError::Http { status: 500 }))
        );
        assert!(matches!(
            block_on(lookup_application(&transport, "", "GM-1")),
            Err(LookupError::Fetch(FetchError::Shape(_)))
        ));
    }
}
