// API client module: a small blocking HTTP client for the Notion
// "create page" endpoint. One request per process, no retry.

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::Config;
use crate::draft::PageDraft;
use crate::error::{NashError, Result};

const PAGES_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

/// Id shown when the response carries no usable `id` field.
const UNKNOWN_ID: &str = "inconnu";

/// Client holding the reqwest blocking client plus the credentials
/// read at startup.
pub struct NotionClient {
    client: Client,
    token: String,
    database_id: String,
}

/// Body of the create-page request. Fields mirror the Notion API:
/// the parent database reference and the property map.
#[derive(Serialize, Debug)]
struct CreatePageRequest {
    parent: Parent,
    properties: Map<String, Value>,
}

#[derive(Serialize, Debug)]
struct Parent {
    database_id: String,
}

impl NotionClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(NotionClient {
            client,
            token: config.token,
            database_id: config.database_id,
        })
    }

    /// Create one page in the Nash Inbox database. Prints a progress
    /// marker while the request is in flight and a confirmation line
    /// (with the new page id) on success. Any non-2xx answer becomes
    /// `NashError::Api` carrying the status and the response body.
    pub fn create_page(&self, draft: &PageDraft) -> Result<Value> {
        let body = CreatePageRequest {
            parent: Parent {
                database_id: self.database_id.clone(),
            },
            properties: draft.properties(),
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message("📤 Envoi vers Notion...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let res = self
            .client
            .post(PAGES_URL)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send();
        spinner.finish_with_message("📤 Envoi vers Notion...");

        let res = res?;
        let status = res.status();
        if status.is_success() {
            let data: Value = res.json()?;
            println!(
                "✅ Page créée avec succès dans Nash Inbox. ID : {}",
                page_id(&data)
            );
            Ok(data)
        } else {
            let raw = res.text().unwrap_or_default();
            Err(NashError::Api {
                status: status.as_u16(),
                detail: error_detail(&raw),
            })
        }
    }
}

/// Extract the id of the created page, or the "inconnu" marker.
fn page_id(data: &Value) -> &str {
    data.get("id").and_then(Value::as_str).unwrap_or(UNKNOWN_ID)
}

/// Render the error body: the parsed JSON when the body is JSON, the
/// raw text otherwise.
fn error_detail(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(parsed) => format!("Détails : {parsed}"),
        Err(_) => format!("Réponse brute : {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_id_reads_the_id_field() {
        let data = json!({"object": "page", "id": "abc-123"});
        assert_eq!(page_id(&data), "abc-123");
    }

    #[test]
    fn page_id_defaults_when_missing_or_not_a_string() {
        assert_eq!(page_id(&json!({"object": "page"})), UNKNOWN_ID);
        assert_eq!(page_id(&json!({"id": 7})), UNKNOWN_ID);
    }

    #[test]
    fn error_detail_prefers_parsed_json() {
        let detail = error_detail(r#"{"status":401,"message":"API token is invalid."}"#);
        assert!(detail.starts_with("Détails : "));
        assert!(detail.contains("API token is invalid."));
    }

    #[test]
    fn error_detail_falls_back_to_raw_text() {
        let detail = error_detail("<html>Bad Gateway</html>");
        assert_eq!(detail, "Réponse brute : <html>Bad Gateway</html>");
    }

    #[test]
    fn request_body_nests_properties_under_the_database_parent() {
        let draft = PageDraft {
            title: Some("Test".to_string()),
            ..PageDraft::default()
        };
        let body = CreatePageRequest {
            parent: Parent {
                database_id: "db123".to_string(),
            },
            properties: draft.properties(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["parent"]["database_id"], "db123");
        assert_eq!(
            value["properties"]["Source"]["title"][0]["text"]["content"],
            "Test"
        );
    }
}
