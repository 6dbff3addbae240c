// Page draft: the six free-form fields collected from the operator,
// and their mapping onto the Notion property schema of the Nash Inbox
// database:
//   - 'Source'              : title
//   - 'Type détecté'        : select
//   - 'Catégorie suggérée'  : select
//   - 'Statut'              : select
//   - 'Contenu'             : rich text

use serde_json::{json, Map, Value};

use crate::error::{NashError, Result};

/// Title used when both `title` and `source` are absent.
pub const DEFAULT_TITLE: &str = "Sans titre";

/// Example invocation shown whenever the JSON argument is unusable.
pub const USAGE_EXAMPLE: &str = concat!(
    "nash-inbox-cli '{\"title\":\"Test\",\"source\":\"Mail\",",
    "\"type_detected\":\"Email\",\"categorie\":\"Pro\",",
    "\"statut\":\"À traiter\",\"contenu\":\"Texte...\"}'"
);

/// One page to be created, before it is shaped into Notion properties.
/// Every field is optional; blank input normalises to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraft {
    pub title: Option<String>,
    pub source: Option<String>,
    pub type_detected: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub contenu: Option<String>,
}

impl PageDraft {
    /// Parse the single positional argument. The argument must be a
    /// JSON object; the six known keys are read as strings and any
    /// other key (or non-string value) is ignored.
    pub fn from_json(raw: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(raw).map_err(|_| invalid_argument())?;
        if !data.is_object() {
            return Err(invalid_argument());
        }
        let field = |key: &str| clean(data.get(key).and_then(Value::as_str).unwrap_or(""));
        Ok(PageDraft {
            title: field("title"),
            source: field("source"),
            type_detected: field("type_detected"),
            categorie: field("categorie"),
            statut: field("statut"),
            contenu: field("contenu"),
        })
    }

    /// Build the `properties` object of the create-page request.
    ///
    /// The title property is always present: `title`, falling back to
    /// `source`, falling back to [`DEFAULT_TITLE`]. Every other
    /// property is emitted only when its field is set; an absent field
    /// is omitted entirely rather than sent as an empty value. Select
    /// values are passed through as-is, Notion creates unknown options
    /// on the fly.
    pub fn properties(&self) -> Map<String, Value> {
        let mut props = Map::new();

        let title = self
            .title
            .as_deref()
            .or(self.source.as_deref())
            .unwrap_or(DEFAULT_TITLE);
        props.insert(
            "Source".to_string(),
            json!({ "title": [{ "text": { "content": title } }] }),
        );

        if let Some(kind) = &self.type_detected {
            props.insert(
                "Type détecté".to_string(),
                json!({ "select": { "name": kind } }),
            );
        }
        if let Some(categorie) = &self.categorie {
            props.insert(
                "Catégorie suggérée".to_string(),
                json!({ "select": { "name": categorie } }),
            );
        }
        if let Some(statut) = &self.statut {
            props.insert(
                "Statut".to_string(),
                json!({ "select": { "name": statut } }),
            );
        }
        if let Some(contenu) = &self.contenu {
            props.insert(
                "Contenu".to_string(),
                json!({ "rich_text": [{ "text": { "content": contenu } }] }),
            );
        }

        props
    }
}

fn invalid_argument() -> NashError {
    NashError::Input(format!(
        "Argument JSON invalide. Exemple :\n{USAGE_EXAMPLE}"
    ))
}

/// Trim the input and map a blank result to `None`.
pub fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
