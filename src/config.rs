// Startup configuration: the two secrets the submission needs. Read
// once from the environment (optionally seeded from a local `.env`
// file) and passed down explicitly, never re-read elsewhere.

use crate::error::{NashError, Result};

const GUIDANCE: &str = "ERREUR : NOTION_TOKEN ou NOTION_DATABASE_ID manquants.\n  \
→ Crée un fichier .env avec :\n      \
NOTION_TOKEN=ton_token_secret_notion\n      \
NOTION_DATABASE_ID=ton_id_de_base";

/// Credentials for the Notion API: the integration token and the id
/// of the target database.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub database_id: String,
}

impl Config {
    /// Read `NOTION_TOKEN` and `NOTION_DATABASE_ID`, loading a `.env`
    /// file first when one exists. Missing or blank values are a
    /// fatal startup error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("NOTION_TOKEN").ok(),
            std::env::var("NOTION_DATABASE_ID").ok(),
        )
    }

    fn from_vars(token: Option<String>, database_id: Option<String>) -> Result<Self> {
        match (non_blank(token), non_blank(database_id)) {
            (Some(token), Some(database_id)) => Ok(Config { token, database_id }),
            _ => Err(NashError::Config(GUIDANCE.to_string())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
