// Error taxonomy for the whole CLI. Every failure terminates the
// process, but the categories stay distinct so the entry point (and
// the tests) can tell a bad `.env` from a bad argument from a bad
// response.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NashError {
    /// Missing or empty credentials at startup. Carries the full
    /// guidance text shown to the operator.
    #[error("{0}")]
    Config(String),

    /// Malformed JSON argument or wrong argument count. Carries a
    /// usage example.
    #[error("{0}")]
    Input(String),

    /// The Notion API answered with a non-2xx status.
    #[error("Erreur lors de la création de la page.\nCode HTTP : {status}\n{detail}")]
    Api { status: u16, detail: String },

    /// The request never completed (connectivity, TLS, ...). Kept
    /// separate from `Api` even though both exit with code 1.
    #[error("Erreur réseau : {0}")]
    Transport(#[from] reqwest::Error),

    /// Terminal I/O failure while prompting.
    #[error("Erreur de saisie : {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_status_and_detail() {
        let err = NashError::Api {
            status: 401,
            detail: "Détails : {\"message\":\"API token is invalid.\"}".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Code HTTP : 401"));
        assert!(rendered.contains("API token is invalid."));
    }
}
