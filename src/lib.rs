// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the submission flow.
//
// Module responsibilities:
// - `config`: Loads the Notion credentials once at startup.
// - `draft`: The page draft entity, JSON-argument parsing and the
//   mapping to Notion property objects.
// - `api`: Encapsulates the single HTTP interaction with the Notion
//   "create page" endpoint.
// - `ui`: Implements the interactive prompt sequence and hands the
//   collected draft back to the caller.
// - `error`: The error taxonomy shared by all of the above.
//
// Keeping this separation makes it easy to test the mapping logic
// without a terminal or a network connection.
pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod ui;
