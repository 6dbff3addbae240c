// Entrypoint for the CLI application.
// - Keeps `main` small: load the config, acquire a draft from the
//   argument or the prompts, submit it once.
// - Every error category maps to exit code 1 with a printed
//   diagnostic; success exits 0.

use std::env;
use std::process::ExitCode;

use nash_inbox_cli::api::NotionClient;
use nash_inbox_cli::config::Config;
use nash_inbox_cli::draft::{PageDraft, USAGE_EXAMPLE};
use nash_inbox_cli::error::{NashError, Result};
use nash_inbox_cli::ui;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Startup precondition: both secrets must be present before any
    // input is read.
    let config = Config::from_env()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let draft = match args.as_slice() {
        [] => ui::collect_draft()?,
        [raw] => PageDraft::from_json(raw)?,
        _ => {
            return Err(NashError::Input(format!(
                "Un seul argument JSON est attendu. Exemple :\n{USAGE_EXAMPLE}"
            )))
        }
    };

    let client = NotionClient::new(config)?;
    client.create_page(&draft)?;
    Ok(())
}
