// UI layer: the interactive prompt sequence, using `dialoguer`. Used
// when the CLI is invoked without a JSON argument.

use dialoguer::Input;

use crate::draft::{clean, PageDraft};
use crate::error::Result;

/// Prompt for the six fields, one by one. Every answer may be left
/// empty; blank answers become `None` and the title default is applied
/// later by the property mapping.
pub fn collect_draft() -> Result<PageDraft> {
    println!("🧠 Création d'une nouvelle entrée Nash Inbox (mode interactif)");
    Ok(PageDraft {
        title: prompt("Titre (obligatoire)")?,
        source: prompt("Source (optionnel)")?,
        type_detected: prompt("Type détecté (optionnel)")?,
        categorie: prompt("Catégorie suggérée (optionnel)")?,
        statut: prompt("Statut (optionnel, ex : À traiter)")?,
        contenu: prompt("Contenu (texte libre, optionnel)")?,
    })
}

/// `Input::interact_text()` prompts the user and returns the raw line;
/// we trim it and treat a blank line as "not provided".
fn prompt(label: &str) -> Result<Option<String>> {
    let raw: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(clean(&raw))
}
