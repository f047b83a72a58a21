use nirantar_core::Language;

use crate::app::App;
use crate::error::CliError;

pub fn run_language(app: &mut App, language: Option<Language>) -> Result<(), CliError> {
    if let Some(language) = language {
        app.language.set(language)?;
    }

    let current = app.language.current();
    let name_key = match current {
        Language::En => "english",
        Language::Hi => "hindi",
    };
    println!(
        "{}: {} ({})",
        app.t("language"),
        app.t(name_key),
        current.short_label()
    );
    Ok(())
}
