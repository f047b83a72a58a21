use crate::app::App;
use crate::commands::common::{print_json, print_lines};
use crate::error::CliError;
use crate::views::{render_header, render_status, status_item};

pub fn run_status(app: &App, as_json: bool) -> Result<(), CliError> {
    let state = app.connectivity.state();
    let pending = app.requests.pending_count()?;
    let language = app.language.current();

    if as_json {
        return print_json(&status_item(&state, pending, language));
    }

    print_lines(&render_header(language));
    print_lines(&render_status(language, &state, pending));
    Ok(())
}
