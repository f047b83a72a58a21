use nirantar_core::{Error, HelpKind, HelpRequest, HelpRequestDraft};

use crate::app::App;
use crate::cli::HelpFormArgs;
use crate::commands::common::print_lines;
use crate::error::CliError;
use crate::views::{render_form_hints, render_submission};

pub fn run_submit(app: &App, kind: HelpKind, form: HelpFormArgs) -> Result<HelpRequest, CliError> {
    let request = match app.requests.submit(draft_from_form(kind, form)) {
        Ok(request) => request,
        Err(Error::Validation(error)) => {
            for line in render_form_hints(app.language.current(), kind, &error) {
                eprintln!("{line}");
            }
            return Err(Error::Validation(error).into());
        }
        Err(error) => return Err(error.into()),
    };

    print_lines(&render_submission(app.language.current(), &request));
    Ok(request)
}

pub fn draft_from_form(kind: HelpKind, form: HelpFormArgs) -> HelpRequestDraft {
    let draft = HelpRequestDraft::new(kind, form.location, form.description)
        .with_urgency(form.urgency.into());
    match form.contact {
        Some(contact) => draft.with_contact(contact),
        None => draft,
    }
}
