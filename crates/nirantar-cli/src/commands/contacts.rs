use std::process::Command;

use nirantar_core::models::{find_contact, EmergencyContact};

use crate::app::App;
use crate::commands::common::{is_not_found, print_lines};
use crate::error::CliError;
use crate::views::render_contacts;

pub fn run_contacts(app: &App, call: Option<&str>) -> Result<(), CliError> {
    let Some(query) = call else {
        print_lines(&render_contacts(app.language.current()));
        return Ok(());
    };

    let contact = resolve_contact(query)?;
    println!(
        "{} {} ({})",
        app.t("call"),
        app.t(contact.name_key),
        contact.number
    );
    hand_off_to_dialer(contact)
}

pub fn resolve_contact(query: &str) -> Result<&'static EmergencyContact, CliError> {
    find_contact(query).ok_or_else(|| CliError::UnknownContact(query.trim().to_string()))
}

/// Pass the `tel:` URI to the platform opener. Without one, print the URI so
/// the user can dial by hand.
fn hand_off_to_dialer(contact: &EmergencyContact) -> Result<(), CliError> {
    let uri = contact.dial_uri();
    let (program, args) = platform_opener();

    match Command::new(program).args(args).arg(&uri).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            tracing::warn!("`{program}` exited with status {status} for {uri}");
            println!("{uri}");
            Ok(())
        }
        Err(error) if is_not_found(&error) => {
            tracing::debug!("No dialer handoff available ({program} not found)");
            println!("{uri}");
            Ok(())
        }
        Err(error) => Err(CliError::Io(error)),
    }
}

const fn platform_opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}
