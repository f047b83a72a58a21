use nirantar_core::{HelpKind, HelpRequest};

use crate::app::App;
use crate::commands::common::{print_json, print_lines};
use crate::error::CliError;
use crate::views::{render_requests, request_to_list_item, RequestListItem};

/// Which slice of the collection to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestWindow {
    Limit(usize),
    All,
}

pub fn run_requests(
    app: &App,
    kind: Option<HelpKind>,
    window: RequestWindow,
    as_json: bool,
) -> Result<(), CliError> {
    let kinds = kind.map_or_else(|| vec![HelpKind::Need, HelpKind::Offer], |kind| vec![kind]);
    let sections = list_sections(app, &kinds, window)?;

    if as_json {
        let items = sections
            .iter()
            .flat_map(|(_, requests)| requests.iter().map(request_to_list_item))
            .collect::<Vec<RequestListItem>>();
        return print_json(&items);
    }

    for (index, (kind, requests)) in sections.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_lines(&render_requests(app.language.current(), *kind, requests));
    }
    Ok(())
}

pub fn list_sections(
    app: &App,
    kinds: &[HelpKind],
    window: RequestWindow,
) -> Result<Vec<(HelpKind, Vec<HelpRequest>)>, CliError> {
    let limit = match window {
        RequestWindow::Limit(limit) => Some(limit),
        RequestWindow::All => None,
    };
    kinds
        .iter()
        .map(|kind| Ok((*kind, app.requests.list(*kind, limit)?)))
        .collect()
}
