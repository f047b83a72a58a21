use nirantar_core::models::{find_topic, SafetyTopic, SAFETY_TOPICS};

use crate::app::App;
use crate::cli::TipTopic;
use crate::commands::common::print_lines;
use crate::error::CliError;
use crate::views::render_tips;

pub fn run_tips(app: &App, topic: Option<TipTopic>) -> Result<(), CliError> {
    let topics = select_topics(topic)?;
    print_lines(&render_tips(app.language.current(), &topics));
    Ok(())
}

pub fn select_topics(topic: Option<TipTopic>) -> Result<Vec<&'static SafetyTopic>, CliError> {
    match topic {
        None => Ok(SAFETY_TOPICS.iter().collect()),
        Some(topic) => find_topic(topic.id())
            .map(|found| vec![found])
            .ok_or_else(|| CliError::UnknownTopic(topic.id().to_string())),
    }
}
