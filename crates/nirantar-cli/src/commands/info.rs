use crate::app::App;
use crate::commands::common::print_lines;
use crate::views::render_about;

pub fn run_info(app: &App) {
    print_lines(&render_about(app.language.current()));
}
