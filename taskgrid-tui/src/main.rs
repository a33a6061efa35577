mod app;
mod render;
mod ui;

use std::fs::File;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;

fn main() {
    let log_file = File::create("taskgrid-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");
    info!("starting taskgrid");

    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
}
