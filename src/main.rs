use ReactViz::Simulation::simulation_task::ReactionTask;
use ReactViz::cli::cli_main::run_interactive_menu;
use ReactViz::error::ReactVizError;
use ReactViz::settings::SettingsManager;
use log::error;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fs;

/// Runs a task file: `reactviz task.json [--json]`
fn run_task_file(
    path: &str,
    as_json: bool,
    manager: &SettingsManager,
) -> Result<(), ReactVizError> {
    let task = ReactionTask::from_json(&fs::read_to_string(path)?)?;
    let report = task.run_with(manager.settings());
    if as_json {
        println!("{}", report.to_json()?);
    } else {
        report.pretty_print();
    }
    Ok(())
}

pub fn main() {
    //
    let manager = SettingsManager::new();
    let log_config = ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .build();
    // a second logger (tests, embedding) is not fatal
    let _ = TermLogger::init(
        manager.settings().level_filter(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => {
            if let Err(e) = run_task_file(path, as_json, &manager) {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        None => run_interactive_menu(&manager),
    }
}
