//! # stream_aligner_cli
//!
//! Command line front-end for the stream aligner. Loads a YAML configuration
//! describing the recorded streams, runs the alignment on a worker thread,
//! and displays progress while it runs.
//!
//! ## Use
//!
//! Make a template configuration:
//!
//! ```bash
//! stream_aligner_cli new -p config.yml
//! ```
//!
//! Fill in the stream paths and run the alignment:
//!
//! ```bash
//! stream_aligner_cli -p config.yml
//! ```
use clap::{Arg, Command};
use indicatif::{MultiProgress, ProgressBar};
use indicatif_log_bridge::LogWrapper;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;

use libstream_aligner::config::Config;
use libstream_aligner::process::process;

fn make_template_config(path: &Path) {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config).unwrap();
    let mut file = File::create(path).expect("Could not create template config file!");
    file.write_all(yaml_str.as_bytes())
        .expect("Failed to write yaml data to file!");
}

fn main() {
    // Create a cli
    let matches = Command::new("stream_aligner_cli")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .help("Path to the configuration file"),
        )
        .get_matches();

    // Initialize feedback
    let logger = simplelog::TermLogger::new(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    let pb_manager = MultiProgress::new();

    LogWrapper::new(pb_manager.clone(), logger)
        .try_init()
        .expect("Could not create logging/progress!");

    // Parse the cli
    let config_path = PathBuf::from(matches.get_one::<String>("path").expect("We require args"));

    if let Some(("new", _)) = matches.subcommand() {
        log::info!(
            "Making a template config at {}...",
            config_path.to_string_lossy()
        );

        make_template_config(&config_path);
        log::info!("Done.");
        return;
    }

    // Load our config
    log::info!("Loading config from {}...", config_path.to_string_lossy());
    let config = match Config::read_config_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Config successfully loaded.");
    log::info!(
        "Reference: {} ({})",
        config.reference_name,
        config.reference_path.to_string_lossy()
    );
    for stream in config.streams.iter() {
        log::info!(
            "Stream: {} ({}) policy: {:?}",
            stream.name,
            stream.path.to_string_lossy(),
            stream.policy
        );
    }
    log::info!("Output Path: {}", config.output_path.to_string_lossy());
    log::info!("Rebase Time: {}", config.rebase_time);

    // Setup the progress bar
    let pb = pb_manager.add(ProgressBar::new(100));
    let (tx, rx) = channel();
    // Spawn the task!
    let handle = std::thread::spawn(|| process(config, tx));

    loop {
        // No UI here, so poll for status about once a second
        std::thread::sleep(std::time::Duration::from_secs(1));
        while let Ok(status) = rx.try_recv() {
            pb.set_position((status.progress * 100.0) as u64);
            pb.set_message(status.stream);
        }

        if handle.is_finished() {
            match handle.join() {
                Ok(result) => match result {
                    Ok(_) => log::info!("Successfully aligned streams!"),
                    Err(e) => log::error!("Alignment failed with error: {e}"),
                },
                Err(_) => log::error!("Failed to join alignment task!"),
            }
            break;
        }
    }

    pb.finish();

    log::info!("Done.");
}
