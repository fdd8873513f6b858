// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use frets::config::{ConfigEvent, ConfigWatcher, ViewConfig, ViewFile};
use frets::fretboard::{render_grid, render_scale_info, FretboardView, Selection, Tuning};
use frets::music::{Key, Mode, SpelledNote};
use std::env;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("FRETS - Fretboard Scale Explorer");
    println!();
    println!("Usage: frets [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --show [FILE]        Show the fretboard for a view file (defaults if omitted)");
    println!("  --watch <FILE>       Show the fretboard and redraw whenever FILE changes");
    println!("  --scale <KEY> <MODE> Show the spelling and analysis of one scale");
    println!("  --freq <NOTE>        Show the frequency of a note such as A4 or Eb2");
    println!("  --freq <STRING> <FRET> [TUNING]");
    println!("                       Show the note and frequency at a fret (string 1 is highest)");
    println!("  --list-modes         List available modes");
    println!("  --list-tunings       List built-in tunings");
    println!("  --help               Show this help message");
    println!();
    println!("Set FRETS_LOG (error, warn, info, debug, trace) to control log output.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FRETS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show(config: &ViewConfig) -> Result<()> {
    let selection = config.resolve()?;
    let view = FretboardView::compute(&selection);
    println!("{}", render_scale_info(&view));
    println!();
    println!("{}", render_grid(&view.grid, &config.render_options()));
    Ok(())
}

fn watch(path: &str) -> Result<()> {
    let config = ViewFile::load(path)?;
    show(&config.view)?;

    let watcher = ConfigWatcher::new(path, None)?;
    println!();
    println!("Watching {:?} for changes (press Ctrl+C to stop)...", watcher.watched_path());

    while let Some(event) = watcher.recv() {
        match event {
            ConfigEvent::Reloaded(config) => {
                println!();
                if let Err(e) = show(&config.view) {
                    eprintln!("Error: {:#}", e);
                }
            }
            ConfigEvent::Error(message) => eprintln!("Error: {}", message),
            ConfigEvent::FileCreated(path) | ConfigEvent::FileDeleted(path) => {
                debug!(path = ?path, "ignoring file event");
            }
        }
    }
    Ok(())
}

fn show_scale(key: &str, mode: &str) -> Result<()> {
    let selection = Selection {
        key: key.parse::<Key>()?,
        mode: mode.parse::<Mode>()?,
        ..Selection::default()
    };
    let view = FretboardView::compute(&selection);
    println!("{}", render_scale_info(&view));
    Ok(())
}

fn show_frequency(note: &str) -> Result<()> {
    let note: SpelledNote = note.parse()?;
    let hz = frets::music::note_frequency(note.name, note.octave)?;
    println!("{}: {:.2} Hz", note, hz);
    Ok(())
}

fn show_fret_frequency(string: &str, fret: &str, tuning: Option<&String>) -> Result<()> {
    let number: usize = string
        .parse()
        .map_err(|_| anyhow!("invalid string number: {}", string))?;
    let fret: usize = fret.parse().map_err(|_| anyhow!("invalid fret: {}", fret))?;
    let tuning = match tuning {
        Some(id) => Tuning::by_id(id).ok_or_else(|| anyhow!("unknown tuning: {}", id))?,
        None => Tuning::standard(),
    };

    let selection = Selection {
        tuning,
        fret_count: fret.max(1),
        ..Selection::default()
    };
    let view = FretboardView::compute(&selection);
    let cell = view
        .grid
        .cell_by_number(number, fret)
        .ok_or_else(|| anyhow!("{} has no string {}", view.tuning.label(), number))?;
    println!(
        "String {} fret {}: {} ({:.2} Hz)",
        number,
        fret,
        cell.note,
        cell.frequency()
    );
    Ok(())
}

fn list_modes() {
    for mode in Mode::ALL {
        println!("  {:<16} {:<28} {}", mode.id(), mode.name(), mode.pattern());
    }
}

fn list_tunings() {
    for tuning in Tuning::catalog() {
        println!("  {:<8} {}", tuning.id(), tuning);
    }
}

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("FRETS - Fretboard Scale Explorer");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--show" => {
            let config = match args.get(2) {
                Some(path) => ViewFile::load(path)?.view,
                None => ViewConfig::default(),
            };
            show(&config)?;
        }
        "--watch" => {
            if args.len() < 3 {
                eprintln!("Error: --watch requires a view file");
                std::process::exit(1);
            }
            watch(&args[2])?;
        }
        "--scale" => {
            if args.len() < 4 {
                eprintln!("Error: --scale requires a key and a mode");
                eprintln!("Use --list-modes to see available modes");
                std::process::exit(1);
            }
            show_scale(&args[2], &args[3])?;
        }
        "--freq" => {
            match (args.get(2), args.get(3)) {
                (Some(string), Some(fret)) => show_fret_frequency(string, fret, args.get(4))?,
                (Some(note), None) => show_frequency(note)?,
                _ => {
                    eprintln!("Error: --freq requires a note such as A4, or a string and fret");
                    std::process::exit(1);
                }
            }
        }
        "--list-modes" => {
            list_modes();
        }
        "--list-tunings" => {
            list_tunings();
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
