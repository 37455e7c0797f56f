//! arena-headless: replay a scripted scenario through the arena engine.
//!
//! Usage:
//!   arena-headless run --scenario scenarios/duel.json --every 60
//!   arena-headless defaults --output config.json

use std::path::PathBuf;
use std::process;

use skirmish_core::config::ArenaConfig;
use skirmish_core::events::ArenaEvent;
use skirmish_core::state::ArenaSnapshot;
use skirmish_sim::scenario::Scenario;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "defaults" => cmd_defaults(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays clean JSON.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_usage() {
    eprintln!(
        "arena-headless: SKIRMISH headless arena runner\n\
         \n\
         Commands:\n\
         \n\
         run       Replay a scenario and print the final snapshot as JSON\n\
         \n\
           --scenario <path>  Scenario file (config, tick count, command script)\n\
           --every <N>        Print a summary line every N ticks (optional)\n\
           --output <path>    Write the final snapshot here instead of stdout\n\
         \n\
         defaults  Print the default arena config as JSON\n\
         \n\
           --output <path>    Write to a file instead of stdout\n\
         \n\
         Set RUST_LOG=debug to trace commits, shots and hits.\n\
         \n\
         Examples:\n\
         \n\
           arena-headless run --scenario tools/arena-headless/scenarios/duel.json --every 60\n\
           arena-headless defaults --output arena.json\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_flag(args, flag).map(PathBuf::from)
}

fn write_output(json: &str, output: Option<PathBuf>) {
    match output {
        Some(path) => match std::fs::write(&path, json) {
            Ok(()) => eprintln!("Wrote {} ({} bytes)", path.display(), json.len()),
            Err(e) => {
                eprintln!("Error writing {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => println!("{json}"),
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let path = match parse_path(args, "--scenario") {
        Some(p) => p,
        None => {
            eprintln!("Error: --scenario <path> is required");
            process::exit(1);
        }
    };

    let every = match parse_flag(args, "--every").map(str::parse::<u64>) {
        None => None,
        Some(Ok(0)) | Some(Err(_)) => {
            eprintln!("Error: --every expects a positive integer");
            process::exit(1);
        }
        Some(Ok(n)) => Some(n),
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };

    let scenario = match Scenario::from_json(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(1);
        }
    };

    tracing::info!(
        seed = scenario.config.seed,
        ticks = scenario.ticks,
        commands = scenario.script.len(),
        "running scenario"
    );

    let mut totals = Totals::default();
    let last = scenario.run(|snapshot| {
        totals.record(snapshot);
        if let Some(n) = every {
            if snapshot.time.tick > 0 && snapshot.time.tick % n == 0 {
                eprintln!("{}", summary_line(snapshot));
            }
        }
    });

    eprintln!(
        "Done: tick {}, {} shot(s), {} hit(s) for {:.2} damage, {} rejected move(s)",
        last.time.tick, totals.shots, totals.hits, totals.damage, totals.rejected_moves
    );

    let json = match serde_json::to_string_pretty(&last) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing snapshot: {e}");
            process::exit(1);
        }
    };
    write_output(&json, parse_path(args, "--output"));
}

#[derive(Default)]
struct Totals {
    shots: usize,
    hits: usize,
    damage: f32,
    rejected_moves: usize,
}

impl Totals {
    fn record(&mut self, snapshot: &ArenaSnapshot) {
        for event in &snapshot.events {
            match event {
                ArenaEvent::ShotFired { .. } => self.shots += 1,
                ArenaEvent::BulletHit { damage, .. } => {
                    self.hits += 1;
                    self.damage += damage;
                }
                ArenaEvent::MoveRejected { .. } => self.rejected_moves += 1,
                _ => {}
            }
        }
    }
}

fn summary_line(snapshot: &ArenaSnapshot) -> String {
    let mut line = format!(
        "[tick {:>6}] {:?} bullets={}",
        snapshot.time.tick,
        snapshot.phase,
        snapshot.bullets.len()
    );
    for unit in &snapshot.units {
        line.push_str(&format!(
            " | #{} ({:.2}, {:.2}) heat={:.1} {:?}/{:?}",
            unit.unit_id,
            unit.pose.position.x,
            unit.pose.position.y,
            unit.heat,
            unit.weapon_mode,
            unit.fire_state,
        ));
    }
    line
}

// --- Defaults command ---

fn cmd_defaults(args: &[String]) {
    let json = match serde_json::to_string_pretty(&ArenaConfig::default()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    };
    write_output(&json, parse_path(args, "--output"));
}
