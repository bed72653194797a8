// Main application entry point.
// Orchestrates command-line parsing, logging setup, roster reading, the
// filter loop, and the final summary report.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::exit;

use tracing::{debug, info};

use roster_filter::config::Config;
use roster_filter::filter::matches_query;
use roster_filter::person::Person;
use roster_filter::stats::StatsCollector;
use roster_filter::{cli, logger, roster};

fn main() -> io::Result<()> {
    let args = cli::parse_args();
    let criteria = match args.criteria() {
        Ok(criteria) => criteria,
        Err(e) => e.exit(),
    };
    let cfg = Config::new(&args, criteria);
    logger::init(&cfg);

    let persons = match read_input(&cfg) {
        Ok(persons) => persons,
        Err(e) => {
            eprintln!("Error reading roster: {e}");
            exit(3);
        }
    };
    debug!(records = persons.len(), "roster loaded");

    let mut stats = StatsCollector::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for person in &persons {
        let matched = matches_query(person, cfg.tag, &cfg.criteria);
        stats.record(person, cfg.tag, matched);
        debug!(
            id = person.id(),
            name = person.name(),
            tag = %person.tag(),
            matched,
            "record checked"
        );
        if matched {
            if let Err(e) = roster::write_person(&mut out, person, cfg.pretty) {
                eprintln!("Error writing record: {e}");
                exit(4);
            }
        }
    }
    out.flush()?;

    info!(
        scanned = stats.records_scanned,
        matched = stats.records_matched,
        "filter finished"
    );

    if cfg.stats_json {
        stats.print_stats_json(cfg.tag, &cfg.criteria, io::stderr().lock());
    } else if cfg.stats {
        stats.print_stats(cfg.tag, &mut io::stderr().lock())?;
    }

    Ok(())
}

fn read_input(cfg: &Config) -> io::Result<Vec<Person>> {
    match &cfg.roster {
        Some(path) => roster::read_roster(BufReader::new(File::open(path)?)),
        None => roster::read_roster(io::stdin().lock()),
    }
}
