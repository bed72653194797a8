use crate::cli::Args;
use crate::filter::Criteria;
use crate::person::Tag;
use std::path::PathBuf;

/// Resolved runtime settings, derived once from the parsed CLI.
///
/// Built from `Args` plus the already-validated criteria, since criteria
/// assembly can fail with a usage error.
#[derive(Clone, Debug)]
pub struct Config {
    pub tag: Tag,
    pub criteria: Criteria,
    pub roster: Option<PathBuf>,
    pub pretty: bool,
    pub stats: bool,
    pub stats_json: bool,
    pub verbose: bool,
    pub log_filter: Option<String>,
}

impl Config {
    #[must_use]
    pub fn new(args: &Args, criteria: Criteria) -> Self {
        Self {
            tag: args.tag,
            criteria,
            roster: args.roster.clone(),
            pretty: args.pretty,
            stats: args.stats,
            stats_json: args.stats_json,
            verbose: args.verbose,
            log_filter: args.log_filter.clone(),
        }
    }
}
