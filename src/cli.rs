use crate::filter::{AdminCriteria, Criteria, UserCriteria};
use crate::person::Tag;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Filter a roster of tagged person records.
/// Reads records as JSON Lines from a file or stdin and writes the records
/// matching the target tag and every criteria flag to stdout.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target tag. Only records of this variant can match.
    #[arg(short, long, value_enum)]
    pub tag: Tag,

    /// Require an exact id.
    #[arg(long, value_name = "N")]
    pub id: Option<u64>,

    /// Require an exact name.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Require an exact age. Only valid with `--tag user`.
    #[arg(long, value_name = "N")]
    pub age: Option<u32>,

    /// Require an exact role. Only valid with `--tag admin`.
    #[arg(long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Roster file (JSON Lines). Reads stdin when omitted.
    #[arg(value_name = "ROSTER")]
    pub roster: Option<PathBuf>,

    /// Pretty-print matching records instead of one object per line.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub pretty: bool,

    /// Print a match summary to stderr after filtering.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub stats: bool,

    /// Print the match summary as JSON instead of human-readable text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub stats_json: bool,

    /// Tracing filter, e.g. "roster_filter=debug". Overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Log each record's match decision to stderr (requires a debug-level filter).
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Args {
    /// Assembles the typed criteria for the selected tag.
    ///
    /// Criteria keys are restricted to the target variant's field set, so a
    /// cross-variant flag (`--role` with `--tag user`, `--age` with
    /// `--tag admin`) is a usage error rather than a silent zero-match.
    pub fn criteria(&self) -> Result<Criteria, clap::Error> {
        use clap::error::ErrorKind;
        match self.tag {
            Tag::User => {
                if self.role.is_some() {
                    return Err(Args::command().error(
                        ErrorKind::ArgumentConflict,
                        "--role only applies to admin records",
                    ));
                }
                Ok(Criteria::User(UserCriteria {
                    id: self.id,
                    name: self.name.clone(),
                    age: self.age,
                }))
            }
            Tag::Admin => {
                if self.age.is_some() {
                    return Err(Args::command().error(
                        ErrorKind::ArgumentConflict,
                        "--age only applies to user records",
                    ));
                }
                Ok(Criteria::Admin(AdminCriteria {
                    id: self.id,
                    name: self.name.clone(),
                    role: self.role.clone(),
                }))
            }
        }
    }
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_flags_assemble_for_user() {
        let args = Args::parse_from(["roster-filter", "--tag", "user", "--age", "25"]);
        let criteria = args.criteria().unwrap();
        assert_eq!(criteria.tag(), Tag::User);
        assert_eq!(
            criteria,
            Criteria::User(UserCriteria {
                age: Some(25),
                ..UserCriteria::default()
            })
        );
    }

    #[test]
    fn cross_variant_flag_is_rejected() {
        let args = Args::parse_from(["roster-filter", "--tag", "user", "--role", "Manager"]);
        assert!(args.criteria().is_err());
        let args = Args::parse_from(["roster-filter", "--tag", "admin", "--age", "25"]);
        assert!(args.criteria().is_err());
    }

    #[test]
    fn no_criteria_flags_yield_empty_criteria() {
        let args = Args::parse_from(["roster-filter", "--tag", "admin"]);
        assert!(args.criteria().unwrap().is_empty());
    }
}
