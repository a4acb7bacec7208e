//! The parsed command line

use crate::logging::Verbosity;
use crate::netprofiler::Centricity;
use clap::ArgMatches;
use std::path::PathBuf;

/// What a run prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Key and value column tables
    #[default]
    Columns,
    GroupBys,
    Realms,
    Centricities,
}

/// One invocation of the tool, built once from the argument vector.
///
/// Optional selections stay `None` when the flag is absent; defaults are
/// filled in when the command runs, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub host: String,
    pub user: String,
    pub password: String,
    pub mode: Mode,
    pub centricity: Option<Centricity>,
    pub realm: Option<String>,
    pub groupby: Option<String>,
    pub ids: Option<Vec<String>>,
    pub filter: Option<String>,
    pub port: Option<u16>,
    pub insecure: bool,
    pub timeout: Option<u64>,
    pub config: Option<PathBuf>,
    pub verbosity: Verbosity,
}

impl Invocation {
    /// Map parsed matches 1:1 onto an invocation
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let string = |id: &str| matches.get_one::<String>(id).cloned();

        Invocation {
            host: string("host").unwrap_or_default(),
            user: string("user").unwrap_or_default(),
            password: string("password").unwrap_or_default(),
            mode: get_mode(matches),
            centricity: matches.get_one::<Centricity>("centricity").copied(),
            realm: string("realm"),
            groupby: string("groupby"),
            ids: matches
                .get_many::<String>("ids")
                .map(|values| values.cloned().collect()),
            filter: string("filter"),
            port: matches.get_one::<u16>("port").copied(),
            insecure: matches.get_flag("insecure"),
            timeout: matches.get_one::<u64>("timeout").copied(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            verbosity: get_verbosity(matches),
        }
    }
}

/// Get the output mode from matches
fn get_mode(matches: &ArgMatches) -> Mode {
    if matches.get_flag("list-groupbys") {
        Mode::GroupBys
    } else if matches.get_flag("list-realms") {
        Mode::Realms
    } else if matches.get_flag("list-centricities") {
        Mode::Centricities
    } else {
        Mode::Columns
    }
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}
