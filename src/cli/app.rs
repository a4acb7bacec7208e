//! Main CLI application

use crate::cli::invocation::Invocation;
use crate::config::{load_settings, Settings, MAX_TIMEOUT_SECS};
use crate::error::Result;
use crate::logging;
use crate::netprofiler::{Centricity, Endpoint, NetProfilerClient};
use crate::runner::ColumnsCommand;
use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};
use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("get_np_columns")
        .version(crate::VERSION)
        .about("Get the list of columns available in the NetProfiler")
        .arg(
            Arg::new("host")
                .value_name("HOST")
                .help("NetProfiler host name, address or base URL")
                .required(true),
        )
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .value_name("USER")
                .help("User name")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .value_name("PASSWORD")
                .help("Password")
                .required(true),
        )
        .arg(
            Arg::new("list-groupbys")
                .long("list-groupbys")
                .help("List the available group-bys instead of columns")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-realms")
                .long("list-realms")
                .help("List the available realms instead of columns")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-centricities")
                .long("list-centricities")
                .help("List the available centricities instead of columns")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("listing")
                .args(["list-groupbys", "list-realms", "list-centricities"])
                .multiple(false),
        )
        .arg(
            Arg::new("centricity")
                .long("centricity")
                .value_name("CENTRICITY")
                .help("Centricity: host (hos) or interface (int) [default: hos]")
                .value_parser(|s: &str| s.parse::<Centricity>().map_err(|e| e.to_string())),
        )
        .arg(
            Arg::new("realm")
                .long("realm")
                .value_name("REALM")
                .help("Realm to list columns for [default: traffic_summary]"),
        )
        .arg(
            Arg::new("groupby")
                .long("groupby")
                .value_name("GROUPBY")
                .help("Group-by name or id to list columns for [default: hos]"),
        )
        .arg(
            Arg::new("ids")
                .long("ids")
                .value_name("COLIDS")
                .help("Comma separated column ids or keys to show")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_name("COLUMN-FILTER")
                .help("Only show columns whose key or label matches (case-insensitive regex)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Port to connect to")
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("insecure")
                .long("insecure")
                .help("Accept invalid TLS certificates")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("Request timeout in seconds (at most one day)")
                .value_parser(value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to npcolumns.yml settings file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Connect to the appliance and run the columns command, writing tables to `out`
pub fn execute<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    let (settings, settings_path) = load_settings(invocation.config.as_deref())?;
    if let Some(path) = &settings_path {
        debug!("Using settings from {}", path.display());
    }

    let client = connect(invocation, &settings)?;

    ColumnsCommand::new(&client, &settings).execute(invocation, out)
}

/// Build the API client, command line values taking precedence over settings
fn connect(invocation: &Invocation, settings: &Settings) -> Result<NetProfilerClient> {
    let endpoint = Endpoint::new(
        &invocation.host,
        invocation.port.or(settings.port),
        invocation.user.as_str(),
        invocation.password.as_str(),
    )?;

    let timeout = invocation
        .timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| settings.timeout());
    let insecure = invocation.insecure || settings.insecure;

    debug!(
        "Connecting to {} (timeout {}s, insecure {})",
        endpoint.base_url,
        timeout.as_secs(),
        insecure
    );

    let client = NetProfilerClient::builder()
        .timeout(timeout)
        .accept_invalid_certs(insecure)
        .build(endpoint)?;

    Ok(client)
}

/// Run with an explicit argument vector and return the process exit status
pub fn run_from<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            // help and version land here too, with status 0
            let _ = e.print();
            return e.exit_code();
        }
    };

    let invocation = Invocation::from_matches(&matches);
    logging::init(invocation.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&invocation, &mut out).and_then(|_| out.flush().map_err(Into::into)) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            1
        }
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> i32 {
    // a .env file may carry NPCOLUMNS_CONFIG or NPCOLUMNS_LOG
    let _ = dotenvy::dotenv();
    run_from(std::env::args_os())
}
