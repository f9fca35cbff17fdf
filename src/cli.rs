use clap::error::ErrorKind;
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Flags that take a value. The argument after one of these (when written
/// without `=`) is always its value, even if it starts with a dash.
const VALUE_FLAGS: &[&str] = &["token", "zone", "record", "content", "config", "api-url"];

/// Long flags that may also be written with a single dash (`-token=...`).
const LONG_FLAGS: &[&str] = &[
    "token", "zone", "record", "content", "config", "api-url", "help", "version",
];

/// Update the content of an existing Cloudflare DNS record.
#[derive(Parser, Default)]
#[command(name = "cfddns", version)]
pub struct Args {
    /// Cloudflare API token
    #[arg(long, env = "CFDDNS_TOKEN", hide_env_values = true, allow_hyphen_values = true)]
    pub token: Option<String>,

    /// Zone name (e.g., example.com)
    #[arg(long, env = "CFDDNS_ZONE", allow_hyphen_values = true)]
    pub zone: Option<String>,

    /// Record name to update (e.g., sub.example.com)
    #[arg(long, env = "CFDDNS_RECORD", allow_hyphen_values = true)]
    pub record: Option<String>,

    /// New content of the record (e.g., IP address)
    #[arg(long, env = "CFDDNS_CONTENT", allow_hyphen_values = true)]
    pub content: Option<String>,

    /// YAML file supplying any of the values above
    #[arg(long, env = "CFDDNS_CONFIG", value_name = "FILE", allow_hyphen_values = true)]
    pub config: Option<PathBuf>,

    /// Cloudflare API base URL
    #[arg(long, env = "CFDDNS_API_URL", value_name = "URL", allow_hyphen_values = true)]
    pub api_url: Option<String>,

    /// Flag parsing stops at the first positional argument; it and
    /// everything after it end up here and are not used.
    #[arg(num_args = 1.., trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    pub fn parse_from_env() -> Result<Self, clap::Error> {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parses `args`, filling omitted flags from the `CFDDNS_*` variables.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_with(Self::command(), args)
    }

    /// Parses `args` alone; the `CFDDNS_*` variables are not consulted.
    pub fn parse_ignoring_env<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let command = Self::command().mut_args(|arg| arg.env(None::<&'static str>));
        Self::parse_with(command, args)
    }

    fn parse_with<I, T>(command: Command, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let matches = command.try_get_matches_from(normalize_args(args))?;
        Self::from_arg_matches(&matches)
    }
}

pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Exit status for a failed parse. Help and version requests are not
/// failures.
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Rewrites `-token=x` style flags to `--token=x`.
///
/// Mirrors Go's flag parsing: the argument after a value flag is taken
/// verbatim, and everything from the first positional argument (or `--`)
/// onwards is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    let mut value_next = false;
    args.into_iter()
        .map(|arg| -> OsString { arg.into() })
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if value_next {
                value_next = false;
                return arg;
            }
            match arg.to_str() {
                Some("--") => passthrough = true,
                Some(s) => match split_flag(s) {
                    Some((name, inline_value)) => {
                        value_next = !inline_value && VALUE_FLAGS.contains(&name);
                        if !s.starts_with("--") && LONG_FLAGS.contains(&name) {
                            return OsString::from(format!("-{}", s));
                        }
                    }
                    None => passthrough = true,
                },
                None => passthrough = true,
            }
            arg
        })
        .collect()
}

/// Flag name and whether the value is attached with `=`. `None` for
/// positional arguments.
fn split_flag(arg: &str) -> Option<(&str, bool)> {
    let rest = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    if rest.is_empty() {
        return None;
    }
    Some(match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    })
}
