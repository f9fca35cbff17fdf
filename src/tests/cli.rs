use crate::cli::{normalize_args, parse_error_exit_code, usage, Args};
use clap::error::ErrorKind;

fn normalized(argv: &[&str]) -> Vec<String> {
    normalize_args(argv.iter().copied())
        .into_iter()
        .map(|arg| arg.into_string().unwrap())
        .collect()
}

fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
    Args::parse_ignoring_env(std::iter::once("cfddns").chain(argv.iter().copied()))
}

#[test]
fn test_single_dash_flags_are_normalized() {
    assert_eq!(
        normalized(&["cfddns", "-token=T", "-zone", "example.com", "-api-url=http://x"]),
        ["cfddns", "--token=T", "--zone", "example.com", "--api-url=http://x"]
    );
}

#[test]
fn test_other_arguments_are_untouched() {
    assert_eq!(
        normalized(&["cfddns", "--record=a.example.com", "-h", "-bogus", "--", "-content"]),
        ["cfddns", "--record=a.example.com", "-h", "-bogus", "--", "-content"]
    );
}

#[test]
fn test_value_after_flag_is_kept_verbatim() {
    assert_eq!(
        normalized(&["cfddns", "-content", "-token", "-zone=z", "extra", "-record=r"]),
        ["cfddns", "--content", "-token", "--zone=z", "extra", "-record=r"]
    );
}

#[test]
fn test_parse_separate_values() {
    let args = parse(&[
        "-token",
        "T",
        "-zone",
        "example.com",
        "-record",
        "home.example.com",
        "-content",
        "203.0.113.5",
    ])
    .unwrap();
    assert_eq!(args.token.as_deref(), Some("T"));
    assert_eq!(args.zone.as_deref(), Some("example.com"));
    assert_eq!(args.record.as_deref(), Some("home.example.com"));
    assert_eq!(args.content.as_deref(), Some("203.0.113.5"));
    assert!(args.config.is_none());
    assert!(args.rest.is_empty());
}

#[test]
fn test_values_may_start_with_a_dash() {
    let args = parse(&["-content", "-v=spf1", "-token", "-leading-dash"]).unwrap();
    assert_eq!(args.content.as_deref(), Some("-v=spf1"));
    assert_eq!(args.token.as_deref(), Some("-leading-dash"));
}

#[test]
fn test_parsing_stops_at_first_positional() {
    let args = parse(&["-content=c", "extra", "-token=T"]).unwrap();
    assert_eq!(args.content.as_deref(), Some("c"));
    assert_eq!(args.token, None);
    assert_eq!(args.rest, ["extra", "-token=T"]);
}

#[test]
fn test_env_fallback_fills_omitted_flags() {
    std::env::set_var("CFDDNS_ZONE", "env.example.com");
    std::env::set_var("CFDDNS_RECORD", "env-record.example.com");

    let with_env = Args::parse_from_args(["cfddns", "-record=flag.example.com"]);
    let without_env = Args::parse_ignoring_env(["cfddns", "-record=flag.example.com"]);

    std::env::remove_var("CFDDNS_ZONE");
    std::env::remove_var("CFDDNS_RECORD");

    let with_env = with_env.unwrap();
    assert_eq!(with_env.zone.as_deref(), Some("env.example.com"));
    // flags win over the environment
    assert_eq!(with_env.record.as_deref(), Some("flag.example.com"));

    let without_env = without_env.unwrap();
    assert_eq!(without_env.zone, None);
    assert_eq!(without_env.record.as_deref(), Some("flag.example.com"));
}

#[test]
fn test_unknown_flag_is_an_error() {
    let err = parse(&["-bogus=1"]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert_eq!(parse_error_exit_code(&err), 1);
}

#[test]
fn test_help_flag() {
    let err = parse(&["-help"]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(parse_error_exit_code(&err), 0);

    let err = parse(&["-h"]).err().unwrap();
    assert_eq!(parse_error_exit_code(&err), 0);
}

#[test]
fn test_version_flag() {
    let err = parse(&["-version"]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    assert_eq!(parse_error_exit_code(&err), 0);
}

#[test]
fn test_flag_without_value_exits_one() {
    let err = parse(&["-zone=example.com", "-token"]).err().unwrap();
    assert_eq!(parse_error_exit_code(&err), 1);
}

#[test]
fn test_usage_lists_every_flag() {
    let text = usage();
    for flag in [
        "--token",
        "--zone",
        "--record",
        "--content",
        "--config",
        "--api-url",
    ] {
        assert!(text.contains(flag), "usage is missing {}", flag);
    }
}
