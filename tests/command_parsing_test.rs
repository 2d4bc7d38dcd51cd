use clap::Parser;
use mailrank_core::cli::{Cli, Commands};
use mailrank_core::reporting::OutputFormat;

#[test]
fn test_rank_flags() {
    let cli = Cli::try_parse_from([
        "mailrank",
        "rank",
        "--emails",
        "mail.csv",
        "--damping",
        "0.9",
        "--max-iterations",
        "40",
        "--focus",
        "hrc",
        "--top",
        "10",
        "--format",
        "json",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    let Some(Commands::Rank(args)) = cli.command else {
        panic!("expected rank command");
    };
    assert_eq!(args.emails.as_deref(), Some(std::path::Path::new("mail.csv")));
    assert_eq!(args.damping, Some(0.9));
    assert_eq!(args.max_iterations, Some(40));
    assert_eq!(args.focus.as_deref(), Some("hrc"));
    assert_eq!(args.top, Some(10));
    assert_eq!(args.format, OutputFormat::Json);
    assert!(!args.all);
}

#[test]
fn test_resolve_requires_input() {
    assert!(Cli::try_parse_from(["mailrank", "resolve"]).is_err());
    let cli = Cli::try_parse_from(["mailrank", "resolve", "H", "--aliases", "a.csv"]).unwrap();
    let Some(Commands::Resolve { raw, tables }) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(raw, vec!["H".to_string()]);
    assert!(tables.aliases.is_some());
    assert!(tables.persons.is_none());
}

#[test]
fn test_no_subcommand() {
    let cli = Cli::try_parse_from(["mailrank"]).unwrap();
    assert!(cli.command.is_none());
}
