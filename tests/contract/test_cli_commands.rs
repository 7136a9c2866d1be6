use busyblocks::cli::{Cli, Commands, ConfigCommands, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_ingest_command_with_paths() {
    let cli = Cli::try_parse_from([
        "busyblocks",
        "ingest",
        "--lst",
        "/data/sched.LST",
        "--db",
        "/data/schedule.db",
    ])
    .unwrap();

    match cli.command {
        Commands::Ingest { lst, db } => {
            assert_eq!(lst, Some(PathBuf::from("/data/sched.LST")));
            assert_eq!(db, Some(PathBuf::from("/data/schedule.db")));
        }
        _ => panic!("Expected Ingest command"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_ingest_command_paths_optional() {
    let cli = Cli::try_parse_from(["busyblocks", "ingest"]).unwrap();

    match cli.command {
        Commands::Ingest { lst, db } => {
            assert!(lst.is_none());
            assert!(db.is_none());
        }
        _ => panic!("Expected Ingest command"),
    }
}

#[test]
fn test_parse_command_defaults_to_table() {
    let cli = Cli::try_parse_from(["busyblocks", "parse", "--lst", "sched.LST"]).unwrap();

    match cli.command {
        Commands::Parse { lst, format } => {
            assert_eq!(lst, Some(PathBuf::from("sched.LST")));
            assert_eq!(format, OutputFormat::Table);
        }
        _ => panic!("Expected Parse command"),
    }
}

#[test]
fn test_parse_command_json_format() {
    let cli = Cli::try_parse_from(["busyblocks", "parse", "-f", "json"]).unwrap();

    match cli.command {
        Commands::Parse { format, .. } => assert_eq!(format, OutputFormat::Json),
        _ => panic!("Expected Parse command"),
    }
}

#[test]
fn test_parse_command_rejects_unknown_format() {
    let result = Cli::try_parse_from(["busyblocks", "parse", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_query_command_with_filters() {
    let cli = Cli::try_parse_from([
        "busyblocks",
        "query",
        "--db",
        "schedule.db",
        "-e",
        "42",
        "-d",
        "01/15/24",
        "-l",
        "10",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Query {
            db,
            employee,
            date,
            limit,
            format,
        } => {
            assert_eq!(db, Some(PathBuf::from("schedule.db")));
            assert_eq!(employee.as_deref(), Some("42"));
            assert_eq!(date.as_deref(), Some("01/15/24"));
            assert_eq!(limit, Some(10));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("Expected Query command"),
    }
}

#[test]
fn test_query_command_rejects_negative_limit() {
    let result = Cli::try_parse_from(["busyblocks", "query", "--limit", "-5"]);
    assert!(result.is_err());
}

#[test]
fn test_config_subcommands() {
    let cli = Cli::try_parse_from(["busyblocks", "config", "set", "lst-path", "/data/sched.LST"])
        .unwrap();
    match cli.command {
        Commands::Config {
            command: ConfigCommands::Set { key, value },
        } => {
            assert_eq!(key, "lst-path");
            assert_eq!(value, "/data/sched.LST");
        }
        _ => panic!("Expected Config Set command"),
    }

    let cli = Cli::try_parse_from(["busyblocks", "config", "get", "db-path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Get { ref key }
        } if key == "db-path"
    ));

    let cli = Cli::try_parse_from(["busyblocks", "config", "unset", "db-path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Unset { .. }
        }
    ));

    let cli = Cli::try_parse_from(["busyblocks", "config", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::List
        }
    ));
}

#[test]
fn test_config_set_requires_value() {
    let result = Cli::try_parse_from(["busyblocks", "config", "set", "lst-path"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_is_global() {
    let before = Cli::try_parse_from(["busyblocks", "-v", "ingest"]).unwrap();
    assert!(before.verbose);

    let after = Cli::try_parse_from(["busyblocks", "ingest", "--verbose"]).unwrap();
    assert!(after.verbose);
}

#[test]
fn test_subcommand_required() {
    let result = Cli::try_parse_from(["busyblocks"]);
    assert!(result.is_err());
}
