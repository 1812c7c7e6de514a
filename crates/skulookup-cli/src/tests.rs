use super::*;

#[test]
fn parses_lookup_command() {
    let cli =
        Cli::try_parse_from(["skulookup", "lookup", "jvm3160rfss"]).expect("expected valid cli args");

    assert!(!cli.json);
    assert!(matches!(cli.command, Commands::Lookup { ref sku } if sku == "jvm3160rfss"));
}

#[test]
fn json_flag_is_global() {
    let cli = Cli::try_parse_from(["skulookup", "lookup", "BCSQ130SS", "--json"]).unwrap();
    assert!(cli.json);

    let cli = Cli::try_parse_from(["skulookup", "--json", "batch", "--text", "x"]).unwrap();
    assert!(cli.json);
}

#[test]
fn lookup_requires_sku() {
    assert!(Cli::try_parse_from(["skulookup", "lookup"]).is_err());
}

#[test]
fn batch_with_text() {
    let cli = Cli::try_parse_from(["skulookup", "batch", "--text", "quote ABCD1234 please"]).unwrap();
    match cli.command {
        Commands::Batch { source } => {
            assert_eq!(source.text.as_deref(), Some("quote ABCD1234 please"));
            assert!(source.file.is_none());
        }
        other => panic!("expected batch, got {other:?}"),
    }
}

#[test]
fn batch_with_file() {
    let cli = Cli::try_parse_from(["skulookup", "batch", "--file", "quote.csv"]).unwrap();
    match cli.command {
        Commands::Batch { source } => {
            assert_eq!(source.file, Some(PathBuf::from("quote.csv")));
            assert!(source.text.is_none());
        }
        other => panic!("expected batch, got {other:?}"),
    }
}

#[test]
fn batch_without_source_reads_stdin() {
    let cli = Cli::try_parse_from(["skulookup", "batch"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Batch {
            source: InputArgs {
                text: None,
                file: None
            }
        }
    ));
}

#[test]
fn batch_rejects_text_and_file_together() {
    let result = Cli::try_parse_from(["skulookup", "batch", "--text", "a", "--file", "b.csv"]);
    assert!(result.is_err());
}

#[test]
fn parses_identify_command() {
    let cli = Cli::try_parse_from(["skulookup", "identify", "--text", "abc12345"]).unwrap();
    assert!(matches!(cli.command, Commands::Identify { .. }));
}

#[test]
fn missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["skulookup"]).is_err());
}

fn transport_failure() -> LookupOutcome {
    LookupOutcome::TransportFailure(skulookup_scraper::LookupError::UnexpectedStatus {
        status: 503,
        url: "https://shop.test/ABC12345.html".to_owned(),
    })
}

#[test]
fn lookup_failure_error_names_cause_once() {
    let id = Identifier::parse("ABC12345").unwrap();
    let err = lookup_exit(&id, transport_failure(), false).unwrap_err();

    assert_eq!(err.to_string(), "lookup for ABC12345 failed");
    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(chain.len(), 2);
    assert!(chain[1].contains("503"));
}

#[test]
fn lookup_failure_in_json_mode_leaves_detail_to_output() {
    let id = Identifier::parse("ABC12345").unwrap();
    let err = lookup_exit(&id, transport_failure(), true).unwrap_err();
    assert_eq!(err.chain().count(), 1);
    assert!(!err.to_string().contains("503"));
}

#[test]
fn lookup_exit_is_ok_without_failure() {
    let id = Identifier::parse("ABC12345").unwrap();
    assert!(lookup_exit(&id, LookupOutcome::NothingFound, false).is_ok());
}
