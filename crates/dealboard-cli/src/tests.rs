use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["dealboard"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_watch_command() {
    let cli = Cli::try_parse_from(["dealboard", "watch"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Watch)));
}

#[test]
fn parses_list_with_filters() {
    let cli = Cli::try_parse_from([
        "dealboard", "list", "--search", "milk", "--store", "Lidl", "--all",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::List { search, store, all }) => {
            assert_eq!(search.as_deref(), Some("milk"));
            assert_eq!(store.as_deref(), Some("Lidl"));
            assert!(all);
        }
        other => panic!("expected list command, got: {other:?}"),
    }
}

#[test]
fn list_defaults_to_offers_only_without_filters() {
    let cli = Cli::try_parse_from(["dealboard", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            search: None,
            store: None,
            all: false
        })
    ));
}

#[test]
fn width_is_global() {
    let cli = Cli::try_parse_from(["dealboard", "deals", "--width", "500"]).unwrap();
    assert_eq!(cli.width, Some(500));
    assert!(matches!(cli.command, Some(Commands::Deals { all: false })));
}

#[test]
fn stores_accepts_all_flag() {
    let cli = Cli::try_parse_from(["dealboard", "stores", "--all"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Stores { all: true })));
}

#[test]
fn rejects_non_numeric_width() {
    assert!(Cli::try_parse_from(["dealboard", "--width", "wide"]).is_err());
}
