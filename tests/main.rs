use nanoargs::{CliOption, CommandLineParser, OptionTable, ParseError};

fn table() -> OptionTable {
    OptionTable::new(vec![
        CliOption::required("p", "<password>", "sets the password for encryption"),
        CliOption::flag("rev", "if set, activates reverse order of processing"),
        CliOption::with_default("d", ".", "<directory>", "sets current directory for processing"),
    ])
}

#[test]
fn builder_compiles() {
    CommandLineParser::new("program");
}

#[test]
fn parse_happy_path() {
    let table = table();
    let parsed = table
        .parse_tokens(
            vec![
                "command",
                "-p",
                "abracadabra",
                "-rev",
                "input",
                "output",
                "-d",
                "another directory",
            ]
            .as_slice(),
        )
        .unwrap();

    assert_eq!(parsed.positionals(), &["command", "input", "output"]);
    assert_eq!(parsed.value("p"), Some("abracadabra"));
    assert_eq!(parsed.is_on("rev"), Ok(true));
    assert_eq!(parsed.value("d"), Some("another directory"));
}

#[test]
fn parse_missing_required() {
    let error = table()
        .parse_tokens(vec!["command", "-rev", "input", "output", "-d", "another directory"].as_slice())
        .unwrap_err();

    assert_eq!(
        error,
        ParseError::MissingRequiredOption {
            key: "p".to_string()
        }
    );
    assert_eq!(error.key(), Some("p"));
    assert_eq!(error.code(), 55);
    assert_eq!(error.to_string(), "Required option -p is missing");
}

#[test]
fn parse_missing_value() {
    let error = table()
        .parse_tokens(vec!["command", "-p", "abracadabra", "-rev", "input", "output", "-d"].as_slice())
        .unwrap_err();

    assert_eq!(
        error,
        ParseError::MissingOptionValue {
            key: "d".to_string()
        }
    );
    assert_eq!(
        error.to_string(),
        "The value of option -d (next argument) is missing"
    );
}

#[test]
fn is_on_value_option() {
    let table = table();
    let parsed = table.parse_tokens(vec!["-p", "x"].as_slice()).unwrap();

    assert_eq!(
        parsed.is_on("d"),
        Err(ParseError::NotAFlagOption {
            key: "d".to_string()
        })
    );
}

#[test]
fn synopsis() {
    assert_eq!(
        table().options()[0].synopsis(),
        "\t-p <password> - sets the password for encryption (required option)\n"
    );
}

#[test]
fn general_parser() {
    let parser = CommandLineParser::new("program")
        .add(CliOption::flag("rev", "reverse"))
        .help("h")
        .build_parser()
        .unwrap();

    let parsed = parser.parse_tokens(vec!["a", "-rev"].as_slice()).unwrap();
    assert_eq!(parsed.positionals(), &["a"]);
    assert_eq!(parsed.is_on("rev"), Ok(true));
    assert_eq!(parsed.is_on("h"), Ok(false));
}
