use nanoargs::{CliOption, CommandLineParser};

fn main() {
    let parser = CommandLineParser::new("demo")
        .about("Demonstrates the nanoargs parser.  Options and positional arguments may be intermixed; the positional arguments are left for the application to process.")
        .add(CliOption::required(
            "p",
            "<password>",
            "sets the password for encryption",
        ))
        .add(CliOption::flag(
            "rev",
            "if set, activates reverse order of processing",
        ))
        .add(CliOption::with_default(
            "d",
            ".",
            "<directory>",
            "sets current directory for processing",
        ))
        .help("h")
        .build();

    let parsed = parser.parse();

    match parsed.positionals() {
        [] => println!("Positional arguments: None"),
        positionals => {
            println!("Positional arguments:");
            for positional in positionals {
                println!("  {positional}");
            }
        }
    }

    println!("Password: {}", parsed.value("p").unwrap_or_default());
    println!("Reverse order: {}", parsed.is_on("rev") == Ok(true));
    println!("Directory: {}", parsed.value("d").unwrap_or_default());
}
