use nanoargs::{CliOption, OptionTable};

fn main() {
    let table = OptionTable::new(vec![
        CliOption::required("p", "<password>", "sets the password for encryption"),
        CliOption::flag("rev", "if set, activates reverse order of processing"),
        CliOption::with_default("d", ".", "<directory>", "sets current directory for processing"),
        CliOption::flag("h", "displays command line format and list of options"),
    ]);

    let print_help = match table.parse(std::env::args().skip(1)) {
        Ok(parsed) => {
            println!("Positional arguments: {:?}", parsed.positionals());
            println!("Password: {:?}", parsed.value("p"));
            println!("Reverse order: {:?}", parsed.is_on("rev"));
            println!("Directory: {:?}", parsed.value("d"));
            parsed.is_on("h") == Ok(true)
        }
        Err(error) => {
            println!("{}", error.problem());
            true
        }
    };

    if print_help {
        println!("\nCommand line format:");
        println!("demo_table <options> <positional arguments>");
        println!("\tOptions and positional arguments may be intermixed");
        print!("{}", table.synopsis());
    }
}
