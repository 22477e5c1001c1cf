use std::fs;

use clap::Parser;
use numera::evaluate;

/// numera evaluates two-operand arithmetic expressions written in Arabic
/// (1-10) or Roman (I-X) numerals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numera to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    match evaluate(&expression) {
        Ok(result) => println!("{result}"),
        Err(e) => eprintln!("{e}"),
    }
}
