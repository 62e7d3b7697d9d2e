use std::process::ExitCode;

use clap::{Parser, Subcommand};
use interpreta::{
    DEFAULT_CONVERSION_INPUT, DEFAULT_ROMAN_INPUT, conversion_result, logger, render_conversion,
    render_roman, roman_result,
};

/// interpreta evaluates Roman numeral symbols and unit conversion sentences.
///
/// With no subcommand it scores the symbol `IV`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Raises the log level on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scores a string against the symbols I, IV and V.
    Roman {
        #[arg(default_value = DEFAULT_ROMAN_INPUT)]
        input: String,
    },
    /// Converts a length, as in `10 km to miles`.
    Convert {
        #[arg(default_value = DEFAULT_CONVERSION_INPUT)]
        sentence: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::install(args.verbose) {
        eprintln!("Failed to install the logger: {e}");
    }

    match args.command {
        None => println!("{}", render_roman(roman_result(DEFAULT_ROMAN_INPUT))),
        Some(Command::Roman { input }) => println!("{}", render_roman(roman_result(&input))),
        Some(Command::Convert { sentence }) => match conversion_result(&sentence) {
            Ok(value) => println!("{}", render_conversion(value)),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}
