use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};

// Library dependencies.
use element_data::{default_data_path, load_element_data};
use find_square_elements::find_square_elements;
use flatten_square_elements::flatten_square_elements;
use regex_pattern_builder::RegexPatternBuilder;

/// The bracketed prefix marker matched zero or more times ahead of the options.
const PREFIX_MARKER: &str = "[~]";

fn main() -> Result<()> {
    let matches = Command::new("build_square_pattern")
        .version("0.1.0")
        .about("Builds the square-element regex pattern from the element data file")
        .arg(
            Arg::new("config")
                .long("config")
                .num_args(1)
                .help("Read element data from this file instead of the executable-adjacent default"),
        )
        .arg(
            Arg::new("capturing")
                .long("capturing")
                .action(clap::ArgAction::SetTrue)
                .help("Emit a capturing group for the bracketed options"),
        )
        .arg(
            Arg::new("scan")
                .long("scan")
                .num_args(1)
                .help("Print the leading square-element markers of the given input, one per line"),
        )
        .get_matches();

    // Scan mode short-circuits: no element data is needed.
    if let Some(input) = matches.get_one::<String>("scan") {
        for element in find_square_elements(input) {
            println!("{}", element);
        }
        return Ok(());
    }

    let data_path = match matches.get_one::<String>("config") {
        Some(path) => PathBuf::from(path),
        None => default_data_path()?,
    };
    let data = load_element_data(&data_path)?;
    let tokens = flatten_square_elements(&data)?;

    let pattern = RegexPatternBuilder::new()
        .capture_options(matches.get_flag("capturing"))
        .zero_or_more(PREFIX_MARKER)
        .bracketed_options(&tokens)
        .build();

    println!("{}", pattern);
    Ok(())
}
