use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the converter names registered in the coursemark library.
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_CONVERTERS: &[&str] = &["html", "markup"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("coursemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between the coursemark dialect and HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input file")
                .required_unless_present("list-converters")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target converter (auto-detected from the input extension)")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    AVAILABLE_CONVERTERS,
                ))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-converters")
                .long("list-converters")
                .help("List available converters")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "coursemark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "coursemark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "coursemark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
