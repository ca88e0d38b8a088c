// Command-line interface for coursemark
//
// This binary converts course content files between the coursemark dialect
// and its published HTML representation, using the coursemark library.
//
// Converting:
//
// The direction is picked by the --to converter name, auto-detected from the
// input file extension when the flag is omitted (.txt/.cm render to HTML,
// .html/.htm deparse to dialect text). When neither names a converter, the
// fallback_target from configuration applies.
// Usage:
//  coursemark <input> [--to <converter>] [-o <file>]          - Convert (default)
//  coursemark convert <input> [--to <converter>] [-o <file>]  - Same as above (explicit)
//  coursemark --list-converters                               - List available converters

use clap::{Arg, ArgAction, Command, ValueHint};
use coursemark::ConverterRegistry;
use coursemark_config::{CoursemarkConfig, Loader};
use std::collections::HashMap;
use std::fs;

fn build_cli() -> Command {
    Command::new("coursemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between the coursemark dialect and HTML")
        .long_about(
            "coursemark is a command-line tool for course content files.\n\n\
            Course authors write a small line-oriented markup dialect; the\n\
            published representation is a constrained HTML subset. This tool\n\
            converts in both directions.\n\n\
            Examples:\n  \
            coursemark lesson.txt                     # Render to HTML (stdout)\n  \
            coursemark lesson.txt -o lesson.html      # Render to a file\n  \
            coursemark saved.html                     # Back to editable text\n  \
            coursemark notes.bak --to html            # Force a direction",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-converters")
                .long("list-converters")
                .help("List available converters")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a coursemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between the dialect and HTML (default command)")
                .long_about(
                    "Convert a file between the coursemark dialect and HTML.\n\n\
                    Converters:\n  \
                    - html:   render dialect text to HTML (.txt, .cm inputs)\n  \
                    - markup: deparse HTML to dialect text (.html, .htm inputs)\n\n\
                    The converter is auto-detected from the input file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    coursemark convert lesson.txt                  # HTML to stdout\n  \
                    coursemark convert saved.html -o lesson.txt    # Back to text\n  \
                    coursemark lesson.txt --to html                # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target converter (auto-detected from the input extension)")
                        .long_help(
                            "Target converter to apply.\n\n\
                            Available converters: html, markup\n\
                            When omitted, the converter is detected from the input file\n\
                            extension; inputs with an unknown extension use the\n\
                            convert.fallback_target from configuration.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-converters") {
        handle_list_converters_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load configuration, layering an explicit --config file over the defaults
fn load_cli_config(config_path: Option<&str>) -> CoursemarkConfig {
    let loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    config: &CoursemarkConfig,
) {
    let registry = ConverterRegistry::default();

    // Auto-detect --to if not provided
    let to = match to {
        Some(name) => name.to_string(),
        None => registry
            .detect_from_filename(input)
            .unwrap_or_else(|| config.convert.fallback_target.clone()),
    };

    // Validate the converter exists before touching the filesystem
    if let Err(e) = registry.get(&to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let mut converter_options = HashMap::new();
    if to == "html" {
        converter_options.insert(
            "lazy-images".to_string(),
            config.convert.html.lazy_images.to_string(),
        );
        converter_options.insert(
            "image-style".to_string(),
            config.convert.html.image_style.clone(),
        );
    }

    let result = registry
        .convert_with_options(&source, &to, &converter_options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{result}");
        }
    }
}

/// Handle the list-converters command
fn handle_list_converters_command() {
    let registry = ConverterRegistry::default();
    println!("Available converters:\n");
    for name in registry.list_converters() {
        match registry.get(&name) {
            Ok(converter) => println!("  {name:<8} {}", converter.description()),
            Err(_) => println!("  {name}"),
        }
    }
}
