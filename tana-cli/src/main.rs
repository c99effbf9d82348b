// Command-line interface for tana-paste
//
// Converts Markdown into Tana Paste, the clipboard format of the Tana outliner. The conversion
// itself lives in tana-babel; this binary only deals with files, stdin/stdout, configuration and
// splitting very large results into several pastes.
//
// Usage:
//  tana [<input>] [--to <format>] [--from <format>] [--output <file>]           - Convert (default)
//  tana convert [<input>] [--to <format>] [--from <format>] [--output <file>]   - Same as above (explicit)
//  tana --list-formats                                                          - List available formats
//
// With no input, or with `-` as input, Markdown is read from stdin. Output goes to stdout unless
// --output is given.
//
// Extra Parameters:
//
// Options can be passed using --extra-<parameter-name> <value>. The CLI strips the "extra-" prefix.
// Known keys override the configuration (highlights, code-blocks, chunk-size); anything else is
// handed to the target format.
// Example:
//  tana notes.md --extra-highlights
//  tana notes.md --to json --extra-pretty false

mod output;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tana_babel::format::parse_bool_option;
use tana_babel::formats::MarkdownFormat;
use tana_babel::transforms::chunk_tana_paste;
use tana_babel::FormatRegistry;
use tana_config::{Loader, TanaConfig};

const SUBCOMMANDS: &[&str] = &["convert", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("tana")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to Tana Paste")
        .long_about(
            "tana converts Markdown documents into Tana Paste, the plain-text format the Tana\n\
            outliner accepts from the clipboard.\n\n\
            Headings become !! heading nodes, list items and paragraphs become bullets, and\n\
            nesting follows heading levels and list indentation.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tana notes.md                       # Convert to Tana Paste (stdout)\n  \
            pbpaste | tana | pbcopy             # Convert the clipboard in place\n  \
            tana notes.md -o notes.tana         # Write to a file\n  \
            tana notes.md --to json             # Inspect how lines were classified\n  \
            tana notes.md --extra-highlights    # Also convert ==highlights==\n  \
            tana notes.md --extra-code-blocks   # Keep ``` fenced blocks as one bullet",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tana.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .long_about(
                    "Convert a document to Tana Paste or another output format.\n\n\
                    Formats:\n  \
                    - markdown: Markdown input (.md, .markdown)\n  \
                    - tana:     Tana Paste output (default target)\n  \
                    - json:     Outline structure as JSON\n\n\
                    The source format is auto-detected from the file extension and defaults\n\
                    to markdown. Output goes to stdout by default, or use -o to specify a file.\n\
                    Tana Paste output longer than the chunk size is split into several\n\
                    self-contained pastes; with -o out.tana they are written to out_1.tana,\n\
                    out_2.tana, and so on.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin (default: stdin)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value("tana")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("chunk-size")
                        .long("chunk-size")
                        .value_name("CHARS")
                        .help("Maximum characters per Tana Paste chunk")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // `tana notes.md --to json` has no subcommand: retry as `convert`
            let first = cleaned_args.get(1).map(String::as_str);
            let is_builtin = matches!(first, Some("-h" | "--help" | "-V" | "--version"));
            if first.is_some_and(|arg| !SUBCOMMANDS.contains(&arg)) && !is_builtin {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    // Global args propagate down, so the innermost matches see them wherever they were given
    let scoped = matches.subcommand().map(|(_, m)| m).unwrap_or(&matches);

    if scoped.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(scoped.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            if let Some(&size) = sub_matches.get_one::<usize>("chunk-size") {
                config.convert.output.chunk_size = size;
            }
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or("tana");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &extra_params, &config);
        }
        None => {
            handle_convert_command(None, None, "tana", None, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: Option<&str>,
    from: Option<&str>,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &TanaConfig,
) {
    let registry = registry_from_config(config);

    let from = resolve_source_format(&registry, input, from);
    for name in [from.as_str(), to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", describe_input(input));
        std::process::exit(1);
    });

    if source.trim().is_empty() {
        eprintln!("Error: nothing to convert, {} is empty", describe_input(input));
        std::process::exit(1);
    }

    let outline = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let text = registry
        .serialize_with_options(&outline, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let chunks = if to == "tana" {
        chunk_tana_paste(&text, config.convert.output.chunk_size)
    } else {
        vec![text]
    };
    log::debug!(
        "converted {} lines from {from} to {to} in {} chunk(s)",
        outline.len(),
        chunks.len()
    );

    let written = match output {
        Some(path) => output::write_chunks(path, &chunks),
        None => output::print_chunks(&chunks),
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {e}");
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!("  {name:<10} {direction:<7} {}", format.description());
    }
}

fn registry_from_config(config: &TanaConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new((&config.convert.markdown).into()));
    registry
}

fn resolve_source_format(
    registry: &FormatRegistry,
    input: Option<&str>,
    explicit: Option<&str>,
) -> String {
    if let Some(format) = explicit {
        return format.to_string();
    }
    input
        .filter(|path| *path != "-")
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| "markdown".to_string())
}

fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) if path != "-" => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn describe_input(input: Option<&str>) -> String {
    match input {
        Some(path) if path != "-" => format!("file '{path}'"),
        _ => "stdin".to_string(),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TanaConfig {
    let loader = Loader::new().with_optional_file("tana.toml");
    let loader = if let Some(path) = explicit_path {
        log::debug!("Using config from: {path}");
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut TanaConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["highlights", "convert-highlights"]) {
        config.convert.markdown.convert_highlights = parse_bool_arg("highlights", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["code-blocks", "fenced-code-blocks"]) {
        config.convert.markdown.fenced_code_blocks = parse_bool_arg("code-blocks", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["chunk-size"]) {
        config.convert.output.chunk_size = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid number '{raw}' for --extra-chunk-size");
            std::process::exit(1);
        });
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool_option(flag, raw).unwrap_or_else(|_| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
