//! Command-line interface for bnf2html
//! Converts a W3C-style EBNF grammar into a cross-referenced HTML table (or one of
//! the other registered formats).
//!
//! Usage:
//!   bnf2html `[<path>|-]` [--format `<format>`] [--prefix `<ns>`]   - Convert a grammar
//!   bnf2html --list-formats                                     - List all available formats
//!
//! Settings come from the embedded defaults, then `--config <file>`, then flags.

use bnf_babel::FormatRegistry;
use bnf_config::{BnfConfig, ConfigError, Loader};
use bnf_parser::bnf::{compile_grammar, DiagnosticSeverity, Grammar};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Read};

fn build_cli() -> Command {
    Command::new("bnf2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render an EBNF grammar as a cross-referenced HTML table")
        .arg(
            Arg::new("path")
                .help("Path to the grammar file, '-' or nothing for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (html, json, tag)"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .short('p')
                .help("Namespace prefix for anchors and links"),
        )
        .arg(
            Arg::new("standalone")
                .long("standalone")
                .help("Wrap the table in a complete HTML document")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Document title for --standalone"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject rules with text left over after the expression")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print warnings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("deny-errors")
                .long("deny-errors")
                .help("Exit with status 1 if any rule failed to compile")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    handle_convert_command(path, &config);
}

/// Layer the config file and the command-line flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<BnfConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }

    for (arg, key) in [
        ("format", "output.format"),
        ("prefix", "render.namespace"),
        ("title", "render.title"),
    ] {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }
    for (flag, key) in [
        ("standalone", "render.standalone"),
        ("strict", "parse.strict"),
        ("quiet", "diagnostics.quiet"),
        ("deny-errors", "diagnostics.deny_errors"),
    ] {
        if matches.get_flag(flag) {
            loader = loader.set_override(key, true)?;
        }
    }

    loader.build()
}

/// Handle the conversion of one grammar
fn handle_convert_command(path: &str, config: &BnfConfig) {
    let registry = FormatRegistry::with_defaults();
    let format = config.output.format.as_str();
    if !registry.has(format) {
        eprintln!("Unknown format '{}'", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let grammar = compile_grammar(&source, config.compile_options());
    report_diagnostics(&grammar, config.diagnostics.quiet);

    let output = registry
        .serialize(&grammar, format, &config.render_options())
        .unwrap_or_else(|e| {
            eprintln!("Error formatting output: {}", e);
            std::process::exit(1);
        });
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    if config.diagnostics.deny_errors && grammar.has_errors() {
        std::process::exit(1);
    }
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn report_diagnostics(grammar: &Grammar, quiet: bool) {
    for diagnostic in &grammar.diagnostics {
        if quiet && diagnostic.severity == DiagnosticSeverity::Warning {
            continue;
        }
        eprintln!("{}", diagnostic);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
