use clap::{Parser as ClapParser, Subcommand};
use pseudotex::cli::{self, CheckOptions, CheckResult, CliError};
use std::fs;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "pseudotex")]
#[command(about = "pseudotex - Convert indentation-based pseudocode into LaTeX algorithms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert pseudocode to a LaTeX algorithm
    Convert {
        /// Source file (reads --input or stdin if not provided)
        file: Option<String>,

        /// Pseudocode given inline
        #[arg(short, long)]
        input: Option<String>,

        /// Print the syntax tree as JSON instead of LaTeX
        #[arg(long)]
        ast: bool,

        /// Pretty-print the JSON syntax tree
        #[arg(short, long)]
        pretty: bool,

        /// Emit only the \Function listing, without the algorithm environment
        #[arg(long)]
        bare: bool,
    },

    /// Only validate the pseudocode syntax
    Check {
        /// Source file (reads --input or stdin if not provided)
        file: Option<String>,

        /// Pseudocode given inline
        #[arg(short, long)]
        input: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'pseudotex docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            file,
            input,
            ast,
            pretty,
            bare,
        } => read_source(file, input).and_then(|source| {
            run(CheckOptions {
                source,
                syntax_only: false,
                emit_ast: ast,
                pretty,
                bare,
            })
        }),
        Commands::Check { file, input } => read_source(file, input).and_then(|source| {
            run(CheckOptions {
                source,
                syntax_only: true,
                ..CheckOptions::default()
            })
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_source(file: Option<String>, input: Option<String>) -> Result<Option<String>, CliError> {
    if let Some(path) = file {
        return fs::read_to_string(path).map(Some).map_err(CliError::Io);
    }

    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run(options: CheckOptions) -> Result<(), CliError> {
    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Latex(latex) => println!("{}", latex),
        CheckResult::Ast(tree) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&tree)
            } else {
                serde_json::to_string(&tree)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
