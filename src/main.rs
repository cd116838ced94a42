use anyhow::{Context, Result};
use casekit::cli::output::{self, OutputFormat};
use casekit::prompt::{ChainOptions, RefineOptions};
use casekit::{add_numbers, chain_prompts, refine_prompt, to_dot_case, to_lower_camel, tokenize};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "casekit")]
#[command(version, about = "String case conversion and prompt formatting", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert text to lowerCamelCase
    Camel {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
    },
    /// Convert text to dot.case
    Dot {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
    },
    /// Print the word tokens of text
    Tokens {
        /// Text to tokenize (reads stdin when omitted)
        text: Option<String>,

        /// Output format (text, json)
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,
    },
    /// Chain prompt fragments into a stepwise prompt
    Chain {
        /// Prompt fragments, one per argument
        fragments: Vec<String>,

        /// Closing instruction appended after the steps
        #[arg(long)]
        final_instruction: Option<String>,

        /// Skip the "Step N:" prefixes
        #[arg(long)]
        no_number: bool,
    },
    /// Normalize whitespace in a prompt
    Refine {
        /// Prompt text (reads stdin when omitted)
        text: Option<String>,

        /// Keep single newlines instead of flattening to one line
        #[arg(long)]
        preserve_newlines: bool,

        /// Prepend a courteous instruction header
        #[arg(long)]
        polite: bool,
    },
    /// Add two numbers with strict validation
    Add {
        a: Option<f64>,
        b: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casekit", &mut io::stdout());
        return Ok(());
    }

    let command = match cli.command {
        Some(command) => command,
        None => anyhow::bail!("No command specified. Use --help for usage information."),
    };

    let colored = !cli.no_color;

    match command {
        Commands::Camel { text } => {
            let input = read_input(text)?;
            println!("{}", to_lower_camel(Some(&input)));
        }
        Commands::Dot { text } => {
            let input = read_input(text)?;
            println!("{}", to_dot_case(Some(input.as_str())));
        }
        Commands::Tokens { text, format } => {
            let input = read_input(text)?;
            output::print_tokens(&tokenize(Some(&input)), &format);
        }
        Commands::Chain {
            fragments,
            final_instruction,
            no_number,
        } => {
            let options = ChainOptions {
                number_steps: !no_number,
                final_instruction,
            };
            let fragments: Vec<Option<&str>> =
                fragments.iter().map(|f| Some(f.as_str())).collect();
            print!("{}", chain_prompts(&fragments, &options));
        }
        Commands::Refine {
            text,
            preserve_newlines,
            polite,
        } => {
            let input = read_input(text)?;
            let options = RefineOptions {
                preserve_newlines,
                polite,
            };
            print!("{}", refine_prompt(Some(&input), &options));
        }
        Commands::Add { a, b } => match add_numbers(a, b) {
            Ok(sum) => println!("{}", sum),
            Err(err) => {
                output::print_error(&err.to_string(), colored);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
