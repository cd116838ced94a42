use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenOutput {
    count: usize,
    tokens: Vec<String>,
}

pub fn print_tokens(tokens: &[String], format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                println!("{}", token);
            }
        }
        OutputFormat::Json => {
            let output = TokenOutput {
                count: tokens.len(),
                tokens: tokens.to_vec(),
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
}

pub fn print_error(message: &str, colored_output: bool) {
    if colored_output {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}
