// parsum: tracing recursive-descent parser for sums with parentheses

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use parsum::freq::FreqTable;
use parsum::parser::lexer::{classification_lines, Lexer};
use parsum::parser::parse::Parser;
use parsum::parser::stream::CharStream;
use parsum::parser::tree::dump_tree;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("parsum");

    match args.get(1).map(|s| s.as_str()) {
        None => {
            let line = match prompt_for_line() {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error: failed to read input: {}", e);
                    std::process::exit(1);
                }
            };
            run_parse(&line);
        }
        Some("tokens") => {
            let source = read_file_arg(&args, program_name);
            run_tokens(&source);
        }
        Some("freq") => {
            let source = read_file_arg(&args, program_name);
            run_freq(&source);
        }
        Some(expr) => run_parse(expr),
    }
}

fn usage(program_name: &str) {
    eprintln!("Usage: {} [expression]", program_name);
    eprintln!("       {} tokens <file>", program_name);
    eprintln!("       {} freq <file>", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {}                  # prompt for an expression and parse it",
        program_name
    );
    eprintln!(
        "  {} \"(1+2)+3\"        # parse the given expression",
        program_name
    );
    eprintln!(
        "  {} tokens prog.c    # classify every token in a file",
        program_name
    );
    eprintln!(
        "  {} freq prog.c      # character frequency report",
        program_name
    );
}

fn prompt_for_line() -> io::Result<String> {
    print!("Enter an arithmetic expression (e.g. 1+2 or (1+2)+3): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn read_file_arg(args: &[String], program_name: &str) -> String {
    let path = match args.get(2) {
        Some(path) => path,
        None => {
            eprintln!("Error: no input file provided");
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    };

    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn run_parse(input: &str) {
    let mut parser = match Parser::new(input) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    };

    match parser.parse() {
        Ok(outcome) => {
            println!("Parse trace:");
            for line in parser.trace().lines() {
                println!("{}", line);
            }
            match outcome.trailing {
                None => {
                    println!();
                    println!("Parse successful!");
                    println!();
                    println!("The Output tree");
                    for line in dump_tree(parser.arena(), outcome.root) {
                        println!("{}", line);
                    }
                }
                Some(token) => {
                    let loc = token.location();
                    println!();
                    println!(
                        "Parse incomplete: unconsumed input starts with {} at line {}, column {}",
                        token, loc.line, loc.column
                    );
                }
            }
        }
        Err(e) => {
            // Print the rules applied before the failure, then the error.
            println!("Parse trace:");
            for line in parser.trace().lines() {
                println!("{}", line);
            }
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_tokens(source: &str) {
    let tokens = Lexer::new(CharStream::new(source)).tokenize();
    for line in classification_lines(&tokens) {
        println!("{}", line);
    }
}

fn run_freq(source: &str) {
    let table = FreqTable::tally(CharStream::new(source));
    for line in table.report() {
        println!("{}", line);
    }
}
