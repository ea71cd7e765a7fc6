// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod diagnostic;
mod logger;

use std::{fs::read_dir, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use log::{debug, info};
use orange::{Lexer, ParseTree, Parser, SourceCode, Token};

use self::{
    config::ConfigRoot,
    diagnostic::print_error,
    logger::Logger,
};

const SOURCE_FILE_EXTENSION: &str = "or";

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a source file with its location.
    Tokens {
        file: PathBuf,
    },

    /// Print the parse tree of a source file.
    Parse {
        file: PathBuf,
    },

    /// Lex and parse every source file of a project.
    Check {
        directory: Option<PathBuf>,
    },
}

impl Commands {
    fn project_directory(&self) -> anyhow::Result<PathBuf> {
        match self {
            Self::Tokens { file } | Self::Parse { file } => {
                Ok(match file.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                })
            }

            Self::Check { directory: Some(directory) } => Ok(directory.clone()),
            Self::Check { directory: None } => std::env::current_dir().context("failed to get working directory"),
        }
    }
}

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(0) => (),
        Ok(_) => exit(1),
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            exit(2);
        }
    }
}

/// Returns the number of lexical and parse errors reported.
fn run(args: Args) -> anyhow::Result<usize> {
    let project_directory = args.command.project_directory()?;
    let config = ConfigRoot::load(&project_directory)?;
    Logger::initialize(args.verbose || config.log.debug);

    match args.command {
        Commands::Tokens { file } => print_tokens(&file),
        Commands::Parse { file } => print_tree(&file),
        Commands::Check { .. } => check(&project_directory, &config),
    }
}

fn load(path: &Path) -> anyhow::Result<SourceCode> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(SourceCode::new(path, contents))
}

fn lex(source_code: &SourceCode) -> (Vec<Token>, usize) {
    let (tokens, errors) = Lexer::new(source_code).collect_all();

    for e in &errors {
        print_error(source_code, e.location.as_zero_range(), &e.kind);
    }

    (tokens, errors.len())
}

fn parse(source_code: &SourceCode) -> (Option<ParseTree>, usize) {
    let (tokens, mut error_count) = lex(source_code);

    let mut parser = Parser::new(source_code.path().to_path_buf(), &tokens);
    let tree = match parser.parse_tree() {
        Ok(tree) => Some(tree),
        Err(e) => {
            print_error(source_code, e.range(), &e);
            error_count += 1;
            None
        }
    };

    (tree, error_count)
}

fn print_tokens(path: &Path) -> anyhow::Result<usize> {
    let source_code = load(path)?;
    let (tokens, error_count) = lex(&source_code);

    for token in &tokens {
        println!("{}\t{}\t{token}", token.begin, token.kind.name());
    }

    Ok(error_count)
}

fn print_tree(path: &Path) -> anyhow::Result<usize> {
    let source_code = load(path)?;
    let (tree, error_count) = parse(&source_code);

    if let Some(tree) = tree {
        println!("{tree:#?}");
    }

    Ok(error_count)
}

fn check(project_directory: &Path, config: &ConfigRoot) -> anyhow::Result<usize> {
    if !config.project.name.is_empty() {
        info!("Checking project {}", config.project.name);
    }

    let mut files = Vec::new();
    for directory in config.source_directories(project_directory) {
        collect_source_files(&directory, &mut files)?;
    }
    files.sort();

    let mut error_count = 0;
    for file in &files {
        debug!("Checking {}", file.display());
        let source_code = load(file)?;
        error_count += parse(&source_code).1;
    }

    let summary = format!(
        "Checked {} {}, found {} {}",
        files.len(),
        if files.len() == 1 { "file" } else { "files" },
        error_count,
        if error_count == 1 { "error" } else { "errors" },
    );

    if error_count == 0 {
        eprintln!("{}", summary.green().bold());
    } else {
        eprintln!("{}", summary.red().bold());
    }

    Ok(error_count)
}

fn collect_source_files(directory: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries = read_dir(directory)
        .with_context(|| format!("failed to read directory {}", directory.display()))?;

    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            collect_source_files(&path, files)?;
        } else if path.extension().is_some_and(|extension| extension == SOURCE_FILE_EXTENSION) {
            files.push(path);
        }
    }

    Ok(())
}
