use std::{io, path::PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use grook::{
    execute, from_brainfuck, parse, render_source, tokenize, Cursor, ExecutionError, ParseError,
    Tape, DEFAULT_TAPE_LEN,
};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),
    #[error("{0} lexical error(s) in input")]
    Lexical(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Interpret the program
    Interpret,
    /// Print the program back in canonical phrase form
    Render,
    /// Treat the input as brainfuck and print it as phrases
    FromBf,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input source file
    input_file: PathBuf,

    /// Select program mode
    #[arg(short, long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Number of cells on the tape
    #[arg(short, long, default_value_t = DEFAULT_TAPE_LEN)]
    tape_size: usize,

    /// Abort on lexical errors instead of skipping past them
    #[arg(short, long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();
    let source = std::fs::read_to_string(&args.input_file)?;

    if let Some(Mode::FromBf) = args.mode {
        println!("{}", from_brainfuck(&source));
        return Ok(());
    }

    let (tokens, diagnostics) = tokenize(&source);
    for diagnostic in &diagnostics {
        eprintln!("warning: {diagnostic}");
    }
    if args.strict && !diagnostics.is_empty() {
        return Err(ProgramError::Lexical(diagnostics.len()));
    }

    let program = parse(&tokens)?;

    match args.mode.unwrap_or(Mode::Interpret) {
        Mode::Interpret => {
            let mut tape = Tape::new(args.tape_size);
            let mut cursor = Cursor::default();
            execute(
                &program,
                &mut tape,
                &mut cursor,
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )?;
        }
        Mode::Render => println!("{}", render_source(&program)),
        // Handled before the front end runs.
        Mode::FromBf => unreachable!(),
    }

    Ok(())
}
