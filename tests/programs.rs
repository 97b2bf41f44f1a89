//! Runs every phrase program in the programs directory and compares its
//! output against the paired `.out` file. A `.in` file, when present,
//! supplies the program's input.

use std::{collections::VecDeque, env, error::Error, path::PathBuf};

use grook::{from_brainfuck, parse_source, test_utils::test_execute};

fn find_programs() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR")?.into();
    path.push("tests");
    path.push("programs");

    let mut results = vec![];
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some("gk") = path.extension().and_then(|x| x.to_str()) {
            results.push(path);
        }
    }
    Ok(results)
}

fn run_program(
    program_file: &PathBuf,
    input: Option<PathBuf>,
    expected_output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let src = std::fs::read_to_string(program_file)?;
    let expected = std::fs::read(&expected_output)?;
    let mut input: VecDeque<u8> = if let Some(f) = input {
        std::fs::read(&f)?.into()
    } else {
        VecDeque::new()
    };

    let (program, diagnostics) = parse_source(&src)?;
    assert!(
        diagnostics.is_empty(),
        "{program_file:?}: {diagnostics:?}"
    );

    let exec = test_execute(&program, &mut input);
    assert_eq!(exec.result, Some(Ok(())), "{program_file:?}");
    assert_eq!(exec.output, expected, "{program_file:?}");

    Ok(())
}

#[test]
fn test_programs() {
    let programs = find_programs().unwrap();
    assert!(!programs.is_empty());
    for program in programs {
        let in_file = program.with_extension("in");
        let in_file = if in_file.exists() { Some(in_file) } else { None };
        let out_file = program.with_extension("out");
        match run_program(&program, in_file, out_file) {
            Ok(_) => (),
            Err(err) => panic!("{err:?} {program:?}"),
        }
    }
}

#[test]
fn test_converted_hello_world() {
    // The whole pipeline: brainfuck in, phrases out, program run on the
    // default 100-cell tape.
    let bf = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.\
              +++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
    let (program, diagnostics) = parse_source(&from_brainfuck(bf)).unwrap();
    assert!(diagnostics.is_empty());

    let exec = test_execute(&program, &mut VecDeque::<u8>::new());
    assert_eq!(exec.result, Some(Ok(())));
    assert_eq!(exec.output, b"Hello World!\n");
}
