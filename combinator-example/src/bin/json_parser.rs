//! Parses a JSON document and prints the decoded value.
//!
//! Reads from the file named by the first argument, or from stdin when no
//! argument is given. Exits nonzero with the parse error on stderr when
//! the input is not a single valid JSON value.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use combinator_example::json;
use combinator_framework::combinators::exact;
use combinator_framework::{apply, State};

fn main() {
    let input = match read_input() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let parser = exact(json::value());
    let mut state = State::from_bytes(input.trim().as_bytes().to_vec());
    match apply(&parser, &mut state) {
        Ok(mut result) => match result.take_value() {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("error: parse produced no value");
                process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

fn read_input() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
