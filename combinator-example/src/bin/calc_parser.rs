//! Evaluates a Polish-notation arithmetic expression.
//!
//! Reads from the file named by the first argument, or from stdin when no
//! argument is given. Prints the evaluated number, or the parse error on
//! stderr with a nonzero exit.
//!
//! ```text
//! $ echo '* - 5 3 / 10 2' | calc-parser
//! 10
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use combinator_example::polish;
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

    let parser = exact(polish::expression());
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
