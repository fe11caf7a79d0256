// Example demonstrating the parse API

use minijson::{parse, ParseError, SliceParser, Tag};

fn main() -> Result<(), ParseError> {
    for json in ["null", " true ", "false", "3.1416", "-1.5e-3"] {
        let value = parse(json)?;
        match value.get_type() {
            Tag::Number => println!("{:?} -> number {}", json, value.get_number()),
            tag => println!("{:?} -> {}", json, tag),
        }
    }

    println!();
    for json in ["", "tru", "0123", "null x", "1e400"] {
        let mut parser = SliceParser::new(json);
        match parser.parse() {
            Ok(value) => println!("{:?} -> {:?}", json, value),
            Err(e) => println!("{:?} -> error: {} at {}", json, e, parser.location()),
        }
    }
    Ok(())
}
