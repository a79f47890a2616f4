//! JSON dispatch for the drillbook command-line runner.

use std::{fs, io::Read, path::Path};
use anyhow::{Context, Result};
use clap::Subcommand;
use drillbook_ops::{
    calculate_total_price, filter_active_users, filter_by_rating, format_value,
    get_length_of_json, merge_unique, print_book_details,
};
use drillbook_types::{Book, Item, Person, Product, Scalar, UniqueValues, User};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// One record utility, selected by subcommand.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Multiply a number by 10, uppercase a string, or negate a boolean
    FormatValue,
    /// Count the characters of a string or the elements of an array
    Length,
    /// Describe a person as "Name: .., Age: .."
    Person,
    /// Keep items rated above 4
    FilterRating,
    /// Keep active users
    FilterActive,
    /// Describe a book on one line
    Book,
    /// Merge two arrays ([[..], [..]]) without duplicates
    Unique,
    /// Sum discounted product prices
    TotalPrice,
}

/// Runs `operation` over the JSON document in `input` and returns the JSON result.
///
/// `Length` yields `null` when the input is neither a string nor an array.
/// Whole-valued numbers in the result are written as JSON integers.
pub fn run(operation: Operation, input: &str) -> Result<Value> {
    debug!("Running {:?} on {} bytes of input", operation, input.len());
    let output = match operation {
        Operation::FormatValue => {
            let value: Scalar = parse(input)?;
            serde_json::to_value(format_value(&value))?
        }
        Operation::Length => {
            let value: Value = parse(input)?;
            match get_length_of_json(&value)? {
                Some(len) => Value::from(len),
                None => Value::Null,
            }
        }
        Operation::Person => {
            let person: Person = parse(input)?;
            Value::String(person.details())
        }
        Operation::FilterRating => {
            let items: Vec<Item> = parse(input)?;
            serde_json::to_value(filter_by_rating(&items))?
        }
        Operation::FilterActive => {
            let users: Vec<User> = parse(input)?;
            serde_json::to_value(filter_active_users(&users))?
        }
        Operation::Book => {
            let book: Book = parse(input)?;
            Value::String(print_book_details(&book))
        }
        Operation::Unique => {
            let (first, second): (UniqueValues, UniqueValues) = parse(input)?;
            serde_json::to_value(merge_unique(&first, &second)?)?
        }
        Operation::TotalPrice => {
            let products: Vec<Product> = parse(input)?;
            Value::from(calculate_total_price(&products))
        }
    };
    Ok(whole_numbers_as_integers(output))
}

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rewrites floats with no fractional part (`50.0`) as integers (`50`), recursively.
pub fn whole_numbers_as_integers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(values) => {
            Value::Array(values.into_iter().map(whole_numbers_as_integers).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, whole_numbers_as_integers(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Reads the whole input document from `path`, or from stdin when absent.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read input from stdin")?;
            Ok(raw)
        }
    }
}

fn parse<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input)
        .map_err(drillbook_types::Error::from)
        .context("Failed to parse operation input")
}
