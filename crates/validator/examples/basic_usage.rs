//! Basic usage example for sieve-validator

use serde_json::json;
use sieve_validator::prelude::*;

fn main() {
    // Create a simple rule
    let rule = string_type().and(length(Some(5), None).unwrap());

    // Valid input
    match rule.assert(&json!("hello")) {
        Ok(()) => println!("✓ 'hello' is valid (length >= 5)"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // Invalid input
    match rule.assert(&json!("hi")) {
        Ok(()) => println!("✓ 'hi' is valid"),
        Err(e) => println!("✗ 'hi' is invalid:\n{}", e.full_message()),
    }

    println!("\nsieve-validator is working correctly!");
}
