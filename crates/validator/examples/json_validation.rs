//! Validating JSON documents with sieve-validator.
//!
//! Run: `cargo run -p sieve-validator --example json_validation`

use serde_json::{Value, json};
use sieve_validator::prelude::*;
use sieve_validator::searcher::StaticSource;

fn main() {
    direct_value_validation();
    field_level_validation();
    conditional_rules();
    custom_messages();
    error_reporting();
}

/// Validate raw JSON values.
fn direct_value_validation() {
    println!("=== Direct Value Validation ===\n");

    let port = int_type().and(between(1, 65535).unwrap());
    println!("port rule on 8080:  {}", status(&port, &json!(8080)));
    println!("port rule on 70000: {}", status(&port, &json!(70000)));

    let enabled = true_val();
    println!("trueVal on \"yes\":   {}", status(&enabled, &json!("yes")));

    // Type mismatch: a number given to a string rule is a rejection, not an error
    let name = string_type().and(not_empty());
    println!("name rule on 42:    {}", status(&name, &json!(42)));

    println!();
}

/// Validate members of objects with navigators.
fn field_level_validation() {
    println!("=== Field-Level Validation ===\n");

    let data = json!({
        "server": {
            "host": "localhost",
            "port": 8080
        }
    });

    let host = key_nested("server.host", string_type().and(not_empty())).unwrap();
    println!("server.host present:  {}", status(&host, &data));

    let tls = key_nested("server.tls", bool_type()).unwrap();
    println!("server.tls required:  {}", status(&tls, &data));

    let tls_optional = key_nested_optional("server.tls", bool_type()).unwrap();
    println!("server.tls optional:  {}", status(&tls_optional, &data));

    let exact = key("server", key_set(vec![key_exists("host"), key_exists("port")]));
    println!("server keys exact:    {}", status(&exact, &data));

    println!();
}

/// Pick rules based on the input.
fn conditional_rules() {
    println!("=== Conditional Rules ===\n");

    // A domain is required only when the mode is "public".
    let rule = when(
        key("mode", equals("public")),
        key(
            "domain",
            public_domain_suffix(StaticSource::new().with("UK", ["CO.UK", "ORG.UK"])),
        ),
        None,
    );

    for input in [
        json!({"mode": "private"}),
        json!({"mode": "public", "domain": "co.uk"}),
        json!({"mode": "public", "domain": "example.fr"}),
    ] {
        println!("{input}: {}", status(&rule, &input));
    }

    println!();
}

/// Override messages per tree.
fn custom_messages() {
    println!("=== Custom Messages ===\n");

    let templates = TemplateSet::from_json_str(
        r#"{
            "keyExists": "please fill in {name}",
            "length": "{name} needs {min} to {max} characters"
        }"#,
    )
    .unwrap();

    let signup = Validator::new()
        .rule(key("username", length(Some(3), Some(16)).unwrap()))
        .rule(key("email", regex("^[^@\\s]+@[^@\\s]+$").unwrap()))
        .with_templates(templates);

    if let Err(report) = signup.assert(&json!({"username": "al"})) {
        for (path, message) in report.messages() {
            println!("  {path}: {message}");
        }
    }

    println!();
}

/// Inspect the structure of a report.
fn error_reporting() {
    println!("=== Error Reporting ===\n");

    let order = Validator::new()
        .named("order")
        .rule(key("id", int_type().and(positive())))
        .rule(key("lines", each(key("qty", int_type().and(greater_than(0))))));

    let input = json!({"id": -1, "lines": [{"qty": 2}, {"qty": 0}, {}]});
    match order.assert(&input) {
        Ok(()) => println!("order is valid"),
        Err(report) => {
            println!("{}\n", report.full_message());
            println!("{report}\n");
            println!(
                "{}",
                serde_json::to_string_pretty(&report).unwrap_or_default()
            );
        }
    }
}

fn status(rule: &impl Rule, input: &Value) -> String {
    match rule.assert(input) {
        Ok(()) => "valid".to_owned(),
        Err(e) => format!("invalid ({})", e.message),
    }
}
