//! Tracing Example
//!
//! Wraps field parsers in tracing spans so each parse logs its outcome.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use tracing::{info, info_span};
use tribune::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let quantity = identity::<String, String>()
        .trim()
        .int(|s| format!("'{s}' is not a number"))
        .positive(|n| format!("{n} is not positive"))
        .instrument(info_span!("quantity"));

    let email = identity::<String, String>()
        .not_blank(|_| "email is blank".to_string())
        .filter(|s| s.contains('@'), |s| format!("'{s}' has no @"))
        .instrument(info_span!("email"));

    let order = compose(
        (
            quantity.contramap(|row: &(String, String)| row.0.clone()),
            email.contramap(|row: &(String, String)| row.1.clone()),
        ),
        |quantity: i32, email: String| (quantity, email),
    )
    .instrument(info_span!("order"));

    for row in [
        ("3".to_string(), "ada@example.com".to_string()),
        ("-1".to_string(), "nobody".to_string()),
    ] {
        let result = order.parse(&row);
        info!(valid = result.is_valid(), "row {:?}", row);
    }
}
