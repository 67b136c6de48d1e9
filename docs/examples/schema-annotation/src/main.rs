//! Annotating a small schema with @constraint and inspecting the attached rules

use anyhow::Result;
use constraint_directive::logging::setup::{init_logging, LoggingConfig};
use constraint_directive::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    init_logging(LoggingConfig::development()).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    println!("=== @constraint Schema Annotation Example ===\n");

    let config = CompilerConfig::from_json_str(r#"{"unwired": "ignore"}"#)?
        .with_log_config(LogConfig::verbose());
    let directive = ConstraintDirective::with_config(config)?;

    // input LengthInput { arg: String @constraint(minLength: 3, maxLength: 5) }
    let mut arg = AttachedRules::input_field("LengthInput.arg");
    let applied = directive.apply_json(&mut arg, &json!({"minLength": 3, "maxLength": 5}))?;
    println!("{}", serde_json::to_string_pretty(&applied)?);

    // pattern(input: String @constraint(pattern: "^[a-z]+$"))
    let mut pattern = AttachedRules::argument("Query.pattern.input");
    directive.apply_json(&mut pattern, &json!({"pattern": "^[a-z]+$"}))?;

    // withoutValidator(input: String @constraint(pattern: "^[a-z]+$", withoutValidator: true))
    let mut unchecked = AttachedRules::argument("Query.withoutValidator.input");
    let applied = directive.apply_json(
        &mut unchecked,
        &json!({"pattern": "^[a-z]+$", "withoutValidator": true}),
    )?;
    println!("\nsuppressed: {}", applied.report.suppressed);

    for owner in [&arg, &pattern, &unchecked] {
        println!("\n{}:", owner.owner_name());
        if owner.rules().is_empty() {
            println!("  (no rules)");
        }
        for rule in owner.rules() {
            println!("  - {rule}");
        }
    }

    // Unknown options abort the schema build
    let mut broken = AttachedRules::argument("Query.broken.input");
    match directive.apply_json(&mut broken, &json!({"maxItems": 3})) {
        Ok(_) => println!("\nunexpected success"),
        Err(e) => println!("\nschema build aborted: {e}"),
    }

    Ok(())
}
