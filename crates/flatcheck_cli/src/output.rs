use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::*;
use flatcheck_core::{ConfigWarning, Summary, ValidationConfig};
use serde_json::json;

pub fn print_summary(
    summary: &Summary,
    config: &ValidationConfig,
    warnings: &[ConfigWarning],
    started_at: DateTime<Utc>,
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_json_summary(summary, config, warnings, started_at),
        _ => {
            print_text_summary(summary, config);
            Ok(())
        }
    }
}

fn print_text_summary(summary: &Summary, config: &ValidationConfig) {
    println!("{} records processed", summary.records_processed);

    let flagged = format!("{} records flagged for errors", summary.records_flagged);
    if summary.has_flagged() {
        println!("{}", flagged.red().bold());
        println!(
            "See details in report file {}",
            config.report_path.display()
        );
    } else {
        println!("{}", flagged.green());
    }
}

fn print_json_summary(
    summary: &Summary,
    config: &ValidationConfig,
    warnings: &[ConfigWarning],
    started_at: DateTime<Utc>,
) -> Result<()> {
    let output = json!({
        "input": config.input_path.display().to_string(),
        "report": config.report_path.display().to_string(),
        "started_at": started_at.to_rfc3339(),
        "finished_at": Utc::now().to_rfc3339(),
        "passed": !summary.has_flagged(),
        "summary": summary,
        "warnings": warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_config(
    config: &ValidationConfig,
    warnings: &[ConfigWarning],
    format: &str,
) -> Result<()> {
    if format == "json" {
        let output = json!({
            "config": config,
            "warnings": warnings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for warning in warnings {
        print_warning(&warning.to_string());
    }

    let or_off = |value: Option<usize>| value.map_or("off".to_string(), |v| v.to_string());
    let required = if config.required_fields.is_empty() {
        "off".to_string()
    } else {
        config
            .required_fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    };

    println!("\n{}", "Configuration Summary:".bold());
    println!("  Input:           {}", config.input_path.display());
    println!("  Report:          {}", config.report_path.display());
    println!("  Delimiter:       {:?}", config.delimiter);
    println!("  Fields:          {}", or_off(config.expected_field_count));
    println!("  Length:          {}", or_off(config.expected_record_length));
    println!("  Required fields: {}", required);
    println!(
        "  Terminator:      length={}, fields={}",
        config.terminator.length_includes_terminator,
        config.terminator.fields_include_terminator
    );

    Ok(())
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}
