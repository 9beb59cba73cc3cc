use anyhow::Result;
use colored::*;
use rowcheck_core::{CheckReport, Defect};
use serde_json::json;

pub fn print_check_report(report: &CheckReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  CHECK REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!("\n{} {}", "✓".green().bold(), "Check PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Check FAILED".red().bold());
    }

    if !report.defects.is_empty() {
        println!("\n{}", "Defects:".red().bold());
        for (i, defect) in report.defects.iter().enumerate() {
            let label = match defect {
                Defect::Shape(_) => "shape".yellow(),
                Defect::Content(_) => "content".red(),
            };
            println!("  {}. [{}] {}", i + 1, label, defect);
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows read:       {}", report.stats.rows_read);
    println!("  Rows validated:  {}", report.stats.rows_validated);
    println!("  Shape errors:    {}", report.shape_count());
    println!("  Content errors:  {}", report.content_count());
    println!("  Duration:        {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &CheckReport) -> Result<()> {
    let output = json!({
        "passed": report.passed,
        "defects": report.defects,
        "summary": {
            "rows_read": report.stats.rows_read,
            "rows_validated": report.stats.rows_validated,
            "rows_skipped": report.stats.rows_skipped,
            "validator_calls": report.stats.validator_calls,
            "shape_errors": report.shape_count(),
            "content_errors": report.content_count(),
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
