//! Small helpers shared by the command handlers.

use owo_colors::OwoColorize;

use storekeep_core::RecordId;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Parse a CLI id argument into a `RecordId`.
pub fn parse_id(raw: &str) -> RecordId {
    RecordId::from(raw)
}

/// Ask for confirmation before a destructive operation; `--yes` skips.
pub fn confirm(prompt: &str, global: &GlobalOpts) -> Result<bool, CliError> {
    if global.yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::General(format!("prompt failed: {e}")))
}

/// Print a success line (respects --quiet and color mode).
pub fn success(message: &str, global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    if output::should_color(&global.color) {
        println!("{} {message}", "✓".green());
    } else {
        println!("{message}");
    }
}

/// Validate that a price is positive before it goes anywhere near the
/// network (client-side form rule).
pub fn validate_price(price: f64) -> Result<(), CliError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "price".into(),
            reason: "must be a positive number".into(),
        })
    }
}

/// Validate an optional price range.
pub fn validate_price_range(min: Option<f64>, max: Option<f64>) -> Result<(), CliError> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(CliError::Validation {
                field: "price range".into(),
                reason: format!("--price-min ({lo}) exceeds --price-max ({hi})"),
            });
        }
    }
    Ok(())
}

/// Validate a required name field (client-side form rule).
pub fn validate_name(name: &str) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}
