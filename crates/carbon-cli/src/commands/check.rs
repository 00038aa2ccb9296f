//! Check command implementation.
//!
//! Resolves the plan and verifies the files it references exist.

use carbon_config::{FsValidator, PlanValidator, Resolver};

use crate::cli::CheckArgs;
use crate::commands::PlanSelection;
use crate::config::Settings;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs, settings: &Settings) -> Result<()> {
    let selection = PlanSelection::from_args(&args.plan, settings)?;
    ui::info(&format!(
        "Checking {} plan in {}...",
        selection.mode,
        selection.context.display()
    ));

    let plan = Resolver::new(&selection.context).resolve(selection.mode);

    if let Err(err) = FsValidator::new(&selection.context).validate(&plan) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    for entry in plan.entry_points() {
        ui::success(&format!("  {}", entry.specifier()));
    }
    ui::success("All checks passed!");
    Ok(())
}
