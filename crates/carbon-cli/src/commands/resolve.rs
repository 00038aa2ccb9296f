//! Resolve command implementation.

use std::fs;

use carbon_config::{DefineValues, Resolver};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::PlanSelection;
use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Resolve the plan and print it.
///
/// Nothing is written to stdout unless resolution succeeds.
pub fn execute(args: ResolveArgs, settings: &Settings) -> Result<()> {
    let selection = PlanSelection::from_args(&args.plan, settings)?;
    let defines = DefineValues::new(
        args.node_env.or_else(|| settings.node_env.clone()),
        args.debug.or_else(|| settings.debug.clone()),
    );

    if selection.mode.is_production() && defines.node_env.as_deref() != Some("production") {
        ui::warning(&format!(
            "production plan with NODE_ENV {}; pass --node-env production",
            defines.node_env.as_deref().unwrap_or("unset")
        ));
    }

    let plan = Resolver::new(&selection.context)
        .with_defines(defines)
        .resolve(selection.mode);

    if let Some(path) = &args.out {
        fs::write(path, plan.to_json_pretty()? + "\n").with_path(path)?;
        ui::success(&format!(
            "Wrote {} plan to {}",
            plan.mode(),
            path.display()
        ));
        return Ok(());
    }

    match args.format.or(settings.format).unwrap_or_default() {
        OutputFormat::Json => println!("{}", plan.to_json_pretty()?),
        OutputFormat::Summary => print!("{}", ui::render_summary(&plan)),
    }

    Ok(())
}
