//! Human-readable rendering of a build plan.

use carbon_config::{BuildPlan, OptimizationStage, PluginSpec};
use std::fmt::Write as _;

/// Render a plain-text overview of `plan`.
///
/// ```
/// use carbon_cli::ui::render_summary;
/// use carbon_config::{resolve, BuildMode};
///
/// let summary = render_summary(&resolve(BuildMode::Development));
/// assert!(summary.contains("mode:        development"));
/// ```
pub fn render_summary(plan: &BuildPlan) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "mode:        {}", plan.mode());
    let _ = writeln!(out, "api:         {}", plan.api_base_url());
    let _ = writeln!(out, "context:     {}", plan.context().display());
    let _ = writeln!(out, "source maps: {}", plan.source_map_policy().devtool());
    let _ = writeln!(
        out,
        "output:      {} (public path {})",
        plan.output().bundle_path().display(),
        plan.output().public_path
    );

    let _ = writeln!(out, "entries:");
    for (i, entry) in plan.entry_points().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, entry.specifier());
    }

    let _ = writeln!(out, "rules:");
    for rule in plan.rules() {
        let mut line = format!("  {} -> {}", rule.test.as_str(), rule.stage_names().join(" > "));
        if let Some(exclude) = &rule.exclude {
            let _ = write!(line, " (excluding {})", exclude.as_str());
        }
        let _ = writeln!(out, "{line}");
    }

    let plugins: Vec<_> = plan.plugins().iter().map(PluginSpec::name).collect();
    let _ = writeln!(out, "plugins:     {}", plugins.join(", "));

    if plan.optimization_enabled() {
        let stages: Vec<_> = plan
            .optimization_stages()
            .iter()
            .map(OptimizationStage::name)
            .collect();
        let _ = writeln!(out, "optimize:    {}", stages.join(", "));
    } else {
        let _ = writeln!(out, "optimize:    off");
    }

    let _ = writeln!(out, "artifacts:");
    for artifact in plan.artifacts() {
        let _ = writeln!(out, "  {} ({})", artifact.path.display(), artifact.kind);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_config::{resolve, BuildMode};

    #[test]
    fn development_summary() {
        let summary = render_summary(&resolve(BuildMode::Development));
        assert!(summary.contains("api:         http://localhost:3000"));
        assert!(summary.contains("source maps: inline-source-map"));
        assert!(summary.contains("optimize:    off"));
        assert!(summary.contains(
            "  1. webpack-hot-middleware/client?path=http://localhost:3000/__webpack_hmr&reload=true"
        ));
        assert!(summary.contains("  2. client/index.js"));
        assert!(summary.contains("(excluding (node_modules|bower_components))"));
    }

    #[test]
    fn production_summary_lists_stages_and_compressed_artifacts() {
        let summary = render_summary(&resolve(BuildMode::Production));
        assert!(summary.contains(
            "optimize:    dead-code-elimination, strip-comments, strip-console, compression"
        ));
        assert!(summary.contains("bundle.js.gz (compressed)"));
        assert!(summary.contains("bundle.js.map (source map)"));
    }
}
