//! Report and self-check commands

use anyhow::{Context, Result};
use crossterm::style::Color;

use super::art;
use super::output::Output;
use crate::domain::{check, Catalog, CheckSummary, Geometry, Shape, ShapeKind};

/// Which report passes to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportPass {
    /// Describe line and figure for each shape
    Describe,
    /// Area and perimeter for each shape
    Measure,
    /// Area of each shape, by name
    Area,
    /// All passes in order
    #[default]
    All,
}

impl ReportPass {
    fn includes(self, pass: ReportPass) -> bool {
        self == ReportPass::All || self == pass
    }
}

/// Runs the self-check, then prints the sample catalog report
pub fn run(output: &Output, pass: ReportPass) -> Result<()> {
    let summary = self_check(output)?;

    let catalog = Catalog::sample().context("Failed to build sample catalog")?;
    output.verbose_ctx("report", &format!("Built sample catalog with {} shapes", catalog.len()));

    if output.is_json() {
        let shapes: Vec<_> = catalog.measurements().collect();
        output.data(&serde_json::json!({
            "checks": summary.passed,
            "shapes": shapes,
        }));
        return Ok(());
    }

    if pass.includes(ReportPass::Describe) {
        output.verbose_ctx("report", "Describe pass");
        describe_pass(output, &catalog);
    }
    if pass.includes(ReportPass::Measure) {
        output.verbose_ctx("report", "Measure pass");
        measure_pass(output, &catalog);
    }
    if pass.includes(ReportPass::Area) {
        output.verbose_ctx("report", "Area pass");
        area_pass(output, &catalog);
    }

    Ok(())
}

/// Runs only the self-check and reports the result
pub fn check(output: &Output) -> Result<()> {
    let summary = self_check(output)?;

    output.data(&summary);
    output.success(&format!(
        "Self-check passed: {} checks within tolerance {}",
        summary.passed, summary.tolerance
    ));

    Ok(())
}

/// Lists kind tags with their display labels
pub fn kinds(output: &Output) -> Result<()> {
    if output.is_json() {
        let items: Vec<_> = ShapeKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "kind": kind,
                    "label": kind.label(),
                })
            })
            .collect();
        output.data(&items);
    } else {
        println!("{:<28} LABEL", "KIND");
        println!("{}", "-".repeat(56));
        for kind in ShapeKind::ALL {
            println!("{:<28} {}", kind.as_str(), kind.label());
        }
    }

    Ok(())
}

fn self_check(output: &Output) -> Result<CheckSummary> {
    output.verbose_ctx("check", &format!("Running self-check (tolerance {})", check::TOLERANCE));
    let summary = check::run()?;
    output.verbose_ctx("check", &format!("{} checks passed", summary.passed));
    Ok(summary)
}

fn describe_pass(output: &Output, catalog: &Catalog) {
    for shape in catalog {
        let (color, heading, figure) = describe_block(shape);
        output.heading(heading, color);
        for row in figure {
            output.line(row, color);
        }
        output.blank();
    }
}

/// Describe line and figure for one shape, both in the kind's color
fn describe_block(shape: &Shape) -> (Color, String, &'static [&'static str]) {
    let kind = shape.kind();
    (art::color(kind), shape.describe(), art::figure(kind))
}

fn measure_pass(output: &Output, catalog: &Catalog) {
    for m in catalog.measurements() {
        output.line(
            format!("Area: {:.2}, Perimeter: {:.2}", m.area, m.perimeter),
            Color::Yellow,
        );
    }
}

fn area_pass(output: &Output, catalog: &Catalog) {
    for m in catalog.measurements() {
        output.line(format!("Area of the {}: {:.2}", m.label, m.area), Color::Magenta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_includes_every_pass() {
        for pass in [ReportPass::Describe, ReportPass::Measure, ReportPass::Area] {
            assert!(ReportPass::All.includes(pass));
        }
    }

    #[test]
    fn single_pass_includes_only_itself() {
        assert!(ReportPass::Area.includes(ReportPass::Area));
        assert!(!ReportPass::Area.includes(ReportPass::Describe));
        assert!(!ReportPass::Describe.includes(ReportPass::Measure));
    }

    #[test]
    fn describe_line_uses_kind_color() {
        let catalog = Catalog::sample().unwrap();
        let colors: Vec<_> = catalog.iter().map(|s| describe_block(s).0).collect();
        assert_eq!(
            colors,
            vec![Color::Red, Color::Blue, Color::Green, Color::Blue, Color::Green]
        );

        let (_, heading, figure) = describe_block(catalog.iter().next().unwrap());
        assert_eq!(heading, "Circle - Area: 78.54, Perimeter: 31.42");
        assert_eq!(figure.len(), 8);
    }

    #[test]
    fn default_pass_is_all() {
        assert_eq!(ReportPass::default(), ReportPass::All);
    }
}
