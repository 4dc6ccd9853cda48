//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration and input validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// What the configuration resolves to, when the check got that far.
    pub summary: Option<PackageSummary>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

/// Resolved facts about the configured package.
#[derive(Debug)]
pub struct PackageSummary {
    pub package: String,
    pub language: String,
    pub generator: String,
    pub interface_files: usize,
    pub dependencies: Vec<String>,
    pub outputs: usize,
    pub inputs: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));

        if let Some(summary) = &self.summary {
            out.newline();
            out.key_value("package", &summary.package);
            out.key_value(
                "generator",
                &format!("{} ({})", summary.generator, summary.language),
            );
            out.key_value("interface files", &summary.interface_files.to_string());
            out.key_value("declared outputs", &summary.outputs.to_string());
            out.key_value("tracked inputs", &summary.inputs.to_string());
            if !summary.dependencies.is_empty() {
                out.section("dependencies");
                for dep in &summary.dependencies {
                    out.list_item(dep);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_invalid_hides_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("idlbridge.toml"),
            summary: None,
            errors: vec!["target dependency '/x/gen' does not exist (generator)".into()],
            warnings: vec![],
            infos: vec![],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: error: target dependency '/x/gen' does not exist (generator)",
                ""
            ]
        );
    }

    #[test]
    fn test_render_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("idlbridge.toml"),
            summary: Some(PackageSummary {
                package: "my_msgs".into(),
                language: "cpp".into(),
                generator: "rosidl_generator_cpp".into(),
                interface_files: 2,
                dependencies: vec!["std_msgs".into()],
                outputs: 8,
                inputs: 5,
            }),
            errors: vec![],
            warnings: vec![],
            infos: vec![],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "✓ idlbridge.toml is valid");
        assert!(out.lines.contains(&"generator: rosidl_generator_cpp (cpp)".to_string()));
        assert_eq!(out.lines.last().map(String::as_str), Some("  - std_msgs"));
    }
}
