//! Check operation - configuration and input validation.

use std::path::Path;

use idlbridge_codegen::pipeline::{GenerateOptions, Pipeline, Severity};
use idlbridge_manifest::Manifest;

use crate::reports::{CheckReport, PackageSummary};

/// Execute the check operation.
///
/// Resolves outputs and verifies every tracked input without writing
/// anything. A fatal pipeline error is reported as an error entry.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        summary: None,
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
    };

    let ctx = match Pipeline::plan().run(manifest.clone(), GenerateOptions::default()) {
        Ok(ctx) => ctx,
        Err(err) => {
            report.errors.push(err.to_string());
            return report;
        }
    };

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }

    report.summary = Some(PackageSummary {
        package: ctx.package_name().to_string(),
        language: ctx.language().to_string(),
        generator: ctx.language().generator_name().to_string(),
        interface_files: ctx.idl_files.len(),
        dependencies: ctx.manifest.package.dependencies.clone(),
        outputs: ctx.outputs.len(),
        inputs: ctx.inputs.len(),
    });
    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn workspace(with_template: bool) -> (TempDir, Manifest) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for file in ["bin/gen", "msg/Foo.idl", "msg/Bar.idl"] {
            fs::create_dir_all(root.join(file).parent().unwrap()).unwrap();
            fs::write(root.join(file), "").unwrap();
        }
        if with_template {
            fs::create_dir_all(root.join("resource")).unwrap();
            fs::write(root.join("resource/msg.hpp.em"), "").unwrap();
        }

        let manifest = r#"
            [package]
            name = "my_msgs"
            idl_files = ["msg/Foo.idl", "msg/Bar.idl"]

            [generator]
            language = "cpp"
            executable = "bin/gen"
            template_dir = "resource"
            templates = ["msg.hpp.em"]
        "#
        .parse::<Manifest>()
        .unwrap()
        .with_root(root);
        (dir, manifest)
    }

    #[test]
    fn test_check_valid() {
        let (_dir, manifest) = workspace(true);
        let report = check(&manifest, Path::new("idlbridge.toml"));

        assert!(report.is_valid());
        let summary = report.summary.unwrap();
        assert_eq!(summary.package, "my_msgs");
        assert_eq!(summary.outputs, 8);
        assert_eq!(summary.inputs, 4);
    }

    #[test]
    fn test_check_missing_template() {
        let (_dir, manifest) = workspace(false);
        let report = check(&manifest, Path::new("idlbridge.toml"));

        assert!(!report.is_valid());
        assert!(report.errors[0].contains("msg.hpp.em"));
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_check_reports_empty_package_warning() {
        let (dir, _) = workspace(true);
        let manifest = r#"
            [package]
            name = "my_msgs"

            [generator]
            language = "cpp"
            executable = "bin/gen"
            template_dir = "resource"
            templates = ["msg.hpp.em"]
        "#
        .parse::<Manifest>()
        .unwrap()
        .with_root(dir.path());

        let report = check(&manifest, Path::new("idlbridge.toml"));

        assert!(report.is_valid());
        assert_eq!(report.warnings, vec!["package 'my_msgs' has no interface files"]);
        assert_eq!(report.summary.unwrap().outputs, 0);
    }
}
