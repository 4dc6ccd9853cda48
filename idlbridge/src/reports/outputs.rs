//! Outputs command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Declared outputs, and optionally tracked inputs, one path per line.
#[derive(Debug)]
pub struct OutputsReport {
    pub outputs: Vec<PathBuf>,
    pub inputs: Option<Vec<PathBuf>>,
}

impl Report for OutputsReport {
    fn render(&self, out: &mut dyn Output) {
        for path in &self.outputs {
            out.preformatted(&path.display().to_string());
        }

        if let Some(inputs) = &self.inputs {
            out.divider("inputs");
            for path in inputs {
                out.preformatted(&path.display().to_string());
            }
        }
    }
}
