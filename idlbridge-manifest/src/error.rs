use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for idlbridge-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "idlbridge.toml");
/// ctx.validation_error("missing required field");
/// ctx.unknown_dependency_error("std_msgs", "my_msgs", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at a span when one is known.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid package name error.
    pub fn invalid_package_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackageName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an unknown dependency error.
    pub fn unknown_dependency_error(
        &self,
        name: impl Into<String>,
        package: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownDependency {
            src: self.named_source(),
            span,
            name: name.into(),
            package: package.into(),
        })
    }

    /// Create a dependency cycle error.
    pub fn dependency_cycle_error(
        &self,
        cycle: &[String],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DependencyCycle {
            src: self.named_source(),
            span,
            cycle: cycle.join(" -> "),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create an idlbridge.toml describing the interface package"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse idlbridge.toml")]
    #[diagnostic(code(idlbridge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(idlbridge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(idlbridge::invalid_package_name),
        help(
            "package names start with a lowercase letter and use only lowercase letters, numbers, and underscores"
        )
    )]
    InvalidPackageName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("package '{package}' depends on unknown package '{name}'")]
    #[diagnostic(
        code(idlbridge::unknown_dependency),
        help("add a [packages.{name}] table describing where its interface files live")
    )]
    UnknownDependency {
        #[source_code]
        src: NamedSource<String>,
        #[label("not found in [packages]")]
        span: Option<SourceSpan>,
        name: String,
        package: String,
    },

    #[error("dependency cycle detected: {cycle}")]
    #[diagnostic(
        code(idlbridge::dependency_cycle),
        help("a package may not depend on itself, directly or transitively")
    )]
    DependencyCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        cycle: String,
    },
}
