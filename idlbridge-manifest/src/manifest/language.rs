//! Generator variants.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported generator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C++ headers
    Cpp,
    /// C# sources
    #[serde(rename = "cs")]
    CSharp,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
        }
    }

    /// Name of the external generator for this language.
    ///
    /// Also used as the suffix of the aggregate generation target and the
    /// interface library (e.g., "my_msgs__rosidl_generator_cpp").
    pub fn generator_name(&self) -> &'static str {
        match self {
            Language::Cpp => "rosidl_generator_cpp",
            Language::CSharp => "rosidl_generator_cs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" => Ok(Language::Cpp),
            "cs" | "csharp" | "c#" => Ok(Language::CSharp),
            _ => Err(format!("unknown language '{}', expected 'cpp' or 'cs'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("cpp").unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("C++").unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("cs").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("CSharp").unwrap(), Language::CSharp);
        assert!(Language::from_str("python").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Cpp.to_string(), "cpp");
        assert_eq!(Language::CSharp.to_string(), "cs");
    }

    #[test]
    fn test_generator_name() {
        assert_eq!(Language::Cpp.generator_name(), "rosidl_generator_cpp");
        assert_eq!(Language::CSharp.generator_name(), "rosidl_generator_cs");
    }

    #[test]
    fn test_deserialize() {
        let cpp: Language = serde_json::from_str(r#""cpp""#).unwrap();
        assert_eq!(cpp, Language::Cpp);

        let cs: Language = serde_json::from_str(r#""cs""#).unwrap();
        assert_eq!(cs, Language::CSharp);
    }
}
