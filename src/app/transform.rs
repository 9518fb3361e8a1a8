use std::fmt;
use std::str::FromStr;

use super::error::AppError;

/// Named line transforms offered by the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTransform {
    #[default]
    Identity,
    Upper,
    Lower,
    Trim,
    Reverse,
}

impl TextTransform {
    pub const ALL: [TextTransform; 5] = [
        TextTransform::Identity,
        TextTransform::Upper,
        TextTransform::Lower,
        TextTransform::Trim,
        TextTransform::Reverse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextTransform::Identity => "identity",
            TextTransform::Upper => "upper",
            TextTransform::Lower => "lower",
            TextTransform::Trim => "trim",
            TextTransform::Reverse => "reverse",
        }
    }

    pub fn apply(self, line: &str) -> String {
        match self {
            TextTransform::Identity => line.to_string(),
            TextTransform::Upper => line.to_uppercase(),
            TextTransform::Lower => line.to_lowercase(),
            TextTransform::Trim => line.trim().to_string(),
            TextTransform::Reverse => line.chars().rev().collect(),
        }
    }
}

impl FromStr for TextTransform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.name()).collect();
                AppError::InvalidArguments(format!(
                    "unknown transform '{s}' (expected one of: {})",
                    names.join(", ")
                ))
            })
    }
}

impl fmt::Display for TextTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
