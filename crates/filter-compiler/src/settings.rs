use std::{fmt, str::FromStr};

/// What to do with a leaf value that fits no wire slot (an empty array or
/// a non-finite number).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassificationPolicy {
    /// Fail the whole compilation with a classification error.
    #[default]
    Strict,
    /// Emit the leaf without a value slot and log a warning.
    Permissive,
}

impl FromStr for ClassificationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ClassificationPolicy::Strict),
            "permissive" => Ok(ClassificationPolicy::Permissive),
            _ => Err(format!("Unsupported classification policy: {s}")),
        }
    }
}

impl fmt::Display for ClassificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationPolicy::Strict => write!(f, "strict"),
            ClassificationPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

/// Immutable settings shared by every filter compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileSettings {
    /// Handling of values that cannot be classified
    pub policy: ClassificationPolicy,
}

impl CompileSettings {
    pub fn from_builder(builder: CompileSettingsBuilder) -> Self {
        Self {
            policy: builder.policy.unwrap_or_default(),
        }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    pub fn is_strict(&self) -> bool {
        matches!(self.policy, ClassificationPolicy::Strict)
    }
}

#[derive(Debug, Default)]
pub struct CompileSettingsBuilder {
    pub policy: Option<ClassificationPolicy>,
}

impl CompileSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: ClassificationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> CompileSettings {
        CompileSettings::from_builder(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CompileSettings::default();
        assert_eq!(settings.policy(), ClassificationPolicy::Strict);
        assert!(settings.is_strict());
    }

    #[test]
    fn test_builder() {
        let settings = CompileSettingsBuilder::new()
            .policy(ClassificationPolicy::Permissive)
            .build();
        assert!(!settings.is_strict());

        let settings = CompileSettingsBuilder::new().build();
        assert!(settings.is_strict());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "Permissive".parse::<ClassificationPolicy>(),
            Ok(ClassificationPolicy::Permissive)
        );
        assert_eq!(
            "strict".parse::<ClassificationPolicy>(),
            Ok(ClassificationPolicy::Strict)
        );
        assert!("lenient".parse::<ClassificationPolicy>().is_err());
    }
}
