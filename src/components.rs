//! Names of the access key UI components exported to host applications.

use std::fmt;
use std::str::FromStr;

use crate::error::AccessKeyError;

/// A presentational component of the access key UI package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKeyComponent {
    AccessKeyInfoModal,
    AccessKeyManager,
    AccessKeyTable,
    CreateAccessKeyModal,
}

impl AccessKeyComponent {
    /// Every exported component, in export order.
    pub const ALL: [AccessKeyComponent; 4] = [
        Self::AccessKeyInfoModal,
        Self::AccessKeyManager,
        Self::AccessKeyTable,
        Self::CreateAccessKeyModal,
    ];

    /// Name the component is exported under.
    pub fn export_name(self) -> &'static str {
        match self {
            Self::AccessKeyInfoModal => "AccessKeyInfoModal",
            Self::AccessKeyManager => "AccessKeyManager",
            Self::AccessKeyTable => "AccessKeyTable",
            Self::CreateAccessKeyModal => "CreateAccessKeyModal",
        }
    }
}

impl fmt::Display for AccessKeyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_name())
    }
}

impl FromStr for AccessKeyComponent {
    type Err = AccessKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.export_name() == s)
            .ok_or_else(|| AccessKeyError::invalid_argument(format!("unknown component: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_names() {
        let names: Vec<_> = AccessKeyComponent::ALL
            .iter()
            .map(|c| c.export_name())
            .collect();
        assert_eq!(
            names,
            [
                "AccessKeyInfoModal",
                "AccessKeyManager",
                "AccessKeyTable",
                "CreateAccessKeyModal"
            ]
        );
    }

    #[test]
    fn test_parse_component() {
        for component in AccessKeyComponent::ALL {
            assert_eq!(component.to_string().parse::<AccessKeyComponent>().unwrap(), component);
        }
        assert!("AccessKeyDialog".parse::<AccessKeyComponent>().is_err());
    }
}
