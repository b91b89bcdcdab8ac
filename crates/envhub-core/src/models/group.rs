//! Group model

use std::fmt;

/// One slot in the ordered group sequence.
///
/// A `Placeholder` is an uncommitted group awaiting a name from the user; it
/// is distinct from the default bucket `Named("")`, which must always be
/// present in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A committed group; `Named("")` is the default/ungrouped bucket
    Named(String),
    /// A not-yet-named group pending user input or cancellation
    Placeholder,
}

impl Group {
    /// The default/ungrouped bucket
    #[must_use]
    pub const fn default_bucket() -> Self {
        Self::Named(String::new())
    }

    /// The committed name, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Placeholder => None,
        }
    }

    /// Whether this slot is still awaiting a name
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) if name.is_empty() => f.write_str("(ungrouped)"),
            Self::Named(name) => f.write_str(name),
            Self::Placeholder => f.write_str("(new group)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_bucket_is_named_empty() {
        assert_eq!(Group::default_bucket(), Group::Named(String::new()));
        assert!(!Group::default_bucket().is_placeholder());
    }

    #[test]
    fn test_placeholder_has_no_name() {
        assert_eq!(Group::Placeholder.name(), None);
        assert_eq!(Group::Named("ops".into()).name(), Some("ops"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Group::Named("ops".into()).to_string(), "ops");
        assert_eq!(Group::default_bucket().to_string(), "(ungrouped)");
        assert_eq!(Group::Placeholder.to_string(), "(new group)");
    }
}
