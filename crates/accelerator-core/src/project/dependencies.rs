//! Ordered, duplicate-free package name collection

use std::fmt;

/// Outcome of [`DependencySet::add`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Names that were appended to the set
    pub added: Vec<String>,
    /// Names that were already present and left untouched
    pub rejected: Vec<String>,
}

/// Outcome of [`DependencySet::remove`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Names that were removed from the set
    pub removed: Vec<String>,
    /// Names that were not in the set
    pub missing: Vec<String>,
}

/// Package names in insertion order, each present at most once.
///
/// Membership is an exact, case-sensitive string match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: Vec<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every name not already present; blank names are ignored
    pub fn add<I, S>(&mut self, names: I) -> AddOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = AddOutcome::default();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if self.contains(name) {
                outcome.rejected.push(name.to_string());
            } else {
                self.names.push(name.to_string());
                outcome.added.push(name.to_string());
            }
        }

        outcome
    }

    /// Remove every listed name that is present; blank names are ignored
    pub fn remove<I, S>(&mut self, names: I) -> RemoveOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = RemoveOutcome::default();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            match self.names.iter().position(|n| n == name) {
                Some(idx) => {
                    self.names.remove(idx);
                    outcome.removed.push(name.to_string());
                }
                None => outcome.missing.push(name.to_string()),
            }
        }

        outcome
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn to_ordered_list(&self) -> Vec<String> {
        self.names.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DependencySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = DependencySet::new();
        set.add(iter);
        set
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            return write!(f, "(none)");
        }
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "✓ {}", name)?;
        }
        Ok(())
    }
}
