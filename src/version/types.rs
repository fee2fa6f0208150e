//! Common types for the version layer

use std::collections::BTreeSet;

/// Distinct published versions of one package, sorted lexicographically
/// ascending (plain string order, not PEP 440 order).
///
/// An empty set means the index knows no files for the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    versions: Vec<String>,
}

impl VersionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions
            .binary_search_by(|probe| probe.as_str().cmp(version))
            .is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.versions
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VersionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let distinct: BTreeSet<String> = iter.into_iter().map(Into::into).collect();
        Self {
            versions: distinct.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iter_removes_duplicates() {
        let set: VersionSet = ["1.2.0", "1.0.0", "1.2.0"].into_iter().collect();
        assert_eq!(set.as_slice(), ["1.0.0", "1.2.0"]);
    }

    #[test]
    fn from_iter_sorts_lexicographically_regardless_of_input_order() {
        let forward: VersionSet = ["0.9.0", "0.10.0", "1.0.0"].into_iter().collect();
        let backward: VersionSet = ["1.0.0", "0.10.0", "0.9.0"].into_iter().collect();

        assert_eq!(forward, backward);
        // "0.10.0" < "0.9.0" as strings
        assert_eq!(forward.as_slice(), ["0.10.0", "0.9.0", "1.0.0"]);
    }

    #[test]
    fn contains_matches_exact_strings_only() {
        let set: VersionSet = ["1.0.0", "1.2.0"].into_iter().collect();

        assert!(set.contains("1.2.0"));
        assert!(!set.contains("1.2"));
        assert!(!set.contains("1.1.0"));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = VersionSet::empty();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains("1.0.0"));
    }
}
