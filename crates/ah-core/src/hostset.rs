//! Deduplicating hostname collection.

use std::collections::HashSet;

/// A hostname taken from a hosts-file line.
///
/// Never empty, never contains whitespace or `#`, never a loopback alias.
/// Ordering is byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hostname(String);

impl Hostname {
    /// Build a hostname from a bare token.
    ///
    /// Rejects anything the grammar would not accept as a whole token:
    /// surrounding whitespace, a redirect address, comments, loopback aliases.
    pub fn new(token: &str) -> Option<Self> {
        crate::grammar::parse_hostname(token).filter(|h| h.as_str() == token)
    }

    /// Token already validated by the grammar.
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Set of hostnames gathered during one run.
///
/// Insertion is O(1) amortized; order is only established when the set is
/// read through [`HostSet::sorted_list`].
#[derive(Debug, Clone, Default)]
pub struct HostSet {
    hosts: HashSet<Hostname>,
}

impl HostSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the hostname was not present before.
    pub fn add(&mut self, hostname: Hostname) -> bool {
        self.hosts.insert(hostname)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, hostname: &str) -> bool {
        self.hosts.contains(&Hostname(hostname.to_string()))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// All distinct hostnames in byte-wise lexicographic order.
    ///
    /// Does not modify the set; repeated calls return the same list.
    pub fn sorted_list(&self) -> Vec<Hostname> {
        let mut list: Vec<Hostname> = self.hosts.iter().cloned().collect();
        list.sort_unstable();
        list
    }
}

impl Extend<Hostname> for HostSet {
    fn extend<T: IntoIterator<Item = Hostname>>(&mut self, iter: T) {
        for hostname in iter {
            self.add(hostname);
        }
    }
}

impl FromIterator<Hostname> for HostSet {
    fn from_iter<T: IntoIterator<Item = Hostname>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
