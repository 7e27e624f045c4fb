use std::collections::BTreeMap;

/// The non-bot members of the target channel, id -> display name
///
/// Built once per run and immutable afterwards. Ordered so that mention
/// lists come out in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: BTreeMap<String, String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.members.insert(id.into(), name.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.members.get(id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<(String, String)> for Roster {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Whether a member has posted a qualifying status update this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Pending,
    Replied,
}

/// Per-member reply flags for one run
///
/// Initialized all-pending from the roster. A member can move from
/// `Pending` to `Replied` on any scan round; never back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
    statuses: BTreeMap<String, ReplyStatus>,
}

impl StatusTable {
    /// All roster members start out pending
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            statuses: roster
                .ids()
                .map(|id| (id.to_string(), ReplyStatus::Pending))
                .collect(),
        }
    }

    /// Mark a member replied; unknown ids are ignored
    pub fn mark_replied(&mut self, id: &str) {
        if let Some(status) = self.statuses.get_mut(id) {
            *status = ReplyStatus::Replied;
        }
    }

    pub fn is_tracked(&self, id: &str) -> bool {
        self.statuses.contains_key(id)
    }

    /// Ids still pending, in stable order
    pub fn pending_ids(&self) -> impl Iterator<Item = &str> {
        self.statuses
            .iter()
            .filter(|(_, s)| **s == ReplyStatus::Pending)
            .map(|(id, _)| id.as_str())
    }

    /// Count of members still pending
    pub fn remaining(&self) -> usize {
        self.pending_ids().count()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let mut r = Roster::new();
        r.insert("U1", "Alice");
        r.insert("U2", "Bob");
        r
    }

    #[test]
    fn test_status_table_starts_all_pending() {
        let table = StatusTable::from_roster(&roster());
        assert_eq!(table.remaining(), 2);
        assert_eq!(table.pending_ids().collect::<Vec<_>>(), vec!["U1", "U2"]);
    }

    #[test]
    fn test_mark_replied_is_sticky_and_ignores_unknown_ids() {
        let mut table = StatusTable::from_roster(&roster());
        table.mark_replied("U1");
        table.mark_replied("U1");
        table.mark_replied("U_NOT_IN_ROSTER");
        assert_eq!(table.remaining(), 1);
        assert_eq!(table.pending_ids().collect::<Vec<_>>(), vec!["U2"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_roster_lookup() {
        let r = roster();
        assert!(r.contains("U1"));
        assert!(!r.contains("U3"));
        assert_eq!(r.name_of("U2"), Some("Bob"));
    }
}
