use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One wrestler in the yusho race.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Win-loss record as printed on the page, e.g. `10-2`.
    pub record: String,
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardGroup {
    pub wins: u32,
    /// Sorted by name.
    pub entries: Vec<LeaderboardEntry>,
}

/// Entries grouped by win count, highest win count first.
///
/// Serializes as a JSON object keyed by the win count string with keys in
/// descending order and each value a list of `"name record"` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    groups: Vec<LeaderboardGroup>,
}

impl Leaderboard {
    /// Groups `(wins, entry)` pairs and applies the ordering rules.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, LeaderboardEntry)>) -> Self {
        let mut by_wins: BTreeMap<u32, Vec<LeaderboardEntry>> = BTreeMap::new();
        for (wins, entry) in entries {
            by_wins.entry(wins).or_default().push(entry);
        }

        let groups = by_wins
            .into_iter()
            .rev()
            .map(|(wins, mut entries)| {
                entries.sort();
                LeaderboardGroup { wins, entries }
            })
            .collect();

        Self { groups }
    }

    pub fn groups(&self) -> &[LeaderboardGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of wrestlers across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Highest win count present, if any.
    pub fn leader_wins(&self) -> Option<u32> {
        self.groups.first().map(|g| g.wins)
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            let entries: Vec<String> = group.entries.iter().map(ToString::to_string).collect();
            map.serialize_entry(&group.wins.to_string(), &entries)?;
        }
        map.end()
    }
}
