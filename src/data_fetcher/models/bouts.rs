use serde::{Deserialize, Serialize};

/// A wrestler as shown in a bout row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRef {
    pub name: String,
    /// Trailing parameter of the profile link, `None` when there is no link.
    pub id: Option<String>,
}

impl CompetitorRef {
    pub fn new(name: impl Into<String>, id: Option<String>) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    East,
    West,
}

/// One top-division bout, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutRecord {
    /// Tournament day the bout belongs to, set once the schedule is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// 1-based position within the day's top-division bouts.
    #[serde(default)]
    pub bout: u32,
    pub east: CompetitorRef,
    pub west: CompetitorRef,
    /// Winning technique, `None` while the bout is undecided.
    pub kimarite: Option<String>,
    pub winner: Option<Side>,
}

impl BoutRecord {
    /// Builds a record, forcing `winner` to `None` when there is no technique.
    pub fn new(
        east: CompetitorRef,
        west: CompetitorRef,
        kimarite: Option<String>,
        winner: Option<Side>,
    ) -> Self {
        let winner = kimarite.as_ref().and(winner);
        Self {
            day: None,
            bout: 0,
            east,
            west,
            kimarite,
            winner,
        }
    }

    pub fn with_bout(mut self, bout: u32) -> Self {
        self.bout = bout;
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn is_decided(&self) -> bool {
        self.kimarite.is_some()
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.winner? {
            Side::East => Some(&self.east.name),
            Side::West => Some(&self.west.name),
        }
    }
}
