use serde::{Deserialize, Serialize};

use super::TeamKey;

/// A team on a district's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub key: TeamKey,
    #[serde(default)]
    pub rookie_year: Option<u16>,
}

impl Team {
    pub fn new(key: impl Into<TeamKey>, rookie_year: Option<u16>) -> Self {
        Self {
            key: key.into(),
            rookie_year,
        }
    }
}
