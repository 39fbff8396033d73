use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Club value meaning "no club" before a signing or after a release.
pub const FREE_AGENT: &str = "Wolny agent";

/// Direction of a transfer relative to a club.
///
/// `Unknown` holds records whose `type` is missing or not recognised. Such
/// records are shown like departures and never match a direction filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    In,
    Out,
    #[default]
    Unknown,
}

impl TransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::In => "in",
            TransferType::Out => "out",
            TransferType::Unknown => "unknown",
        }
    }

    pub fn is_arrival(&self) -> bool {
        matches!(self, TransferType::In)
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransferType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(TransferType::Unknown))
    }
}

impl FromStr for TransferType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(TransferType::In),
            "out" => Ok(TransferType::Out),
            other => Err(format!("unknown transfer type: {}", other)),
        }
    }
}

// Records are not validated: absent keys and explicit nulls both land as defaults.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single player move between clubs, as served by the transfers endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub player_name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: TransferType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_team: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_team: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transfer_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fee: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_name: String,
}

impl Transfer {
    pub fn involves(&self, team: &str) -> bool {
        self.from_team == team || self.to_team == team
    }
}

/// Current team/direction selection. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub team: Option<String>,
    pub kind: Option<TransferType>,
}

impl FilterState {
    pub fn matches(&self, transfer: &Transfer) -> bool {
        let team_match = self
            .team
            .as_deref()
            .map_or(true, |team| transfer.involves(team));
        let type_match = self.kind.map_or(true, |kind| transfer.kind == kind);
        team_match && type_match
    }
}
