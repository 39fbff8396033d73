use crate::domain::model::{TransferType, FREE_AGENT};
use serde::{Deserialize, Serialize};

/// Every user-visible string of the board. Defaults are Polish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub arrival: String,
    pub departure: String,
    pub arrivals: String,
    pub departures: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub fee: String,
    pub source: String,
    pub no_results: String,
    pub load_error: String,
    pub free_agent: String,
    pub all_teams: String,
    pub all_types: String,
    pub page_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            arrival: "Przyjście".to_string(),
            departure: "Odejście".to_string(),
            arrivals: "Przyjścia".to_string(),
            departures: "Odejścia".to_string(),
            from: "Z:".to_string(),
            to: "Do:".to_string(),
            date: "Data:".to_string(),
            fee: "Opłata:".to_string(),
            source: "📄 Źródło:".to_string(),
            no_results: "Brak transferów spełniających kryteria filtrowania".to_string(),
            load_error: "Nie udało się załadować danych transferowych".to_string(),
            free_agent: FREE_AGENT.to_string(),
            all_teams: "Wszystkie drużyny".to_string(),
            all_types: "Wszystkie typy".to_string(),
            page_title: "Transfery Ekstraklasy".to_string(),
        }
    }
}

impl Labels {
    pub fn direction(&self, kind: TransferType) -> &str {
        match kind {
            TransferType::In => &self.arrival,
            TransferType::Out | TransferType::Unknown => &self.departure,
        }
    }
}
