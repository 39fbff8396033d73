use crate::domain::model::Transfer;
use crate::domain::ports::TransferSource;
use crate::utils::error::{BoardError, Result, Stage};
use std::collections::BTreeSet;

/// Where the team list used for filtering came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamRoster {
    Served(Vec<String>),
    Derived(Vec<String>),
}

impl TeamRoster {
    pub fn teams(&self) -> &[String] {
        match self {
            TeamRoster::Served(teams) | TeamRoster::Derived(teams) => teams,
        }
    }

    pub fn into_teams(self) -> Vec<String> {
        match self {
            TeamRoster::Served(teams) | TeamRoster::Derived(teams) => teams,
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, TeamRoster::Derived(_))
    }
}

#[derive(Debug, Clone)]
pub struct LoadedData {
    pub transfers: Vec<Transfer>,
    pub roster: TeamRoster,
}

/// Distinct club names referenced by `transfers`, without the free-agent
/// sentinel or blanks, sorted.
pub fn derive_teams(transfers: &[Transfer], free_agent: &str) -> Vec<String> {
    let mut teams = BTreeSet::new();
    for transfer in transfers {
        for team in [&transfer.from_team, &transfer.to_team] {
            if !team.is_empty() && team != free_agent {
                teams.insert(team.clone());
            }
        }
    }
    teams.into_iter().collect()
}

/// Two-stage load: transfers first, then teams. Only the first stage can fail.
pub struct DataLoader<'a, S: TransferSource> {
    source: &'a S,
    free_agent: &'a str,
}

impl<'a, S: TransferSource> DataLoader<'a, S> {
    pub fn new(source: &'a S, free_agent: &'a str) -> Self {
        Self { source, free_agent }
    }

    pub async fn load_transfers(&self) -> Result<Vec<Transfer>> {
        tracing::debug!("Stage {}: fetching", Stage::Transfers);
        let transfers = self
            .source
            .fetch_transfers()
            .await
            .map_err(|e| BoardError::fetch(Stage::Transfers, e))?;
        tracing::info!("Loaded {} transfers", transfers.len());
        Ok(transfers)
    }

    pub async fn load_teams(&self, transfers: &[Transfer]) -> TeamRoster {
        tracing::debug!("Stage {}: fetching", Stage::Teams);
        match self.source.fetch_teams().await {
            Ok(teams) => {
                tracing::info!("Loaded {} teams", teams.len());
                TeamRoster::Served(teams)
            }
            Err(e) => {
                tracing::warn!(
                    "Error loading teams, deriving them from transfers: {}",
                    BoardError::fetch(Stage::Teams, e)
                );
                TeamRoster::Derived(derive_teams(transfers, self.free_agent))
            }
        }
    }

    pub async fn run(&self) -> Result<LoadedData> {
        let transfers = self.load_transfers().await?;
        let roster = self.load_teams(&transfers).await;
        Ok(LoadedData { transfers, roster })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stub::StubTransferSource;
    use crate::domain::model::{TransferType, FREE_AGENT};

    fn transfer(from: &str, to: &str) -> Transfer {
        Transfer {
            id: 0,
            player_name: String::new(),
            kind: TransferType::In,
            from_team: from.to_string(),
            to_team: to.to_string(),
            transfer_date: String::new(),
            fee: String::new(),
            summary: String::new(),
            source_url: String::new(),
            source_name: String::new(),
        }
    }

    #[test]
    fn test_derive_teams_excludes_free_agent_and_sorts() {
        let transfers = vec![transfer("B", "A"), transfer(FREE_AGENT, "A")];
        assert_eq!(derive_teams(&transfers, FREE_AGENT), vec!["A", "B"]);
    }

    #[test]
    fn test_derive_teams_free_agent_source_collapses_into_destination() {
        let transfers = vec![transfer("A", "B"), transfer(FREE_AGENT, "A")];
        assert_eq!(derive_teams(&transfers, FREE_AGENT), vec!["A", "B"]);
    }

    #[test]
    fn test_derive_teams_skips_blank_names() {
        let transfers = vec![transfer("", "Wisła Kraków")];
        assert_eq!(derive_teams(&transfers, FREE_AGENT), vec!["Wisła Kraków"]);
    }

    #[test]
    fn test_derive_teams_skips_null_and_missing_clubs() {
        let transfers: Vec<Transfer> = serde_json::from_value(serde_json::json!([
            {"type": "out", "fromTeam": null, "toTeam": "Bologna FC"},
            {"type": "in", "toTeam": "Cracovia"}
        ]))
        .unwrap();

        assert!(transfers[0].from_team.is_empty());
        assert!(transfers[1].from_team.is_empty());
        assert_eq!(
            derive_teams(&transfers, FREE_AGENT),
            vec!["Bologna FC", "Cracovia"]
        );
    }

    #[tokio::test]
    async fn test_served_roster_keeps_server_order() {
        let source = StubTransferSource::new(vec![transfer("A", "B")])
            .with_teams(vec!["Zagłębie Lubin".to_string(), "Cracovia".to_string()]);
        let loader = DataLoader::new(&source, FREE_AGENT);

        let data = loader.run().await.unwrap();

        assert_eq!(
            data.roster,
            TeamRoster::Served(vec!["Zagłębie Lubin".to_string(), "Cracovia".to_string()])
        );
    }

    #[tokio::test]
    async fn test_teams_failure_falls_back_to_derived() {
        let source = StubTransferSource::new(vec![transfer("Legia Warszawa", "Lech Poznań")])
            .failing_teams("teams offline");
        let loader = DataLoader::new(&source, FREE_AGENT);

        let data = loader.run().await.unwrap();

        assert!(data.roster.is_derived());
        assert_eq!(data.roster.teams(), ["Lech Poznań", "Legia Warszawa"]);
    }

    #[tokio::test]
    async fn test_transfers_failure_stops_pipeline() {
        let source = StubTransferSource::new(vec![]).failing_transfers("transfers offline");
        let loader = DataLoader::new(&source, FREE_AGENT);

        let err = loader.run().await.unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Transfers));
        assert_eq!(source.teams_calls(), 0);
    }
}
