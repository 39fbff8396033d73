use crate::domain::model::{Transfer, TransferType};
use crate::domain::ports::TransferSource;
use crate::utils::error::{FetchError, FetchResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory source. Each endpoint can be made to fail independently.
#[derive(Debug, Default)]
pub struct StubTransferSource {
    transfers: Vec<Transfer>,
    teams: Vec<String>,
    transfers_failure: Option<String>,
    teams_failure: Option<String>,
    transfers_calls: AtomicUsize,
    teams_calls: AtomicUsize,
}

impl StubTransferSource {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self {
            transfers,
            ..Self::default()
        }
    }

    /// The demo data set the site shipped with before the scraper existed.
    pub fn sample() -> Self {
        let transfers = sample_transfers();
        let teams = crate::core::loader::derive_teams(&transfers, crate::domain::model::FREE_AGENT);
        Self::new(transfers).with_teams(teams)
    }

    pub fn with_teams(mut self, teams: Vec<String>) -> Self {
        self.teams = teams;
        self
    }

    pub fn failing_transfers(mut self, message: impl Into<String>) -> Self {
        self.transfers_failure = Some(message.into());
        self
    }

    pub fn failing_teams(mut self, message: impl Into<String>) -> Self {
        self.teams_failure = Some(message.into());
        self
    }

    pub fn transfers_calls(&self) -> usize {
        self.transfers_calls.load(Ordering::SeqCst)
    }

    pub fn teams_calls(&self) -> usize {
        self.teams_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferSource for StubTransferSource {
    async fn fetch_transfers(&self) -> FetchResult<Vec<Transfer>> {
        self.transfers_calls.fetch_add(1, Ordering::SeqCst);
        match &self.transfers_failure {
            Some(message) => Err(FetchError::Unavailable {
                message: message.clone(),
            }),
            None => Ok(self.transfers.clone()),
        }
    }

    async fn fetch_teams(&self) -> FetchResult<Vec<String>> {
        self.teams_calls.fetch_add(1, Ordering::SeqCst);
        match &self.teams_failure {
            Some(message) => Err(FetchError::Unavailable {
                message: message.clone(),
            }),
            None => Ok(self.teams.clone()),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: i64,
    player_name: &str,
    kind: TransferType,
    from_team: &str,
    to_team: &str,
    transfer_date: &str,
    fee: &str,
    summary: &str,
    source_url: &str,
    source_name: &str,
) -> Transfer {
    Transfer {
        id,
        player_name: player_name.to_string(),
        kind,
        from_team: from_team.to_string(),
        to_team: to_team.to_string(),
        transfer_date: transfer_date.to_string(),
        fee: fee.to_string(),
        summary: summary.to_string(),
        source_url: source_url.to_string(),
        source_name: source_name.to_string(),
    }
}

pub fn sample_transfers() -> Vec<Transfer> {
    vec![
        sample(
            1,
            "Kacper Urbański",
            TransferType::Out,
            "Legia Warszawa",
            "Bologna FC",
            "2025-01-12",
            "3.5M €",
            "Młody pomocnik Legii Warszawa przeniósł się do włoskiej Bologni.",
            "https://www.90minut.pl/news/12345",
            "90minut.pl",
        ),
        sample(
            2,
            "Jean Carlos",
            TransferType::In,
            "Flamengo RJ",
            "Lech Poznań",
            "2025-01-10",
            "2.0M €",
            "Brazylijski napastnik dołączył do Lecha Poznań, podpisując 3,5-letni kontrakt.",
            "https://ekstraklasa.org/news/67890",
            "Ekstraklasa.org",
        ),
        sample(
            3,
            "Bartłomiej Wdowik",
            TransferType::Out,
            "Raków Częstochowa",
            "FC Copenhagen",
            "2025-01-08",
            "1.8M €",
            "Obrońca Rakowa Częstochowa przeniósł się do duńskiego FC Copenhagen.",
            "https://www.transfermarkt.pl/transfer/54321",
            "Transfermarkt.pl",
        ),
        sample(
            4,
            "Igor Sapała",
            TransferType::In,
            "Wolny agent",
            "Wisła Kraków",
            "2025-01-11",
            "Bez opłaty",
            "Były pomocnik Górnika Zabrze podpisał kontrakt z Wisłą Kraków.",
            "https://www.wislaportal.pl/news/98765",
            "WisłaPortal.pl",
        ),
        sample(
            5,
            "Adrián Kapráľ",
            TransferType::Out,
            "Jagiellonia Białystok",
            "Slovan Bratysława",
            "2025-01-09",
            "500k €",
            "Słowacki pomocnik opuścił Jagiellonię Białystok i wrócił do Slovana Bratysława.",
            "https://jagiellonia.pl/news/43210",
            "Jagiellonia.pl",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_source_serves_both_endpoints() {
        let source = StubTransferSource::sample();

        let transfers = source.fetch_transfers().await.unwrap();
        let teams = source.fetch_teams().await.unwrap();

        assert_eq!(transfers.len(), 5);
        assert!(!teams.contains(&"Wolny agent".to_string()));
        assert!(teams.contains(&"Wisła Kraków".to_string()));
        assert_eq!(source.transfers_calls(), 1);
        assert_eq!(source.teams_calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_endpoints_are_independent() {
        let source = StubTransferSource::new(sample_transfers()).failing_teams("down");

        assert!(source.fetch_transfers().await.is_ok());
        assert!(matches!(
            source.fetch_teams().await,
            Err(FetchError::Unavailable { .. })
        ));
    }
}
