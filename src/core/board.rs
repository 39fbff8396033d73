use crate::core::filter::{filter_transfers, FilterController, FilterEvent};
use crate::core::loader::DataLoader;
use crate::core::locale::Labels;
use crate::core::render;
use crate::domain::model::{FilterState, Transfer};
use crate::domain::ports::{Page, TransferSource};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    Loading,
    Failed,
    Ready,
}

/// The transfer list component. Owns its data for the lifetime of one page
/// view; all mutation goes through `init` and `handle`.
pub struct TransferBoard<S: TransferSource, P: Page> {
    source: S,
    page: P,
    labels: Labels,
    transfers: Vec<Transfer>,
    teams: Vec<String>,
    filters: FilterController,
    state: BoardState,
}

impl<S: TransferSource, P: Page> TransferBoard<S, P> {
    pub fn new(source: S, page: P, labels: Labels) -> Self {
        Self {
            source,
            page,
            labels,
            transfers: Vec::new(),
            teams: Vec::new(),
            filters: FilterController::new(),
            state: BoardState::Loading,
        }
    }

    /// Loads data, fills the team selector and paints the first render.
    ///
    /// When the transfers stage fails the container shows the load error,
    /// the selector stays empty and the error is returned to the caller.
    pub async fn init(&mut self) -> Result<()> {
        tracing::info!("Starting transfer board");

        let loaded = DataLoader::new(&self.source, &self.labels.free_agent)
            .run()
            .await;

        let data = match loaded {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Error loading transfers: {}", e);
                self.page.replace_content(render::error_message(&self.labels));
                self.state = BoardState::Failed;
                return Err(e);
            }
        };

        if data.roster.is_derived() {
            tracing::info!("Using {} teams derived from transfers", data.roster.teams().len());
        }

        self.transfers = data.transfers;
        self.teams = data.roster.into_teams();
        self.filters.populate(&mut self.page, &self.teams);
        self.state = BoardState::Ready;
        self.render_transfers();
        Ok(())
    }

    /// Applies a selector change and re-renders the whole list.
    pub fn handle(&mut self, event: FilterEvent) {
        if self.state != BoardState::Ready {
            tracing::debug!("Ignoring {:?} while board is {:?}", event, self.state);
            return;
        }
        self.filters.apply(event);
        self.render_transfers();
    }

    pub fn filtered_transfers(&self) -> Vec<&Transfer> {
        filter_transfers(&self.transfers, self.filters.state())
    }

    pub fn render_transfers(&mut self) {
        let filtered = self.filtered_transfers();
        tracing::debug!("Rendering {} of {} transfers", filtered.len(), self.transfers.len());
        let content = render::render_transfers(&filtered, &self.labels);
        self.page.replace_content(content);
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_page(self) -> P {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::MemoryPage;
    use crate::adapters::stub::{sample_transfers, StubTransferSource};
    use crate::domain::model::{TransferType, FREE_AGENT};
    use crate::utils::error::Stage;

    fn board(source: StubTransferSource) -> TransferBoard<StubTransferSource, MemoryPage> {
        TransferBoard::new(source, MemoryPage::new(), Labels::default())
    }

    #[tokio::test]
    async fn test_init_renders_all_transfers() {
        let mut board = board(StubTransferSource::sample());

        board.init().await.unwrap();

        assert_eq!(board.state(), BoardState::Ready);
        assert_eq!(board.transfers().len(), 5);
        let content = board.page().content().unwrap();
        assert_eq!(content.find_by_class("transfer-entry").len(), 5);
        assert_eq!(board.page().team_options().len(), board.teams().len());
    }

    #[tokio::test]
    async fn test_transfers_failure_shows_error_only() {
        let mut board = board(StubTransferSource::sample().failing_transfers("offline"));

        let err = board.init().await.unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Transfers));
        assert_eq!(board.state(), BoardState::Failed);
        assert_eq!(
            board.page().content_html(),
            r#"<div class="error">Nie udało się załadować danych transferowych</div>"#
        );
        assert!(board.page().team_options().is_empty());
        assert_eq!(board.source().teams_calls(), 0);
    }

    #[tokio::test]
    async fn test_teams_failure_is_silent() {
        let transfers = vec![Transfer {
            from_team: "Legia Warszawa".to_string(),
            to_team: "Lech Poznań".to_string(),
            ..sample_transfers().remove(1)
        }];
        let mut board = board(StubTransferSource::new(transfers).failing_teams("offline"));

        board.init().await.unwrap();

        assert_eq!(board.teams(), ["Lech Poznań", "Legia Warszawa"]);
        assert!(board.page().content().unwrap().find_by_class("error").is_empty());
    }

    #[tokio::test]
    async fn test_filter_changes_rerender() {
        let mut board = board(StubTransferSource::sample());
        board.init().await.unwrap();

        board.handle(FilterEvent::TypeChanged("in".to_string()));
        let cards = board.page().content().unwrap().find_by_class("transfer-entry").len();
        assert_eq!(cards, 2);
        assert_eq!(board.page().replacements(), 2);

        board.handle(FilterEvent::TeamChanged("Wisła Kraków".to_string()));
        let ids: Vec<i64> = board.filtered_transfers().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4]);
        assert_eq!(board.filters().kind, Some(TransferType::In));
    }

    #[tokio::test]
    async fn test_unknown_team_renders_no_results() {
        let mut board = board(StubTransferSource::sample());
        board.init().await.unwrap();

        board.handle(FilterEvent::TeamChanged("Z".to_string()));

        assert_eq!(
            board.page().content_html(),
            r#"<div class="no-results">Brak transferów spełniających kryteria filtrowania</div>"#
        );
    }

    #[tokio::test]
    async fn test_render_is_idempotent() {
        let mut board = board(StubTransferSource::sample());
        board.init().await.unwrap();
        board.handle(FilterEvent::TypeChanged("out".to_string()));

        let first = board.page().content_html();
        board.render_transfers();
        let second = board.page().content_html();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_events_after_failure_are_ignored() {
        let mut board = board(StubTransferSource::sample().failing_transfers("offline"));
        let _ = board.init().await;

        board.handle(FilterEvent::TypeChanged("in".to_string()));

        assert_eq!(board.page().replacements(), 1);
        assert!(board.page().content_html().contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_free_agent_label_follows_labels() {
        let transfers = vec![Transfer {
            from_team: "Free agent".to_string(),
            to_team: "A".to_string(),
            ..sample_transfers().remove(0)
        }];
        let labels = Labels {
            free_agent: "Free agent".to_string(),
            ..Labels::default()
        };
        let mut board = TransferBoard::new(
            StubTransferSource::new(transfers).failing_teams("offline"),
            MemoryPage::new(),
            labels,
        );

        board.init().await.unwrap();

        assert_eq!(board.teams(), ["A"]);
        assert_ne!(board.labels().free_agent, FREE_AGENT);
    }
}
