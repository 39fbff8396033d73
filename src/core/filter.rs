use crate::core::locale::Labels;
use crate::domain::model::{FilterState, Transfer, TransferType};
use crate::domain::ports::{Page, SelectOption};

/// A change event from one of the two selection controls, carrying the
/// control's new value. An empty value means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    TeamChanged(String),
    TypeChanged(String),
}

/// One option per team, value and label both the team name, input order kept.
pub fn team_options(teams: &[String]) -> Vec<SelectOption> {
    teams
        .iter()
        .map(|team| SelectOption::new(team.clone(), team.clone()))
        .collect()
}

/// Options of the static direction selector.
pub fn type_options(labels: &Labels) -> Vec<SelectOption> {
    vec![
        SelectOption::new("", labels.all_types.clone()),
        SelectOption::new(TransferType::In.as_str(), labels.arrivals.clone()),
        SelectOption::new(TransferType::Out.as_str(), labels.departures.clone()),
    ]
}

/// Stable filter: load order is preserved.
pub fn filter_transfers<'a>(transfers: &'a [Transfer], state: &FilterState) -> Vec<&'a Transfer> {
    transfers.iter().filter(|t| state.matches(t)).collect()
}

#[derive(Debug, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Fills the team selector.
    pub fn populate<P: Page>(&self, page: &mut P, teams: &[String]) {
        for option in team_options(teams) {
            page.append_team_option(option);
        }
        tracing::debug!("Team filter populated with {} options", teams.len());
    }

    /// Updates the one field the event refers to.
    pub fn apply(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::TeamChanged(value) => {
                self.state.team = (!value.is_empty()).then_some(value);
            }
            FilterEvent::TypeChanged(value) => {
                self.state.kind = if value.is_empty() {
                    None
                } else {
                    match value.parse::<TransferType>() {
                        Ok(kind) => Some(kind),
                        Err(e) => {
                            tracing::warn!("Ignoring type filter value: {}", e);
                            None
                        }
                    }
                };
            }
        }
        tracing::debug!("Filters now {:?}", self.state);
    }
}
