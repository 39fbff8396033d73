use crate::core::markup::Markup;
use crate::domain::model::Transfer;
use crate::utils::error::{FetchResult, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Read side of the backend: one call per endpoint.
#[async_trait]
pub trait TransferSource: Send + Sync {
    async fn fetch_transfers(&self) -> FetchResult<Vec<Transfer>>;
    async fn fetch_teams(&self) -> FetchResult<Vec<String>>;
}

/// One `<option>` of a selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Anchor points owned by the surrounding page: the team selector and the
/// card container. The type selector is static and never touched.
pub trait Page {
    fn append_team_option(&mut self, option: SelectOption);
    fn replace_content(&mut self, content: Markup);
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn transfers_endpoint(&self) -> &str;
    fn teams_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn headers(&self) -> Option<&HashMap<String, String>>;
    fn output_path(&self) -> &str;
}
