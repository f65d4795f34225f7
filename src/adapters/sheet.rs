use crate::domain::model::{Entry, Submission};
use crate::domain::ports::EntryStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

/// 遠端報名資料表的 HTTP 客戶端。
///
/// 資料表端點以 query string 的 action 參數區分讀寫:
/// `?action=getData` 回傳整批 JSON 歷史,`?action=submit` 接受
/// text/plain 的逗號分隔紀錄。失敗不重試,由操作者重新觸發。
pub struct SheetStore {
    base_url: String,
    client: Client,
}

impl SheetStore {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    fn action_url(&self, action: &str) -> String {
        format!("{}?action={}", self.base_url, action)
    }
}

#[async_trait]
impl EntryStore for SheetStore {
    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        let url = self.action_url("getData");
        tracing::debug!("Fetching entries from: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let entries: Vec<Entry> = response.json().await?;

        tracing::debug!("Fetched {} entries", entries.len());
        Ok(entries)
    }

    async fn submit(&self, submission: &Submission) -> Result<()> {
        let url = self.action_url("submit");
        let body = submission.to_line(Utc::now());
        tracing::debug!("Submitting entry to: {}", url);

        self.client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
