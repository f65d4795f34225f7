use crate::domain::model::{Entry, Submission};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 報名資料存放處的外部介面。遠端資料表只會被附加與整批讀取。
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// 取回完整的報名歷史。
    async fn fetch_entries(&self) -> Result<Vec<Entry>>;

    /// 送出一筆新的報名資料。
    async fn submit(&self, submission: &Submission) -> Result<()>;
}
