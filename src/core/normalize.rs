use crate::domain::model::{ApplicantKey, Entry};
use std::collections::HashMap;

/// 以戶別 (地址+樓層) 去重,每戶只保留時間戳最新的一筆。
///
/// 時間戳完全相同時,以輸入順序較後者為準 (last-write-wins)。
/// 輸出依時間戳由新到舊排序;每戶維持首次出現的位置再做穩定排序,
/// 因此時間戳相同的不同戶別也有固定順序,同一份歷史每次都得到
/// 相同的輸出。
pub fn latest_entries(history: &[Entry]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut index_by_key: HashMap<ApplicantKey, usize> = HashMap::new();

    for entry in history {
        match index_by_key.get(&entry.key()) {
            Some(&index) => {
                if entries[index].timestamp <= entry.timestamp {
                    entries[index] = entry.clone();
                }
            }
            None => {
                index_by_key.insert(entry.key(), entries.len());
                entries.push(entry.clone());
            }
        }
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}
