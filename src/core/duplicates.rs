use crate::domain::model::{ApplicantKey, Entry};
use std::collections::HashSet;

/// 找出重複報名的戶別,輸入為未過濾的完整歷史。
///
/// 同一戶每多出現一次就回報一次 (報名三次回報兩筆),讓操作者
/// 看得到重複的規模;這份報表純屬提示,不影響抽籤時的去重。
pub fn duplicate_keys(history: &[Entry]) -> Vec<ApplicantKey> {
    let mut seen: HashSet<ApplicantKey> = HashSet::new();
    let mut duplicates = Vec::new();

    for entry in history {
        let key = entry.key();
        if seen.contains(&key) {
            duplicates.push(key);
        } else {
            seen.insert(key);
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Entry;
    use chrono::{TimeZone, Utc};

    fn entry(address: &str, floor: &str, hour: u32) -> Entry {
        Entry {
            address: address.to_string(),
            floor: floor.to_string(),
            first_choice: "A".to_string(),
            second_choice: "B".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_no_duplicates() {
        let history = vec![entry("12", "3", 8), entry("12", "4", 9)];
        assert!(duplicate_keys(&history).is_empty());
    }

    #[test]
    fn test_empty_history() {
        assert!(duplicate_keys(&[]).is_empty());
    }

    #[test]
    fn test_each_repeat_reported_once() {
        let history = vec![
            entry("12", "3", 8),
            entry("15", "1", 9),
            entry("12", "3", 10),
            entry("12", "3", 11),
        ];
        let duplicates = duplicate_keys(&history);

        // 報名三次的戶別回報兩筆
        assert_eq!(duplicates.len(), 2);
        assert!(duplicates.iter().all(|k| *k == ApplicantKey::new("12", "3")));
    }

    #[test]
    fn test_report_is_idempotent() {
        let history = vec![entry("12", "3", 8), entry("12", "3", 10), entry("9", "2", 9)];
        assert_eq!(duplicate_keys(&history), duplicate_keys(&history));
    }
}
