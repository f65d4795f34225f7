use crate::domain::model::{ApplicantKey, DrawResult, Group};
use crate::utils::error::Result;
use std::io::Write;

/// 產生各組錄取名單的文字報表。
pub fn render_text(result: &DrawResult) -> String {
    let mut lines = Vec::new();

    for group in Group::ALL {
        let selected = result.group(group);
        lines.push(format!(
            "{}組錄取名單 ({} 戶):",
            group.as_chinese(),
            selected.len()
        ));
        if selected.is_empty() {
            lines.push("  (無)".to_string());
        }
        for entry in selected {
            lines.push(format!("  {} 號 {} 樓", entry.address, entry.floor));
        }
    }

    lines.join("\n")
}

/// 將抽籤結果輸出成 CSV (group,address,floor,timestamp)。
pub fn write_csv<W: Write>(result: &DrawResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["group", "address", "floor", "timestamp"])?;

    for group in Group::ALL {
        for entry in result.group(group) {
            let timestamp = entry.timestamp.to_rfc3339();
            wtr.write_record([
                group.as_str(),
                entry.address.as_str(),
                entry.floor.as_str(),
                timestamp.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// 重複報名報表:一行一筆,沒有重複時給出明確訊息。
pub fn render_duplicates(duplicates: &[ApplicantKey]) -> String {
    if duplicates.is_empty() {
        return "沒有重複資料!".to_string();
    }

    let mut lines = vec!["重複資料:".to_string()];
    lines.extend(duplicates.iter().map(|k| k.to_string()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Entry;
    use chrono::{TimeZone, Utc};

    fn entry(address: &str, floor: &str) -> Entry {
        Entry {
            address: address.to_string(),
            floor: floor.to_string(),
            first_choice: "A".to_string(),
            second_choice: "B".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_render_text_lists_groups_in_order() {
        let result = DrawResult {
            a: vec![entry("12", "3")],
            b: vec![],
            c: vec![entry("7", "1"), entry("8", "2")],
        };
        let text = render_text(&result);

        assert!(text.contains("甲組錄取名單 (1 戶):"));
        assert!(text.contains("  12 號 3 樓"));
        assert!(text.contains("乙組錄取名單 (0 戶):"));
        assert!(text.contains("  (無)"));
        assert!(text.contains("丙組錄取名單 (2 戶):"));

        let jia = text.find("甲組").unwrap();
        let yi = text.find("乙組").unwrap();
        let bing = text.find("丙組").unwrap();
        assert!(jia < yi && yi < bing);
    }

    #[test]
    fn test_write_csv_rows() {
        let result = DrawResult {
            a: vec![entry("12", "3")],
            b: vec![entry("9", "5")],
            c: vec![],
        };
        let mut buffer = Vec::new();
        write_csv(&result, &mut buffer).unwrap();

        let csv_text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_text.trim_end().split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "group,address,floor,timestamp");
        assert!(lines[1].starts_with("A,12,3,2025-03-01T08:00:00"));
        assert!(lines[2].starts_with("B,9,5,"));
    }

    #[test]
    fn test_render_duplicates_empty() {
        assert_eq!(render_duplicates(&[]), "沒有重複資料!");
    }

    #[test]
    fn test_render_duplicates_lists_keys() {
        let duplicates = vec![ApplicantKey::new("12", "3"), ApplicantKey::new("12", "3")];
        let text = render_duplicates(&duplicates);

        assert!(text.starts_with("重複資料:"));
        assert_eq!(text.matches("12 號 3 樓").count(), 2);
    }
}
