use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{LotteryError, Result};
use crate::utils::validation::{
    self, validate_digits, validate_group_label, validate_non_empty_string,
};

/// 抽籤分組。內部一律使用 A/B/C,中文標籤只出現在系統邊界。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    A,
    B,
    C,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::A, Group::B, Group::C];

    /// 解析組別標籤,兩種字母表都接受;無法辨識時回傳 None。
    pub fn parse(label: &str) -> Option<Group> {
        match label.trim() {
            "A" | "甲" => Some(Group::A),
            "B" | "乙" => Some(Group::B),
            "C" | "丙" => Some(Group::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::C => "C",
        }
    }

    pub fn as_chinese(&self) -> &'static str {
        match self {
            Group::A => "甲",
            Group::B => "乙",
            Group::C => "丙",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一筆報名資料,欄位名稱與遠端資料表的回應一致 (camelCase)。
///
/// 志願欄位保留原始字串,分組比對時才透過 [`Group::parse`] 正規化,
/// 無法辨識的標籤原樣保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub address: String,
    pub floor: String,
    pub first_choice: String,
    pub second_choice: String,
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    pub fn key(&self) -> ApplicantKey {
        ApplicantKey::new(&self.address, &self.floor)
    }

    pub fn first_group(&self) -> Option<Group> {
        Group::parse(&self.first_choice)
    }

    pub fn second_group(&self) -> Option<Group> {
        Group::parse(&self.second_choice)
    }
}

/// 戶別識別:同一地址+樓層視為同一戶。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicantKey {
    pub address: String,
    pub floor: String,
}

impl ApplicantKey {
    pub fn new(address: &str, floor: &str) -> Self {
        Self {
            address: address.to_string(),
            floor: floor.to_string(),
        }
    }
}

impl fmt::Display for ApplicantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 號 {} 樓", self.address, self.floor)
    }
}

/// 各組名額,抽籤時由操作者提供。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quotas {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Quotas {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn get(&self, group: Group) -> u32 {
        match group {
            Group::A => self.a,
            Group::B => self.b,
            Group::C => self.c,
        }
    }
}

/// 抽籤結果:各組的錄取名單。未錄取者不會出現在任何名單中。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawResult {
    pub a: Vec<Entry>,
    pub b: Vec<Entry>,
    pub c: Vec<Entry>,
}

impl DrawResult {
    pub fn group(&self, group: Group) -> &[Entry] {
        match group {
            Group::A => &self.a,
            Group::B => &self.b,
            Group::C => &self.c,
        }
    }

    pub(crate) fn group_mut(&mut self, group: Group) -> &mut Vec<Entry> {
        match group {
            Group::A => &mut self.a,
            Group::B => &mut self.b,
            Group::C => &mut self.c,
        }
    }

    pub fn total_selected(&self) -> usize {
        self.a.len() + self.b.len() + self.c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_selected() == 0
    }

    pub fn contains_key(&self, key: &ApplicantKey) -> bool {
        Group::ALL
            .iter()
            .any(|g| self.group(*g).iter().any(|e| &e.key() == key))
    }
}

/// 送出端的報名資料。時間戳在送出當下才補上。
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub address: String,
    pub floor: String,
    pub first_choice: String,
    pub second_choice: String,
}

impl Submission {
    /// 組成寫入端點的逗號分隔紀錄:address,floor,first,second,timestamp。
    pub fn to_line(&self, timestamp: DateTime<Utc>) -> String {
        [
            self.address.as_str(),
            self.floor.as_str(),
            self.first_choice.as_str(),
            self.second_choice.as_str(),
            &timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        ]
        .join(",")
    }
}

impl validation::Validate for Submission {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("address", &self.address)?;
        validate_digits("floor", &self.floor)?;
        validate_group_label("first_choice", &self.first_choice)?;
        validate_group_label("second_choice", &self.second_choice)?;

        // 第二志願不可與第一志願相同
        if Group::parse(&self.first_choice) == Group::parse(&self.second_choice) {
            return Err(LotteryError::ValidationError {
                message: "second choice must differ from first choice".to_string(),
            });
        }

        Ok(())
    }
}
