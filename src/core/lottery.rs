use crate::domain::model::{DrawResult, Entry, Group, Quotas};
use rand::seq::SliceRandom;
use rand::Rng;

/// 兩階段抽籤引擎。
///
/// 引擎本身不做任何 I/O,輸入為去重後的報名名單與各組名額,
/// 亂數來源由呼叫端注入,測試時可改用固定種子重現結果。
///
/// 第一階段依第一志願分組:名額足夠時全數錄取,超額時對該組
/// 洗牌一次,前段錄取、後段進入候補。第二階段把所有候補者依
/// 第二志願分組,遞補各組剩餘名額,仍未錄取者即落選,沒有第
/// 三輪。每個組別的錄取與候補取自同一次洗牌,因此第二階段的
/// 候補池絕不包含第一階段已錄取者。
#[derive(Debug, Clone)]
pub struct LotteryEngine {
    quotas: Quotas,
}

impl LotteryEngine {
    pub fn new(quotas: Quotas) -> Self {
        Self { quotas }
    }

    pub fn draw<R: Rng>(&self, entries: &[Entry], rng: &mut R) -> DrawResult {
        let mut result = DrawResult::default();
        let mut waiting: Vec<Entry> = Vec::new();

        // 第一階段:第一志願抽籤
        for group in Group::ALL {
            let mut bucket: Vec<Entry> = entries
                .iter()
                .filter(|e| e.first_group() == Some(group))
                .cloned()
                .collect();
            let quota = self.quotas.get(group) as usize;

            if bucket.len() <= quota {
                // 名額足夠,全數錄取,不需要洗牌
                *result.group_mut(group) = bucket;
            } else {
                bucket.shuffle(rng);
                waiting.extend(bucket.split_off(quota));
                *result.group_mut(group) = bucket;
            }
        }

        tracing::debug!(
            "Round 1 selected {} entries, {} waiting",
            result.total_selected(),
            waiting.len()
        );

        // 第二階段:候補者依第二志願遞補剩餘名額
        for group in Group::ALL {
            let quota = self.quotas.get(group) as usize;
            let remaining = quota.saturating_sub(result.group(group).len());
            if remaining == 0 {
                continue;
            }

            let mut bucket: Vec<Entry> = waiting
                .iter()
                .filter(|e| e.second_group() == Some(group))
                .cloned()
                .collect();
            bucket.shuffle(rng);
            bucket.truncate(remaining);
            result.group_mut(group).extend(bucket);
        }

        tracing::debug!("Draw complete: {} entries selected", result.total_selected());

        result
    }
}
