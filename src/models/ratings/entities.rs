use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 投票类别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub enum VoteCategory {
    Excellent,   // 优秀
    Satisfied,   // 满意
    Unsatisfied, // 不满意
}

impl VoteCategory {
    pub const EXCELLENT: &'static str = "excellent";
    pub const SATISFIED: &'static str = "satisfied";
    pub const UNSATISFIED: &'static str = "unsatisfied";
}

impl<'de> Deserialize<'de> for VoteCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            VoteCategory::EXCELLENT => Ok(VoteCategory::Excellent),
            VoteCategory::SATISFIED => Ok(VoteCategory::Satisfied),
            VoteCategory::UNSATISFIED => Ok(VoteCategory::Unsatisfied),
            _ => Err(serde::de::Error::custom(format!(
                "无效的投票类别: '{s}'. 支持的类别: excellent, satisfied, unsatisfied"
            ))),
        }
    }
}

impl std::fmt::Display for VoteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteCategory::Excellent => write!(f, "{}", VoteCategory::EXCELLENT),
            VoteCategory::Satisfied => write!(f, "{}", VoteCategory::SATISFIED),
            VoteCategory::Unsatisfied => write!(f, "{}", VoteCategory::UNSATISFIED),
        }
    }
}

impl std::str::FromStr for VoteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(VoteCategory::Excellent),
            "satisfied" => Ok(VoteCategory::Satisfied),
            "unsatisfied" => Ok(VoteCategory::Unsatisfied),
            _ => Err(format!("Invalid vote category: {s}")),
        }
    }
}

// 三类投票计数器
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct RatingCounters {
    pub excellent: i64,
    pub satisfied: i64,
    pub unsatisfied: i64,
}

impl RatingCounters {
    /// 投票总数
    pub fn total(&self) -> i64 {
        self.excellent + self.satisfied + self.unsatisfied
    }

    /// 各类别百分比份额 round(100 * count / total)。
    /// 总数为 0 时三项均为 0；四舍五入可能导致三项之和不等于 100。
    pub fn shares(&self) -> RatingShares {
        let total = self.total();
        let percent = |count: i64| -> i64 {
            if total == 0 {
                0
            } else {
                ((count as f64 / total as f64) * 100.0).round() as i64
            }
        };

        RatingShares {
            excellent: percent(self.excellent),
            satisfied: percent(self.satisfied),
            unsatisfied: percent(self.unsatisfied),
        }
    }
}

// 百分比份额（仅展示用，不落库）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct RatingShares {
    pub excellent: i64,
    pub satisfied: i64,
    pub unsatisfied: i64,
}

// 单个班级对某位教师的投票计数
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct ClassVote {
    pub class_name: String,
    #[serde(flatten)]
    #[ts(flatten)]
    pub counters: RatingCounters,
}

// 教师评价记录：全局计数器 + 按班级明细
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rating.ts")]
pub struct TeacherRating {
    pub teacher_id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub counters: RatingCounters,
    pub votes_by_class: Vec<ClassVote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_simple() {
        let counters = RatingCounters {
            excellent: 85,
            satisfied: 10,
            unsatisfied: 5,
        };
        let shares = counters.shares();
        assert_eq!(shares.excellent, 85);
        assert_eq!(shares.satisfied, 10);
        assert_eq!(shares.unsatisfied, 5);
    }

    #[test]
    fn test_shares_all_zero() {
        let counters = RatingCounters::default();
        let shares = counters.shares();
        assert_eq!(shares.excellent, 0);
        assert_eq!(shares.satisfied, 0);
        assert_eq!(shares.unsatisfied, 0);
    }

    #[test]
    fn test_shares_rounding_may_not_sum_to_100() {
        // 1/3 each rounds to 33+33+33 = 99
        let counters = RatingCounters {
            excellent: 1,
            satisfied: 1,
            unsatisfied: 1,
        };
        let shares = counters.shares();
        assert_eq!(shares.excellent, 33);
        assert_eq!(shares.satisfied, 33);
        assert_eq!(shares.unsatisfied, 33);
    }

    #[test]
    fn test_total() {
        let counters = RatingCounters {
            excellent: 2,
            satisfied: 3,
            unsatisfied: 4,
        };
        assert_eq!(counters.total(), 9);
    }

    #[test]
    fn test_vote_category_roundtrip() {
        for s in ["excellent", "satisfied", "unsatisfied"] {
            let category: VoteCategory = s.parse().unwrap();
            assert_eq!(category.to_string(), s);
        }
        assert!("great".parse::<VoteCategory>().is_err());
    }
}
