//! 距离类型模块
//!
//! 用显式的标签值表示“不可达”，避免以最大整数作为哨兵在松弛时溢出

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// 边权类型
pub type Weight = i64;

/// 松弛过程中的累加类型
///
/// 松弛得到的每个值都是一条边数不超过 `n * n` 的途径的权重，落在 `i128` 内；
/// 只有写回结果时才需要收窄到 `Weight`。
pub(crate) type WideWeight = i128;

/// 最短距离：有限值或不可达
///
/// 排序规则：任意有限值都小于 `Unreachable`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    Finite(Weight),
    #[default]
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// 有限距离的数值，不可达时返回None
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    /// 把松弛时使用的宽整数距离转回 `Distance`
    ///
    /// None表示不可达；数值超出 `Weight` 范围时返回None。
    pub(crate) fn from_wide(wide: Option<WideWeight>) -> Option<Distance> {
        match wide {
            Some(d) => Weight::try_from(d).ok().map(Distance::Finite),
            None => Some(Distance::Unreachable),
        }
    }

    /// 同 [`Distance::from_wide`]，但把超出范围的数值截断到 `Weight` 的边界
    pub(crate) fn saturating_from_wide(wide: Option<WideWeight>) -> Distance {
        match wide {
            Some(d) => Distance::Finite(d.clamp(Weight::MIN.into(), Weight::MAX.into()) as Weight),
            None => Distance::Unreachable,
        }
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => f.pad(&d.to_string()),
            Distance::Unreachable => f.pad("INF"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_some(d),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}
