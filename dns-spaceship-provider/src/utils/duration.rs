//! 超时时长序列化/反序列化工具
//!
//! - 序列化: `Option<Duration>` -> 整数秒
//! - 反序列化: 整数秒 或 数字字符串 -> `Option<Duration>`

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 `Option<Duration>` 为 Option<整数秒>
#[allow(clippy::ref_option)]
pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_some(&d.as_secs()),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持整数秒或数字字符串（如 `"15"`）
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        U64(u64),
        String(String),
    }

    match Option::<Seconds>::deserialize(deserializer)? {
        Some(Seconds::U64(secs)) => Ok(Some(Duration::from_secs(secs))),
        Some(Seconds::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| Error::custom(format!("Invalid timeout seconds '{s}': {e}"))),
        None => Ok(None),
    }
}
