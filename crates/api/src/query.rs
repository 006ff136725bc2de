//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Page selection for listing endpoints (`?page=`). Page size is fixed.
///
/// A value that is not an integer is treated as absent, so the listing falls
/// back to the first page. Integers below 1 select an empty page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.trim().parse::<i64>().ok())
        .map(|page| page.clamp(0, i64::from(u32::MAX)) as u32))
}
