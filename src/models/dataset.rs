use chrono::{DateTime, Utc};
use serde::Serialize;

/// Descriptive entry for a published Web3 data source.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    pub tags: &'static [&'static str],
    pub update_frequency: &'static str,
    pub volume: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct DatasetsResponse<'a> {
    pub datasets: &'a [Dataset],
}
