use serde::Deserialize;

use super::domain::ScholarshipRecord;

/// Need-based filter mode for catalog browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedFilter {
    #[default]
    All,
    Need,
    Merit,
}

impl NeedFilter {
    fn admits(self, record: &ScholarshipRecord) -> bool {
        match self {
            NeedFilter::All => true,
            NeedFilter::Need => record.need_based,
            NeedFilter::Merit => !record.need_based,
        }
    }
}

/// Filter the catalog by free-text query and need-based mode.
///
/// The query is a case-insensitive substring match over name, criteria,
/// and amount; an empty query admits every record. The result is a
/// subsequence of the input: relative order is preserved, never re-sorted.
pub fn filter_records<'a>(
    records: &'a [ScholarshipRecord],
    query: &str,
    need: NeedFilter,
) -> Vec<&'a ScholarshipRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_query = query.is_empty()
                || record.name.to_lowercase().contains(&query)
                || record.criteria.to_lowercase().contains(&query)
                || record.amount.to_lowercase().contains(&query);
            matches_query && need.admits(record)
        })
        .collect()
}
