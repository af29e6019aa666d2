use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Plant utilities tracked on the dashboard, one chart each.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum UtilityMetric {
    Water,
    Electricity,
    Gas,
}

impl UtilityMetric {
    pub fn label(&self) -> &'static str {
        match self {
            UtilityMetric::Water => "Water usage",
            UtilityMetric::Electricity => "Electricity usage",
            UtilityMetric::Gas => "Gas usage",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            UtilityMetric::Water | UtilityMetric::Gas => "m³",
            UtilityMetric::Electricity => "kWh",
        }
    }

    /// Half-open range of plausible daily readings, used for mock data.
    pub fn sample_range(&self) -> Range<u32> {
        match self {
            UtilityMetric::Water => 800..1500,
            UtilityMetric::Electricity => 7000..9500,
            UtilityMetric::Gas => 300..500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_utilities_have_non_empty_ranges() {
        let metrics: Vec<_> = UtilityMetric::iter().collect();
        assert_eq!(
            metrics,
            vec![
                UtilityMetric::Water,
                UtilityMetric::Electricity,
                UtilityMetric::Gas
            ]
        );
        for metric in metrics {
            let range = metric.sample_range();
            assert!(range.start < range.end, "{metric} range is empty");
        }
    }
}
