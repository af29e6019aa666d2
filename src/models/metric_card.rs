use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::UtilityMetric;
use crate::models::timeseries::TimeSeries;

/// How a delta is coloured.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum DeltaColor {
    /// Increase is good (green), decrease is bad (red).
    #[default]
    Normal,
    /// Increase is bad (red), decrease is good (green). Used for consumption.
    Inverse,
    /// Always neutral.
    Off,
}

/// Sentiment of a delta once its [`DeltaColor`] policy is applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DeltaTone {
    Good,
    Bad,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub delta: Option<f64>,
    pub delta_color: DeltaColor,
    pub help: Option<String>,
    pub border: bool,
}

impl MetricCard {
    /// Card for the latest day of a utility series, with the change vs. the day before.
    pub fn from_series(
        metric: UtilityMetric,
        series: &TimeSeries,
        reference_date: NaiveDate,
    ) -> Option<Self> {
        let (_, latest) = series.last()?;
        Some(Self {
            label: metric.label().to_string(),
            value: latest,
            unit: metric.unit().to_string(),
            delta: series.day_over_day_delta(),
            delta_color: DeltaColor::Inverse,
            help: Some(format!(
                "Change in {} vs. the previous day, as of {}",
                metric.label().to_lowercase(),
                reference_date
            )),
            border: metric == UtilityMetric::Water,
        })
    }

    pub fn delta_tone(&self) -> DeltaTone {
        let Some(delta) = self.delta else {
            return DeltaTone::Neutral;
        };
        if delta == 0.0 {
            return DeltaTone::Neutral;
        }
        let rising = delta > 0.0;
        match (self.delta_color, rising) {
            (DeltaColor::Off, _) => DeltaTone::Neutral,
            (DeltaColor::Normal, true) | (DeltaColor::Inverse, false) => DeltaTone::Good,
            (DeltaColor::Normal, false) | (DeltaColor::Inverse, true) => DeltaTone::Bad,
        }
    }
}
