//! Laundry workload figures shown under the usage charts.
//!
//! There is no workload feed, so the figures are fixed readings.

use crate::models::metric_card::{DeltaColor, MetricCard};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadReading {
    pub label: &'static str,
    pub value: f64,
    pub delta: f64,
    pub unit: &'static str,
}

pub const WORKLOAD_READINGS: &[WorkloadReading] = &[
    WorkloadReading {
        label: "Towels",
        value: 1000.0,
        delta: -100.0,
        unit: "KG",
    },
    WorkloadReading {
        label: "Bed sheets",
        value: 945.0,
        delta: -5.0,
        unit: "pcs",
    },
    WorkloadReading {
        label: "Total weight",
        value: 3000.0,
        delta: 100.0,
        unit: "KG",
    },
];

impl WorkloadReading {
    pub fn to_card(&self) -> MetricCard {
        MetricCard {
            label: self.label.to_string(),
            value: self.value,
            unit: self.unit.to_string(),
            delta: Some(self.delta),
            delta_color: DeltaColor::Inverse,
            help: None,
            border: true,
        }
    }
}

pub fn workload_cards() -> Vec<MetricCard> {
    WORKLOAD_READINGS.iter().map(WorkloadReading::to_card).collect()
}
