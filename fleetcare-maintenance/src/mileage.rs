//! Distance-only reminder ladder, measured from the odometer reading of the
//! most recent workshop service-log entry.

use serde::{Deserialize, Serialize};

/// Ladder bands in ascending order. One reminder per pass: the highest band
/// the accumulated distance has crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MileageBand {
    OilService,
    GeneralReview,
    BrakeReview,
    FullService,
    MajorReview,
}

impl MileageBand {
    pub const ALL: [MileageBand; 5] = [
        MileageBand::OilService,
        MileageBand::GeneralReview,
        MileageBand::BrakeReview,
        MileageBand::FullService,
        MileageBand::MajorReview,
    ];

    pub fn threshold_km(self) -> u32 {
        match self {
            MileageBand::OilService => 5000,
            MileageBand::GeneralReview => 10_000,
            MileageBand::BrakeReview => 20_000,
            MileageBand::FullService => 40_000,
            MileageBand::MajorReview => 80_000,
        }
    }

    /// Title doubles as the dedup substring for mileage reminders.
    pub fn title(self) -> &'static str {
        match self {
            MileageBand::OilService => "Oil service reminder",
            MileageBand::GeneralReview => "General review reminder",
            MileageBand::BrakeReview => "Brake review reminder",
            MileageBand::FullService => "Full service reminder",
            MileageBand::MajorReview => "Major review reminder",
        }
    }

    pub fn message(self, delta_km: u32) -> String {
        let work = match self {
            MileageBand::OilService => "an oil service",
            MileageBand::GeneralReview => "a general review",
            MileageBand::BrakeReview => "a brake review",
            MileageBand::FullService => "a full service",
            MileageBand::MajorReview => "a major review",
        };
        format!("Your vehicle has covered {delta_km} km since its last recorded service; {work} is recommended")
    }
}

/// The highest band `delta_km` has reached, or `None` below the first rung.
pub fn band_for(delta_km: u32) -> Option<MileageBand> {
    MileageBand::ALL
        .iter()
        .copied()
        .rev()
        .find(|band| delta_km >= band.threshold_km())
}
