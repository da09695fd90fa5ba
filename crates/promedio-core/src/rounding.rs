// Decimal ties like 13.45 sit a hair below the binary halfway point; nudge
// so they still round up at the tenth.
const TIE_NUDGE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingDirection {
    Up,
    Down,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingOutcome {
    pub rounded: f64,
    pub difference: f64,
    pub direction: RoundingDirection,
}

pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    let nudge = if scaled < 0.0 { -TIE_NUDGE } else { TIE_NUDGE };
    (scaled + nudge).round() / 10.0
}

pub fn explain_rounding(mean: f64) -> RoundingOutcome {
    let rounded = round_to_tenth(mean);
    let difference = rounded - mean;
    if difference > TIE_NUDGE {
        RoundingOutcome {
            rounded,
            difference,
            direction: RoundingDirection::Up,
        }
    } else if difference < -TIE_NUDGE {
        RoundingOutcome {
            rounded,
            difference,
            direction: RoundingDirection::Down,
        }
    } else {
        RoundingOutcome {
            rounded,
            difference: 0.0,
            direction: RoundingDirection::Unchanged,
        }
    }
}

impl RoundingOutcome {
    pub fn describe(&self) -> String {
        match self.direction {
            RoundingDirection::Up => {
                format!("rounded up to {:.1} ({:+.2})", self.rounded, self.difference)
            }
            RoundingDirection::Down => {
                format!(
                    "rounded down to {:.1} ({:+.2})",
                    self.rounded, self.difference
                )
            }
            RoundingDirection::Unchanged => format!("unchanged at {:.1} (0.00)", self.rounded),
        }
    }
}
