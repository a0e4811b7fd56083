//! Board geometry: numbers, multipliers, ring radii and point hit-testing.

use crate::models::match_state::MatchError;
use serde::{Deserialize, Serialize};

/// Board numbers clockwise, starting at the top.
pub const DARTBOARD_NUMBERS: [u8; 20] = [20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5];

/// Value of the bull (single = 25, double = 50).
pub const BULL: u8 = 25;

/// Side of the square board coordinate space (SVG viewBox).
pub const VIEWBOX_SIZE: f64 = 440.0;
pub const CENTER: f64 = VIEWBOX_SIZE / 2.0;

// Ring radii in board coordinates.
pub const NUMBER_RADIUS: f64 = 210.0;
pub const DOUBLE_OUTER_RADIUS: f64 = 190.0;
pub const DOUBLE_INNER_RADIUS: f64 = 180.0;
pub const TREBLE_OUTER_RADIUS: f64 = 115.0;
pub const TREBLE_INNER_RADIUS: f64 = 105.0;
pub const OUTER_BULL_RADIUS: f64 = 20.0;
pub const BULLSEYE_RADIUS: f64 = 10.0;

/// Angular width of one numbered segment, in degrees.
const SEGMENT_ANGLE: f64 = 360.0 / 20.0;

/// Ring multiplier of a hit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplier {
    Single,
    Double,
    Treble,
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Treble => 3,
        }
    }

    fn from_factor(factor: u8) -> Option<Self> {
        match factor {
            1 => Some(Multiplier::Single),
            2 => Some(Multiplier::Double),
            3 => Some(Multiplier::Treble),
            _ => None,
        }
    }
}

/// A dart that landed in a scoring segment.
///
/// Only constructible through [`Hit::new`] (or deserialization, which goes through
/// the same check), so a treble bull or a 21 can never reach the state machine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHit", into = "RawHit")]
pub struct Hit {
    value: u8,
    multiplier: Multiplier,
}

/// Wire form of a hit: `{"value": 20, "multiplier": 3}`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawHit {
    value: u8,
    multiplier: u8,
}

impl Hit {
    /// Validate a value/multiplier pair against the board.
    pub fn new(value: u8, multiplier: u8) -> Result<Self, MatchError> {
        if !(1..=20).contains(&value) && value != BULL {
            return Err(MatchError::InvalidSegment { value });
        }
        let m = Multiplier::from_factor(multiplier)
            .ok_or(MatchError::InvalidMultiplier { value, multiplier })?;
        if value == BULL && m == Multiplier::Treble {
            return Err(MatchError::InvalidMultiplier { value, multiplier });
        }
        Ok(Self { value, multiplier: m })
    }

    pub fn single(value: u8) -> Result<Self, MatchError> {
        Self::new(value, 1)
    }

    pub fn double(value: u8) -> Result<Self, MatchError> {
        Self::new(value, 2)
    }

    pub fn treble(value: u8) -> Result<Self, MatchError> {
        Self::new(value, 3)
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn is_double(&self) -> bool {
        self.multiplier == Multiplier::Double
    }

    /// Points scored: value times multiplier.
    pub fn points(&self) -> u32 {
        u32::from(self.value) * self.multiplier.factor()
    }
}

impl TryFrom<RawHit> for Hit {
    type Error = MatchError;

    fn try_from(raw: RawHit) -> Result<Self, Self::Error> {
        Hit::new(raw.value, raw.multiplier)
    }
}

impl From<Hit> for RawHit {
    fn from(hit: Hit) -> Self {
        RawHit {
            value: hit.value,
            multiplier: hit.multiplier.factor() as u8,
        }
    }
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.value, self.multiplier) {
            (BULL, Multiplier::Double) => write!(f, "Bull"),
            (BULL, _) => write!(f, "25"),
            (v, Multiplier::Single) => write!(f, "S{}", v),
            (v, Multiplier::Double) => write!(f, "D{}", v),
            (v, Multiplier::Treble) => write!(f, "T{}", v),
        }
    }
}

/// Resolve a point in board coordinates to the segment it lands in.
/// Returns `None` outside the double ring. Ring edges belong to the inner ring.
pub fn segment_at(x: f64, y: f64) -> Option<Hit> {
    let dx = x - CENTER;
    let dy = y - CENTER;
    let r = dx.hypot(dy);

    let bull = |multiplier| Some(Hit { value: BULL, multiplier });
    if r <= BULLSEYE_RADIUS {
        return bull(Multiplier::Double);
    }
    if r <= OUTER_BULL_RADIUS {
        return bull(Multiplier::Single);
    }

    let multiplier = if r <= TREBLE_INNER_RADIUS {
        Multiplier::Single
    } else if r <= TREBLE_OUTER_RADIUS {
        Multiplier::Treble
    } else if r <= DOUBLE_INNER_RADIUS {
        Multiplier::Single
    } else if r <= DOUBLE_OUTER_RADIUS {
        Multiplier::Double
    } else {
        return None;
    };

    // Screen y grows downwards, so atan2 runs clockwise. Shift so 0° is straight up.
    let degrees = dy.atan2(dx).to_degrees() + 90.0;
    let index = (degrees.rem_euclid(360.0) / SEGMENT_ANGLE).round() as usize % DARTBOARD_NUMBERS.len();
    Some(Hit {
        value: DARTBOARD_NUMBERS[index],
        multiplier,
    })
}

/// Static board description for renderers.
#[derive(Clone, Debug, Serialize)]
pub struct BoardLayout {
    pub numbers: [u8; 20],
    pub viewbox_size: f64,
    pub number_radius: f64,
    pub double_outer_radius: f64,
    pub double_inner_radius: f64,
    pub treble_outer_radius: f64,
    pub treble_inner_radius: f64,
    pub outer_bull_radius: f64,
    pub bullseye_radius: f64,
}

impl BoardLayout {
    pub fn standard() -> Self {
        Self {
            numbers: DARTBOARD_NUMBERS,
            viewbox_size: VIEWBOX_SIZE,
            number_radius: NUMBER_RADIUS,
            double_outer_radius: DOUBLE_OUTER_RADIUS,
            double_inner_radius: DOUBLE_INNER_RADIUS,
            treble_outer_radius: TREBLE_OUTER_RADIUS,
            treble_inner_radius: TREBLE_INNER_RADIUS,
            outer_bull_radius: OUTER_BULL_RADIUS,
            bullseye_radius: BULLSEYE_RADIUS,
        }
    }
}
