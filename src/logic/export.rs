//! CSV export of the current leg's darts.

use crate::models::{MatchError, MatchState};
use serde::Serialize;

#[derive(Serialize)]
struct HistoryRow {
    dart: usize,
    value: u8,
    multiplier: u32,
    points: u32,
}

/// All darts of the current leg (busts included) as CSV: `dart,value,multiplier,points`.
pub fn history_to_csv(state: &MatchState) -> Result<String, MatchError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, hit) in state.history.iter().enumerate() {
        writer
            .serialize(HistoryRow {
                dart: i + 1,
                value: hit.value(),
                multiplier: hit.multiplier().factor(),
                points: hit.points(),
            })
            .map_err(|e| MatchError::Export(e.to_string()))?;
    }
    if state.history.is_empty() {
        writer
            .write_record(["dart", "value", "multiplier", "points"])
            .map_err(|e| MatchError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| MatchError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| MatchError::Export(e.to_string()))
}
