//! Integration tests for the board model: hit validation, hit-testing, simulation, export.

use darts_scorer_web::models::{CENTER, DARTBOARD_NUMBERS};
use darts_scorer_web::{
    apply_throw, history_to_csv, random_hit, segment_at, start_match, Hit, MatchConfig, MatchError,
    MatchState, Multiplier,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hit_validation() {
    assert_eq!(Hit::new(21, 1), Err(MatchError::InvalidSegment { value: 21 }));
    assert_eq!(Hit::new(0, 1), Err(MatchError::InvalidSegment { value: 0 }));
    assert_eq!(
        Hit::new(20, 4),
        Err(MatchError::InvalidMultiplier { value: 20, multiplier: 4 })
    );
    assert_eq!(
        Hit::new(25, 3),
        Err(MatchError::InvalidMultiplier { value: 25, multiplier: 3 })
    );
    assert_eq!(Hit::treble(20).unwrap().points(), 60);
    assert_eq!(Hit::double(25).unwrap().points(), 50);
    assert_eq!(Hit::single(25).unwrap().multiplier(), Multiplier::Single);
}

#[test]
fn hit_json_is_validated() {
    let hit: Hit = serde_json::from_str(r#"{"value": 19, "multiplier": 3}"#).unwrap();
    assert_eq!(hit, Hit::treble(19).unwrap());
    assert_eq!(
        serde_json::to_value(hit).unwrap(),
        serde_json::json!({ "value": 19, "multiplier": 3 })
    );
    assert!(serde_json::from_str::<Hit>(r#"{"value": 25, "multiplier": 3}"#).is_err());
    assert!(serde_json::from_str::<Hit>(r#"{"value": 22, "multiplier": 1}"#).is_err());
}

#[test]
fn segment_at_resolves_rings_and_numbers() {
    assert_eq!(segment_at(CENTER, CENTER), Some(Hit::double(25).unwrap()));
    assert_eq!(segment_at(CENTER + 15.0, CENTER), Some(Hit::single(25).unwrap()));
    // straight up through the treble ring
    assert_eq!(segment_at(CENTER, CENTER - 110.0), Some(Hit::treble(20).unwrap()));
    // right: double 6
    assert_eq!(segment_at(CENTER + 185.0, CENTER), Some(Hit::double(6).unwrap()));
    // down: single 3
    assert_eq!(segment_at(CENTER, CENTER + 150.0), Some(Hit::single(3).unwrap()));
    // left, inner single: 11
    assert_eq!(segment_at(CENTER - 50.0, CENTER), Some(Hit::single(11).unwrap()));
    // off the board
    assert_eq!(segment_at(CENTER + 200.0, CENTER), None);
}

#[test]
fn segment_at_covers_every_number() {
    let mut seen: Vec<u8> = (0..20)
        .filter_map(|i| {
            let a = (18.0 * i as f64 - 90.0).to_radians();
            segment_at(CENTER + 150.0 * a.cos(), CENTER + 150.0 * a.sin())
        })
        .map(|h| h.value())
        .collect();
    let mut expected = DARTBOARD_NUMBERS.to_vec();
    seen.sort_unstable();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn random_hits_land_on_the_board() {
    let mut rng = StdRng::seed_from_u64(42);
    let hits: Vec<Hit> = (0..2000).map(|_| random_hit(&mut rng)).collect();
    assert!(hits.iter().all(|h| Hit::new(h.value(), h.multiplier().factor() as u8).is_ok()));
    assert!(hits.iter().any(|h| h.multiplier() == Multiplier::Treble));
    assert!(hits.iter().any(|h| h.multiplier() == Multiplier::Double));
    // singles cover most of the board
    let singles = hits.iter().filter(|h| h.multiplier() == Multiplier::Single).count();
    assert!(singles > hits.len() / 2);
}

#[test]
fn history_csv_lists_darts_of_the_leg() {
    let s = start_match(&MatchConfig::new(vec!["A".into(), "B".into()], 3, 2)).unwrap();
    let s = apply_throw(&s, Hit::treble(20).unwrap());
    let s = apply_throw(&s, Hit::double(25).unwrap());
    let csv = history_to_csv(&s).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, ["dart,value,multiplier,points", "1,20,3,60", "2,25,2,50"]);
}

#[test]
fn history_csv_of_empty_leg_has_header_only() {
    let csv = history_to_csv(&MatchState::default()).unwrap();
    assert_eq!(csv.trim_end(), "dart,value,multiplier,points");
}
