use battleship_rules::{BoardError, Orientation, Ship, DEFAULT_SHIP_LENGTH};

#[test]
fn test_new_ship_is_undamaged() -> Result<(), BoardError> {
    let ship = Ship::new(4)?;
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.hits(), 0);
    assert_eq!(ship.hit_state(), vec![false; 4]);
    assert!(!ship.is_sunk());
    Ok(())
}

#[test]
fn test_default_length() {
    let ship = Ship::default();
    assert_eq!(ship.length(), DEFAULT_SHIP_LENGTH);
    assert_eq!(ship, Ship::new(DEFAULT_SHIP_LENGTH).unwrap());
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(Ship::new(0).unwrap_err(), BoardError::InvalidShipLength);
}

#[test]
fn test_hit_marks_segment_once() -> Result<(), BoardError> {
    let mut ship = Ship::new(3)?;
    assert!(ship.hit(2)?);
    assert!(!ship.hit(2)?);
    assert_eq!(ship.hits(), 1);
    assert_eq!(ship.hit_state(), vec![false, true, false]);
    Ok(())
}

#[test]
fn test_hit_out_of_range() -> Result<(), BoardError> {
    let mut ship = Ship::new(3)?;
    assert_eq!(
        ship.hit(0).unwrap_err(),
        BoardError::InvalidPosition { position: 0, length: 3 }
    );
    assert_eq!(
        ship.hit(4).unwrap_err(),
        BoardError::InvalidPosition { position: 4, length: 3 }
    );
    assert_eq!(ship.hits(), 0);
    Ok(())
}

#[test]
fn test_sunk_after_all_segments() -> Result<(), BoardError> {
    let mut ship = Ship::new(2)?;
    assert!(ship.hit(1)?);
    assert!(!ship.is_sunk());
    assert!(ship.hit(2)?);
    assert!(ship.is_sunk());
    // nothing left to mark
    assert!(!ship.hit(1)?);
    assert!(!ship.hit(2)?);
    assert_eq!(ship.hits(), 2);
    Ok(())
}

#[test]
fn test_rotate_keeps_damage() -> Result<(), BoardError> {
    let mut ship = Ship::new(3)?;
    ship.hit(1)?;
    assert_eq!(ship.rotate(), Orientation::Vertical);
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.hits(), 1);
    assert_eq!(ship.hit_state(), vec![true, false, false]);
    assert_eq!(ship.rotate(), Orientation::Horizontal);
    Ok(())
}

#[test]
fn test_hit_state_is_a_copy() -> Result<(), BoardError> {
    let ship = Ship::new(2)?;
    let mut state = ship.hit_state();
    state[0] = true;
    assert_eq!(ship.hit_state(), vec![false, false]);
    assert_eq!(ship.hits(), 0);
    Ok(())
}

#[cfg(feature = "std")]
#[test]
fn test_deserialize_recomputes_hits() -> Result<(), BoardError> {
    let mut ship = Ship::new(3)?;
    ship.hit(3)?;
    ship.rotate();
    let json = serde_json::to_string(&ship).unwrap();
    let back: Ship = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ship);

    // stored hit count is ignored in favour of the flags
    let back: Ship = serde_json::from_str(
        r#"{"length":2,"orientation":"Horizontal","hit_state":[true,false],"hits":5}"#,
    )
    .unwrap();
    assert_eq!(back.hits(), 1);
    assert!(!back.is_sunk());
    Ok(())
}

#[cfg(feature = "std")]
#[test]
fn test_deserialize_rejects_inconsistent_ship() {
    for json in [
        r#"{"length":2,"orientation":"Horizontal","hit_state":[false],"hits":5}"#,
        r#"{"length":0,"orientation":"Vertical","hit_state":[],"hits":0}"#,
    ] {
        assert!(serde_json::from_str::<Ship>(json).is_err(), "{}", json);
    }
}
