// File: crates/pulse-history/tests/gate.rs
// Purpose: Validate single-flight acquisition and guaranteed release of the load gate.

use pulse_history::LoadGate;

#[test]
fn second_acquisition_is_refused_while_permit_lives() {
    let gate = LoadGate::new();
    let permit = gate.try_acquire().expect("gate starts idle");
    assert!(gate.is_busy());
    assert!(gate.try_acquire().is_none(), "overlapping requests must be prevented");
    drop(permit);
    assert!(!gate.is_busy());
    assert!(gate.try_acquire().is_some());
}

#[test]
fn permit_releases_on_failure_paths_too() {
    let gate = LoadGate::new();
    let failing = || -> Result<(), &'static str> {
        let _permit = gate.try_acquire().ok_or("busy")?;
        Err("request failed")
    };
    assert!(failing().is_err());
    // The scoped permit dropped with the error, so the trigger re-enables.
    assert!(!gate.is_busy());
}

#[test]
fn clones_share_the_same_gate() {
    let gate = LoadGate::new();
    let view = gate.clone();
    let _permit = gate.try_acquire().unwrap();
    assert!(view.is_busy());
    assert!(view.try_acquire().is_none());
}
