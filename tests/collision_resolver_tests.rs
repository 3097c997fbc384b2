use chart_axis::api::{
    Tick, TickLabel, hide_overset_tick, resolve_collisions, resolve_collisions_in_range,
    visible_count,
};
use chart_axis::core::LabelBox;

fn boxed(position_px: f64, width: f64) -> Tick<usize> {
    Tick::new(0, TickLabel::plain("label"), position_px)
        .with_bbox(Some(LabelBox::new(position_px, position_px + width)))
}

fn visibility<V>(ticks: &[Tick<V>]) -> Vec<bool> {
    ticks.iter().map(|tick| tick.visible).collect()
}

#[test]
fn overlapping_later_tick_is_hidden() {
    let mut ticks = vec![boxed(0.0, 40.0), boxed(38.0, 40.0)];
    assert_eq!(resolve_collisions(&mut ticks, 0.0), 1);
    assert_eq!(visibility(&ticks), vec![true, false]);
}

#[test]
fn comparison_continues_from_the_last_kept_tick() {
    // 1 collides with 0 and is hidden; 2 is then measured against 0, not 1.
    let mut ticks = vec![boxed(0.0, 30.0), boxed(20.0, 30.0), boxed(35.0, 30.0)];
    resolve_collisions(&mut ticks, 0.0);
    assert_eq!(visibility(&ticks), vec![true, false, true]);
}

#[test]
fn tolerance_widens_the_required_gap() {
    let mut loose = vec![boxed(0.0, 10.0), boxed(12.0, 10.0)];
    assert_eq!(resolve_collisions(&mut loose, 0.0), 0);

    let mut strict = vec![boxed(0.0, 10.0), boxed(12.0, 10.0)];
    assert_eq!(resolve_collisions(&mut strict, 4.0), 1);
}

#[test]
fn anchor_at_range_end_survives_a_collision() {
    let mut ticks = vec![boxed(0.0, 10.0), boxed(12.0, 10.0), boxed(20.0, 10.0)];
    assert_eq!(resolve_collisions_in_range(&mut ticks, 0.0, 0, 2), 1);
    assert_eq!(visibility(&ticks), vec![true, false, true]);

    let mut unanchored = vec![boxed(0.0, 10.0), boxed(12.0, 10.0), boxed(20.0, 10.0)];
    resolve_collisions(&mut unanchored, 0.0);
    assert_eq!(visibility(&unanchored), vec![true, true, false]);
}

#[test]
fn range_resolution_leaves_outside_ticks_alone() {
    let mut ticks = vec![boxed(0.0, 50.0), boxed(10.0, 50.0), boxed(20.0, 50.0), boxed(30.0, 50.0)];
    resolve_collisions_in_range(&mut ticks, 0.0, 2, 3);
    assert_eq!(visibility(&ticks), vec![true, true, false, true]);
    assert_eq!(resolve_collisions_in_range(&mut ticks, 0.0, 3, 3), 0);
}

#[test]
fn unmeasured_and_hidden_ticks_are_skipped() {
    let mut ticks = vec![
        boxed(0.0, 10.0),
        Tick::new(0, TickLabel::plain("?"), 5.0),
        boxed(8.0, 10.0),
    ];
    ticks[2].visible = false;
    assert_eq!(resolve_collisions(&mut ticks, 0.0), 0);
    assert_eq!(visibility(&ticks), vec![true, true, false]);
    assert_eq!(visible_count(&ticks), 2);
}

#[test]
fn empty_sequences_resolve_trivially() {
    let mut ticks: Vec<Tick<usize>> = Vec::new();
    assert_eq!(resolve_collisions(&mut ticks, 0.0), 0);
    assert_eq!(resolve_collisions_in_range(&mut ticks, 0.0, 0, 3), 0);
    assert!(!hide_overset_tick(&mut ticks, 100.0));
}

#[test]
fn overset_hides_only_the_last_visible_tick() {
    let mut ticks = vec![boxed(10.0, 20.0), boxed(60.0, 20.0), boxed(95.0, 20.0)];
    ticks[2].visible = false;
    assert!(!hide_overset_tick(&mut ticks, 100.0));

    ticks[2].visible = true;
    assert!(hide_overset_tick(&mut ticks, 100.0));
    assert_eq!(visibility(&ticks), vec![true, true, false]);
}
