// Vortex set lifecycle: capacity, eviction order and removal once spent.

use field_core::*;
use glam::Vec3;

fn set_with_capacity(capacity: usize) -> VortexSet {
    VortexSet::new(VortexParams {
        capacity,
        ..VortexParams::default()
    })
}

#[test]
fn spawning_past_capacity_evicts_exactly_the_oldest() {
    let mut set = set_with_capacity(VORTEX_CAPACITY);
    for i in 0..VORTEX_CAPACITY {
        assert!(set.spawn(Vec3::new(i as f32, 0.0, 0.0), i as f64 * 0.1).is_none());
    }
    assert_eq!(set.len(), VORTEX_CAPACITY);

    let newest = Vec3::new(99.0, 0.0, 0.0);
    let evicted = set.spawn(newest, 5.0).expect("oldest should be evicted");
    assert_eq!(evicted.created_at, 0.0);
    assert_eq!(evicted.position, Vec3::ZERO);
    assert_eq!(set.len(), VORTEX_CAPACITY);
    assert!(set.iter().any(|v| v.position == newest));
    assert!(set.iter().all(|v| v.created_at > 0.0));
    // creation order is preserved
    let times: Vec<f64> = set.iter().map(|v| v.created_at).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]), "{times:?}");
}

#[test]
fn capacity_of_one_always_holds_the_latest() {
    let mut set = set_with_capacity(1);
    set.spawn(Vec3::X, 0.0);
    set.spawn(Vec3::Y, 1.0);
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().map(|v| v.position), Some(Vec3::Y));
}

#[test]
fn fresh_vortex_survives_its_first_prune() {
    let mut set = set_with_capacity(3);
    set.spawn(Vec3::ZERO, 2.0);
    set.advance(2.0);
    assert_eq!(set.iter().next().unwrap().strength.value(), 0.0);
    assert_eq!(set.prune(), 0);
    assert_eq!(set.len(), 1);
}

#[test]
fn vortex_ramps_up_then_decays_and_is_removed() {
    let params = VortexParams::default();
    let mut set = VortexSet::new(params.clone());
    set.spawn(Vec3::ZERO, 0.0);

    set.advance(params.swirl_ramp);
    let v = set.iter().next().unwrap();
    assert_eq!(v.swirl.value(), 1.0);
    assert!(v.strength.value() > 0.5);
    assert_eq!(set.prune(), 0);

    let end = params.strength_ramp.max(params.swirl_ramp)
        + params.strength_decay.max(params.swirl_decay);
    set.advance(end + 0.01);
    assert_eq!(set.prune(), 1);
    assert!(set.is_empty());
}

#[test]
fn spent_vortex_is_gone_after_next_frame() {
    let params = FieldParams {
        particle_count: 50,
        noise: 0.0,
        ..FieldParams::preset(Variant::Vortex)
    };
    let mut sim = Simulator::with_seed(params, 21).unwrap();
    sim.pointer_down(0.0);
    sim.pointer_down(0.05);
    sim.frame(0.1);
    let ForceField::Vortex(set) = sim.field_mut() else {
        panic!("expected vortex field");
    };
    assert_eq!(set.len(), 2);
    if let Some(v) = set.iter_mut().next() {
        v.strength.set(VORTEX_REMOVE_EPSILON);
        v.swirl.set(0.0004);
    }

    sim.frame(0.1);
    let ForceField::Vortex(set) = sim.field() else {
        panic!("expected vortex field");
    };
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().created_at, 0.05);
}

#[test]
fn vortex_with_one_live_channel_is_kept() {
    let mut set = set_with_capacity(2);
    set.spawn(Vec3::ZERO, 0.0);
    if let Some(v) = set.iter_mut().next() {
        v.strength.set(0.0);
        v.swirl.set(0.01);
    }
    assert_eq!(set.prune(), 0);
}

#[test]
fn pointer_down_spawns_at_cursor_and_up_leaves_vortices_alone() {
    let mut sim = Simulator::with_seed(
        FieldParams {
            particle_count: 10,
            ..FieldParams::preset(Variant::Vortex)
        },
        0,
    )
    .unwrap();
    sim.pointer_move(glam::Vec2::new(0.3, -0.1));
    let target = sim.pointer().target;
    sim.pointer_down(0.0);
    sim.pointer_up(0.1);
    let ForceField::Vortex(set) = sim.field() else {
        panic!("expected vortex field");
    };
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().position, target);
}

#[test]
fn faraway_vortex_exerts_no_force() {
    let mut set = set_with_capacity(2);
    set.spawn(Vec3::ZERO, 0.0);
    set.advance(0.3);
    let p = Vec3::new(set.params.radius * 2.0, 0.0, 0.0);
    assert_eq!(set.accelerate(p, &mut rand::thread_rng()), Vec3::ZERO);
}
