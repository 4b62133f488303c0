use herd::individual::MAX_STEERING_FORCE;
use herd::{BlackHole, Herd, HerdParams, Individual, Neighbors};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet_params() -> HerdParams {
    HerdParams {
        births_per_tick: 0,
        ..HerdParams::default()
    }
}

fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

fn pair_herd(seed: u64) -> Herd {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = Individual::new(400.0, 300.0, &mut rng);
    let b = Individual::new(410.0, 300.0, &mut rng);

    let mut herd = Herd::with_params(
        quiet_params(),
        vec2(800.0, 600.0),
        vec2(800.0, 600.0),
        BlackHole::new(vec2(400.0, 310.0)),
        rng,
    )
    .unwrap();
    herd.add([a, b]);
    herd
}

#[test]
fn pair_within_every_radius_ticks_deterministically() {
    let mut first = pair_herd(2024);
    let mut second = pair_herd(2024);
    let before: Vec<Individual> = first.individuals().to_vec();

    first.tick();
    second.tick();

    assert_eq!(first.len(), 2);
    for ((a, b), start) in first
        .individuals()
        .iter()
        .zip(second.individuals())
        .zip(&before)
    {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);

        assert_ne!(a.position, start.position);
        assert_ne!(a.velocity, start.velocity);
        assert_eq!(a.acceleration, Vec2::ZERO);

        assert!(is_finite(a.position));
        assert!(is_finite(a.velocity));
    }

    // The first one moved by its own starting velocity
    assert_eq!(
        first.individuals()[0].position,
        before[0].position + before[0].velocity
    );
}

#[test]
fn pair_forces_are_bounded_by_biases() {
    let herd = pair_herd(7);
    let individuals = herd.individuals();
    let black_hole = herd.black_hole();

    let others = [individuals[1].clone()];
    let neighbors = Neighbors::from_slice(&others);
    let me = &individuals[0];

    let force = me.look_around(&neighbors, black_hole);
    let ceiling = MAX_STEERING_FORCE
        * (me.separation_bias + me.alignment_bias + me.cohesion_bias + black_hole.force(me.position));
    assert!(is_finite(force));
    assert!(force.length() <= ceiling + 1e-5);
}

#[test]
fn lonely_individual_only_feels_the_black_hole() {
    let mut rng = StdRng::seed_from_u64(99);
    let lonely = Individual::new(100.0, 100.0, &mut rng);
    let start = lonely.clone();

    let black_hole = BlackHole::new(vec2(100.0, 1100.0));
    let strength = black_hole.force(start.position);
    assert!((strength - 50.0 / 1015.0).abs() < 1e-6);

    let expected = start.steer(black_hole.position) * strength;
    let sensed = start.look_around(&Neighbors::from_slice(&[]), &black_hole);
    assert!((sensed - expected).length() < 1e-6);
    assert!(sensed.length() <= MAX_STEERING_FORCE * strength + 1e-6);

    let mut herd = Herd::with_params(
        quiet_params(),
        vec2(2000.0, 2000.0),
        vec2(2000.0, 2000.0),
        black_hole,
        rng,
    )
    .unwrap();
    herd.add([lonely]);
    herd.tick();

    let after = &herd.individuals()[0];
    assert_eq!(after.position, start.position + start.velocity);
    assert!((after.velocity - (start.velocity + expected)).length() < 1e-5);
    assert!((after.velocity - start.velocity).length() <= MAX_STEERING_FORCE * strength + 1e-5);
    assert_eq!(after.acceleration, Vec2::ZERO);
}

#[test]
fn crowded_herd_stays_finite_and_inside_bounds() {
    let params = HerdParams {
        births_per_tick: 2,
        birth_survival_rate: 0.5,
        tick_survival_rate: 0.99,
        ..HerdParams::default()
    };
    let bounds = vec2(300.0, 200.0);
    let mut herd = Herd::with_params(
        params,
        bounds,
        bounds,
        BlackHole::new(vec2(150.0, 100.0)),
        StdRng::seed_from_u64(31),
    )
    .unwrap();
    herd.populate(40);
    // A few of them stacked on the exact same spot
    for _ in 0..3 {
        herd.spawn_at(150.0, 100.0);
    }

    for _ in 0..200 {
        herd.tick();
        for individual in herd.individuals() {
            assert!(is_finite(individual.position));
            assert!(is_finite(individual.velocity));
            assert!(individual.position.x >= 0.0 && individual.position.x <= bounds.x);
            assert!(individual.position.y >= 0.0 && individual.position.y <= bounds.y);
        }
    }
}
