use ballpit::{Body, BodyId, CollisionResolver, Color, ImpulseModel, Vec2};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn disk(id: u32, pos: (f64, f64), vel: (f64, f64), r: f64) -> Body<f64> {
    Body::new(BodyId(id), Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), r, Color::BLACK)
}

/// Random overlapping pair: B placed at a random angle from A, closer than
/// the sum of radii.
fn random_pair(rng: &mut SmallRng) -> (Body<f64>, Body<f64>, f64) {
    let ra: f64 = rng.random_range(5.0..40.0);
    let rb: f64 = rng.random_range(5.0..40.0);
    let theta: f64 = rng.random_range(-3.1..3.1);
    let dist = rng.random_range(0.2f64..0.95) * (ra + rb);
    let a = disk(0, (200.0, 200.0), (rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0)), ra);
    let b = disk(
        1,
        (200.0 + dist * theta.cos(), 200.0 + dist * theta.sin()),
        (rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0)),
        rb,
    );
    let distance = a.position().distance(b.position());
    (a, b, distance)
}

fn frame_of(a: &Body<f64>, b: &Body<f64>) -> (f64, f64) {
    let d = b.position() - a.position();
    let angle = d.y.atan2(d.x);
    (angle.cos(), angle.sin())
}

#[test]
fn equal_disks_head_on_swap_and_damp() {
    let resolver = CollisionResolver::new();
    let mut a = disk(0, (100.0, 100.0), (2.0, 0.0), 10.0);
    let mut b = disk(1, (115.0, 100.0), (0.0, 0.0), 10.0);

    let contact = resolver.resolve(&mut a, &mut b, 15.0);

    assert!((contact.overlap - 5.0).abs() < 1e-12);
    assert!(a.velocity().x.abs() < 1e-9 && a.velocity().y.abs() < 1e-9, "a.v = {:?}", a.velocity());
    assert!((b.velocity().x - 1.6).abs() < 1e-9, "b.v = {:?}", b.velocity());
    assert!(b.velocity().y.abs() < 1e-9);
    assert!(a.position().x < 100.0);
    assert!(b.position().x > 115.0);
    assert!((a.position().x - 95.0).abs() < 1e-9);
    assert!((b.position().x - 120.0).abs() < 1e-9);
}

#[test]
fn normal_momentum_conserved_before_damping() {
    let resolver = CollisionResolver::new().with_damping(1.0);
    let mut rng = SmallRng::seed_from_u64(0xba11);

    for _ in 0..200 {
        let (mut a, mut b, distance) = random_pair(&mut rng);
        let (cos, sin) = frame_of(&a, &b);
        let (ra, rb) = (a.radius(), b.radius());
        let before = ra * a.velocity().to_frame(cos, sin).x + rb * b.velocity().to_frame(cos, sin).x;

        resolver.resolve(&mut a, &mut b, distance);

        let after = ra * a.velocity().to_frame(cos, sin).x + rb * b.velocity().to_frame(cos, sin).x;
        assert!(
            (before - after).abs() < 1e-9 * (1.0 + before.abs()),
            "momentum changed: {} -> {} (ra={}, rb={})",
            before, after, ra, rb
        );
    }
}

#[test]
fn tangential_components_unchanged() {
    let resolver = CollisionResolver::new().with_damping(1.0);
    let mut rng = SmallRng::seed_from_u64(17);

    for _ in 0..200 {
        let (mut a, mut b, distance) = random_pair(&mut rng);
        let (cos, sin) = frame_of(&a, &b);
        let ta = a.velocity().to_frame(cos, sin).y;
        let tb = b.velocity().to_frame(cos, sin).y;

        resolver.resolve(&mut a, &mut b, distance);

        assert!((a.velocity().to_frame(cos, sin).y - ta).abs() < 1e-9);
        assert!((b.velocity().to_frame(cos, sin).y - tb).abs() < 1e-9);
    }
}

#[test]
fn damping_scales_elastic_result_exactly() {
    let undamped = CollisionResolver::new().with_damping(1.0);
    let damped = CollisionResolver::new();
    assert_eq!(damped.damping, 0.8);
    let mut rng = SmallRng::seed_from_u64(99);

    for _ in 0..100 {
        let (a, b, distance) = random_pair(&mut rng);
        let (mut a1, mut b1) = (a.clone(), b.clone());
        let (mut a2, mut b2) = (a, b);

        undamped.resolve(&mut a1, &mut b1, distance);
        damped.resolve(&mut a2, &mut b2, distance);

        assert_eq!(a2.velocity(), a1.velocity().scale(0.8));
        assert_eq!(b2.velocity(), b1.velocity().scale(0.8));
        assert!((a2.speed() - 0.8 * a1.speed()).abs() < 1e-12);
        // Damping never affects de-penetration.
        assert_eq!(a2.position(), a1.position());
        assert_eq!(b2.position(), b1.position());
    }
}

#[test]
fn depenetration_moves_each_body_by_overlap_along_normal() {
    let resolver = CollisionResolver::new();
    let mut a = disk(0, (50.0, 50.0), (0.0, 0.0), 10.0);
    let mut b = disk(1, (56.0, 58.0), (0.0, 0.0), 10.0);
    let distance = 10.0; // 6-8-10 triangle
    let contact = resolver.resolve(&mut a, &mut b, distance);

    assert!((contact.overlap - 10.0).abs() < 1e-12);
    assert!((contact.normal.x - 0.6).abs() < 1e-12);
    assert!((contact.normal.y - 0.8).abs() < 1e-12);
    assert!((a.position().x - 44.0).abs() < 1e-9);
    assert!((a.position().y - 42.0).abs() < 1e-9);
    assert!((b.position().x - 62.0).abs() < 1e-9);
    assert!((b.position().y - 66.0).abs() < 1e-9);
    assert!(a.overlap(&b) <= 0.0);
}

#[test]
fn legacy_model_reproduces_browser_exchange() {
    let resolver = CollisionResolver::new().with_model(ImpulseModel::Legacy);
    let mut a = disk(0, (100.0, 100.0), (2.0, 0.0), 10.0);
    let mut b = disk(1, (135.0, 100.0), (0.0, 0.0), 30.0);
    resolver.resolve(&mut a, &mut b, 35.0);

    // Normal exchange gives (-1, 2) before damping.
    assert!((a.velocity().x - -0.8).abs() < 1e-9);
    assert!((b.velocity().x - 1.6).abs() < 1e-9);
}

#[test]
fn momentum_model_heavy_body_barely_moves() {
    let resolver = CollisionResolver::new().with_damping(1.0);
    let mut light = disk(0, (100.0, 100.0), (3.0, 0.0), 5.0);
    let mut heavy = disk(1, (140.0, 100.0), (0.0, 0.0), 40.0);
    resolver.resolve(&mut light, &mut heavy, 40.0);

    assert!(light.velocity().x < 0.0, "light body should bounce back");
    assert!(heavy.velocity().x > 0.0 && heavy.velocity().x < 1.0);
}
