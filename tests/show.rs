//! End-to-end checks of the simulation through the public API.
//!
//! Everything here runs headless: randomness comes from seeded or scripted
//! sources, time from a [`ManualClock`], and frames go to a recording
//! renderer instead of the terminal.

use countdown_fireworks::clock::{Clock, ManualClock};
use countdown_fireworks::color::Rgb;
use countdown_fireworks::render::present::clock_label;
use countdown_fireworks::render::{draw_scene, PostFx, Presenter, Renderer, Shape, TextItem};
use countdown_fireworks::rng::{RandomSource, SequenceRng};
use countdown_fireworks::sim::shape::{glyph_particle_count, MAX_BURST, MIN_BURST};
use countdown_fireworks::sim::{Confetti, Firework, FireworkState, Particle, Phase, Scene, ShapeKind};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingRenderer {
    fills: Vec<(Shape, Rgb, u8)>,
    texts: Vec<TextItem>,
    presented: Vec<PostFx>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, _color: Rgb) {
        self.fills.clear();
        self.texts.clear();
    }

    fn fill(&mut self, shape: Shape, color: Rgb, alpha: u8) {
        self.fills.push((shape, color, alpha));
    }

    fn text(&mut self, item: &TextItem) {
        self.texts.push(item.clone());
    }

    fn present(&mut self, post: PostFx) -> countdown_fireworks::Result<()> {
        self.presented.push(post);
        Ok(())
    }
}

/// A scene that has just entered the celebration.
fn celebrating(clock: &ManualClock, rng: &mut impl RandomSource) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, clock.now_secs());
    clock.advance(5.0);
    let report = scene.tick(clock.now_secs(), rng);
    assert!(report.celebration_started);
    scene
}

fn burst_range_for(kind: ShapeKind) -> std::ops::RangeInclusive<usize> {
    match kind {
        ShapeKind::Glyph => glyph_particle_count()..=glyph_particle_count(),
        _ => MIN_BURST as usize..=MAX_BURST as usize,
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[test]
fn particle_alpha_never_rises_and_death_matches_alpha() {
    let mut rng = fastrand::Rng::with_seed(17);
    for _ in 0..50 {
        let mut p = Particle::with_velocity(0.0, 0.0, 1.0, -1.0, (255, 255, 255), false, &mut rng);
        let mut last = p.alpha();
        for _ in 0..200 {
            p.update();
            assert!(p.alpha() < last);
            assert_eq!(p.is_alive(), p.alpha() > 0.0);
            last = p.alpha();
        }
        assert!(!p.is_alive());
    }
}

#[test]
fn firework_states_only_move_forward() {
    let mut rng = fastrand::Rng::with_seed(23);
    for _ in 0..30 {
        let mut fw = Firework::launch(WIDTH, HEIGHT, &mut rng);
        let mut seen = vec![fw.state()];
        for _ in 0..1000 {
            fw.update(&mut rng);
            let state = fw.state();
            assert!(state >= *seen.last().unwrap(), "state went backwards: {seen:?} -> {state:?}");
            if state != *seen.last().unwrap() {
                seen.push(state);
            }
        }
        assert_eq!(seen, vec![FireworkState::Ascending, FireworkState::Exploded, FireworkState::Dead]);
    }
}

#[test]
fn burst_size_depends_on_shape() {
    let mut rng = fastrand::Rng::with_seed(31);
    for _ in 0..20 {
        for kind in ShapeKind::ALL {
            let rocket = Particle::with_velocity(640.0, 300.0, 0.0, -3.0, (180, 120, 255), true, &mut rng);
            let mut fw = Firework::from_rocket(rocket, 100.0);
            let boom = fw.explode(kind, &mut rng);
            assert!(burst_range_for(kind).contains(&boom.particles));
            assert_eq!(fw.particles().len(), boom.particles);
        }
    }
    assert_eq!(glyph_particle_count(), 3 * 35);
}

#[test]
fn confetti_is_recycled_not_removed() {
    let mut rng = fastrand::Rng::with_seed(41);
    for _ in 0..100 {
        let mut c = Confetti::new(WIDTH, HEIGHT, &mut rng);
        c.y = HEIGHT + 1.0;
        c.update(&mut rng);
        assert!((-50.0..=-10.0).contains(&c.y), "respawned at {}", c.y);
        assert!((0.0..=WIDTH).contains(&c.x));
    }
}

#[test]
fn shake_and_flash_wind_down_linearly() {
    let clock = ManualClock::new(0.0);
    let mut rng = SequenceRng::constant(0.9);
    let mut scene = Scene::new(WIDTH, HEIGHT, clock.now_secs());
    scene.fx_mut().trigger();
    for k in 1..=25 {
        scene.tick(clock.now_secs(), &mut rng);
        assert_eq!(scene.fx().shake, (15 - k).max(0));
        assert_eq!(scene.fx().flash, (100 - 5 * k).max(0));
    }
}

#[test]
fn celebration_starts_exactly_five_seconds_in() {
    let clock = ManualClock::new(1000.0);
    let mut rng = SequenceRng::constant(0.9);
    let mut scene = Scene::new(WIDTH, HEIGHT, clock.now_secs());

    for step in 0..300 {
        clock.set(1000.0 + step as f64 / 60.0);
        let report = scene.tick(clock.now_secs(), &mut rng);
        assert!(!report.celebration_started);
        assert_eq!(scene.phase(), Phase::Countdown);
        assert!(scene.countdown_second() < 60);
    }

    clock.set(1004.999);
    scene.tick(clock.now_secs(), &mut rng);
    assert_eq!(scene.phase(), Phase::Countdown);
    assert_eq!(scene.countdown_second(), 59);

    clock.set(1005.0);
    let report = scene.tick(clock.now_secs(), &mut rng);
    assert!(report.celebration_started);
    assert_eq!(scene.phase(), Phase::Celebration);

    // one-way
    clock.set(1000.0);
    scene.tick(clock.now_secs(), &mut rng);
    assert_eq!(scene.phase(), Phase::Celebration);
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn rocket_climbs_to_apex_then_bursts() {
    let mut rng = fastrand::Rng::with_seed(5);
    let rocket = Particle::with_velocity(500.0, 1000.0, 0.0, -12.0, (255, 200, 120), true, &mut rng);
    let mut fw = Firework::from_rocket(rocket, 200.0);

    let mut boom = None;
    for _ in 0..500 {
        if let Some(b) = fw.update(&mut rng) {
            boom = Some(b);
            break;
        }
        let body = fw.rocket().body;
        assert!(body.vy < 0.0 && body.y > 200.0);
    }

    let boom = boom.expect("rocket never burst");
    assert_eq!(fw.state(), FireworkState::Exploded);
    assert!(burst_range_for(boom.shape).contains(&fw.particles().len()));
    assert!(boom.y > 200.0, "apex is reached before the target height");
}

#[test]
fn confetti_pool_survives_ten_thousand_ticks() {
    let clock = ManualClock::new(0.0);
    let mut rng = fastrand::Rng::with_seed(99);
    let mut scene = celebrating(&clock, &mut rng);
    assert_eq!(scene.confetti().len(), 150);

    // Pieces start as far up as -HEIGHT and fall at least 2 px per tick, so
    // by tick 600 every one sits inside the recycled band or on screen.
    for tick in 0..10_000 {
        clock.advance(1.0 / 60.0);
        scene.tick(clock.now_secs(), &mut rng);
        assert_eq!(scene.confetti().len(), 150);
        for c in scene.confetti() {
            assert!(c.y <= HEIGHT, "tick {tick}: confetti below the screen at y = {}", c.y);
            if tick >= 600 {
                assert!(c.y >= -50.0, "tick {tick}: confetti at y = {}", c.y);
            }
        }
    }
    assert!(scene.fireworks().iter().all(|fw| !fw.is_dead()));
}

#[test]
fn explosion_triggers_shake_and_flash() {
    let clock = ManualClock::new(0.0);
    let mut rng = fastrand::Rng::with_seed(7);
    let mut scene = celebrating(&clock, &mut rng);

    let mut exploded = false;
    for _ in 0..2_000 {
        clock.advance(1.0 / 60.0);
        let report = scene.tick(clock.now_secs(), &mut rng);
        if !report.explosions.is_empty() {
            exploded = true;
            break;
        }
    }
    assert!(exploded);
    assert_eq!(scene.fx().shake, 15);
    assert_eq!(scene.fx().flash, 100);
}

// ── Presentation ──────────────────────────────────────────────────────────────

#[test]
fn countdown_frame_shows_the_clock() {
    let clock = ManualClock::new(0.0);
    let mut rng = SequenceRng::constant(0.9);
    let mut scene = Scene::new(WIDTH, HEIGHT, clock.now_secs());
    clock.advance(2.5);
    scene.tick(clock.now_secs(), &mut rng);

    let mut renderer = RecordingRenderer::default();
    draw_scene(&Presenter::default(), &scene, &mut renderer, &mut rng).unwrap();

    let label = clock_label(57);
    let lines: Vec<&str> = renderer.texts.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(lines, vec![label.as_str(), "11:59:57 2025", "STAY TUNED..."]);
    assert!(renderer.fills.is_empty());
    assert_eq!(renderer.presented, vec![PostFx::default()]);
}

#[test]
fn celebration_frame_draws_confetti_and_title() {
    let clock = ManualClock::new(0.0);
    let mut rng = SequenceRng::constant(0.9);
    let scene = celebrating(&clock, &mut rng);

    let mut renderer = RecordingRenderer::default();
    draw_scene(&Presenter::default(), &scene, &mut renderer, &mut rng).unwrap();

    let squares = renderer
        .fills
        .iter()
        .filter(|(shape, _, alpha)| matches!(shape, Shape::Square { .. }) && *alpha == 200)
        .count();
    assert_eq!(squares, 150);
    assert!(renderer.texts.iter().any(|t| t.content == "HAPPY NEW YEAR"));
    assert!(renderer.texts.iter().any(|t| t.content == "2026"));
    assert!(renderer.texts.iter().any(|t| t.content == "Naya saal mubarak ho!"));
}

#[test]
fn shaken_frame_is_offset_within_amplitude() {
    let clock = ManualClock::new(0.0);
    let mut rng = fastrand::Rng::with_seed(3);
    let mut scene = Scene::new(WIDTH, HEIGHT, clock.now_secs());
    scene.fx_mut().trigger();

    let mut renderer = RecordingRenderer::default();
    draw_scene(&Presenter::default(), &scene, &mut renderer, &mut rng).unwrap();

    let post = renderer.presented[0];
    assert!(post.offset.0.abs() <= 15 && post.offset.1.abs() <= 15);
    assert_eq!(post.flash, 100);
}
