//! Turns a [`Scene`] into renderer calls. The only randomness here is
//! cosmetic (twinkle, shake direction) and never feeds back into the scene.

use super::{PostFx, Renderer, Shape, TextItem};
use crate::color::{Rgb, BACKGROUND, GOLD, WHITE};
use crate::error::Result;
use crate::rng::RandomSource;
use crate::sim::{confetti, Particle, Phase, Scene};

const SHADOW_OFFSET: f32 = 5.0;
const CLOCK_SHADOW: Rgb = (40, 40, 40);
const TITLE_SHADOW: Rgb = (20, 20, 20);
const SUBTITLE_RISE: f32 = 120.0;
const HEADLINE_HALF_HEIGHT: f32 = 75.0;
const SUB_GAP: f32 = 50.0;
const GREETING_GAP: f32 = 130.0;
const SPARK_RADIUS: f32 = 2.0;

pub const HEADLINE: &str = "HAPPY NEW YEAR";
pub const YEAR_LINE: &str = "2026";
pub const GREETING: &str = "Naya saal mubarak ho!";
pub const STAY_TUNED: &str = "STAY TUNED...";

pub fn clock_label(second: u32) -> String {
    format!("11:59:{second:02} 2025")
}

pub struct Presenter {
    pub background: Rgb,
}

impl Default for Presenter {
    fn default() -> Self {
        Self { background: BACKGROUND }
    }
}

/// Draws one full frame and presents it.
pub fn draw_scene<R: Renderer>(
    presenter: &Presenter,
    scene: &Scene,
    renderer: &mut R,
    rng: &mut impl RandomSource,
) -> Result<()> {
    renderer.clear(presenter.background);

    match scene.phase() {
        Phase::Countdown => draw_countdown(scene, renderer),
        Phase::Celebration => {
            for c in scene.confetti() {
                renderer.fill(
                    Shape::Square { x: c.x, y: c.y, size: c.size, angle: c.angle },
                    c.color,
                    confetti::ALPHA,
                );
            }
            for fw in scene.fireworks() {
                if fw.is_exploded() {
                    for p in fw.particles() {
                        draw_particle(p, renderer, rng);
                    }
                } else {
                    draw_particle(fw.rocket(), renderer, rng);
                }
            }
            draw_title(scene, renderer);
        }
    }

    let fx = scene.fx();
    renderer.present(PostFx {
        offset: fx.shake_offset(rng),
        flash: fx.flash_alpha(),
    })
}

fn draw_particle<R: Renderer>(p: &Particle, renderer: &mut R, rng: &mut impl RandomSource) {
    if !p.is_alive() {
        return;
    }
    let alpha = p.render_alpha(rng);
    renderer.fill(
        Shape::Dot { x: p.body.x, y: p.body.y, radius: SPARK_RADIUS },
        p.color,
        alpha,
    );
}

fn draw_countdown<R: Renderer>(scene: &Scene, renderer: &mut R) {
    let (cx, cy) = (scene.width() / 2.0, scene.height() / 2.0);
    let label = clock_label(scene.countdown_second());

    renderer.text(&TextItem::new(
        label.clone(),
        cx + SHADOW_OFFSET,
        cy + SHADOW_OFFSET,
        CLOCK_SHADOW,
    ));
    renderer.text(&TextItem::new(label, cx, cy, WHITE));
    renderer.text(&TextItem::new(STAY_TUNED, cx, cy - SUBTITLE_RISE, GOLD));
}

fn draw_title<R: Renderer>(scene: &Scene, renderer: &mut R) {
    let title = scene.title();
    let cx = scene.width() / 2.0;
    let cy = scene.height() / 2.0 + title.pulse;
    let below = cy + HEADLINE_HALF_HEIGHT * title.scale;

    renderer.text(
        &TextItem::new(HEADLINE, cx + SHADOW_OFFSET, cy + SHADOW_OFFSET, TITLE_SHADOW)
            .scale(title.scale),
    );
    renderer.text(&TextItem::new(HEADLINE, cx, cy, title.main_color).scale(title.scale));
    renderer.text(
        &TextItem::new(HEADLINE, cx, cy, WHITE)
            .scale(title.scale)
            .alpha(title.shine_alpha),
    );
    renderer.text(&TextItem::new(YEAR_LINE, cx, below + SUB_GAP, title.sub_color));
    renderer.text(&TextItem::new(GREETING, cx, below + GREETING_GAP, WHITE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_label_pads_seconds() {
        assert_eq!(clock_label(55), "11:59:55 2025");
        assert_eq!(clock_label(7), "11:59:07 2025");
    }
}
