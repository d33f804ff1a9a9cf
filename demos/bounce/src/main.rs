//! Collision showcase: glyph boxes drift across the screen, rebound off the
//! border, and invert course when they run into each other.

use std::sync::Arc;
use std::time::Duration;

use cg_core::{Rect, Vec2};
use cg_draw::GridSurface;
use cg_engine::{Engine, EngineResult};
use cg_entity::shared;
use cg_prefab::{GameEntity, UiText};
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const WIDTH: usize = 80;
const HEIGHT: usize = 25;
const BOXES: usize = 6;
const RUN_FOR: Duration = Duration::from_secs(30);

/// One drifting box.  Velocity is shared between the update hook and the two
/// collision hooks, which are separate closures.
fn make_box(rng: &mut SmallRng) -> GameEntity {
    let rect = Rect::new(
        rng.gen_range(2.0..(WIDTH as f32 - 8.0)),
        rng.gen_range(2.0..(HEIGHT as f32 - 5.0)),
        4.0,
        2.0,
    );
    let velocity = Arc::new(Mutex::new(Vec2::new(
        rng.gen_range(6.0..14.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        rng.gen_range(3.0..7.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
    )));

    let v_update = Arc::clone(&velocity);
    let v_border = Arc::clone(&velocity);
    let v_peer = Arc::clone(&velocity);

    GameEntity::new(rect, vec!['░'; 8])
        .on_update(move |body, ctx| {
            body.rect = body.rect.translated(v_update.lock().over(ctx.delta));
        })
        .on_border_hit(move |body| {
            // Reflect off whichever edge we poked across, and nudge the box
            // back inside so the hit does not re-fire forever.
            let mut v = v_border.lock();
            if body.rect.left() < 0.0 {
                body.rect.x = 0.0;
                v.x = v.x.abs();
            } else if body.rect.right() > WIDTH as f32 {
                body.rect.x = WIDTH as f32 - body.rect.w;
                v.x = -v.x.abs();
            }
            if body.rect.top() < 0.0 {
                body.rect.y = 0.0;
                v.y = v.y.abs();
            } else if body.rect.bottom() > HEIGHT as f32 {
                body.rect.y = HEIGHT as f32 - body.rect.h;
                v.y = -v.y.abs();
            }
        })
        .on_peer_hit(move |body, hits| {
            let mut v = v_peer.lock();
            *v = *v * -1.0;
            body.tiles = vec!['▓'; 8];
            log::debug!("box at {} hit {} peer(s)", body.rect.origin(), hits.len());
        })
}

fn main() -> EngineResult<()> {
    env_logger::init();

    let mut engine = Engine::new(GridSurface::stdout(WIDTH, HEIGHT));
    let mut rng = SmallRng::from_entropy();

    engine.add_entities((0..BOXES).map(|_| shared(make_box(&mut rng))));

    let status = UiText::new(Vec2::ZERO, "").on_draw(|line, ctx| {
        line.text = format!(
            "frame {:>6}  {:>5.1} fps",
            ctx.engine.total_frames(),
            ctx.engine.current_fps(),
        );
    });
    engine.add_entities([shared(status)]);

    engine.on_post_frame(|ctx| {
        if ctx.game_time > RUN_FOR {
            ctx.engine.stop();
        }
    });

    engine.setup()?;
    engine.run()?;
    Ok(())
}
