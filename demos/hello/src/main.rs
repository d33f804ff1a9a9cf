//! Text bouncing around the screen with a smoothed FPS read-out — the
//! traditional first program, doubling as a throughput benchmark: the frame
//! rate is unbounded and the run stops itself after twenty seconds.

use std::time::Duration;

use cg_core::{RingBuffer, Vec2};
use cg_draw::GridSurface;
use cg_engine::{Engine, EngineResult};
use cg_entity::shared;
use cg_prefab::UiText;

const WIDTH: usize = 80;
const HEIGHT: usize = 40;
const RUN_FOR: Duration = Duration::from_secs(20);

fn main() -> EngineResult<()> {
    env_logger::init();

    let mut engine = Engine::new(GridSurface::stdout(WIDTH, HEIGHT));
    engine.handle().set_target_fps(0);

    // Per-entity state lives in the hook's captures: velocity signs and the
    // FPS smoothing window.
    let speed = Vec2::new(14.0, 7.0);
    let mut h_sign = 1.0f32;
    let mut v_sign = 1.0f32;
    let mut window = RingBuffer::new(32);

    let banner = UiText::new(Vec2::ZERO, "Hello world")
        .with_draws_while_paused(true)
        .on_draw(move |line, ctx| {
            window.push(ctx.engine.current_fps());
            let smoothed = window.iter().sum::<f64>() / window.len() as f64;
            line.text = format!("Hello world at {smoothed:04.0} fps");

            line.pos += Vec2::new(speed.x * h_sign, speed.y * v_sign).over(ctx.delta);
            if line.pos.x > ctx.border.w - line.text.len() as f32 {
                h_sign = -1.0;
            }
            if line.pos.x < 0.0 {
                h_sign = 1.0;
            }
            if line.pos.y > ctx.border.h - 1.0 {
                v_sign = -1.0;
            }
            if line.pos.y < 0.0 {
                v_sign = 1.0;
            }
        });
    engine.add_entities([shared(banner)]);

    engine.on_post_frame(|ctx| {
        if ctx.game_time > RUN_FOR {
            ctx.engine.stop();
        }
    });

    engine.setup()?;
    engine.run()?;

    let handle = engine.handle();
    println!(
        "benchmark ended: {} frames in {:.1}s",
        handle.total_frames(),
        handle.game_time().as_secs_f64(),
    );
    Ok(())
}
