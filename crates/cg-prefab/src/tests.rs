use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use cg_core::{DrawLayer, EngineHandle, FrameContext, Rect, Vec2};
use cg_draw::{DrawSurface, GridSurface};
use cg_entity::{Collidable, Drawable, Entity, Simulatable, shared};

use super::*;

fn ctx() -> FrameContext {
    FrameContext::new(
        Duration::from_secs(1),
        Duration::from_secs(10),
        Rect::new(0.0, 0.0, 10.0, 6.0),
        EngineHandle::default(),
    )
}

fn surface() -> GridSurface<Vec<u8>> {
    let mut s = GridSurface::new(10, 6, Vec::new());
    s.setup().unwrap();
    s
}

#[cfg(test)]
mod game_entity {
    use super::*;

    #[test]
    fn carries_all_three_capabilities() {
        let mut e = GameEntity::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#']);
        assert!(e.as_collidable().is_some());
        assert!(e.as_simulatable().is_some());
        assert!(e.as_drawable().is_some());
    }

    #[test]
    fn collision_participation_follows_the_hooks() {
        let bare = GameEntity::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#']);
        assert!(!bare.tests_border());
        assert!(!bare.tests_peers());

        let hooked = GameEntity::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#'])
            .on_border_hit(|_| {})
            .on_peer_hit(|_, _| {});
        assert!(hooked.tests_border());
        assert!(hooked.tests_peers());
    }

    #[test]
    fn update_hook_moves_the_body() {
        let velocity = Vec2::new(2.0, 1.0);
        let mut e = GameEntity::new(Rect::new(3.0, 3.0, 1.0, 1.0), vec!['#'])
            .on_update(move |body, ctx| {
                body.rect = body.rect.translated(velocity.over(ctx.delta));
            });

        e.update(&ctx());
        assert_eq!(e.body().rect.origin(), Vec2::new(5.0, 4.0));
    }

    #[test]
    fn border_hook_can_reposition() {
        let mut e = GameEntity::new(Rect::new(9.0, 0.0, 2.0, 2.0), vec!['#'; 4])
            .on_border_hit(|body| {
                body.rect = body.rect.at(Vec2::ZERO);
            });

        Collidable::on_border_hit(&mut e);
        assert_eq!(e.body().rect.origin(), Vec2::ZERO);
    }

    #[test]
    fn peer_hook_sees_the_hit_list() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_hook = Arc::clone(&seen);
        let other = shared(GameEntity::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#']));

        let mut e = GameEntity::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#'])
            .on_peer_hit(move |_, hits| {
                seen_in_hook.store(hits.len(), Ordering::Relaxed);
            });
        Collidable::on_peer_hit(&mut e, &[other]);

        assert_eq!(seen.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn draws_its_tile_rectangle() {
        let mut s = surface();
        let mut e = GameEntity::new(Rect::new(1.0, 1.0, 2.0, 2.0), vec!['a', 'b', 'c', 'd']);
        e.draw(&ctx(), &mut s);

        assert_eq!(s.row(1), " ab       ");
        assert_eq!(s.row(2), " cd       ");
    }
}

#[cfg(test)]
mod drawable_rect {
    use super::*;

    #[test]
    fn is_draw_only() {
        let mut r = DrawableRect::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#']);
        assert!(r.as_drawable().is_some());
        assert!(r.as_collidable().is_none());
        assert!(r.as_simulatable().is_none());
    }

    #[test]
    fn hook_runs_before_the_rectangle_is_emitted() {
        let mut s = surface();
        let mut r = DrawableRect::new(Rect::new(0.0, 0.0, 2.0, 1.0), vec!['x', 'x'])
            .on_draw(|body, _| {
                body.tiles = vec!['y', 'y'];
            });
        r.draw(&ctx(), &mut s);

        assert_eq!(s.row(0), "yy        ");
    }

    #[test]
    fn builder_sets_layer_and_pause_behavior() {
        let r = DrawableRect::new(Rect::new(0.0, 0.0, 1.0, 1.0), vec!['#'])
            .with_layer(DrawLayer::Background)
            .with_draws_while_paused(true);
        assert_eq!(Drawable::layer(&r), DrawLayer::Background);
        assert!(r.draws_while_paused());
    }
}

#[cfg(test)]
mod ui_text {
    use super::*;

    #[test]
    fn renders_on_the_hud_layer() {
        let t = UiText::new(Vec2::ZERO, "hello");
        assert_eq!(Drawable::layer(&t), DrawLayer::Hud);
    }

    #[test]
    fn draws_at_whole_cell_position() {
        let mut s = surface();
        let mut t = UiText::new(Vec2::new(2.7, 1.9), "hi");
        t.draw(&ctx(), &mut s);

        assert_eq!(s.row(1), "  hi      ");
    }

    #[test]
    fn hook_updates_the_text_for_the_same_draw() {
        let mut s = surface();
        let mut t = UiText::new(Vec2::ZERO, "").on_draw(|line, ctx| {
            line.text = format!("t={}s", ctx.game_time.as_secs());
        });
        t.draw(&ctx(), &mut s);

        assert_eq!(s.row(0), "t=10s     ");
        assert_eq!(t.line().text, "t=10s");
    }
}
