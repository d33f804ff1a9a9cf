//! Path-search visualization: one search expansion per frame, with the
//! frontier, the closed region, and finally the winning path drawn as glyph
//! shades.

use cg_core::{DrawLayer, FrameContext, Rect};
use cg_draw::{DrawSurface, GridSurface};
use cg_engine::{Engine, EngineResult};
use cg_entity::{Drawable, Entity, Simulatable, shared};
use cg_search::{GridPos, NodeState, PathSearch, SearchResult};

const CELLS: usize = 20;
const CELL_W: f32 = 2.0;
const MARGIN: f32 = 2.0;

struct Maze {
    search: PathSearch,
}

impl Maze {
    fn new() -> SearchResult<Self> {
        let mut search = PathSearch::new(CELLS, CELLS, GridPos::new(1, 1), GridPos::new(18, 18))?;

        // Three staggered walls, each with a gap at the far end.
        for x in 0..17 {
            search.set_blocked(GridPos::new(x, 5), true)?;
            search.set_blocked(GridPos::new(x, 15), true)?;
        }
        for x in 3..CELLS {
            search.set_blocked(GridPos::new(x, 10), true)?;
        }
        search.reset();

        Ok(Self { search })
    }

    fn glyph(&self, pos: GridPos) -> char {
        if pos == self.search.start() {
            return 'S';
        }
        if pos == self.search.finish() {
            return 'F';
        }
        let Ok(node) = self.search.node(pos) else { return ' ' };
        if node.blocked {
            '█'
        } else if node.on_path {
            '#'
        } else {
            match node.state {
                NodeState::Open => '░',
                NodeState::Closed => '▒',
                NodeState::Unvisited => '·',
            }
        }
    }
}

impl Entity for Maze {
    fn as_simulatable(&mut self) -> Option<&mut dyn Simulatable> {
        Some(self)
    }

    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

impl Simulatable for Maze {
    fn update(&mut self, _ctx: &FrameContext) {
        // One expansion per frame; a no-op once the search settles.
        self.search.step();
    }
}

impl Drawable for Maze {
    fn layer(&self) -> DrawLayer {
        DrawLayer::Foreground
    }

    fn draw(&mut self, _ctx: &FrameContext, surface: &mut dyn DrawSurface) {
        for y in 0..CELLS {
            for x in 0..CELLS {
                let pos = GridPos::new(x, y);
                let cell = Rect::new(
                    MARGIN + CELL_W * x as f32,
                    MARGIN + y as f32,
                    CELL_W,
                    1.0,
                );
                surface.fill(cell, self.glyph(pos));
            }
        }
    }
}

fn main() -> EngineResult<()> {
    env_logger::init();

    let mut engine = Engine::new(GridSurface::stdout(46, 24));
    match Maze::new() {
        Ok(maze) => engine.add_entities([shared(maze)]),
        Err(err) => {
            eprintln!("maze construction failed: {err}");
            return Ok(());
        }
    }

    engine.on_post_frame(|ctx| {
        if ctx.engine.total_frames() >= 1_000 {
            ctx.engine.stop();
        }
    });

    engine.setup()?;
    engine.run()?;
    Ok(())
}
