//! The search grid and its incremental solver.

use std::fmt;

use cg_core::Vec2;

use crate::error::{SearchError, SearchResult};

// ── Grid coordinates ──────────────────────────────────────────────────────────

/// A cell coordinate on the search map, row 0 at the top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Nodes ─────────────────────────────────────────────────────────────────────

/// Where a node stands in the search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeState {
    #[default]
    Unvisited,
    /// Reachable, not yet expanded.
    Open,
    /// Expanded; never revisited.
    Closed,
}

/// One cell of the search map.  All fields are readable between steps, so a
/// caller can render the frontier while the search runs.
#[derive(Copy, Clone, Debug)]
pub struct SearchNode {
    pub pos: GridPos,
    /// Accumulated cost from the start cell.
    pub g_cost: u32,
    /// Weighted distance estimate to the finish cell.
    pub h_cost: u32,
    pub state: NodeState,
    pub blocked: bool,
    pub parent: Option<GridPos>,
    /// Set on the cells of the winning path once the finish is reached.
    pub on_path: bool,
}

impl SearchNode {
    /// Total estimate: the open-set ordering key.
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

// ── Step outcome ──────────────────────────────────────────────────────────────

/// Result of advancing the search by one expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Frontier non-empty, finish not yet reached.
    Searching,
    /// The finish cell was expanded; the path is marked and reconstructible.
    Found,
    /// The frontier drained without reaching the finish.
    Exhausted,
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Incremental best-first search over an 8-connected grid.
///
/// The whole state lives in the node map, one expansion per [`step`] call, so
/// a host can run it a few steps per frame and draw the intermediate state.
/// Costs are integer: 10 per straight move, 14 per diagonal, with a
/// euclidean-distance heuristic scaled by 15.  The heavy heuristic weight
/// makes the search greedy — it beelines for the finish and pays for it with
/// slightly longer paths around concave obstacles, which is the intended
/// trade at game-map scale.
///
/// Once a cell is opened it keeps its first parent; cheaper routes discovered
/// later are not re-relaxed.
pub struct PathSearch {
    width:  usize,
    height: usize,
    start:  GridPos,
    finish: GridPos,
    nodes:  Vec<SearchNode>,

    hv_cost:          u32,
    diag_cost:        u32,
    heuristic_weight: u32,

    outcome: Option<StepOutcome>,
}

pub const DEFAULT_HV_COST: u32 = 10;
pub const DEFAULT_DIAG_COST: u32 = 14;
pub const DEFAULT_HEURISTIC_WEIGHT: u32 = 15;

impl PathSearch {
    /// Create a solver over an unobstructed `width` × `height` map.  Both
    /// sides must exceed 1, and both endpoints must lie on the map.
    pub fn new(
        width: usize,
        height: usize,
        start: GridPos,
        finish: GridPos,
    ) -> SearchResult<Self> {
        if width <= 1 || height <= 1 {
            return Err(SearchError::MapTooSmall { width, height });
        }
        for pos in [start, finish] {
            if pos.x >= width || pos.y >= height {
                return Err(SearchError::OutOfBounds { pos, width, height });
            }
        }

        let mut search = Self {
            width,
            height,
            start,
            finish,
            nodes: Vec::new(),
            hv_cost: DEFAULT_HV_COST,
            diag_cost: DEFAULT_DIAG_COST,
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
            outcome: None,
        };
        search.nodes = (0..width * height)
            .map(|i| search.blank_node(GridPos::new(i % width, i / width), false))
            .collect();
        Ok(search)
    }

    /// Override the move costs and heuristic weight.  Takes full effect on
    /// the next [`reset`][Self::reset].
    pub fn set_costs(&mut self, hv: u32, diag: u32, heuristic_weight: u32) {
        self.hv_cost = hv;
        self.diag_cost = diag;
        self.heuristic_weight = heuristic_weight;
    }

    // ── Map shape ─────────────────────────────────────────────────────────

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> GridPos {
        self.start
    }

    pub fn finish(&self) -> GridPos {
        self.finish
    }

    /// Inspect one cell.
    pub fn node(&self, pos: GridPos) -> SearchResult<&SearchNode> {
        self.index_of(pos).map(|i| &self.nodes[i])
    }

    // ── Obstructions ──────────────────────────────────────────────────────

    /// Mark one cell blocked or walkable.
    pub fn set_blocked(&mut self, pos: GridPos, blocked: bool) -> SearchResult<()> {
        let i = self.index_of(pos)?;
        self.nodes[i].blocked = blocked;
        Ok(())
    }

    /// Load obstructions from a glyph map: every cell equal to `blocked`
    /// becomes an obstruction, everything else walkable.  Newlines are
    /// ignored, so multi-line literals lay out exactly like the grid; the
    /// remaining glyph count must match the map size.
    pub fn set_blocked_from_ascii(&mut self, blocked: char, map: &str) -> SearchResult<()> {
        let glyphs: Vec<char> = map.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if glyphs.len() != self.nodes.len() {
            return Err(SearchError::SizeMismatch {
                expected: self.nodes.len(),
                got:      glyphs.len(),
            });
        }
        for (node, glyph) in self.nodes.iter_mut().zip(glyphs) {
            node.blocked = glyph == blocked;
        }
        Ok(())
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Restart the search: every node back to unvisited with its heuristic
    /// recomputed, the start cell opened.  Obstructions are preserved.
    pub fn reset(&mut self) {
        for i in 0..self.nodes.len() {
            let pos = self.nodes[i].pos;
            let blocked = self.nodes[i].blocked;
            self.nodes[i] = self.blank_node(pos, blocked);
        }
        if let Ok(i) = self.index_of(self.start) {
            self.nodes[i].state = NodeState::Open;
            self.nodes[i].g_cost = 0;
        }
        self.outcome = None;
    }

    fn blank_node(&self, pos: GridPos, blocked: bool) -> SearchNode {
        SearchNode {
            pos,
            g_cost: u32::MAX,
            h_cost: self.heuristic(pos),
            state: NodeState::Unvisited,
            blocked,
            parent: None,
            on_path: false,
        }
    }

    /// Expand the cheapest open node.  Idempotent once the search settles:
    /// further calls return the settled outcome.
    ///
    /// Call [`reset`][Self::reset] before the first step of a run.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let Some(current) = self.cheapest_open() else {
            self.outcome = Some(StepOutcome::Exhausted);
            log::debug!("search exhausted: {} unreachable from {}", self.finish, self.start);
            return StepOutcome::Exhausted;
        };

        let pos = self.nodes[current].pos;
        if pos == self.finish {
            self.mark_path(current);
            self.outcome = Some(StepOutcome::Found);
            return StepOutcome::Found;
        }

        // Same sweep order every expansion: the row above, the sides, the
        // row below.
        let g = self.nodes[current].g_cost;
        for (dx, dy, diagonal) in [
            (-1, -1, true),
            (0, -1, false),
            (1, -1, true),
            (-1, 0, false),
            (1, 0, false),
            (-1, 1, true),
            (0, 1, false),
            (1, 1, true),
        ] {
            self.try_open(pos, dx, dy, g, diagonal);
        }
        self.nodes[current].state = NodeState::Closed;

        StepOutcome::Searching
    }

    /// Run the search to completion.
    pub fn run(&mut self) -> StepOutcome {
        loop {
            let outcome = self.step();
            if outcome != StepOutcome::Searching {
                return outcome;
            }
        }
    }

    /// The found path from start to finish inclusive, rebuilt through the
    /// parent links.  `None` until the finish has been reached.
    pub fn path(&self) -> Option<Vec<GridPos>> {
        if self.outcome != Some(StepOutcome::Found) {
            return None;
        }
        let mut path = Vec::new();
        let mut cursor = self.finish;
        loop {
            path.push(cursor);
            let i = self.index_of(cursor).ok()?;
            match self.nodes[i].parent {
                Some(parent) => cursor = parent,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn index_of(&self, pos: GridPos) -> SearchResult<usize> {
        if pos.x >= self.width || pos.y >= self.height {
            return Err(SearchError::OutOfBounds {
                pos,
                width:  self.width,
                height: self.height,
            });
        }
        Ok(pos.x + pos.y * self.width)
    }

    fn heuristic(&self, pos: GridPos) -> u32 {
        let here = Vec2::new(pos.x as f32, pos.y as f32);
        let there = Vec2::new(self.finish.x as f32, self.finish.y as f32);
        (self.heuristic_weight as f32 * here.distance(there)) as u32
    }

    /// Index of the open node with the smallest total estimate, ties broken
    /// by scan order.
    fn cheapest_open(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            if node.state != NodeState::Open {
                continue;
            }
            match best {
                Some(b) if self.nodes[b].f_cost() <= node.f_cost() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn try_open(&mut self, from: GridPos, dx: i64, dy: i64, g: u32, diagonal: bool) {
        let x = from.x as i64 + dx;
        let y = from.y as i64 + dy;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = x as usize + y as usize * self.width;
        let node = &mut self.nodes[i];
        if node.blocked || node.state != NodeState::Unvisited {
            return;
        }
        node.state = NodeState::Open;
        node.parent = Some(from);
        node.g_cost = g + if diagonal { self.diag_cost } else { self.hv_cost };
    }

    fn mark_path(&mut self, finish_index: usize) {
        let mut cursor = finish_index;
        // The start node has no parent and stays unmarked.
        while let Some(parent) = self.nodes[cursor].parent {
            self.nodes[cursor].on_path = true;
            match self.index_of(parent) {
                Ok(i) => cursor = i,
                Err(_) => break,
            }
        }
    }
}
