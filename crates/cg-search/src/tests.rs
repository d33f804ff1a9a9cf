use super::*;

fn fresh(width: usize, height: usize, start: (usize, usize), finish: (usize, usize)) -> PathSearch {
    let mut search = PathSearch::new(
        width,
        height,
        GridPos::new(start.0, start.1),
        GridPos::new(finish.0, finish.1),
    )
    .unwrap();
    search.reset();
    search
}

fn is_adjacent(a: GridPos, b: GridPos) -> bool {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn rejects_degenerate_maps() {
        let err = PathSearch::new(1, 5, GridPos::new(0, 0), GridPos::new(0, 4));
        assert!(matches!(err, Err(SearchError::MapTooSmall { width: 1, height: 5 })));

        let err = PathSearch::new(5, 1, GridPos::new(0, 0), GridPos::new(4, 0));
        assert!(matches!(err, Err(SearchError::MapTooSmall { .. })));
    }

    #[test]
    fn rejects_endpoints_off_the_map() {
        let err = PathSearch::new(5, 5, GridPos::new(5, 0), GridPos::new(4, 4));
        assert!(matches!(err, Err(SearchError::OutOfBounds { .. })));

        let err = PathSearch::new(5, 5, GridPos::new(0, 0), GridPos::new(4, 5));
        assert!(matches!(err, Err(SearchError::OutOfBounds { .. })));
    }

    #[test]
    fn new_map_is_unobstructed() {
        let search = fresh(4, 3, (0, 0), (3, 2));
        for y in 0..3 {
            for x in 0..4 {
                assert!(!search.node(GridPos::new(x, y)).unwrap().blocked);
            }
        }
    }
}

#[cfg(test)]
mod obstructions {
    use super::*;

    #[test]
    fn ascii_map_marks_blocked_glyphs() {
        let mut search = fresh(4, 2, (0, 0), (3, 1));
        search
            .set_blocked_from_ascii(
                '#',
                "\
..#.
.#..",
            )
            .unwrap();

        assert!(search.node(GridPos::new(2, 0)).unwrap().blocked);
        assert!(search.node(GridPos::new(1, 1)).unwrap().blocked);
        assert!(!search.node(GridPos::new(0, 0)).unwrap().blocked);
    }

    #[test]
    fn ascii_map_size_mismatch_is_an_error() {
        let mut search = fresh(4, 2, (0, 0), (3, 1));
        let err = search.set_blocked_from_ascii('#', "....");
        assert!(matches!(err, Err(SearchError::SizeMismatch { expected: 8, got: 4 })));
    }

    #[test]
    fn set_blocked_is_bounds_checked() {
        let mut search = fresh(4, 2, (0, 0), (3, 1));
        assert!(search.set_blocked(GridPos::new(1, 1), true).is_ok());
        assert!(matches!(
            search.set_blocked(GridPos::new(4, 0), true),
            Err(SearchError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn reset_preserves_obstructions() {
        let mut search = fresh(4, 2, (0, 0), (3, 1));
        search.set_blocked(GridPos::new(2, 0), true).unwrap();
        search.reset();
        assert!(search.node(GridPos::new(2, 0)).unwrap().blocked);
        assert_eq!(search.node(GridPos::new(2, 0)).unwrap().state, NodeState::Unvisited);
    }
}

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn first_step_closes_the_start_and_opens_its_neighbors() {
        let mut search = fresh(5, 5, (2, 2), (4, 4));
        assert_eq!(search.step(), StepOutcome::Searching);

        assert_eq!(search.node(GridPos::new(2, 2)).unwrap().state, NodeState::Closed);
        // All eight neighbors of an interior start open at once.
        let mut open = 0;
        for y in 0..5 {
            for x in 0..5 {
                if search.node(GridPos::new(x, y)).unwrap().state == NodeState::Open {
                    open += 1;
                }
            }
        }
        assert_eq!(open, 8);
    }

    #[test]
    fn straight_and_diagonal_costs_differ() {
        let mut search = fresh(5, 5, (2, 2), (4, 4));
        search.step();
        assert_eq!(search.node(GridPos::new(3, 2)).unwrap().g_cost, 10);
        assert_eq!(search.node(GridPos::new(3, 3)).unwrap().g_cost, 14);
    }

    #[test]
    fn settles_and_stays_settled() {
        let mut search = fresh(3, 3, (0, 0), (2, 2));
        let outcome = search.run();
        assert_eq!(outcome, StepOutcome::Found);
        // Further steps are no-ops reporting the settled outcome.
        assert_eq!(search.step(), StepOutcome::Found);
        assert_eq!(search.run(), StepOutcome::Found);
    }
}

#[cfg(test)]
mod pathfinding {
    use super::*;

    #[test]
    fn open_corridor_yields_the_straight_line() {
        let mut search = fresh(5, 5, (0, 2), (4, 2));
        assert_eq!(search.run(), StepOutcome::Found);

        let path = search.path().unwrap();
        assert_eq!(path.len(), 5);
        for (x, pos) in path.iter().enumerate() {
            assert_eq!(*pos, GridPos::new(x, 2));
        }
    }

    #[test]
    fn path_marks_every_cell_but_the_start() {
        let mut search = fresh(4, 4, (0, 0), (3, 3));
        search.run();

        assert!(!search.node(GridPos::new(0, 0)).unwrap().on_path);
        assert!(search.node(GridPos::new(3, 3)).unwrap().on_path);

        let path = search.path().unwrap();
        for pos in &path[1..] {
            assert!(search.node(*pos).unwrap().on_path);
        }
    }

    #[test]
    fn detours_around_a_wall() {
        let mut search = fresh(5, 5, (0, 2), (4, 2));
        search
            .set_blocked_from_ascii(
                '#',
                "\
..#..
..#..
..#..
..#..
.....",
            )
            .unwrap();
        search.reset();
        assert_eq!(search.run(), StepOutcome::Found);

        let path = search.path().unwrap();
        assert_eq!(*path.first().unwrap(), GridPos::new(0, 2));
        assert_eq!(*path.last().unwrap(), GridPos::new(4, 2));
        for pair in path.windows(2) {
            assert!(is_adjacent(pair[0], pair[1]));
        }
        for pos in &path {
            assert!(!search.node(*pos).unwrap().blocked);
        }
        // The only gap is at the bottom row.
        assert!(path.iter().any(|p| p.y == 4));
    }

    #[test]
    fn walled_in_start_exhausts() {
        let mut search = fresh(5, 5, (0, 0), (4, 4));
        search
            .set_blocked_from_ascii(
                '#',
                "\
.#...
##...
.....
.....
.....",
            )
            .unwrap();
        search.reset();
        assert_eq!(search.run(), StepOutcome::Exhausted);
        assert!(search.path().is_none());
    }

    #[test]
    fn blocked_finish_exhausts() {
        let mut search = fresh(4, 4, (0, 0), (3, 3));
        search.set_blocked(GridPos::new(3, 3), true).unwrap();
        search.reset();
        assert_eq!(search.run(), StepOutcome::Exhausted);
    }

    #[test]
    fn rerun_after_reset_finds_the_same_path() {
        let mut search = fresh(6, 4, (0, 0), (5, 3));
        search.run();
        let first = search.path().unwrap();

        search.reset();
        assert!(search.path().is_none());
        search.run();
        assert_eq!(search.path().unwrap(), first);
    }
}
