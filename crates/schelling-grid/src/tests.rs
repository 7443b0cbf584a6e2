//! Unit tests for schelling-grid.

use schelling_core::{Category, CityConfig, Coord};

use crate::{Cell, Grid};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse a layout: `.` vacant, `R` category A, `B` category B.
fn layout(rows: &[&str]) -> Grid {
    let rows = rows
        .iter()
        .map(|r| {
            r.chars()
                .map(|c| match c {
                    'R' => Cell::of(Category::A),
                    'B' => Cell::of(Category::B),
                    _   => Cell::Empty,
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn city(width: u32, height: u32, occ: f64, split: f64) -> CityConfig {
    CityConfig {
        width,
        height,
        occupation_rate:  occ,
        category_a_split: split,
        tolerance:        0.4,
    }
}

// ── Grid shape and access ─────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use schelling_core::ConfigError;

    use super::*;
    use crate::GridError;

    #[test]
    fn empty_grid_is_all_vacant() {
        let g = Grid::empty(4, 3).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        assert_eq!(g.empty_cells().len(), 12);
        assert_eq!(g.counts().occupied(), 0);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Grid::empty(0, 3),
            Err(GridError::Config(ConfigError::InvalidDimension { what: "width", value: 0 }))
        );
        assert!(Grid::from_rows(vec![]).is_err());
    }

    #[test]
    fn shape_reports_real_lengths() {
        assert_eq!(crate::grid::shape_from_lens(3, 2), Ok((3, 2)));
        assert_eq!(
            crate::grid::shape_from_lens(70_000, 70_000),
            Err(GridError::Config(ConfigError::GridTooLarge { width: 70_000, height: 70_000 }))
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn overflowing_side_is_too_large() {
        let wide = u32::MAX as usize + 1;
        assert_eq!(
            crate::grid::shape_from_lens(wide, 1),
            Err(GridError::Config(ConfigError::GridTooLarge { width: wide as u64, height: 1 }))
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::RaggedRows { row: 1, got: 2, expected: 3 })
        );
    }

    #[test]
    fn get_and_index_agree() {
        let g = layout(&["R.", ".B"]);
        assert_eq!(g.get(Coord::new(0, 0)), Some(Cell::of(Category::A)));
        assert_eq!(g[Coord::new(1, 1)], Cell::of(Category::B));
        assert_eq!(g.get(Coord::new(2, 0)), None);
    }

    #[test]
    fn set_returns_previous() {
        let mut g = layout(&["R."]);
        let prev = g.set(Coord::new(0, 0), Cell::Empty).unwrap();
        assert_eq!(prev, Cell::of(Category::A));
        assert!(g[Coord::new(0, 0)].is_empty());
        assert!(matches!(
            g.set(Coord::new(5, 5), Cell::Empty),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn rows_view_matches_layout() {
        let g = layout(&["RB.", "..R"]);
        let rendered: Vec<String> = g
            .rows()
            .map(|r| r.iter().map(|c| c.symbol()).collect())
            .collect();
        assert_eq!(rendered, ["RB.", "..R"]);
    }

    #[test]
    fn empty_cells_row_major() {
        let g = layout(&["R.B", ".RB"]);
        assert_eq!(g.empty_cells(), vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn counts_by_category() {
        let g = layout(&["RRB", "..B", "R.."]);
        let c = g.counts();
        assert_eq!((c.category_a, c.category_b, c.empty), (3, 2, 4));
        assert_eq!(g.occupied().count(), 5);
    }
}

// ── Neighborhood ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbor_tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn interior_edge_corner_counts() {
        let g = Grid::empty(5, 5).unwrap();
        assert_eq!(g.neighbors(Coord::new(2, 2)).count(), 8);
        assert_eq!(g.neighbors(Coord::new(0, 2)).count(), 5);
        assert_eq!(g.neighbors(Coord::new(0, 0)).count(), 3);
        assert_eq!(g.neighbors(Coord::new(4, 4)).count(), 3);
    }

    #[test]
    fn fixed_neighbor_order() {
        let g = Grid::empty(3, 3).unwrap();
        let coords: Vec<Coord> = g.neighbor_coords(Coord::new(1, 1)).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 1), Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2),
                Coord::new(0, 0), Coord::new(0, 2), Coord::new(2, 0), Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn no_wraparound() {
        let g = layout(&["R..B", "....", "B..R"]);
        let cells: Vec<Cell> = g.neighbors(Coord::new(0, 0)).collect();
        assert!(cells.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn neighbors_report_contents() {
        let g = layout(&["RB.", ".R.", "..."]);
        let occupied = g.neighbors(Coord::new(1, 1)).filter(|c| !c.is_empty()).count();
        assert_eq!(occupied, 2);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let g = Grid::empty(1, 1).unwrap();
        assert_eq!(g.neighbors(Coord::new(0, 0)).count(), 0);
    }

    proptest! {
        #[test]
        fn counts_by_position(width in 3u32..40, height in 3u32..40) {
            let g = Grid::empty(width, height).unwrap();
            for (coord, _) in g.iter() {
                let on_row_edge = coord.row == 0 || coord.row == height - 1;
                let on_col_edge = coord.col == 0 || coord.col == width - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true)   => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                prop_assert_eq!(g.neighbors(coord).count(), expected);
            }
        }
    }
}

// ── Moves ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod move_tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn move_vacates_source() {
        let mut g = layout(&["R.", ".."]);
        let agent = g.move_agent(Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        assert_eq!(agent.category(), Category::A);
        assert!(g[Coord::new(0, 0)].is_empty());
        assert_eq!(g[Coord::new(1, 1)], Cell::of(Category::A));
        assert_eq!(g.counts().occupied(), 1);
    }

    #[test]
    fn move_from_empty_errors() {
        let mut g = layout(&["..", ".."]);
        assert_eq!(
            g.move_agent(Coord::new(0, 0), Coord::new(1, 1)),
            Err(GridError::EmptySource(Coord::new(0, 0)))
        );
    }

    #[test]
    fn move_onto_occupied_errors_and_leaves_grid() {
        let mut g = layout(&["RB"]);
        let before = g.clone();
        assert_eq!(
            g.move_agent(Coord::new(0, 0), Coord::new(0, 1)),
            Err(GridError::OccupiedTarget(Coord::new(0, 1)))
        );
        assert_eq!(g, before);
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use proptest::prelude::*;
    use schelling_core::{ConfigError, SimRng};

    use super::*;
    use crate::{GridBuilder, GridError};

    #[test]
    fn five_by_five_counts() {
        let g = GridBuilder::new(&city(5, 5, 0.8, 0.5))
            .build(&mut SimRng::new(1))
            .unwrap();
        let c = g.counts();
        assert_eq!((c.category_a, c.category_b, c.empty), (10, 10, 5));
    }

    #[test]
    fn same_seed_same_layout() {
        let cfg = city(20, 15, 0.7, 0.4);
        let a = GridBuilder::new(&cfg).build(&mut SimRng::new(99)).unwrap();
        let b = GridBuilder::new(&cfg).build(&mut SimRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_rejected() {
        let result = GridBuilder::new(&city(5, 5, 1.5, 0.5)).build(&mut SimRng::new(0));
        assert!(matches!(
            result,
            Err(GridError::Config(ConfigError::RateOutOfRange { what: "occupation_rate", .. }))
        ));
    }

    proptest! {
        #[test]
        fn built_counts_match_population(
            width in 1u32..30,
            height in 1u32..30,
            occ in 0.0f64..=1.0,
            split in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let cfg = city(width, height, occ, split);
            let builder = GridBuilder::new(&cfg);
            let p = builder.population();
            let g = builder.build(&mut SimRng::new(seed)).unwrap();
            let c = g.counts();
            prop_assert_eq!(g.len(), p.total);
            prop_assert_eq!(c.category_a, p.count_a);
            prop_assert_eq!(c.category_b, p.count_b);
            prop_assert_eq!(c.empty, p.vacant);
        }
    }
}
