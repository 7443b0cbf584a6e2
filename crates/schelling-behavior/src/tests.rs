//! Unit tests for schelling-behavior.

use schelling_core::{Category, Coord};
use schelling_grid::{Cell, Grid};

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

fn at(row: u32, col: u32) -> Coord {
    Coord::new(row, col)
}

// ── Happiness ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod happiness_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{HappinessEvaluator, NeighborTally, is_satisfied};

    /// Center agent with one like and one unlike neighbor, the rest vacant.
    fn one_of_two() -> Grid {
        layout(&[
            ".....",
            "..R..",
            "..R..",
            "..B..",
            ".....",
        ])
    }

    #[test]
    fn half_similar_threshold_examples() {
        let g = one_of_two();
        assert!(is_satisfied(&g, at(2, 2), 0.4));
        assert!(!is_satisfied(&g, at(2, 2), 0.8));
    }

    #[test]
    fn threshold_is_inclusive() {
        let g = one_of_two();
        assert!(is_satisfied(&g, at(2, 2), 0.5));
    }

    #[test]
    fn tally_ignores_vacant_neighbors() {
        let g = one_of_two();
        let eval = HappinessEvaluator::new(0.5);
        assert_eq!(
            eval.tally(&g, at(2, 2)),
            Some(NeighborTally { similar: 1, occupied: 2 })
        );
        assert_eq!(eval.tally(&g, at(0, 0)), None);
    }

    #[test]
    fn vacant_cell_always_satisfied() {
        let g = one_of_two();
        assert!(is_satisfied(&g, at(0, 0), 1.0));
    }

    #[test]
    fn isolated_agent_satisfied() {
        let g = layout(&["...", ".B.", "..."]);
        assert!(is_satisfied(&g, at(1, 1), 1.0));
    }

    #[test]
    fn surrounded_by_others_unsatisfied() {
        let g = layout(&["BBB", "BRB", "BBB"]);
        assert!(!is_satisfied(&g, at(1, 1), 0.1));
        assert!(is_satisfied(&g, at(1, 1), 0.0));
    }

    #[test]
    fn unhappy_agents_in_scan_order() {
        let g = layout(&["RB", "BR"]);
        // Each agent sees one like and two unlike neighbors: 1/3.
        let eval = HappinessEvaluator::new(0.5);
        assert_eq!(eval.unhappy_agents(&g), vec![at(0, 0), at(0, 1), at(1, 0), at(1, 1)]);
        assert!(HappinessEvaluator::new(0.3).unhappy_agents(&g).is_empty());
    }

    proptest! {
        #[test]
        fn raising_threshold_never_satisfies(
            similar in 0u32..=8,
            extra in 0u32..=8,
            low in 0.0f64..=1.0,
            high in 0.0f64..=1.0,
        ) {
            let (low, high) = if low <= high { (low, high) } else { (high, low) };
            let tally = NeighborTally { similar, occupied: similar + extra };
            if tally.satisfies(high) {
                prop_assert!(tally.satisfies(low));
            }
        }
    }
}

// ── Relocation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod relocation_tests {
    use schelling_core::SimRng;
    use schelling_grid::GridError;

    use super::*;
    use crate::{MovedSet, RandomVacancy, RelocationPolicy, relocate};

    #[test]
    fn single_vacancy_is_forced() {
        let mut g = layout(&["RB", "B."]);
        let mut moved = MovedSet::new();
        let dest = relocate(&mut g, at(0, 0), &RandomVacancy, &mut moved, &mut SimRng::new(0))
            .unwrap();
        assert_eq!(dest, Some(at(1, 1)));
        assert!(g[at(0, 0)].is_empty());
        assert_eq!(g[at(1, 1)], Cell::of(Category::A));
        assert!(moved.contains(at(0, 0)));
    }

    #[test]
    fn occupied_count_unchanged() {
        let mut g = layout(&["RB..", "..RB", "B..R"]);
        let before = g.counts();
        let mut moved = MovedSet::new();
        let mut rng = SimRng::new(5);
        let dest = relocate(&mut g, at(1, 2), &RandomVacancy, &mut moved, &mut rng)
            .unwrap()
            .unwrap();
        assert!(g[at(1, 2)].is_empty());
        assert_eq!(g[dest], Cell::of(Category::A));
        assert_eq!(g.counts(), before);
    }

    #[test]
    fn no_vacancy_is_noop() {
        let mut g = layout(&["RB", "BR"]);
        let before = g.clone();
        let mut moved = MovedSet::new();
        let dest = relocate(&mut g, at(0, 0), &RandomVacancy, &mut moved, &mut SimRng::new(0))
            .unwrap();
        assert_eq!(dest, None);
        assert_eq!(g, before);
        assert!(moved.is_empty());
    }

    #[test]
    fn empty_source_errors() {
        let mut g = layout(&["R."]);
        let result = relocate(&mut g, at(0, 1), &RandomVacancy, &mut MovedSet::new(), &mut SimRng::new(0));
        assert_eq!(result, Err(GridError::EmptySource(at(0, 1))));
    }

    #[test]
    fn out_of_bounds_source_errors() {
        let mut g = layout(&["R."]);
        let result = relocate(&mut g, at(3, 3), &RandomVacancy, &mut MovedSet::new(), &mut SimRng::new(0));
        assert!(matches!(result, Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn destination_is_uniform_over_vacancies() {
        let mut hits = [0usize; 3];
        let mut rng = SimRng::new(11);
        for _ in 0..3_000 {
            let mut g = layout(&["R..."]);
            let dest = relocate(&mut g, at(0, 0), &RandomVacancy, &mut MovedSet::new(), &mut rng)
                .unwrap()
                .unwrap();
            hits[dest.col as usize - 1] += 1;
        }
        assert!(hits.iter().all(|&h| h > 800), "skewed distribution: {hits:?}");
    }

    #[test]
    fn custom_policy_plugs_in() {
        struct LastVacancy;
        impl RelocationPolicy for LastVacancy {
            fn choose_destination(&self, _g: &Grid, _f: Coord, v: &[Coord], _r: &mut SimRng) -> Option<Coord> {
                v.last().copied()
            }
        }
        let mut g = layout(&["R..", "..."]);
        let dest = relocate(&mut g, at(0, 0), &LastVacancy, &mut MovedSet::new(), &mut SimRng::new(0))
            .unwrap();
        assert_eq!(dest, Some(at(1, 2)));
    }

    #[test]
    fn declining_policy_leaves_grid() {
        struct Stay;
        impl RelocationPolicy for Stay {
            fn choose_destination(&self, _g: &Grid, _f: Coord, _v: &[Coord], _r: &mut SimRng) -> Option<Coord> {
                None
            }
        }
        let mut g = layout(&["R."]);
        let mut moved = MovedSet::new();
        assert_eq!(relocate(&mut g, at(0, 0), &Stay, &mut moved, &mut SimRng::new(0)), Ok(None));
        assert_eq!(g[at(0, 0)], Cell::of(Category::A));
        assert!(moved.is_empty());
    }
}

// ── MovedSet ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moved_tests {
    use super::*;
    use crate::MovedSet;

    #[test]
    fn keyed_by_source_coordinate() {
        let mut moved = MovedSet::new();
        assert!(moved.record(at(1, 1)));
        // A different agent leaving the same cell later collapses into one entry.
        assert!(!moved.record(at(1, 1)));
        assert!(moved.record(at(0, 2)));
        assert_eq!(moved.len(), 2);
        assert_eq!(moved.sorted(), vec![at(0, 2), at(1, 1)]);
    }

    #[test]
    fn default_is_empty() {
        let moved = MovedSet::default();
        assert!(moved.is_empty());
        assert!(!moved.contains(at(0, 0)));
    }
}

// ── Segregation metric ────────────────────────────────────────────────────────

#[cfg(test)]
mod metric_tests {
    use proptest::prelude::*;
    use schelling_core::{CityConfig, SimRng};
    use schelling_grid::GridBuilder;

    use super::*;
    use crate::{HappinessEvaluator, segregation_level};

    fn split_halves() -> Grid {
        layout(&["RRRRR", "RRRRR", "BBBBB", "BBBBB", "BBBBB"])
    }

    fn checkerboard() -> Grid {
        layout(&["RBRBR", "BRBRB", "RBRBR", "BRBRB", "RBRBR"])
    }

    #[test]
    fn split_grid_fully_satisfied() {
        assert_eq!(segregation_level(&split_halves(), 0.4), 1.0);
        assert_eq!(segregation_level(&split_halves(), 0.6), 1.0);
    }

    #[test]
    fn checkerboard_below_one() {
        assert!(segregation_level(&checkerboard(), 0.4) < 1.0);
    }

    #[test]
    fn empty_grid_is_one() {
        let g = Grid::empty(6, 4).unwrap();
        assert_eq!(segregation_level(&g, 0.9), 1.0);
    }

    #[test]
    fn ratio_of_happy_agents() {
        // Four agents, each 1 like / 2 unlike: all unhappy at 0.5.
        let g = layout(&["RB", "BR"]);
        assert_eq!(segregation_level(&g, 0.5), 0.0);
        // Add a vacancy column: the pair on the left stays mixed.
        let g = layout(&["RR.", "RB."]);
        // R(0,0): 2/3, R(0,1): 2/3, R(1,0): 2/3, B(1,1): 0/3 → 3 of 4 at 0.5.
        assert_eq!(segregation_level(&g, 0.5), 0.75);
    }

    #[test]
    fn evaluator_delegates() {
        let eval = HappinessEvaluator::new(0.4);
        assert_eq!(eval.segregation_level(&split_halves()), 1.0);
    }

    proptest! {
        #[test]
        fn level_within_unit_interval(
            width in 1u32..20,
            height in 1u32..20,
            occ in 0.0f64..=1.0,
            split in 0.0f64..=1.0,
            tol in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let cfg = CityConfig {
                width,
                height,
                occupation_rate:  occ,
                category_a_split: split,
                tolerance:        tol,
            };
            let g = GridBuilder::new(&cfg).build(&mut SimRng::new(seed)).unwrap();
            let level = segregation_level(&g, tol);
            prop_assert!((0.0..=1.0).contains(&level));
        }
    }
}
