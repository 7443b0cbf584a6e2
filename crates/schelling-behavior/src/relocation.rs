//! Relocation of dissatisfied agents.

use schelling_core::{Coord, SimRng};
use schelling_grid::{Grid, GridError, GridResult};

use crate::MovedSet;

/// Picks where a displaced agent goes.
///
/// `vacancies` is the grid's current list of empty cells in row-major order
/// and is never empty when this is called.  Returning `None` leaves the agent
/// where it is for this sweep.
///
/// # Example
///
/// ```rust,ignore
/// /// Always take the first vacancy in scan order.
/// struct FirstVacancy;
///
/// impl RelocationPolicy for FirstVacancy {
///     fn choose_destination(&self, _g: &Grid, _from: Coord, v: &[Coord], _r: &mut SimRng) -> Option<Coord> {
///         v.first().copied()
///     }
/// }
/// ```
pub trait RelocationPolicy {
    fn choose_destination(
        &self,
        grid:      &Grid,
        from:      Coord,
        vacancies: &[Coord],
        rng:       &mut SimRng,
    ) -> Option<Coord>;
}

/// Uniformly random choice among all current vacancies.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomVacancy;

impl RelocationPolicy for RandomVacancy {
    fn choose_destination(
        &self,
        _grid:     &Grid,
        _from:     Coord,
        vacancies: &[Coord],
        rng:       &mut SimRng,
    ) -> Option<Coord> {
        rng.choose(vacancies).copied()
    }
}

impl<P: RelocationPolicy + ?Sized> RelocationPolicy for &P {
    fn choose_destination(
        &self,
        grid:      &Grid,
        from:      Coord,
        vacancies: &[Coord],
        rng:       &mut SimRng,
    ) -> Option<Coord> {
        (**self).choose_destination(grid, from, vacancies, rng)
    }
}

/// Move the agent at `from` to a vacancy chosen by `policy`.
///
/// Returns the destination, or `Ok(None)` when the grid has no vacancy (or
/// the policy declines); in that case nothing changes, including `moved`.
/// On success `from` is recorded in `moved` and left vacant.
///
/// # Errors
/// [`GridError::EmptySource`] if `from` holds no agent, and any error from
/// [`Grid::move_agent`] if the policy returns a cell that is not vacant.
pub fn relocate<P: RelocationPolicy + ?Sized>(
    grid:   &mut Grid,
    from:   Coord,
    policy: &P,
    moved:  &mut MovedSet,
    rng:    &mut SimRng,
) -> GridResult<Option<Coord>> {
    match grid.get(from) {
        None => {
            return Err(GridError::OutOfBounds {
                coord:  from,
                height: grid.height(),
                width:  grid.width(),
            });
        }
        Some(cell) if cell.is_empty() => return Err(GridError::EmptySource(from)),
        Some(_) => {}
    }

    let vacancies = grid.empty_cells();
    if vacancies.is_empty() {
        tracing::trace!(%from, "no vacancy; agent stays");
        return Ok(None);
    }

    let Some(dest) = policy.choose_destination(grid, from, &vacancies, rng) else {
        tracing::trace!(%from, "policy declined; agent stays");
        return Ok(None);
    };

    grid.move_agent(from, dest)?;
    moved.record(from);
    Ok(Some(dest))
}
