//! Path-level parallelism over independent scenario paths.
//!
//! Within one path the Euler walk is strictly sequential (each step's input
//! is the previous step's output), so parallelism lives at the path level:
//! one walk per scenario path, with no shared mutable state between paths.
//! A path that cannot be evolved to completion surfaces as `None` in its
//! slot; other paths are unaffected.

use rayon::prelude::*;
use tracing::debug;

use xva_core::universe::MarketPath;

use crate::derivative::{EvolutionTrajectoryEdge, EvolutionTrajectoryVertex};
use crate::pde::{PdeOperator, TrajectoryEvolutionScheme};

/// Evolves every scenario path in parallel, one Euler walk per path.
///
/// Each path starts from the same boundary trajectory vertex and applicable
/// collateral. Results are returned in path order; a `None` slot means that
/// path's walk aborted at an unevaluable step.
///
/// # Examples
///
/// ```no_run
/// use xva_engine::parallel::evolve_paths;
/// # use xva_engine::pde::{PdeOperator, TrajectoryEvolutionScheme};
/// # use xva_engine::derivative::EvolutionTrajectoryVertex;
/// # use xva_core::universe::MarketPath;
/// # fn demo<O: PdeOperator + Sync>(
/// #     paths: &[MarketPath],
/// #     scheme: &TrajectoryEvolutionScheme,
/// #     operator: &O,
/// #     boundary: &EvolutionTrajectoryVertex,
/// # ) {
/// let trajectories = evolve_paths(paths, scheme, operator, boundary, 0.0);
/// let evolved = trajectories.iter().filter(|t| t.is_some()).count();
/// # }
/// ```
pub fn evolve_paths<O>(
    paths: &[MarketPath],
    scheme: &TrajectoryEvolutionScheme,
    operator: &O,
    boundary_vertex: &EvolutionTrajectoryVertex,
    collateral: f64,
) -> Vec<Option<Vec<EvolutionTrajectoryEdge>>>
where
    O: PdeOperator + Sync,
{
    let trajectories: Vec<Option<Vec<EvolutionTrajectoryEdge>>> = paths
        .par_iter()
        .map(|path| scheme.euler_walk(path.vertexes(), operator, boundary_vertex, collateral))
        .collect();

    let aborted = trajectories.iter().filter(|t| t.is_none()).count();

    if aborted > 0 {
        debug!(
            path_count = paths.len(),
            aborted, "some scenario paths could not be evolved to completion"
        );
    }

    trajectories
}
