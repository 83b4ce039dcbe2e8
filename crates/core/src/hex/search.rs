//! Graph searches over the hex grid. Every search here is a breadth-first
//! search, since moving to any neighbor costs the same.
//!
//! The searches never check whether a hex exists in the grid; the passability
//! predicate decides which hexes can be entered. To stay on the grid, fold
//! [HexGrid::contains] into the predicate. The predicate is **never** applied
//! to the start hex, so callers that care should check it themselves.

use crate::{
    hex::{Cube, CubeMap, CubeSet, DirectionTable, HexGrid},
    timed, HexError,
};
use log::trace;
use std::{collections::VecDeque, mem};

impl HexGrid {
    /// Find every hex that can be reached from `start` in at most `range`
    /// steps, moving only onto hexes that satisfy `is_passable`. The output
    /// is grouped by the number of steps needed to reach each hex: layer 0 is
    /// just `start`, layer 1 holds the hexes one step away, and so on. There
    /// are always `range + 1` layers, though trailing layers can be empty if
    /// the reachable area is exhausted early.
    ///
    /// Each hex appears at most once, in the first layer that reaches it. This
    /// is different from [Cube::range], since obstacles can make a nearby hex
    /// take many steps to reach, or cut it off entirely.
    pub fn reachable(
        &self,
        start: Cube,
        range: u32,
        is_passable: impl Fn(Cube) -> bool,
    ) -> Result<Vec<Vec<Cube>>, HexError> {
        let table = self.neighbor_table()?;
        let mut visited = CubeSet::default();
        visited.insert(start);
        let mut layers = Vec::with_capacity(range as usize + 1);
        let mut fringe = vec![start];

        for _ in 0..range {
            let mut next_fringe = Vec::new();
            for &cube in &fringe {
                for (_, vector) in table {
                    let neighbor = cube + *vector;
                    if !visited.contains(&neighbor) && is_passable(neighbor) {
                        visited.insert(neighbor);
                        next_fringe.push(neighbor);
                    }
                }
            }
            layers.push(mem::replace(&mut fringe, next_fringe));
        }
        layers.push(fringe);

        trace!(
            "Found {} hexes within {} steps of {}",
            visited.len(),
            range,
            start
        );
        Ok(layers)
    }

    /// Run a single search out from `start` across every hex reachable under
    /// `is_passable`, and return the result so that paths to any number of
    /// targets can be looked up afterwards. See [ShortestPaths].
    ///
    /// The search only terminates once it runs out of passable hexes, so the
    /// predicate **must** describe a finite area. Folding in
    /// [HexGrid::contains] is the easiest way to guarantee that. If you only
    /// need one path, [HexGrid::shortest_path] can stop early.
    pub fn shortest_paths(
        &self,
        start: Cube,
        is_passable: impl Fn(Cube) -> bool,
    ) -> Result<ShortestPaths, HexError> {
        let table = self.neighbor_table()?;
        let predecessors = timed!(
            "Shortest path search",
            log::Level::Trace,
            search(table, start, None, is_passable)
        );
        trace!("Shortest path search reached {} hexes", predecessors.len());
        Ok(ShortestPaths {
            start,
            predecessors,
        })
    }

    /// Find the shortest path from `start` to `target`, moving only onto
    /// hexes that satisfy `is_passable`. The path includes both endpoints.
    /// If there is no such path, the returned path is empty.
    ///
    /// This gives the same path as calling [ShortestPaths::path_to] on the
    /// output of [HexGrid::shortest_paths], but the search stops as soon as it
    /// finds `target`.
    pub fn shortest_path(
        &self,
        start: Cube,
        target: Cube,
        is_passable: impl Fn(Cube) -> bool,
    ) -> Result<Vec<Cube>, HexError> {
        let table = self.neighbor_table()?;
        // The start is never revisited, so the search would never find it
        if start == target {
            return Ok(Vec::new());
        }
        let paths = ShortestPaths {
            start,
            predecessors: search(table, start, Some(target), is_passable),
        };
        Ok(paths.path_to(target))
    }
}

/// Breadth-first search out from `start`, recording the hex that each visited
/// hex was first reached from. Neighbors are explored in table order, which
/// makes the choice between equally short paths deterministic. If a target is
/// given, we stop as soon as it's been reached.
fn search(
    table: &DirectionTable,
    start: Cube,
    target: Option<Cube>,
    is_passable: impl Fn(Cube) -> bool,
) -> CubeMap<Cube> {
    let mut predecessors = CubeMap::default();
    let mut visited = CubeSet::default();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(cube) = queue.pop_front() {
        for (_, vector) in table {
            let neighbor = cube + *vector;
            if !visited.contains(&neighbor) && is_passable(neighbor) {
                visited.insert(neighbor);
                predecessors.insert(neighbor, cube);
                if target == Some(neighbor) {
                    return predecessors;
                }
                queue.push_back(neighbor);
            }
        }
    }

    predecessors
}

/// The output of a complete breadth-first search from a single start hex.
/// Holds enough info to rebuild the shortest path to any hex that the search
/// reached.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    start: Cube,
    /// Each reached hex, mapped to the hex it was first reached from. The
    /// start hex is never in here.
    predecessors: CubeMap<Cube>,
}

impl ShortestPaths {
    /// The hex that the search started from
    pub fn start(&self) -> Cube {
        self.start
    }

    /// Was `target` reached by the search? Always `false` for the start hex.
    pub fn is_reachable(&self, target: Cube) -> bool {
        self.predecessors.contains_key(&target)
    }

    /// Get the shortest path from the start to `target`, including both
    /// endpoints. If the search never reached `target`, the path is empty.
    /// That includes `target == start`, which has no path of its own.
    pub fn path_to(&self, target: Cube) -> Vec<Cube> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        // Walk back along the predecessors. The start is the only reached
        // hex with no predecessor, so the walk always ends there.
        let mut path = vec![target];
        let mut current = target;
        while let Some(&previous) = self.predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}
