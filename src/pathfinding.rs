//! Pathfinding algorithm module.
//!
//! This module contains the A* search used to solve a maze. The search runs over a [`Grid`],
//! guided by the Manhattan distance to the goal, and marks the cells of the shortest route it finds
//! directly in the grid.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use log::{debug, trace};

use crate::{
    coord::{manhattan_distance, Coord, NEIGHBOR_OFFSETS},
    error::Result,
    grid::Grid,
};

/// Cost of a single orthogonal step between adjacent cells.
const STEP_COST: u32 = 1;

/// Outcome of a search between two cells.
///
/// Failing to reach the goal is a regular outcome rather than an error. In that case the grid is
/// left exactly as it was before the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solution {
    /// A shortest route was found and its cells were marked in the grid.
    Found {
        /// Number of moves from the start to the goal.
        steps: u32,
        /// Number of cells expanded before the goal was selected.
        expanded: usize,
    },
    /// No route connects the start to the goal.
    Unreachable {
        /// Number of cells expanded before the open set ran dry.
        expanded: usize,
    },
}

impl Solution {
    /// Returns whether a route was found.
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns the length of the route in moves, if one was found.
    #[must_use]
    pub const fn steps(self) -> Option<u32> {
        match self {
            Self::Found { steps, .. } => Some(steps),
            Self::Unreachable { .. } => None,
        }
    }

    /// Returns the number of cells the search expanded.
    #[must_use]
    pub const fn expanded(self) -> usize {
        match self {
            Self::Found { expanded, .. } | Self::Unreachable { expanded } => expanded,
        }
    }
}

/// Entry of the open set priority queue.
///
/// Entries order by estimated total cost first and by the moment the cell joined the open set
/// second, so that among equally promising cells the one that has waited longest is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    /// Estimated total cost of a route through the cell.
    f_score: u32,
    /// Sequence number assigned when the cell joined the open set.
    order: u64,
    /// Cell the entry refers to.
    point: Coord,
}

/// Bookkeeping of one search invocation.
///
/// The queue may hold outdated entries for cells whose score improved or that were already
/// expanded; [`pop_best`](SearchState::pop_best) discards them lazily.
struct SearchState {
    /// Cell the search is heading for.
    goal: Coord,
    /// Candidate cells keyed by `(f_score, order)`, smallest first.
    queue: BinaryHeap<Reverse<OpenEntry>>,
    /// Members of the open set along with the sequence number they joined with.
    open: HashMap<Coord, u64>,
    /// Sequence number handed to the next cell joining the open set.
    next_order: u64,
    /// Predecessor of every reached cell along the best route known to it.
    came_from: HashMap<Coord, Coord>,
    /// Best known cost from the start to every reached cell.
    g_score: HashMap<Coord, u32>,
    /// Best known cost plus the estimate to the goal for every reached cell.
    f_score: HashMap<Coord, u32>,
}

impl SearchState {
    /// Seeds the state with the start cell as the only member of the open set.
    fn new(start: Coord, goal: Coord) -> Self {
        let mut state = Self {
            goal,
            queue: BinaryHeap::new(),
            open: HashMap::new(),
            next_order: 0,
            came_from: HashMap::new(),
            g_score: HashMap::new(),
            f_score: HashMap::new(),
        };
        state.record(start, 0);

        state
    }

    /// Stores a new best cost for a cell and makes sure it is a member of the open set.
    ///
    /// A cell that is already open keeps the sequence number it joined with, so an improved score
    /// does not move it behind cells of equal estimate.
    fn record(&mut self, point: Coord, g_score: u32) {
        let f_score = g_score + manhattan_distance(point, self.goal);
        let _ = self.g_score.insert(point, g_score);
        let _ = self.f_score.insert(point, f_score);

        let order = match self.open.get(&point) {
            Some(&order) => order,
            None => {
                let order = self.next_order;
                self.next_order += 1;
                let _ = self.open.insert(point, order);
                order
            }
        };

        self.queue.push(Reverse(OpenEntry {
            f_score,
            order,
            point,
        }));
    }

    /// Removes the most promising member of the open set and returns it with its cost so far.
    fn pop_best(&mut self) -> Option<(Coord, u32)> {
        while let Some(Reverse(entry)) = self.queue.pop() {
            let is_current = self.open.get(&entry.point) == Some(&entry.order)
                && self.f_score.get(&entry.point) == Some(&entry.f_score);
            if !is_current {
                continue;
            }

            let _ = self.open.remove(&entry.point);
            if let Some(&g_score) = self.g_score.get(&entry.point) {
                return Some((entry.point, g_score));
            }
        }

        None
    }

    /// Offers `current` as the predecessor of `neighbour` at the given cost.
    ///
    /// The offer is taken when the neighbour has not been reached before or when the cost beats
    /// the best known one.
    fn relax(&mut self, current: Coord, neighbour: Coord, tentative_g: u32) {
        let improves = self
            .g_score
            .get(&neighbour)
            .is_none_or(|&known| tentative_g < known);

        if improves {
            let _ = self.came_from.insert(neighbour, current);
            self.record(neighbour, tentative_g);
        }
    }
}

/// Finds a shortest route from `start` to `goal` and marks it in the grid.
///
/// The open cell with the lowest estimated total cost is expanded first; ties go to the cell that
/// joined the open set earliest, and neighbors are visited left, right, up, down. Together these
/// make the chosen route deterministic when several shortest routes exist. The search stops as
/// soon as the goal is selected for expansion.
///
/// # Errors
///
/// Returns [`MazeError::OutOfBounds`](crate::MazeError::OutOfBounds) only if the grid reports a
/// cell inside its bounds as unreadable, which a well-formed [`Grid`] never does.
pub fn search(grid: &mut Grid, start: Coord, goal: Coord) -> Result<Solution> {
    let mut state = SearchState::new(start, goal);
    let mut expanded = 0;

    while let Some((current, current_g)) = state.pop_best() {
        if current == goal {
            let steps = reconstruct_path(grid, &state.came_from, current);
            debug!("reached goal {goal} in {steps} steps after expanding {expanded} cells");

            return Ok(Solution::Found { steps, expanded });
        }

        expanded += 1;
        trace!("expanding {current} with g = {current_g}");

        for offset in NEIGHBOR_OFFSETS {
            let neighbour = current + offset;

            if !grid.is_inside(neighbour) || !grid.cell_at(neighbour)?.is_walkable() {
                continue;
            }

            state.relax(current, neighbour, current_g + STEP_COST);
        }
    }

    debug!("open set exhausted after expanding {expanded} cells without reaching {goal}");

    Ok(Solution::Unreachable { expanded })
}

/// Walks the predecessor map back from `current`, marking every cell on the way.
///
/// The walk stops at the first cell without a predecessor, which is the start. Returns the number
/// of moves walked.
fn reconstruct_path(
    grid: &mut Grid,
    came_from: &HashMap<Coord, Coord>,
    mut current: Coord,
) -> u32 {
    let mut steps = 0;

    while let Some(&previous) = came_from.get(&current) {
        grid.mark_path(current);
        current = previous;
        steps += 1;
    }

    steps
}
