//! Normalization applied to raw bodies before a [Graph](super::Graph) takes them over.
//!
//! These are construction rules, not conversions:
//! they run once per input and never on converter output.

use super::{Body, Cell};
use ahash::RandomState;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

/// Drops malformed and duplicate columns of an incidence matrix, in place.
///
/// A well-formed column has exactly two non-zero cells, both `+1` (an edge)
/// or one `+1` and one `-1` (an arc).
/// Among columns joining the same pair of vertices the first one wins,
/// unless two columns are opposite arcs, e.g. `(+1, -1)` followed by `(-1, +1)`.
///
/// Returns how many columns were dropped.
pub fn clean_incidence_matrix(matrix: &mut Body) -> usize {
    let columns = matrix.first().map_or(0, |row| row.len());
    let mut kept: Vec<Vec<Cell>> = Vec::with_capacity(columns);
    let mut malformed = 0;
    let mut duplicated = 0;
    for col in 0..columns {
        let column: Vec<Cell> = matrix.iter().map(|row| row[col]).collect();
        if !is_well_formed(&column) {
            warn!(column = col + 1, "dropping malformed incidence column");
            malformed += 1;
            continue;
        }
        if kept.iter().any(|earlier| duplicates(earlier, &column)) {
            warn!(column = col + 1, "dropping duplicate incidence column");
            duplicated += 1;
            continue;
        }
        kept.push(column);
    }
    for (i, row) in matrix.iter_mut().enumerate() {
        *row = kept.iter().map(|column| column[i]).collect();
    }
    debug!(kept = kept.len(), malformed, duplicated, "cleaned incidence matrix");
    malformed + duplicated
}

fn is_well_formed(column: &[Cell]) -> bool {
    let mut positive = 0;
    let mut negative = 0;
    for cell in column {
        match *cell {
            0 => {}
            1 => positive += 1,
            -1 => negative += 1,
            _ => return false,
        }
    }
    matches!((positive, negative), (2, 0) | (1, 1))
}

/// Whether `later` joins the same vertices as `earlier` without being its reversed arc.
///
/// Rows are scanned top down.
/// A row where only one of the columns is set means different endpoints.
/// A row of opposite signs means reversed arcs, unless a row of equal signs came first.
fn duplicates(earlier: &[Cell], later: &[Cell]) -> bool {
    let mut same_sign_seen = false;
    let mut res = true;
    for (a, b) in earlier.iter().zip(later.iter()) {
        if (a + b).abs() == 1 {
            return false;
        }
        if a.abs() == 1 {
            if a + b == 0 {
                if !same_sign_seen {
                    res = false;
                }
            } else {
                same_sign_seen = true;
            }
        }
    }
    res
}

/// Mirrors and de-duplicates the rows of an edge list, in place.
///
/// For undirected graphs every `(u, v)` gains a `(v, u)` appended after the input rows.
/// Afterwards rows equal as ordered pairs are removed, keeping the first one.
///
/// Returns how many rows were removed.
pub fn clean_edge_list(list: &mut Body, oriented: bool) -> usize {
    if !oriented {
        let mirrored: Vec<Vec<Cell>> = list.iter().map(|row| vec![row[1], row[0]]).collect();
        list.extend(mirrored);
    }
    let before = list.len();
    let mut seen: HashSet<(Cell, Cell), RandomState> =
        HashSet::with_capacity_and_hasher(before, RandomState::new());
    list.retain(|row| seen.insert((row[0], row[1])));
    let removed = before - list.len();
    debug!(rows = list.len(), removed, oriented, "cleaned edge list");
    removed
}

/// Sorts and de-duplicates every row of an adjacency list, in place.
///
/// For undirected graphs a neighbor `v` listed in row `u` also puts `u` into row `v`.
pub fn normalize_adjacency_list(list: &mut Body, oriented: bool) {
    let mut rows: Vec<BTreeSet<Cell>> = vec![BTreeSet::new(); list.len()];
    for (i, neighbors) in list.iter().enumerate() {
        for v in neighbors {
            rows[i].insert(*v);
            if !oriented {
                rows[(*v - 1) as usize].insert(i as Cell + 1);
            }
        }
    }
    for (row, set) in list.iter_mut().zip(rows) {
        *row = set.into_iter().collect();
    }
}
