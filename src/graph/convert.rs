//! Pairwise converters between representation bodies.
//!
//! Every converter is a pure function over a body that satisfies the shape
//! rules of its [RepresentationKind](super::RepresentationKind).
//! The adjacency matrix is the hub: every other form converts to and from it directly.

use super::{Body, Cell};

/// Adjacency matrix to incidence matrix.
///
/// Vertex pairs `(i, j)` with `i < j` are scanned in increasing order.
/// A pair connected both ways yields an edge column (`+1`, `+1`).
/// A pair connected one way yields an arc column,
/// `+1` on the source row and `-1` on the sink row.
pub fn adjacency_matrix_to_incidence(matrix: &[Vec<Cell>]) -> Body {
    let n = matrix.len();
    let mut res: Body = vec![vec![]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let forward = matrix[i][j] == 1;
            let backward = matrix[j][i] == 1;
            let column = match (forward, backward) {
                (true, true) => Some(((i, 1), (j, 1))),
                (true, false) => Some(((i, 1), (j, -1))),
                (false, true) => Some(((j, 1), (i, -1))),
                (false, false) => None,
            };
            if let Some(((a, va), (b, vb))) = column {
                for (row, cells) in res.iter_mut().enumerate() {
                    let cell = if row == a {
                        va
                    } else if row == b {
                        vb
                    } else {
                        0
                    };
                    cells.push(cell);
                }
            }
        }
    }
    res
}

/// Adjacency matrix to adjacency list, neighbors ascending and 1-based.
pub fn adjacency_matrix_to_list(matrix: &[Vec<Cell>]) -> Body {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell == 1)
                .map(|(j, _)| j as Cell + 1)
                .collect()
        })
        .collect()
}

/// Adjacency matrix to edge list, in row-major order.
///
/// Returns the list together with the vertex count,
/// which an edge list cannot recover on its own.
pub fn adjacency_matrix_to_edge_list(matrix: &[Vec<Cell>]) -> (Body, usize) {
    let mut res = vec![];
    for (i, row) in matrix.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if *cell == 1 {
                res.push(vec![i as Cell + 1, j as Cell + 1]);
            }
        }
    }
    (res, matrix.len())
}

/// Incidence matrix to adjacency matrix.
///
/// Columns must already be clean, see [clean_incidence_matrix](super::clean_incidence_matrix).
/// Columns with fewer than two non-zero cells are skipped.
pub fn incidence_to_adjacency_matrix(matrix: &[Vec<Cell>]) -> Body {
    let n = matrix.len();
    let columns = matrix.first().map_or(0, |row| row.len());
    let mut res: Body = vec![vec![0; n]; n];
    for col in 0..columns {
        let mut ends = (0..n)
            .filter(|row| matrix[*row][col].abs() == 1)
            .map(|row| (matrix[row][col], row));
        let (first, second) = match (ends.next(), ends.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => continue,
        };
        match (first.0, second.0) {
            (1, 1) => {
                res[first.1][second.1] = 1;
                res[second.1][first.1] = 1;
            }
            (1, -1) => res[first.1][second.1] = 1,
            _ => res[second.1][first.1] = 1,
        }
    }
    res
}

/// Adjacency list to adjacency matrix.
pub fn adjacency_list_to_matrix(list: &[Vec<Cell>]) -> Body {
    let n = list.len();
    let mut res: Body = vec![vec![0; n]; n];
    for (i, neighbors) in list.iter().enumerate() {
        for v in neighbors {
            res[i][(*v - 1) as usize] = 1;
        }
    }
    res
}

/// Edge list to a `vertex_count x vertex_count` adjacency matrix.
pub fn edge_list_to_adjacency_matrix(list: &[Vec<Cell>], vertex_count: usize) -> Body {
    let mut res: Body = vec![vec![0; vertex_count]; vertex_count];
    for row in list {
        res[(row[0] - 1) as usize][(row[1] - 1) as usize] = 1;
    }
    res
}
