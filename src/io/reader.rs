use super::{MAX_ARCS, MAX_EDGES, MAX_VERTICES};
use crate::{error::ReadError, graph::*};
use std::io::BufRead;
use tracing::debug;

/// Reads a whole graph of the given representation from `reader`.
pub fn read_graph<R>(
    mut reader: R,
    kind: RepresentationKind,
    oriented: bool,
) -> Result<Graph, ReadError>
where
    R: BufRead,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_graph(&text, kind, oriented)
}

/// Parses a whole graph of the given representation from `text`.
///
/// Tokens after the last expected value are ignored.
pub fn parse_graph(
    text: &str,
    kind: RepresentationKind,
    oriented: bool,
) -> Result<Graph, ReadError> {
    let mut tokens = Tokens::new(text);
    let vertices = tokens.vertex_count()?;
    let graph = match kind {
        RepresentationKind::AdjacencyMatrix => {
            Graph::from_adjacency_matrix(adjacency_matrix(&mut tokens, vertices, oriented)?)
        }
        RepresentationKind::IncidenceMatrix => {
            let edges = tokens.edge_count(MAX_EDGES)?;
            let body = incidence_matrix(&mut tokens, vertices, edges, oriented)?;
            Graph::from_incidence_matrix(body)
        }
        RepresentationKind::AdjacencyList => {
            Graph::from_adjacency_list(adjacency_list(&mut tokens, vertices)?, oriented)
        }
        RepresentationKind::EdgeList => {
            let max = if oriented { MAX_ARCS } else { MAX_EDGES };
            let edges = tokens.edge_count(max)?;
            let body = edge_list(&mut tokens, vertices, edges)?;
            Graph::from_edge_list(body, vertices, oriented)
        }
    };
    debug!(%kind, vertices, oriented, "parsed graph");
    Ok(graph)
}

struct Tokens<'a> {
    it: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            it: text.split_whitespace(),
        }
    }

    fn next_int(&mut self) -> Result<i64, ReadError> {
        let token = self.it.next().ok_or(ReadError::UnexpectedEnd)?;
        token.parse().map_err(|_| ReadError::InvalidNumber {
            token: token.to_owned(),
        })
    }

    fn vertex_count(&mut self) -> Result<usize, ReadError> {
        let count = self.next_int()?;
        if count < 1 || count > MAX_VERTICES as i64 {
            return Err(ReadError::VertexCountOutOfRange {
                count,
                max: MAX_VERTICES,
            });
        }
        Ok(count as usize)
    }

    fn edge_count(&mut self, max: usize) -> Result<usize, ReadError> {
        let count = self.next_int()?;
        if count < 0 || count > max as i64 {
            return Err(ReadError::EdgeCountOutOfRange { count, max });
        }
        Ok(count as usize)
    }

    /// Reads the value at 1-based `(row, column)` and keeps it only if `valid` accepts it.
    fn cell<F>(&mut self, row: usize, column: usize, valid: F) -> Result<Cell, ReadError>
    where
        F: FnOnce(i64) -> bool,
    {
        let value = self.next_int()?;
        if valid(value) {
            Ok(value as Cell)
        } else {
            Err(ReadError::InvalidValue { row, column, value })
        }
    }
}

fn adjacency_matrix(tokens: &mut Tokens, n: usize, oriented: bool) -> Result<Body, ReadError> {
    let mut matrix: Body = vec![vec![0; n]; n];
    for i in 0..n {
        for j in 0..n {
            let mirrored = matrix[j][i] as i64;
            matrix[i][j] = tokens.cell(i + 1, j + 1, |value| {
                let in_range = value == 0 || value == 1;
                let loop_free = value == 0 || i != j;
                let symmetric = oriented || i <= j || value == mirrored;
                in_range && loop_free && symmetric
            })?;
        }
    }
    Ok(matrix)
}

fn incidence_matrix(
    tokens: &mut Tokens,
    n: usize,
    m: usize,
    oriented: bool,
) -> Result<Body, ReadError> {
    let mut matrix: Body = vec![vec![0; m]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = tokens.cell(i + 1, j + 1, |value| match value {
                0 | 1 => true,
                -1 => oriented,
                _ => false,
            })?;
        }
    }
    Ok(matrix)
}

fn adjacency_list(tokens: &mut Tokens, n: usize) -> Result<Body, ReadError> {
    let mut list: Body = Vec::with_capacity(n);
    for i in 0..n {
        let count = tokens.next_int()?;
        if count < 0 || count > n as i64 {
            return Err(ReadError::InvalidNeighborCount { row: i + 1, count });
        }
        let mut row = Vec::with_capacity(count as usize);
        for j in 0..count as usize {
            row.push(tokens.cell(i + 1, j + 1, |value| {
                value >= 1 && value <= n as i64 && value != (i + 1) as i64
            })?);
        }
        list.push(row);
    }
    Ok(list)
}

fn edge_list(tokens: &mut Tokens, n: usize, m: usize) -> Result<Body, ReadError> {
    let in_range = |value: i64| value >= 1 && value <= n as i64;
    let mut list: Body = Vec::with_capacity(m);
    for i in 0..m {
        let source = tokens.cell(i + 1, 1, in_range)?;
        let sink = tokens.cell(i + 1, 2, |value| in_range(value) && value != source as i64)?;
        list.push(vec![source, sink]);
    }
    Ok(list)
}
