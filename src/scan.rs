use itertools::{iproduct, Itertools};
use log::debug;
use crate::graph::Graph;

/// Side of a vertex in a 2-coloring. `Uncolored` is its own opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Uncolored,
    Positive,
    Negative,
}

impl Color {
    #[inline(always)]
    pub fn opposite(self) -> Color {
        match self {
            Color::Uncolored => Color::Uncolored,
            Color::Positive => Color::Negative,
            Color::Negative => Color::Positive,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Color::Uncolored => 0,
            Color::Positive => 1,
            Color::Negative => -1,
        }
    }
}

/// Outcome of one adjacency-pair sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    pub colors: Vec<Color>,
    /// First pair (i, j) in sweep order found adjacent with equal colors.
    pub conflict: Option<(usize, usize)>,
}

impl Scan {
    pub fn is_conflict_free(&self) -> bool {
        self.conflict.is_none()
    }
}

/// Sweeps every ordered pair (i, j) in row-major order exactly once, with vertex 0 seeded
/// positive. An adjacent pair with equal colors, both uncolored included, is a conflict; an
/// uncolored j takes the opposite of i. The sweep is not repeated until stable and does not
/// reseed per component, so a bipartite graph can still produce a conflict.
pub fn single_pass(g: &Graph) -> Scan {
    let n = g.n;
    let mut col = vec![Color::Uncolored; n];
    if n > 0 {
        col[0] = Color::Positive;
    }
    let mut conflict = None;
    for (i, j) in iproduct!(0..n, 0..n) {
        if !g.has_edge(i, j) {
            continue;
        }
        if col[j] == col[i] {
            if conflict.is_none() {
                debug!("conflict at ({}, {}), both {:?}", i, j, col[i]);
                conflict = Some((i, j));
            }
        } else if col[j] == Color::Uncolored {
            col[j] = col[i].opposite();
        }
    }
    debug!("sweep coloring: {}", col.iter().map(|c| c.sign()).join(" "));
    Scan { colors: col, conflict }
}
