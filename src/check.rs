use std::fmt;
use std::io::Read;
use log::debug;
use crate::error::InputError;
use crate::graph::Graph;
use crate::{scan, traversal};

/// How the 2-coloring is attempted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One row-major sweep over all vertex pairs seeded at vertex 0 (`scan::single_pass`).
    /// Reproduces the classic checker verbatim, including its false negatives.
    #[default]
    SinglePass,
    /// Breadth-first coloring per connected component (`traversal::two_color`).
    Traversal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Possible,
    Impossible,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Possible => write!(f, "Possible"),
            Verdict::Impossible => write!(f, "Impossible"),
        }
    }
}

pub fn check(g: &Graph, strategy: Strategy) -> Verdict {
    let result = match strategy {
        Strategy::SinglePass => scan::single_pass(g),
        Strategy::Traversal => traversal::two_color(g),
    };
    debug!("{:?} finished, conflict: {:?}", strategy, result.conflict);
    if result.is_conflict_free() {
        Verdict::Possible
    } else {
        Verdict::Impossible
    }
}

/// Parses a graph from `reader` and checks it.
pub fn run<R: Read>(reader: R, strategy: Strategy) -> Result<Verdict, InputError> {
    let g = Graph::from_reader(reader)?;
    Ok(check(&g, strategy))
}
