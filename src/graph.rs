use std::collections::VecDeque;
use std::io::Read;
use bit_set::BitSet;
use log::debug;
use crate::error::{Field, InputError};

/// Undirected graph on vertices 0, ..., n-1 stored as a dense adjacency matrix.
/// Every row is a bit set, so `adj[u].contains(v)` is the matrix entry (u, v).
#[derive(Clone, Debug)]
pub struct Graph {
    pub n: usize,
    adj: Vec<BitSet>,
}

impl Graph {
    /// Graph with n isolated vertices.
    pub fn new(n: usize) -> Graph {
        Graph { n, adj: (0..n).map(|_| BitSet::with_capacity(n)).collect() }
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Graph, InputError> {
        let mut g = Graph::new(n);
        for (index, (u, v)) in edges.iter().cloned().enumerate() {
            if u >= n || v >= n {
                let (u, v) = (saturate(u), saturate(v));
                return Err(InputError::VertexOutOfRange { index, u, v, n });
            }
            g.add_edge(u, v);
        }
        Ok(g)
    }

    /// Reads `n e u_1 v_1 ... u_e v_e` as whitespace separated integers.
    /// Anything after the last edge is ignored.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Graph, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_ascii_whitespace();

        let n = read_count(&mut tokens, Field::VertexCount)?;
        let e = read_count(&mut tokens, Field::EdgeCount)?;
        let mut g = Graph::new(n);
        for index in 0..e {
            let u = read_int(&mut tokens, Field::Endpoint { edge: index, side: 0 })?;
            let v = read_int(&mut tokens, Field::Endpoint { edge: index, side: 1 })?;
            match (g.vertex(u), g.vertex(v)) {
                (Some(a), Some(b)) => g.add_edge(a, b),
                _ => return Err(InputError::VertexOutOfRange { index, u, v, n }),
            }
        }

        let trailing = tokens.count();
        if trailing > 0 {
            debug!("ignoring {} trailing tokens after the last edge", trailing);
        }
        debug!("read graph with {} vertices and {} edges", n, g.edge_count());
        Ok(g)
    }

    pub fn new_from_stdin() -> Result<Graph, InputError> {
        Graph::from_reader(std::io::stdin().lock())
    }

    fn vertex(&self, x: i64) -> Option<usize> {
        usize::try_from(x).ok().filter(|&u| u < self.n)
    }

    /// Sets both (u, v) and (v, u). Repeated edges are absorbed.
    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adj[u].insert(v);
        self.adj[v].insert(u);
    }

    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u].contains(v)
    }

    /// Neighbors of u in increasing order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[u].iter()
    }

    /// Number of distinct undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        let mut twice = 0;
        let mut loops = 0;
        for u in 0..self.n {
            twice += self.adj[u].len();
            if self.adj[u].contains(u) {
                loops += 1;
            }
        }
        (twice + loops) / 2
    }

    /// Returns the connected components, each listed in BFS order from its smallest vertex.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.n];
        let mut components = Vec::new();
        for s in 0..self.n {
            if seen[s] {
                continue;
            }
            seen[s] = true;
            let mut comp = Vec::new();
            let mut q: VecDeque<usize> = VecDeque::new();
            q.push_back(s);
            while let Some(u) = q.pop_front() {
                comp.push(u);
                for v in self.neighbors(u) {
                    if !seen[v] {
                        seen[v] = true;
                        q.push_back(v);
                    }
                }
            }
            components.push(comp);
        }
        components
    }
}

fn saturate(x: usize) -> i64 {
    i64::try_from(x).unwrap_or(i64::MAX)
}

fn read_int<'a, I>(tokens: &mut I, what: Field) -> Result<i64, InputError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(InputError::MissingToken { what })?;
    token.parse::<i64>().map_err(|_| InputError::Malformed { what, token: token.to_string() })
}

fn read_count<'a, I>(tokens: &mut I, what: Field) -> Result<usize, InputError>
where
    I: Iterator<Item = &'a str>,
{
    let value = read_int(tokens, what)?;
    usize::try_from(value).map_err(|_| InputError::Negative { what, value })
}
