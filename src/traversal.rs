use std::collections::VecDeque;
use log::debug;
use crate::graph::Graph;
use crate::scan::{Color, Scan};

/// Breadth-first 2-coloring, restarted at the smallest vertex of every connected component.
/// Unlike `scan::single_pass` this accepts exactly the bipartite graphs. The reported
/// conflict is the first edge found joining two vertices on the same side.
pub fn two_color(g: &Graph) -> Scan {
    let mut col = vec![Color::Uncolored; g.n];
    for comp in g.components() {
        let s = comp[0];
        col[s] = Color::Positive;
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(s);
        while let Some(u) = q.pop_front() {
            for v in g.neighbors(u) {
                if col[v] == Color::Uncolored {
                    col[v] = col[u].opposite();
                    q.push_back(v);
                } else if col[v] == col[u] {
                    debug!("odd cycle through edge ({}, {}) in component of {}", u, v, s);
                    return Scan { colors: col, conflict: Some((u, v)) };
                }
            }
        }
    }
    Scan { colors: col, conflict: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(n: usize, edges: &[(usize, usize)]) -> Scan {
        two_color(&Graph::from_edges(n, edges).unwrap())
    }

    #[test]
    fn colors_every_component() {
        let s = color(5, &[(1, 2), (3, 4)]);
        assert!(s.is_conflict_free());
        assert!(s.colors.iter().all(|&c| c != Color::Uncolored));
        assert_ne!(s.colors[1], s.colors[2]);
        assert_ne!(s.colors[3], s.colors[4]);
    }

    #[test]
    fn finds_odd_cycle_away_from_vertex_zero() {
        let s = color(4, &[(1, 2), (2, 3), (3, 1)]);
        assert!(s.conflict.is_some());
    }

    #[test]
    fn even_cycle_and_tree_are_bipartite() {
        assert!(color(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).is_conflict_free());
        assert!(color(5, &[(0, 1), (0, 2), (2, 3), (2, 4)]).is_conflict_free());
    }

    #[test]
    fn self_loop_is_not_bipartite() {
        assert_eq!(color(3, &[(0, 1), (2, 2)]).conflict, Some((2, 2)));
    }
}
