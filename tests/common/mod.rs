//! Problem fixtures shared by the integration tests.
#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::Rng;
use u_localsearch::sa::{AnnealingObserver, LevelReport};
use u_localsearch::{Neighbors, Problem, SearchError};

// ===========================================================================
// N-queens: one queen per column, state[i] is the row of column i
// ===========================================================================

pub struct Queens {
    pub n: usize,
}

impl Queens {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Problem for Queens {
    type State = Vec<usize>;

    fn random_state<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..self.n).collect();
        rows.shuffle(rng);
        rows
    }

    /// Every pairwise swap, in lexicographic `(i, j)` order.
    fn neighbors<'a, R: Rng>(
        &'a self,
        state: &'a Vec<usize>,
        _rng: &'a mut R,
    ) -> Result<Neighbors<'a, Vec<usize>>, SearchError> {
        let n = self.n;
        Ok(Box::new(
            (0..n)
                .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
                .map(move |(i, j)| {
                    let mut next = state.clone();
                    next.swap(i, j);
                    next
                }),
        ))
    }

    fn neighbor_bound(&self, _state: &Vec<usize>) -> Option<usize> {
        Some(self.n * (self.n - 1) / 2)
    }

    fn random_neighbor<R: Rng>(
        &self,
        state: &Vec<usize>,
        amplitude: f64,
        temperature_fraction: f64,
        rng: &mut R,
    ) -> Result<Vec<usize>, SearchError> {
        let mut next = state.clone();
        let swaps = 1 + (amplitude * temperature_fraction / 10.0) as usize;
        for _ in 0..swaps {
            let i = rng.random_range(0..self.n);
            let mut j = rng.random_range(0..self.n - 1);
            if j >= i {
                j += 1;
            }
            next.swap(i, j);
        }
        Ok(next)
    }

    /// Number of queen pairs sharing a diagonal.
    fn cost(&self, rows: &Vec<usize>) -> f64 {
        let mut conflicts = 0usize;
        for i in 0..rows.len() {
            for j in (i + 1)..rows.len() {
                if rows[i].abs_diff(rows[j]) == j - i {
                    conflicts += 1;
                }
            }
        }
        conflicts as f64
    }
}

// ===========================================================================
// Graph layout: vertex coordinates on a square canvas
// ===========================================================================

const MARGIN: i64 = 10;
const NEIGHBOR_STEP: i64 = 10;

pub struct GraphLayout {
    pub vertices: usize,
    pub edges: Vec<(usize, usize)>,
    pub size: i64,
}

impl GraphLayout {
    pub fn new(vertices: usize, edges: Vec<(usize, usize)>, size: i64) -> Self {
        Self {
            vertices,
            edges,
            size,
        }
    }

    /// Eight vertices, eleven edges.
    pub fn sample() -> Self {
        Self::new(
            8,
            vec![
                (1, 6),
                (4, 5),
                (7, 4),
                (3, 1),
                (7, 6),
                (0, 4),
                (2, 5),
                (7, 1),
                (5, 0),
                (2, 1),
                (7, 5),
            ],
            400,
        )
    }

    fn clamp(&self, v: i64) -> i64 {
        v.clamp(MARGIN, self.size - MARGIN)
    }

    fn point(state: &[i64], v: usize) -> (f64, f64) {
        (state[2 * v] as f64, state[2 * v + 1] as f64)
    }

    pub fn crossings(&self, state: &[i64]) -> f64 {
        let mut total = 0;
        for (k, &(a0, a1)) in self.edges.iter().enumerate() {
            for &(b0, b1) in &self.edges[k + 1..] {
                let (x0a, y0a) = Self::point(state, a0);
                let (xfa, yfa) = Self::point(state, a1);
                let (x0b, y0b) = Self::point(state, b0);
                let (xfb, yfb) = Self::point(state, b1);
                let den = (xfa - x0a) * (yfb - y0b) - (xfb - x0b) * (yfa - y0a);
                if den == 0.0 {
                    continue;
                }
                let ua = ((xfb - x0b) * (y0a - y0b) - (yfb - y0b) * (x0a - x0b)) / den;
                let ub = ((xfa - x0a) * (y0a - y0b) - (yfa - y0a) * (x0a - x0b)) / den;
                if 0.0 < ua && ua < 1.0 && 0.0 < ub && ub < 1.0 {
                    total += 1;
                }
            }
        }
        total as f64
    }

    pub fn proximity(&self, state: &[i64]) -> f64 {
        let min_dist = 50.0;
        let mut total = 0.0;
        for v in 0..self.vertices {
            for w in (v + 1)..self.vertices {
                let (x1, y1) = Self::point(state, v);
                let (x2, y2) = Self::point(state, w);
                let dist = (x1 - x2).hypot(y1 - y2);
                if dist < min_dist {
                    total += 1.0 - dist / min_dist;
                }
            }
        }
        total
    }

    pub fn narrow_angles(&self, state: &[i64]) -> f64 {
        let min_angle = std::f64::consts::PI / 6.0;
        let mut penalty = 0.0;
        for v in 0..self.vertices {
            let (vx, vy) = Self::point(state, v);
            let vectors: Vec<(f64, f64)> = self
                .edges
                .iter()
                .filter_map(|&(a, b)| match (a == v, b == v) {
                    (true, _) => Some(b),
                    (_, true) => Some(a),
                    _ => None,
                })
                .map(|other| {
                    let (ox, oy) = Self::point(state, other);
                    (ox - vx, oy - vy)
                })
                .collect();
            for (k, &(ax, ay)) in vectors.iter().enumerate() {
                for &(bx, by) in &vectors[k + 1..] {
                    let (ma, mb) = (ax.hypot(ay), bx.hypot(by));
                    if ma == 0.0 || mb == 0.0 {
                        continue;
                    }
                    let cos = ((ax * bx + ay * by) / (ma * mb)).clamp(-1.0, 1.0);
                    let angle = cos.acos();
                    if angle < min_angle {
                        penalty += (min_angle - angle) / min_angle;
                    }
                }
            }
        }
        penalty
    }

    pub fn long_edges(&self, state: &[i64]) -> f64 {
        let max_len = self.size as f64 * 0.4;
        self.edges
            .iter()
            .map(|&(a, b)| {
                let (x1, y1) = Self::point(state, a);
                let (x2, y2) = Self::point(state, b);
                let len = (x2 - x1).hypot(y2 - y1);
                if len > max_len {
                    (len - max_len) / max_len
                } else {
                    0.0
                }
            })
            .sum()
    }
}

impl Problem for GraphLayout {
    type State = Vec<i64>;

    fn random_state<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        (0..2 * self.vertices)
            .map(|_| rng.random_range(MARGIN..=self.size - MARGIN))
            .collect()
    }

    /// One jittered copy per coordinate.
    fn neighbors<'a, R: Rng>(
        &'a self,
        state: &'a Vec<i64>,
        rng: &'a mut R,
    ) -> Result<Neighbors<'a, Vec<i64>>, SearchError> {
        Ok(Box::new((0..state.len()).map(move |i| {
            let mut next = state.clone();
            next[i] = self.clamp(next[i] + rng.random_range(-NEIGHBOR_STEP..=NEIGHBOR_STEP));
            next
        })))
    }

    fn neighbor_bound(&self, state: &Vec<i64>) -> Option<usize> {
        Some(state.len())
    }

    fn random_neighbor<R: Rng>(
        &self,
        state: &Vec<i64>,
        amplitude: f64,
        _temperature_fraction: f64,
        rng: &mut R,
    ) -> Result<Vec<i64>, SearchError> {
        let d = amplitude.round().max(1.0) as i64;
        let v = rng.random_range(0..self.vertices);
        let mut next = state.clone();
        next[2 * v] = self.clamp(next[2 * v] + rng.random_range(-d..=d));
        next[2 * v + 1] = self.clamp(next[2 * v + 1] + rng.random_range(-d..=d));
        Ok(next)
    }

    fn cost(&self, state: &Vec<i64>) -> f64 {
        1.0 * self.crossings(state)
            + 0.3 * self.proximity(state)
            + 0.5 * self.narrow_angles(state)
            + 0.2 * self.long_edges(state)
    }
}

// ===========================================================================
// Tether: two vertices joined by one edge, cost = their distance
// ===========================================================================

pub struct Tether {
    pub size: i64,
}

impl Problem for Tether {
    type State = [i64; 4];

    fn random_state<R: Rng>(&self, rng: &mut R) -> [i64; 4] {
        std::array::from_fn(|_| rng.random_range(0..=self.size))
    }

    fn random_neighbor<R: Rng>(
        &self,
        state: &[i64; 4],
        amplitude: f64,
        _temperature_fraction: f64,
        rng: &mut R,
    ) -> Result<[i64; 4], SearchError> {
        let d = amplitude.round().max(1.0) as i64;
        let mut next = *state;
        let i = rng.random_range(0..4);
        next[i] = (next[i] + rng.random_range(-d..=d)).clamp(0, self.size);
        Ok(next)
    }

    fn cost(&self, s: &[i64; 4]) -> f64 {
        ((s[0] - s[2]) as f64).hypot((s[1] - s[3]) as f64)
    }
}

// ===========================================================================
// Observer that keeps every level report
// ===========================================================================

#[derive(Default)]
pub struct LevelLog {
    pub levels: Vec<LevelReport>,
}

impl AnnealingObserver for LevelLog {
    fn on_level(&mut self, report: &LevelReport) {
        self.levels.push(*report);
    }
}
