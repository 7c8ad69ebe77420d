use crate::grid::Pos;

/// A cyclically patrolling agent. Constructed once at load time and
/// never mutated; position queries are pure functions of the timestep,
/// so concurrent queries from independent searches are safe.
pub struct Guard {
    id: String,
    start: Pos,
    patrol: Vec<(i32, i32)>,
    // prefix[k] = net displacement after the first k moves of one cycle;
    // prefix[len] is the displacement of a whole cycle.
    prefix: Vec<(i64, i64)>,
}

impl Guard {
    pub fn new(id: String, start: Pos, patrol: Vec<(i32, i32)>) -> Self {
        let mut prefix = Vec::with_capacity(patrol.len() + 1);
        let mut acc = (0i64, 0i64);
        prefix.push(acc);
        for &(dr, dc) in &patrol {
            acc.0 += dr as i64;
            acc.1 += dc as i64;
            prefix.push(acc);
        }
        Guard {
            id,
            start,
            patrol,
            prefix,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn cycle_len(&self) -> usize {
        self.patrol.len()
    }

    // Closed form: t = q * len + rem, so the displacement is q whole
    // cycles plus the rem-step prefix. O(1) per query regardless of t.
    fn displacement(&self, t: u64) -> (i64, i64) {
        if self.patrol.is_empty() {
            return (0, 0);
        }
        let len = self.patrol.len() as u64;
        let q = (t / len) as i64;
        let rem = (t % len) as usize;
        let cycle = self.prefix[self.patrol.len()];
        let partial = self.prefix[rem];
        (q * cycle.0 + partial.0, q * cycle.1 + partial.1)
    }

    /// The guard's position after `t` moves of its cyclic route.
    /// Routes are trusted to keep the guard on the grid.
    pub fn position_at(&self, t: u64) -> Pos {
        let (dr, dc) = self.displacement(t);
        Pos {
            r: (self.start.r as i64 + dr).max(0) as usize,
            c: (self.start.c as i64 + dc).max(0) as usize,
        }
    }

    /// Whether the guard stands on `pos` at timestep `t`. Compared in
    /// signed space so an off-grid route never aliases cell (0, 0).
    pub fn occupies(&self, pos: Pos, t: u64) -> bool {
        let (dr, dc) = self.displacement(t);
        self.start.r as i64 + dr == pos.r as i64 && self.start.c as i64 + dc == pos.c as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Clockwise square: R,R,D,D,L,L,U,U.
    const SQUARE: [(i32, i32); 8] = [
        (0, 1),
        (0, 1),
        (1, 0),
        (1, 0),
        (0, -1),
        (0, -1),
        (-1, 0),
        (-1, 0),
    ];

    fn square_guard() -> Guard {
        Guard::new("G1".into(), Pos { r: 2, c: 2 }, SQUARE.to_vec())
    }

    #[test]
    fn cycle_multiples_return_to_start() {
        let guard = square_guard();
        for k in 0..5u64 {
            assert_eq!(guard.position_at(k * 8), guard.start());
        }
    }

    #[test]
    fn closed_form_matches_step_replay() {
        let guard = square_guard();
        let mut pos = (guard.start().r as i64, guard.start().c as i64);
        for t in 0..40u64 {
            let replayed = Pos {
                r: pos.0 as usize,
                c: pos.1 as usize,
            };
            assert_eq!(guard.position_at(t), replayed);
            assert!(guard.occupies(replayed, t));
            let (dr, dc) = SQUARE[(t % SQUARE.len() as u64) as usize];
            pos.0 += dr as i64;
            pos.1 += dc as i64;
        }
    }

    #[test]
    fn empty_patrol_is_stationary() {
        let guard = Guard::new("G2".into(), Pos { r: 1, c: 3 }, vec![]);
        assert_eq!(guard.position_at(0), Pos { r: 1, c: 3 });
        assert_eq!(guard.position_at(1_000_000), Pos { r: 1, c: 3 });
    }

    #[test]
    fn large_timesteps_stay_exact() {
        let guard = square_guard();
        let t = 8u64 * 1_000_000_007 + 3;
        assert_eq!(guard.position_at(t), guard.position_at(3));
    }
}
