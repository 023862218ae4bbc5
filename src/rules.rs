/// What happens to a single cell between two generations.
///
/// # Rules
/// ```notrust
/// alive, n < 2       -> Underpopulation (dies)
/// alive, n in {2, 3} -> Survival        (lives)
/// alive, n > 3       -> Overcrowding    (dies)
/// dead,  n == 3      -> Reproduction    (born)
/// dead,  otherwise   -> StaysDead
/// ```
///
/// See: https://conwaylife.com/wiki/Conway%27s_Game_of_Life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Underpopulation,
    Survival,
    Overcrowding,
    Reproduction,
    StaysDead,
}

impl Fate {
    /// Classify a cell from its current state and its number of live neighbors
    pub const fn of(alive: bool, neighbors: u8) -> Self {
        match (alive, neighbors) {
            (true, 0..=1) => Fate::Underpopulation,
            (true, 2..=3) => Fate::Survival,
            (true, 4..) => Fate::Overcrowding,
            (false, 3) => Fate::Reproduction,
            (false, _) => Fate::StaysDead,
        }
    }

    /// The state of the cell in the next generation
    pub const fn is_alive(self) -> bool {
        match self {
            Fate::Survival | Fate::Reproduction => true,
            Fate::Underpopulation | Fate::Overcrowding | Fate::StaysDead => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fate;

    #[test]
    fn live_cells() {
        assert_eq!(Fate::of(true, 0), Fate::Underpopulation);
        assert_eq!(Fate::of(true, 1), Fate::Underpopulation);
        assert_eq!(Fate::of(true, 2), Fate::Survival);
        assert_eq!(Fate::of(true, 3), Fate::Survival);

        for n in 4..=8 {
            assert_eq!(Fate::of(true, n), Fate::Overcrowding);
        }
    }

    #[test]
    fn dead_cells() {
        for n in 0..=8 {
            let expected = if n == 3 {
                Fate::Reproduction
            } else {
                Fate::StaysDead
            };

            assert_eq!(Fate::of(false, n), expected);
        }
    }

    #[test]
    fn b3s23() {
        // births
        let b: Vec<u8> = (0..=8).filter(|&n| Fate::of(false, n).is_alive()).collect();
        // survivals
        let s: Vec<u8> = (0..=8).filter(|&n| Fate::of(true, n).is_alive()).collect();

        assert_eq!(b, vec![3]);
        assert_eq!(s, vec![2, 3]);
    }
}
