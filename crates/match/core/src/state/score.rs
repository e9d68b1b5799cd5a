use super::Side;

/// Running score of a match. Both tallies floor at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreState {
    pub home: u32,
    pub away: u32,
}

impl ScoreState {
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub const fn get(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    fn slot(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn add(&mut self, side: Side, amount: u32) {
        let slot = self.slot(side);
        *slot = slot.saturating_add(amount);
    }

    pub fn subtract(&mut self, side: Side, amount: u32) {
        let slot = self.slot(side);
        *slot = slot.saturating_sub(amount);
    }

    /// Side currently ahead, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            core::cmp::Ordering::Greater => Some(Side::Home),
            core::cmp::Ordering::Less => Some(Side::Away),
            core::cmp::Ordering::Equal => None,
        }
    }

    pub const fn margin(&self) -> u32 {
        self.home.abs_diff(self.away)
    }
}
