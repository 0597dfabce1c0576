use tracing::info;

/// Hit point pool. `current` stays within `0..=max` after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Removes up to `amount` points and returns how many were actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        info!(target: "combat_core.health", current = self.current, max = self.max, "health updated");
        before - self.current
    }

    /// Restores up to `amount` points without passing `max`; returns the gain.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        info!(target: "combat_core.health", current = self.current, max = self.max, "health updated");
        self.current - before
    }

    pub fn restore(&mut self) {
        self.current = self.max;
        info!(target: "combat_core.health", current = self.current, max = self.max, "health restored");
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_to_zero() {
        let mut hp = Health::new(10);
        assert_eq!(10, hp.damage(15));
        assert_eq!(0, hp.current());
        assert!(hp.is_depleted());
    }

    #[test]
    fn heal_caps_at_max() {
        let mut hp = Health::new(50);
        hp.damage(20);
        assert_eq!(20, hp.heal(35));
        assert_eq!(50, hp.current());
        assert!(hp.is_full());
    }

    #[test]
    fn restore_refills_the_pool() {
        let mut hp = Health::new(30);
        hp.damage(30);
        hp.restore();
        assert_eq!(30, hp.current());
    }

    #[test]
    fn ratio_of_empty_pool_is_zero() {
        assert_eq!(0.0, Health::new(0).ratio());
        let mut hp = Health::new(100);
        hp.damage(75);
        assert_eq!(0.25, hp.ratio());
    }
}
