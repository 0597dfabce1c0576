use tracing::info;

/// Credit balance. Withdrawals have no floor, so a negative balance is debt.
/// The balance saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wallet {
    balance: i64,
}

impl Wallet {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    pub fn deposit(&mut self, amount: u32) -> i64 {
        self.balance = self.balance.saturating_add(i64::from(amount));
        info!(target: "combat_core.wallet", amount, balance = self.balance, "credits added");
        self.balance
    }

    pub fn withdraw(&mut self, amount: u32) -> i64 {
        self.balance = self.balance.saturating_sub(i64::from(amount));
        info!(target: "combat_core.wallet", amount, balance = self.balance, "credits removed");
        self.balance
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
}
