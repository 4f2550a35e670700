use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество фишек. Знаковое: при политике `AllowNegative`
/// баланс участника может уйти в минус.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub i64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn new(amount: i64) -> Self {
        Chips(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Ставка, умноженная на число участников (вклад в банк за круг ставок).
    /// `None` при переполнении.
    pub fn times(self, count: usize) -> Option<Chips> {
        let n = i64::try_from(count).ok()?;
        self.0.checked_mul(n).map(Chips)
    }

    // Движок считает фишки только через checked_*: насыщение
    // операторов ниже молча теряет фишки.

    pub fn checked_add(self, rhs: Chips) -> Option<Chips> {
        self.0.checked_add(rhs.0).map(Chips)
    }

    pub fn checked_sub(self, rhs: Chips) -> Option<Chips> {
        self.0.checked_sub(rhs.0).map(Chips)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Chips {
    type Output = Chips;

    fn neg(self) -> Self::Output {
        Chips(self.0.saturating_neg())
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}
