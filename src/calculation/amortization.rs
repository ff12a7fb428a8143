//! Monthly amortization of the financed amount.
//!
//! The financed amount (price less residual) is repaid with a level monthly
//! payment. Interest accrues monthly on the opening balance; the rest of each
//! payment reduces principal. Months are grouped into lease years.

use rust_decimal::{Decimal, MathematicalOps};

/// Months in a lease year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Principal and interest repaid in one lease year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmortizationYear {
    /// The lease year (1-based).
    pub year: u32,
    /// Principal repaid during the year.
    pub principal: Decimal,
    /// Interest paid during the year.
    pub interest: Decimal,
    /// Balance owing after the year's last payment.
    pub closing_balance: Decimal,
}

/// The full repayment schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmortizationSchedule {
    /// The level monthly payment.
    pub monthly_payment: Decimal,
    /// One entry per lease year.
    pub years: Vec<AmortizationYear>,
}

impl AmortizationSchedule {
    /// Total interest over the term.
    pub fn total_interest(&self) -> Decimal {
        self.years.iter().map(|y| y.interest).sum()
    }
}

/// Calculates the level monthly payment that repays `principal` in full.
///
/// Uses the standard annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)` with
/// `r` the monthly rate and `n` the number of months, evaluated as
/// `P * r / (1 - (1+r)^-n)` so large terms never overflow. A zero rate repays
/// the principal in equal instalments.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::{monthly_payment, round_half_up};
/// use rust_decimal::Decimal;
///
/// let payment = monthly_payment(Decimal::from(10_000), Decimal::new(12, 2), 1);
/// assert_eq!(round_half_up(payment), Decimal::new(88849, 2));
/// ```
pub fn monthly_payment(principal: Decimal, annual_rate: Decimal, years: u32) -> Decimal {
    let months = years.saturating_mul(MONTHS_PER_YEAR);
    if months == 0 {
        return Decimal::ZERO;
    }
    let level = principal / Decimal::from(months);

    let monthly_rate = annual_rate / Decimal::from(MONTHS_PER_YEAR);
    if monthly_rate.is_zero() {
        return level;
    }

    // (1+r)^n too large to represent: the payment has converged to interest only.
    let Some(factor) = (Decimal::ONE + monthly_rate).checked_powu(u64::from(months)) else {
        return principal * monthly_rate;
    };
    let denominator = Decimal::ONE - Decimal::ONE / factor;
    if denominator.is_zero() {
        // Rate too small to register at decimal precision.
        return level;
    }

    principal * monthly_rate / denominator
}

/// Builds the month-by-month schedule, grouped into lease years.
///
/// The closing balance is reported as computed; callers clamp the small
/// rounding residue left after the final payment.
pub fn amortize(principal: Decimal, annual_rate: Decimal, years: u32) -> AmortizationSchedule {
    let payment = monthly_payment(principal, annual_rate, years);
    let monthly_rate = annual_rate / Decimal::from(MONTHS_PER_YEAR);

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let mut principal_paid = Decimal::ZERO;
        let mut interest_paid = Decimal::ZERO;

        for _ in 0..MONTHS_PER_YEAR {
            let interest = balance * monthly_rate;
            let principal_part = payment - interest;
            interest_paid += interest;
            principal_paid += principal_part;
            balance -= principal_part;
        }

        schedule.push(AmortizationYear {
            year,
            principal: principal_paid,
            interest: interest_paid,
            closing_balance: balance,
        });
    }

    AmortizationSchedule {
        monthly_payment: payment,
        years: schedule,
    }
}

/// Total interest paid over the term.
pub fn calculate_finance_charge(principal: Decimal, annual_rate: Decimal, years: u32) -> Decimal {
    let months = Decimal::from(years.saturating_mul(MONTHS_PER_YEAR));
    monthly_payment(principal, annual_rate, years) * months - principal
}
