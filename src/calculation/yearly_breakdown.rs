//! Year-by-year lease schedule.
//!
//! Combines amortization, running costs, fees, FBT, tax savings and GST
//! savings into one [`YearEntry`] per lease year.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConfig;
use crate::models::{QuoteInput, YearEntry};

use super::amortization::amortize;
use super::fbt::calculate_fbt_for_year;
use super::gst::calculate_annual_gst_savings;
use super::residual::financed_amount;
use super::tax::calculate_income_tax;

/// Fees charged in a lease year.
///
/// Admin fees recur every year; the establishment fee is charged in year 1
/// and the end-of-lease fee in the final year. A one-year lease carries both.
pub fn fees_for_year(quote: &QuoteInput, year: u32) -> Decimal {
    let fees = &quote.fees;
    let mut total = fees.annual_admin_fees();
    if year == 1 {
        total += fees.establishment_fee;
    }
    if year == quote.lease_terms.duration_years {
        total += fees.end_of_lease_fee;
    }
    total
}

/// The employee's composite marginal tax rate for this quote.
pub fn marginal_rate(quote: &QuoteInput, policy: &PolicyConfig) -> Decimal {
    let employee = &quote.employee;
    calculate_income_tax(
        employee.taxable_income,
        employee.has_help_debt,
        employee.help_repayment_rate,
        policy,
    )
    .marginal_tax_rate
}

/// Calculates the schedule for every lease year.
///
/// Tax savings apply to the recurring packaged amount only: principal,
/// interest, running costs and admin fees. One-time fees and FBT are not
/// packaged. The remaining principal is clamped at zero.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::calculate_yearly_breakdown;
/// use novated_lease_engine::config::PolicyConfig;
/// use novated_lease_engine::import::default_quote;
///
/// let years = calculate_yearly_breakdown(&default_quote(), &PolicyConfig::default());
/// assert_eq!(years.len(), 3);
/// assert_eq!(years[0].year, 1);
/// ```
pub fn calculate_yearly_breakdown(quote: &QuoteInput, policy: &PolicyConfig) -> Vec<YearEntry> {
    let price = quote.vehicle.purchase_price;
    let duration = quote.lease_terms.duration_years;

    let financed = financed_amount(price, duration, policy);
    let schedule = amortize(financed, quote.lease_terms.interest_rate, duration);

    let running_costs = quote.running_costs.annual_total();
    let admin_fees = quote.fees.annual_admin_fees();
    let marginal = marginal_rate(quote, policy);
    let gst = calculate_annual_gst_savings(price, running_costs, duration, policy);

    debug!(
        financed = %financed,
        monthly_payment = %schedule.monthly_payment,
        marginal_rate = %marginal,
        "Building yearly breakdown"
    );

    schedule
        .years
        .iter()
        .map(|amortized| {
            let fees = fees_for_year(quote, amortized.year);
            let fbt_cost = calculate_fbt_for_year(price, amortized.year, &quote.fbt, policy);

            let packaged = amortized.principal + amortized.interest + running_costs + admin_fees;
            let tax_savings = packaged * marginal;
            let gst_savings = gst.total();

            let gross =
                amortized.principal + amortized.interest + running_costs + fees + fbt_cost;

            YearEntry {
                year: amortized.year,
                principal_payment: amortized.principal,
                interest_payment: amortized.interest,
                running_costs,
                fees,
                fbt_cost,
                tax_savings,
                gst_savings,
                net_cost: gross - tax_savings - gst_savings,
                remaining_principal: amortized.closing_balance.max(Decimal::ZERO),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_half_up;
    use crate::models::{EmployeeProfile, Fees, FbtSettings, LeaseTerms, RunningCosts, VehicleDetails};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn quote(duration_years: u32) -> QuoteInput {
        QuoteInput {
            vehicle: VehicleDetails {
                make: "Toyota".to_string(),
                model: "RAV4".to_string(),
                year: Some(2024),
                purchase_price: dec("50000"),
                driveaway_price: None,
            },
            lease_terms: LeaseTerms {
                duration_years,
                interest_rate: dec("0.07"),
                annual_kilometers: 15_000,
            },
            fees: Fees {
                establishment_fee: dec("500"),
                monthly_admin_fee: dec("10"),
                end_of_lease_fee: dec("350"),
            },
            running_costs: RunningCosts {
                fuel_per_year: dec("2000"),
                insurance_per_year: dec("1200"),
                maintenance_per_year: dec("800"),
                registration_per_year: dec("800"),
                tyres_per_year: dec("200"),
            },
            fbt: FbtSettings {
                employee_contribution_amount: Decimal::ZERO,
                use_statutory_method: true,
                statutory_rate: Some(dec("0.20")),
            },
            employee: EmployeeProfile {
                annual_salary: dec("80000"),
                taxable_income: dec("80000"),
                has_help_debt: false,
                help_repayment_rate: None,
            },
            quote_provided_values: None,
            metadata: None,
            custom_notes: None,
        }
    }

    #[test]
    fn test_one_entry_per_year() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());

        let numbers: Vec<u32> = years.iter().map(|y| y.year).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_fees_by_year() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());

        assert_eq!(years[0].fees, dec("620"));
        assert_eq!(years[1].fees, dec("120"));
        assert_eq!(years[2].fees, dec("470"));
    }

    #[test]
    fn test_single_year_lease_carries_both_one_time_fees() {
        assert_eq!(fees_for_year(&quote(1), 1), dec("970"));
    }

    #[test]
    fn test_running_costs_constant() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());

        assert!(years.iter().all(|y| y.running_costs == dec("5000")));
    }

    #[test]
    fn test_principal_fully_repaid() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());

        let repaid: Decimal = years.iter().map(|y| y.principal_payment).sum();
        assert!((repaid - dec("26560")).abs() < dec("0.000001"));
        assert!(years[2].remaining_principal < dec("0.000001"));
        assert!(years.iter().all(|y| y.remaining_principal >= Decimal::ZERO));
    }

    #[test]
    fn test_year_one_fbt_and_tax_savings() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());
        let first = &years[0];

        assert_eq!(round_half_up(first.fbt_cost), dec("8888.13"));

        let packaged = first.principal_payment + first.interest_payment + dec("5000") + dec("120");
        assert_eq!(first.tax_savings, packaged * dec("0.32"));
    }

    #[test]
    fn test_fbt_declines_each_year() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());

        assert!(years[0].fbt_cost > years[1].fbt_cost);
        assert!(years[1].fbt_cost > years[2].fbt_cost);
    }

    #[test]
    fn test_net_cost_identity() {
        let years = calculate_yearly_breakdown(&quote(3), &PolicyConfig::default());

        for entry in &years {
            assert_eq!(
                entry.net_cost,
                entry.gross_cost() - entry.tax_savings - entry.gst_savings
            );
        }
    }

    #[test]
    fn test_zero_rate_lease_has_no_interest() {
        let mut quote = quote(2);
        quote.lease_terms.interest_rate = Decimal::ZERO;

        let years = calculate_yearly_breakdown(&quote, &PolicyConfig::default());

        assert!(years.iter().all(|y| y.interest_payment.is_zero()));
        // 50000 - 28125 financed, repaid evenly
        assert_eq!(round_half_up(years[0].principal_payment), dec("10937.50"));
    }
}
