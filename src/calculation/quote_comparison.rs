//! Side-by-side comparison of saved quotes.

use tracing::debug;

use crate::config::PolicyConfig;
use crate::models::{QuoteComparison, QuoteComparisonEntry, SavedQuote};

use super::cost_breakdown::calculate_cost_breakdown;

/// Calculates each saved quote's totals and picks the best on two measures.
///
/// The lowest total net cost and the highest tax savings are reported by id.
/// The earlier quote wins a tie. Both are `None` for an empty slice.
pub fn compare_quotes(quotes: &[SavedQuote], policy: &PolicyConfig) -> QuoteComparison {
    let entries: Vec<QuoteComparisonEntry> = quotes
        .iter()
        .map(|saved| QuoteComparisonEntry {
            id: saved.id.clone(),
            name: saved.name.clone(),
            breakdown: calculate_cost_breakdown(&saved.data, policy),
        })
        .collect();

    let mut best_net_cost: Option<&QuoteComparisonEntry> = None;
    let mut best_tax_savings: Option<&QuoteComparisonEntry> = None;
    for entry in &entries {
        if best_net_cost
            .is_none_or(|best| entry.breakdown.total_net_cost < best.breakdown.total_net_cost)
        {
            best_net_cost = Some(entry);
        }
        if best_tax_savings
            .is_none_or(|best| entry.breakdown.tax_savings > best.breakdown.tax_savings)
        {
            best_tax_savings = Some(entry);
        }
    }

    let best_net_cost_id = best_net_cost.map(|e| e.id.clone());
    let best_tax_savings_id = best_tax_savings.map(|e| e.id.clone());

    debug!(
        quotes = entries.len(),
        best_net_cost = ?best_net_cost_id,
        best_tax_savings = ?best_tax_savings_id,
        "Compared saved quotes"
    );

    QuoteComparison {
        entries,
        best_net_cost_id,
        best_tax_savings_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::default_quote;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn saved(id: &str, price: &str, income: &str) -> SavedQuote {
        let mut data = default_quote();
        data.vehicle.purchase_price = dec(price);
        data.employee.taxable_income = dec(income);
        data.employee.annual_salary = dec(income);
        SavedQuote {
            id: id.to_string(),
            name: format!("Quote {}", id),
            data,
            saved_at: Utc::now(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_comparison() {
        let comparison = compare_quotes(&[], &PolicyConfig::default());

        assert!(comparison.entries.is_empty());
        assert!(comparison.best_net_cost_id.is_none());
        assert!(comparison.best_tax_savings_id.is_none());
    }

    #[test]
    fn test_cheaper_vehicle_has_lowest_net_cost() {
        let quotes = vec![
            saved("a", "60000", "80000"),
            saved("b", "40000", "80000"),
        ];

        let comparison = compare_quotes(&quotes, &PolicyConfig::default());

        assert_eq!(comparison.entries.len(), 2);
        assert_eq!(comparison.entries[0].id, "a");
        assert_eq!(comparison.best_net_cost_id.as_deref(), Some("b"));
        // Larger package, same marginal rate
        assert_eq!(comparison.best_tax_savings_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_higher_marginal_rate_has_highest_tax_savings() {
        let quotes = vec![
            saved("low", "50000", "40000"),
            saved("high", "50000", "150000"),
        ];

        let comparison = compare_quotes(&quotes, &PolicyConfig::default());

        assert_eq!(comparison.best_tax_savings_id.as_deref(), Some("high"));
    }

    #[test]
    fn test_tie_keeps_first_quote() {
        let quotes = vec![
            saved("first", "50000", "80000"),
            saved("second", "50000", "80000"),
        ];

        let comparison = compare_quotes(&quotes, &PolicyConfig::default());

        assert_eq!(comparison.best_net_cost_id.as_deref(), Some("first"));
        assert_eq!(comparison.best_tax_savings_id.as_deref(), Some("first"));
    }
}
