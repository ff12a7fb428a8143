//! Integration tests for the novated lease engine.
//!
//! This test suite covers:
//! - Reference scenarios for residuals, marginal rates and FBT
//! - Degenerate inputs (zero price, zero interest, long terms)
//! - Quote validation through the HTTP API
//! - Share links and saved quote persistence
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use novated_lease_engine::api::{AppState, create_router};
use novated_lease_engine::calculation::{
    analyze_quote, calculate_cost_breakdown, calculate_income_tax, calculate_residual_value,
    compare_quotes, round_half_up,
};
use novated_lease_engine::config::{ConfigLoader, PolicyConfig};
use novated_lease_engine::error::EngineError;
use novated_lease_engine::import::{default_quote, parse_quote};
use novated_lease_engine::models::{
    DiscrepancyField, MAX_AMOUNT, MAX_DURATION_YEARS, OverallAssessment, QuoteInput,
    QuoteProvidedValues, QuoteUpdate,
};
use novated_lease_engine::sharing::{decode_quote, encode_quote};
use novated_lease_engine::storage::QuoteStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/au_2025_26").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn policy() -> PolicyConfig {
    ConfigLoader::load("./config/au_2025_26")
        .expect("Failed to load config")
        .policy()
        .clone()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn field_decimal(value: &Value) -> Decimal {
    assert!(value.is_number(), "money fields serialize as JSON numbers: {}", value);
    serde_json::from_value(value.clone()).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

fn create_quote(price: u32, years: u32, rate: &str, income: u32) -> Value {
    json!({
        "vehicle": { "make": "Toyota", "model": "RAV4", "year": 2024, "purchasePrice": price },
        "leaseTerms": { "durationYears": years, "interestRate": rate, "annualKilometers": 15000 },
        "fees": { "establishmentFee": 500, "monthlyAdminFee": 10, "endOfLeaseFee": 350 },
        "runningCosts": {
            "fuelPerYear": 2000,
            "insurancePerYear": 1200,
            "maintenancePerYear": 800,
            "registrationPerYear": 800,
            "tyresPerYear": 200
        },
        "fbt": { "employeeContributionAmount": 0, "useStatutoryMethod": true, "statutoryRate": 0.20 },
        "employee": { "annualSalary": income, "taxableIncome": income, "hasHELPDebt": false }
    })
}

fn scenario_a() -> QuoteInput {
    serde_json::from_value(create_quote(50_000, 3, "0.07", 80_000)).unwrap()
}

fn scenario_b() -> QuoteInput {
    let mut quote: QuoteInput =
        serde_json::from_value(create_quote(75_000, 5, "0.065", 120_000)).unwrap();
    quote.employee.has_help_debt = true;
    quote.employee.help_repayment_rate = Some(decimal("0.02"));
    quote
}

fn scenario_c() -> QuoteInput {
    let mut value = create_quote(0, 3, "0.07", 80_000);
    value["fees"] = json!({});
    value["runningCosts"] = json!({});
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_scenario_a_residual_and_marginal_rate() {
    let policy = policy();
    let quote = scenario_a();

    let breakdown = calculate_cost_breakdown(&quote, &policy);
    let tax = calculate_income_tax(decimal("80000"), false, None, &policy);

    assert_eq!(breakdown.residual_value, decimal("23440"));
    assert_eq!(tax.marginal_tax_rate, decimal("0.32"));
}

#[test]
fn test_scenario_a_year_one_fbt() {
    let analysis = analyze_quote(&scenario_a(), &policy()).unwrap();
    let first = &analysis.yearly_breakdown[0];

    // (50000 / 1.1) * 0.20 * 2.0802 * 0.47
    assert_eq!(round_half_up(first.fbt_cost), decimal("8888.13"));
}

#[test]
fn test_scenario_a_full_schedule() {
    let analysis = analyze_quote(&scenario_a(), &policy()).unwrap();

    assert_eq!(analysis.yearly_breakdown.len(), 3);
    let principal: Decimal = analysis
        .yearly_breakdown
        .iter()
        .map(|y| y.principal_payment)
        .sum();
    assert!((principal - decimal("26560")).abs() < decimal("0.000001"));
    assert!(analysis.warnings.is_empty());
    assert_eq!(analysis.post_lease_scenarios.len(), 4);
}

#[test]
fn test_scenario_b_help_debt_marginal_rate() {
    let policy = policy();
    let quote = scenario_b();

    let tax = calculate_income_tax(
        quote.employee.taxable_income,
        quote.employee.has_help_debt,
        quote.employee.help_repayment_rate,
        &policy,
    );
    let residual = calculate_residual_value(quote.vehicle.purchase_price, 5, &policy);

    assert_eq!(tax.marginal_tax_rate, decimal("0.34"));
    assert_eq!(residual, decimal("21097.5"));
}

#[test]
fn test_scenario_b_tax_savings_use_help_rate() {
    let analysis = analyze_quote(&scenario_b(), &policy()).unwrap();
    let first = &analysis.yearly_breakdown[0];

    let packaged =
        first.principal_payment + first.interest_payment + first.running_costs + decimal("120");
    assert_eq!(first.tax_savings, packaged * decimal("0.34"));
}

#[test]
fn test_scenario_c_zero_price_resolves_to_zero() {
    let analysis = analyze_quote(&scenario_c(), &policy()).unwrap();
    let breakdown = &analysis.cost_breakdown;

    assert_eq!(breakdown.residual_value, Decimal::ZERO);
    assert_eq!(breakdown.finance_charges, Decimal::ZERO);
    assert_eq!(breakdown.fbt_cost, Decimal::ZERO);
    assert_eq!(breakdown.gst_savings, Decimal::ZERO);
    assert_eq!(breakdown.tax_savings, Decimal::ZERO);
    assert_eq!(breakdown.total_gross_cost, Decimal::ZERO);
    assert_eq!(breakdown.total_net_cost, Decimal::ZERO);
    assert!(analysis.lease_account.iter().all(|s| s.percent_repaid.is_zero()));
}

#[test]
fn test_scenario_d_exact_residual_claim() {
    let mut quote = scenario_a();
    quote.quote_provided_values = Some(QuoteProvidedValues {
        residual_value: Some(decimal("23440")),
        ..QuoteProvidedValues::default()
    });

    let analysis = analyze_quote(&quote, &policy()).unwrap();
    let residual = &analysis.validation.discrepancies[0];

    assert_eq!(residual.field, DiscrepancyField::ResidualValue);
    assert_eq!(residual.percentage_diff, Decimal::ZERO);
    assert!(!residual.is_significant);
    assert_eq!(analysis.validation.overall_assessment, OverallAssessment::Accurate);
}

// =============================================================================
// Degenerate Inputs
// =============================================================================

#[test]
fn test_zero_interest_rate_has_no_finance_charges() {
    let mut quote = scenario_a();
    quote.lease_terms.interest_rate = Decimal::ZERO;

    let analysis = analyze_quote(&quote, &policy()).unwrap();

    assert_eq!(analysis.cost_breakdown.finance_charges, Decimal::ZERO);
    assert_eq!(analysis.warnings[0].code, "ZERO_INTEREST_RATE");
}

#[test]
fn test_long_term_falls_back_to_five_year_residual() {
    let mut quote = scenario_a();
    quote.lease_terms.duration_years = 7;

    let analysis = analyze_quote(&quote, &policy()).unwrap();

    assert_eq!(analysis.cost_breakdown.residual_value, decimal("14065"));
    assert_eq!(analysis.yearly_breakdown.len(), 7);
    assert_eq!(analysis.warnings[0].code, "RESIDUAL_TERM_FALLBACK");
}

#[test]
fn test_exempt_vehicle_has_no_fbt() {
    let mut quote = scenario_a();
    quote.fbt.statutory_rate = Some(Decimal::ZERO);

    let analysis = analyze_quote(&quote, &policy()).unwrap();

    assert_eq!(analysis.cost_breakdown.fbt_cost, Decimal::ZERO);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn test_oversized_price_is_rejected_before_calculation() {
    let mut quote = scenario_a();
    quote.vehicle.purchase_price = Decimal::from_scientific("7e28").unwrap();

    match analyze_quote(&quote, &policy()) {
        Err(EngineError::InvalidQuote { field, .. }) => {
            assert_eq!(field, "vehicle.purchasePrice");
        }
        other => panic!("Expected InvalidQuote, got {:?}", other),
    }
}

#[test]
fn test_largest_accepted_quote_analyses() {
    let mut quote = scenario_a();
    quote.vehicle.purchase_price = Decimal::from(MAX_AMOUNT);
    quote.lease_terms.duration_years = MAX_DURATION_YEARS;
    quote.lease_terms.interest_rate = Decimal::ONE;
    quote.employee.annual_salary = Decimal::from(MAX_AMOUNT);
    quote.employee.taxable_income = Decimal::from(MAX_AMOUNT);

    let analysis = analyze_quote(&quote, &policy()).unwrap();

    assert_eq!(analysis.yearly_breakdown.len(), MAX_DURATION_YEARS as usize);
    assert!(analysis.cost_breakdown.finance_charges > Decimal::ZERO);
}

#[test]
fn test_import_rejects_century_lease_at_full_rate() {
    let quote = create_quote(50_000, 100, "1", 80_000);

    match parse_quote(&quote.to_string()) {
        Err(EngineError::InvalidQuote { field, .. }) => {
            assert_eq!(field, "leaseTerms.durationYears");
        }
        other => panic!("Expected InvalidQuote, got {:?}", other),
    }
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_calculate_scenario_a() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        create_quote(50_000, 3, "0.07", 80_000),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["calculationId"].is_string());
    let analysis = &body["analysis"];
    assert_eq!(
        field_decimal(&analysis["costBreakdown"]["residualValue"]),
        decimal("23440")
    );
    assert_eq!(analysis["yearlyBreakdown"].as_array().unwrap().len(), 3);
    assert_eq!(analysis["postLeaseScenarios"][3]["scenarioType"], "extend");
    assert_eq!(analysis["validation"]["overallAssessment"], "accurate");
}

#[tokio::test]
async fn test_api_calculate_missing_section_returns_400() {
    let mut quote = create_quote(50_000, 3, "0.07", 80_000);
    quote.as_object_mut().unwrap().remove("leaseTerms");

    let (status, body) = post(create_router_for_test(), "/calculate", quote).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_SECTION");
    assert!(body["message"].as_str().unwrap().contains("leaseTerms"));
}

#[tokio::test]
async fn test_api_validate_missing_section_returns_400() {
    let mut quote = create_quote(50_000, 3, "0.07", 80_000);
    quote.as_object_mut().unwrap().remove("employee");

    let (status, body) = post(create_router_for_test(), "/validate", quote).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_SECTION");
    assert!(body["message"].as_str().unwrap().contains("employee"));
}

#[tokio::test]
async fn test_api_calculate_millennium_lease_returns_400() {
    let quote = create_quote(50_000, 1000, "0.07", 80_000);

    let (status, body) = post(create_router_for_test(), "/calculate", quote).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUOTE");
}

#[tokio::test]
async fn test_api_calculate_returns_numeric_money() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        create_quote(50_000, 3, "0.07", 80_000),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &body["analysis"]["costBreakdown"];
    assert_eq!(breakdown["residualValue"].as_f64(), Some(23_440.0));
    assert!(breakdown["totalNetCost"].is_number());
    assert!(body["analysis"]["yearlyBreakdown"][0]["netCost"].is_number());
}

#[tokio::test]
async fn test_api_calculate_negative_price_returns_400() {
    let mut quote = create_quote(50_000, 3, "0.07", 80_000);
    quote["vehicle"]["purchasePrice"] = json!(-100);

    let (status, body) = post(create_router_for_test(), "/calculate", quote).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUOTE");
}

#[tokio::test]
async fn test_api_validate_flags_inflated_claims() {
    let mut quote = create_quote(50_000, 3, "0.07", 80_000);
    quote["quoteProvidedValues"] = json!({
        "residualValue": 23440,
        "totalFinanceCharges": 100000,
        "taxSavings": 1
    });

    let (status, body) = post(create_router_for_test(), "/validate", quote).await;

    assert_eq!(status, StatusCode::OK);
    let discrepancies = body["discrepancies"].as_array().unwrap();
    assert_eq!(discrepancies.len(), 3);
    assert_eq!(discrepancies[0]["isSignificant"], false);
    assert_eq!(discrepancies[1]["field"], "financeCharges");
    assert_eq!(discrepancies[1]["isSignificant"], true);
    assert!(discrepancies[1]["explanation"].is_string());
    assert_eq!(discrepancies[2]["isSignificant"], true);
    assert_eq!(body["hasSignificantIssues"], true);
    assert_eq!(body["overallAssessment"], "minor_differences");
}

#[tokio::test]
async fn test_api_share_round_trip() {
    let quote = create_quote(42_000, 4, "0.08", 95_000);

    let (status, body) = post(
        create_router_for_test(),
        "/share",
        json!({ "quote": quote, "baseUrl": "https://example.com/" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(
        body["url"].as_str().unwrap(),
        format!("https://example.com/?quote={}", token)
    );

    let (status, shared) = get(create_router_for_test(), &format!("/share/{}", token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&shared["vehicle"]["purchasePrice"]), decimal("42000"));
    assert_eq!(shared["leaseTerms"]["durationYears"], 4);
}

// =============================================================================
// Import, Sharing and Storage
// =============================================================================

#[test]
fn test_import_then_share_round_trip() {
    let text = create_quote(50_000, 3, "0.07", 80_000).to_string();

    let quote = parse_quote(&text).unwrap();
    let token = encode_quote(&quote).unwrap();

    assert_eq!(decode_quote(&token), Some(quote));
}

#[test]
fn test_saved_quotes_compare() {
    let dir = std::env::temp_dir().join(format!("novated-lease-it-{}", uuid::Uuid::new_v4()));
    let store = QuoteStore::new(&dir);

    let cheap = store.save("Corolla", scenario_c(), None).unwrap();
    let pricey = store.save("RAV4", scenario_a(), None).unwrap();
    assert!(store.update(
        &pricey.id,
        QuoteUpdate {
            notes: Some("Dealer quote".to_string()),
            ..QuoteUpdate::default()
        }
    ));

    let quotes = store.list();
    let comparison = compare_quotes(&quotes, &policy());

    assert_eq!(comparison.entries.len(), 2);
    assert_eq!(comparison.best_net_cost_id, Some(cheap.id.clone()));
    assert_eq!(comparison.best_tax_savings_id, Some(pricey.id.clone()));
    assert_eq!(store.get(&pricey.id).unwrap().notes.as_deref(), Some("Dealer quote"));

    assert!(store.delete(&cheap.id));
    assert_eq!(store.list().len(), 1);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_default_quote_matches_reference_inputs() {
    assert_eq!(default_quote(), scenario_a());
}
