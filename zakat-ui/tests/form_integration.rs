//! Integration tests driving the terminal form with in-memory input.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use zakat_core::{AssetField, InvestmentField, ZakatSession};
use zakat_ui::{FieldAssignment, form};

fn run_form(
    session: &mut ZakatSession,
    input: &str,
) -> (usize, String) {
    let mut output = Vec::new();
    let lines = form::prompt_fields(session, Cursor::new(input), &mut output)
        .expect("prompting in memory cannot fail");
    (lines, String::from_utf8(output).expect("form output is UTF-8"))
}

fn render(
    session: &ZakatSession,
    show_breakdown: bool,
) -> String {
    let mut output = Vec::new();
    form::render_result(session, show_breakdown, &mut output).expect("render to memory");
    String::from_utf8(output).expect("result output is UTF-8")
}

#[test]
fn filled_form_computes_expected_zakat() {
    let mut session = ZakatSession::new();
    let input = "1000\n500\n0\n\n2000\n\n1500\n0\n";

    let (lines, _) = run_form(&mut session, input);
    let payable = session.calculate();

    assert_eq!(lines, 8);
    assert_eq!(payable, dec!(125.00));
    assert_eq!(
        render(&session, true),
        concat!(
            "Total assets:             1500.00\n",
            "Total investments:        3500.00\n",
            "Total wealth:             5000.00\n",
            "Your Zakat Amount:         125.00\n",
        )
    );
}

#[test]
fn prompts_use_field_labels_in_order() {
    let mut session = ZakatSession::new();

    let (_, prompts) = run_form(&mut session, "\n\n\n\n\n\n\n\n");

    assert_eq!(
        prompts,
        concat!(
            "Assets\n",
            "  Cash:   Gold:   Silver:   Other: \n",
            "Investments\n",
            "  Stocks:   Mutual Funds:   Real Estate:   Other: \n",
        )
    );
}

#[test]
fn non_numeric_answers_count_as_zero() {
    let mut session = ZakatSession::new();

    run_form(&mut session, "abc\n200\n\n\n\n\n\n\n");
    let payable = session.calculate();

    assert_eq!(session.assets().get(AssetField::Cash).as_str(), "abc");
    assert_eq!(payable, dec!(5.00));
    assert_eq!(render(&session, false), "Your Zakat Amount:           5.00\n");
}

#[test]
fn early_end_of_input_leaves_remaining_fields_empty() {
    let mut session = ZakatSession::new();

    let (lines, output) = run_form(&mut session, "100\n");
    let payable = session.calculate();

    assert_eq!(lines, 1);
    assert!(!output.contains("Investments"));
    assert!(session.investments().values().all(|v| v.is_empty()));
    assert_eq!(payable, dec!(2.50));
}

#[test]
fn blank_answer_keeps_value_from_command_line() {
    let mut session = ZakatSession::new();
    session.set_investment(InvestmentField::Stocks, "4000");

    let (_, output) = run_form(&mut session, "\n\n\n\n\n\n\n\n");

    assert!(output.contains("Stocks [4000]: "));
    assert_eq!(
        session.investments().get(InvestmentField::Stocks).as_str(),
        "4000"
    );
    assert_eq!(session.calculate(), dec!(100));
}

#[test]
fn windows_line_endings_are_stripped() {
    let mut session = ZakatSession::new();

    run_form(&mut session, "10\r\n20\r\n");

    assert_eq!(session.assets().get(AssetField::Cash).as_str(), "10");
    assert_eq!(session.assets().get(AssetField::Gold).as_str(), "20");
}

#[test]
fn negative_answers_give_negative_zakat() {
    let mut session = ZakatSession::new();

    run_form(&mut session, "-100\n0\n0\n0\n0\n0\n0\n0\n");
    session.calculate();

    assert_eq!(render(&session, false), "Your Zakat Amount:          -2.50\n");
}

#[test]
fn all_zero_answers_owe_nothing() {
    let mut session = ZakatSession::new();

    run_form(&mut session, "0\n0\n0\n0\n0\n0\n0\n0\n");
    session.calculate();

    assert_eq!(render(&session, false), "Your Zakat Amount:           0.00\n");
}

#[test]
fn assignments_fill_the_session() {
    let mut session = ZakatSession::new();
    let assignments: Vec<FieldAssignment> = ["assets.silver=300", "investments.other=700"]
        .iter()
        .map(|s| s.parse().expect("valid assignment"))
        .collect();

    for assignment in &assignments {
        assignment.apply(&mut session).expect("known field");
    }

    assert_eq!(session.calculate(), dec!(25.00));
}

#[test]
fn displayed_result_is_stale_until_recalculated() {
    let mut session = ZakatSession::new();
    session.set_asset(AssetField::Cash, "1000");
    session.calculate();

    session.set_asset(AssetField::Cash, "9999");

    assert_eq!(render(&session, false), "Your Zakat Amount:          25.00\n");
}

#[test]
fn piped_answers_fill_fields_without_prompts() {
    let mut session = ZakatSession::new();
    let mut prompts = std::io::sink();

    let lines = form::prompt_fields(&mut session, Cursor::new("1000\n\n\n\n4000\n"), &mut prompts)
        .expect("reading piped answers cannot fail");

    assert_eq!(lines, 5);
    assert_eq!(session.calculate(), dec!(125.00));
}

#[test]
fn empty_pipe_reads_no_answers() {
    let mut session = ZakatSession::new();

    let lines = form::prompt_fields(&mut session, Cursor::new(""), &mut std::io::sink())
        .expect("reading an empty pipe cannot fail");

    assert_eq!(lines, 0);
    assert_eq!(session.calculate(), dec!(0));
}
