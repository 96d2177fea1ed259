use treasury_core::core::services::ReportService;
use treasury_core::errors::TreasuryError;
use treasury_core::ledger::{
    Expense, ExpenseCategory, InitialBalance, Member, Offer, OtherEntry, Tithe, Withdrawal,
};
use treasury_core::money::to_cents;
use treasury_core::period::{classify, PeriodClass, ReferencePeriod};
use treasury_core::report::{compute_totals, RollupFilter};
use treasury_core::store::MemorySnapshot;

fn period(month: u32, year: i32) -> ReferencePeriod {
    ReferencePeriod::new(month, year).expect("valid period")
}

fn cents(value: f64) -> i64 {
    to_cents(value).expect("valid amount")
}

#[test]
fn scenario_a_initial_balance_plus_prior_tithe() {
    let member = Member::new("Joana");
    let mut snapshot = MemorySnapshot::new()
        .with_initial_balance(InitialBalance::new(cents(1000.0), period(1, 2023)));
    snapshot.members.push(member.clone());
    snapshot
        .tithes
        .push(Tithe::new(member.id, cents(500.0), period(1, 2023)));
    snapshot
        .tithes
        .push(Tithe::new(member.id, cents(300.0), period(2, 2023)));

    let totals = ReportService::totals_for(&snapshot, period(2, 2023)).expect("totals");

    assert_eq!(totals.previous_balance, 1500.0);
    assert_eq!(totals.total_tithes, 300.0);
    assert_eq!(totals.total_entries, 300.0);
}

#[test]
fn scenario_b_no_initial_balance_row() {
    let member = Member::new("Joana");
    let mut snapshot = MemorySnapshot::new();
    snapshot.members.push(member.clone());
    snapshot
        .tithes
        .push(Tithe::new(member.id, cents(150.0), period(1, 2023)));
    snapshot
        .offers
        .push(Offer::loose(cents(50.0), period(1, 2023)));

    let totals = ReportService::totals_for(&snapshot, period(3, 2023)).expect("totals");

    // Baseline period (0, 0) is before the target, so history counts.
    assert_eq!(totals.previous_balance, 200.0);
    assert_eq!(totals.total_entries, 0.0);
    assert_eq!(totals.total_balance, 200.0);
}

#[test]
fn scenario_c_target_equal_to_initial_period() {
    let member = Member::new("Joana");
    let mut snapshot = MemorySnapshot::new()
        .with_initial_balance(InitialBalance::new(cents(1000.0), period(1, 2023)));
    snapshot.members.push(member.clone());
    snapshot
        .tithes
        .push(Tithe::new(member.id, cents(500.0), period(12, 2022)));

    let totals = ReportService::totals_for(&snapshot, period(1, 2023)).expect("totals");

    assert_eq!(totals.previous_balance, 0.0);
}

#[test]
fn scenario_d_zero_activity_member_stays_in_rollup() {
    let active = Member::new("Joana");
    let silent = Member::new("Pedro");
    let mut snapshot = MemorySnapshot::new();
    snapshot.members.push(active.clone());
    snapshot.members.push(silent.clone());
    snapshot
        .tithes
        .push(Tithe::new(active.id, cents(80.0), period(2, 2023)));

    let rows = ReportService::member_rollup_for(&snapshot, period(2, 2023), RollupFilter::All)
        .expect("rollup");
    let silent_row = rows
        .iter()
        .find(|row| row.member_id == silent.id)
        .expect("silent member listed");
    assert_eq!(silent_row.total_tithes, 0.0);
    assert_eq!(silent_row.total_offers, 0.0);

    let filtered =
        ReportService::member_rollup_for(&snapshot, period(2, 2023), RollupFilter::NonZeroOnly)
            .expect("rollup");
    assert!(filtered.iter().all(|row| row.member_id != silent.id));
}

#[test]
fn every_record_falls_in_exactly_one_partition() {
    let target = period(6, 2023);
    let periods = [
        period(1, 2020),
        period(5, 2023),
        period(6, 2023),
        period(7, 2023),
        period(12, 2024),
    ];

    for p in periods {
        let classes = [
            classify(&p, &target) == PeriodClass::Previous,
            classify(&p, &target) == PeriodClass::Current,
            classify(&p, &target) == PeriodClass::Future,
        ];
        assert_eq!(
            classes.iter().filter(|held| **held).count(),
            1,
            "period {p} must land in exactly one class"
        );
    }
}

#[test]
fn totals_reconcile_across_views() {
    // The same snapshot feeds the entries report, the output report, the
    // general report and the widget; their shared figures must agree.
    let member = Member::new("Joana");
    let category = ExpenseCategory::new("Manutenção");
    let mut snapshot = MemorySnapshot::new()
        .with_initial_balance(InitialBalance::new(cents(320.40), period(12, 2022)));
    snapshot.members.push(member.clone());
    snapshot.expense_categories.push(category.clone());
    snapshot
        .tithes
        .push(Tithe::new(member.id, cents(210.30), period(2, 2023)));
    snapshot
        .offers
        .push(Offer::special(member.id, cents(45.60), period(2, 2023)));
    snapshot
        .offers
        .push(Offer::loose(cents(33.10), period(2, 2023)));
    snapshot
        .other_entries
        .push(OtherEntry::new("bazar", cents(120.00), period(2, 2023)));
    snapshot.expenses.push(Expense::new(
        category.id,
        "telhado",
        cents(199.99),
        period(2, 2023),
    ));
    snapshot
        .withdrawals
        .push(Withdrawal::new("caixa", cents(25.00), period(2, 2023)));

    let target = period(2, 2023);
    let totals = ReportService::totals_for(&snapshot, target).expect("totals");
    let members = ReportService::member_rollup_for(&snapshot, target, RollupFilter::All)
        .expect("member rollup");
    let categories = ReportService::category_rollup_for(&snapshot, target, RollupFilter::All)
        .expect("category rollup");

    // Cents: 21030 + 4560 + 3310 + 12000 = 40900.
    assert_eq!(totals.total_entries, 409.0);
    assert_eq!(totals.total_withdrawals, 25.0);
    let recombined = totals.previous_balance + totals.total_entries - totals.total_expenses;
    assert!((totals.total_balance - recombined).abs() < 1e-9);

    // Member-level subtotals re-sum the same entries the same way.
    assert_eq!(members[0].total_tithes, totals.total_tithes);
    assert_eq!(members[0].total_offers, totals.total_special_offers);
    assert_eq!(categories[0].total_expenses, totals.total_expenses);
}

#[test]
fn idempotent_over_the_same_snapshot() {
    let member = Member::new("Joana");
    let mut snapshot = MemorySnapshot::new();
    snapshot.members.push(member.clone());
    snapshot
        .tithes
        .push(Tithe::new(member.id, cents(77.77), period(2, 2023)));

    let first = ReportService::totals_for(&snapshot, period(2, 2023)).expect("totals");
    let second = ReportService::totals_for(&snapshot, period(2, 2023)).expect("totals");
    assert_eq!(first, second);
}

#[test]
fn overflow_fails_the_whole_computation() {
    let withdrawals = vec![
        Withdrawal::new("a", i64::MAX, period(2, 2023)),
        Withdrawal::new("b", 1, period(2, 2023)),
    ];

    let err = compute_totals(period(2, 2023), None, &[], &[], &[], &[], &withdrawals)
        .expect_err("overflow should fail");
    match err {
        TreasuryError::InvalidAmount { collection, .. } => assert_eq!(collection, "withdrawals"),
        other => panic!("unexpected error: {other}"),
    }
}
