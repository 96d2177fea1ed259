use crate::period::ReferencePeriod;
use crate::report::{
    category_rollup, compute_totals, member_rollup, CategoryTotals, MemberTotals, PeriodTotals,
    RollupFilter,
};
use crate::store::LedgerSnapshot;

use super::{ServiceError, ServiceResult};

/// Stateless facade the UI and report assemblers call: one snapshot in, one
/// computed result out, nothing cached between calls.
pub struct ReportService;

impl ReportService {
    /// Consolidated totals for `target`, consumed by the entries, output and
    /// general reports alike.
    pub fn totals_for(
        snapshot: &dyn LedgerSnapshot,
        target: ReferencePeriod,
    ) -> ServiceResult<PeriodTotals> {
        let initial = snapshot.initial_balance()?;
        let tithes = snapshot.tithes()?;
        let offers = snapshot.offers()?;
        let other_entries = snapshot.other_entries()?;
        let expenses = snapshot.expenses()?;
        let withdrawals = snapshot.withdrawals()?;
        compute_totals(
            target,
            initial.as_ref(),
            &tithes,
            &offers,
            &other_entries,
            &expenses,
            &withdrawals,
        )
        .map_err(ServiceError::from)
    }

    /// Totals for the period "now" falls in, backing the live
    /// partial-balance widget.
    pub fn partial_balance(snapshot: &dyn LedgerSnapshot) -> ServiceResult<PeriodTotals> {
        Self::totals_for(snapshot, ReferencePeriod::current())
    }

    /// Per-member tithe/special-offer totals for the entries report.
    pub fn member_rollup_for(
        snapshot: &dyn LedgerSnapshot,
        target: ReferencePeriod,
        filter: RollupFilter,
    ) -> ServiceResult<Vec<MemberTotals>> {
        let members = snapshot.members()?;
        let tithes = snapshot.tithes()?;
        let offers = snapshot.offers()?;
        member_rollup(target, &members, &tithes, &offers, filter).map_err(ServiceError::from)
    }

    /// Per-category expense totals for the output report.
    pub fn category_rollup_for(
        snapshot: &dyn LedgerSnapshot,
        target: ReferencePeriod,
        filter: RollupFilter,
    ) -> ServiceResult<Vec<CategoryTotals>> {
        let categories = snapshot.expense_categories()?;
        let expenses = snapshot.expenses()?;
        category_rollup(target, &categories, &expenses, filter).map_err(ServiceError::from)
    }
}
