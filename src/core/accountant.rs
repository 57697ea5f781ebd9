//! Day-count accounting for incident records.
//!
//! Every record derives three counts from its `desde`/`hasta` span: the
//! total inclusive days, the overlap with the calendar month the span
//! starts in, and the overlap with a separately chosen reference month.

use crate::config::Features;
use crate::models::record::IncidentRecord;
use crate::utils::date::{self, MonthKey};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayCounts {
    pub total: Option<i64>,
    pub month_of_start: Option<i64>,
    pub month_of_reference: Option<i64>,
}

/// Candidate sources for the reference month, in priority order.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonthSelection {
    /// Explicit "month to calculate" given with the command.
    pub calc: Option<MonthKey>,
    /// Configured default chosen month.
    pub chosen: Option<MonthKey>,
    /// Month facet active on the history view.
    pub history_filter: Option<MonthKey>,
}

/// Pick the reference month: the explicit month to calculate wins, then the
/// chosen month, then the active history month filter. A source is only
/// consulted while its feature flag is active.
pub fn resolve_reference_month(sel: &MonthSelection, features: &Features) -> Option<MonthKey> {
    if features.month_to_calculate && sel.calc.is_some() {
        return sel.calc;
    }
    if features.chosen_month && sel.chosen.is_some() {
        return sel.chosen;
    }
    if features.history_month_filter && sel.history_filter.is_some() {
        return sel.history_filter;
    }
    None
}

/// Compute the three day counts for a `desde`/`hasta` span.
///
/// When either endpoint fails to parse, all three come back `None`: the
/// accountant never guesses. `month_of_reference` is `None` whenever no
/// reference month is available.
pub fn compute_day_counts(desde: &str, hasta: &str, reference: Option<MonthKey>) -> DayCounts {
    let (Some(d), Some(h)) = (date::parse_date(desde), date::parse_date(hasta)) else {
        return DayCounts::default();
    };

    let total = date::days_inclusive(d, h);
    let month_of_start =
        date::overlap_days(d, h, date::start_of_month(d), date::end_of_month(d));
    let month_of_reference =
        reference.map(|mk| date::overlap_days(d, h, mk.first_day(), mk.last_day()));

    DayCounts {
        total: Some(total),
        month_of_start: Some(month_of_start),
        month_of_reference,
    }
}

/// Fill the record's derived fields from its own span.
///
/// Without `force` a field is written only when absent, so values already
/// stored stay canonical; with `force` all three are replaced (the
/// recompute-on-save path). Returns whether anything changed.
pub fn reconcile_record(
    record: &mut IncidentRecord,
    reference: Option<MonthKey>,
    force: bool,
) -> bool {
    let counts = compute_day_counts(&record.desde, &record.hasta, reference);

    let mut changed = false;
    changed |= fill(&mut record.dias_total, counts.total, force);
    changed |= fill(&mut record.dias_mes_desde, counts.month_of_start, force);
    changed |= fill(&mut record.dias_mes_elegido, counts.month_of_reference, force);
    changed
}

fn fill(slot: &mut Option<i64>, value: Option<i64>, force: bool) -> bool {
    if slot.is_some() && !force {
        return false;
    }
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk(s: &str) -> Option<MonthKey> {
        MonthKey::parse(s)
    }

    #[test]
    fn splits_a_span_across_months() {
        // 2024-01-20 .. 2024-02-05: 17 days total, 12 in January, 5 in the
        // chosen February
        let c = compute_day_counts("2024-01-20", "2024-02-05", mk("2024-02"));
        assert_eq!(c.total, Some(17));
        assert_eq!(c.month_of_start, Some(12));
        assert_eq!(c.month_of_reference, Some(5));
    }

    #[test]
    fn no_reference_month_leaves_elegido_blank() {
        let c = compute_day_counts("2024-01-20", "2024-02-05", None);
        assert_eq!(c.total, Some(17));
        assert_eq!(c.month_of_reference, None);
    }

    #[test]
    fn reference_month_outside_the_span_counts_zero() {
        let c = compute_day_counts("2024-01-20", "2024-02-05", mk("2024-06"));
        assert_eq!(c.month_of_reference, Some(0));
    }

    #[test]
    fn bad_endpoint_blanks_everything() {
        let c = compute_day_counts("2024-01-20", "nope", mk("2024-02"));
        assert_eq!(c, DayCounts::default());
        let c = compute_day_counts("", "2024-02-05", None);
        assert_eq!(c, DayCounts::default());
    }

    #[test]
    fn reconcile_fills_only_blank_fields() {
        let mut r = IncidentRecord {
            desde: "2024-01-20".into(),
            hasta: "2024-02-05".into(),
            dias_total: Some(99),
            ..Default::default()
        };
        let changed = reconcile_record(&mut r, mk("2024-02"), false);
        assert!(changed);
        // populated value is canonical and survives
        assert_eq!(r.dias_total, Some(99));
        assert_eq!(r.dias_mes_desde, Some(12));
        assert_eq!(r.dias_mes_elegido, Some(5));
    }

    #[test]
    fn reconcile_twice_is_idempotent() {
        let mut r = IncidentRecord {
            desde: "2024-01-20".into(),
            hasta: "2024-02-05".into(),
            ..Default::default()
        };
        assert!(reconcile_record(&mut r, mk("2024-02"), false));
        let snapshot = r.clone();
        assert!(!reconcile_record(&mut r, mk("2024-02"), false));
        assert_eq!(r, snapshot);
    }

    #[test]
    fn force_replaces_populated_fields() {
        let mut r = IncidentRecord {
            desde: "2024-01-20".into(),
            hasta: "2024-02-05".into(),
            dias_total: Some(99),
            dias_mes_desde: Some(99),
            dias_mes_elegido: Some(99),
            ..Default::default()
        };
        assert!(reconcile_record(&mut r, mk("2024-02"), true));
        assert_eq!(r.dias_total, Some(17));
        assert_eq!(r.dias_mes_desde, Some(12));
        assert_eq!(r.dias_mes_elegido, Some(5));
    }

    #[test]
    fn reference_resolution_respects_priority_and_features() {
        let sel = MonthSelection {
            calc: mk("2024-03"),
            chosen: mk("2024-04"),
            history_filter: mk("2024-05"),
        };
        let all = Features::default();
        assert_eq!(resolve_reference_month(&sel, &all), mk("2024-03"));

        let no_calc = Features {
            month_to_calculate: false,
            ..Features::default()
        };
        assert_eq!(resolve_reference_month(&sel, &no_calc), mk("2024-04"));

        let only_history = Features {
            month_to_calculate: false,
            chosen_month: false,
            history_month_filter: true,
        };
        assert_eq!(resolve_reference_month(&sel, &only_history), mk("2024-05"));

        assert_eq!(
            resolve_reference_month(&MonthSelection::default(), &all),
            None
        );
    }
}
