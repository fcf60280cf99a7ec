//! The aggregator: pivot/summary computation over survey records
//!
//! One parametrized set of pure functions replaces the per-page copies of
//! the same bucketing logic. All operations are total over well-formed
//! input: unknown category codes were already bucketed at parse time, and
//! the percentage guard keeps division defined for empty domains.
//!
//! Everything here is synchronous and recomputed from the full record
//! slice; record sets are tens to low hundreds of rows per domain, so a
//! linear pass per request is well inside budget.

use crate::contract::{Dimension, RecordKey, SurveyRecord};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// One entry of a top-N display. `category == None` marks the synthetic
/// remainder bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopEntry<D> {
    pub category: Option<D>,
    pub total: i64,
}

/// Sum a measure per category, zero-filled over the whole enumeration so
/// downstream tables have a stable row set.
pub fn dimension_totals<R, D, K, M>(records: &[R], key: K, measure: M) -> BTreeMap<D, i64>
where
    D: Dimension,
    K: Fn(&R) -> D,
    M: Fn(&R) -> i64,
{
    let mut totals: BTreeMap<D, i64> = D::ALL.iter().map(|d| (*d, 0)).collect();
    for record in records {
        *totals.entry(key(record)).or_insert(0) += measure(record);
    }
    totals
}

/// Sum a measure per ward. Every ward in `wards` gets a row; wards observed
/// in the records but missing from `wards` are added as well, so legacy rows
/// never drop out of totals.
pub fn ward_totals<R, W, M>(records: &[R], wards: &[u16], ward_of: W, measure: M) -> BTreeMap<u16, i64>
where
    W: Fn(&R) -> u16,
    M: Fn(&R) -> i64,
{
    let mut totals: BTreeMap<u16, i64> = wards.iter().map(|w| (*w, 0)).collect();
    for record in records {
        *totals.entry(ward_of(record)).or_insert(0) += measure(record);
    }
    totals
}

/// Two-dimensional (ward x category) pivot with every cell present,
/// defaulting to zero, so fixed-column tables render without gaps.
pub fn ward_pivot<R, D, W, K, M>(
    records: &[R],
    wards: &[u16],
    ward_of: W,
    key: K,
    measure: M,
) -> BTreeMap<u16, BTreeMap<D, i64>>
where
    D: Dimension,
    W: Fn(&R) -> u16,
    K: Fn(&R) -> D,
    M: Fn(&R) -> i64,
{
    let mut ward_set: BTreeSet<u16> = wards.iter().copied().collect();
    for record in records {
        ward_set.insert(ward_of(record));
    }

    let mut pivot: BTreeMap<u16, BTreeMap<D, i64>> = ward_set
        .into_iter()
        .map(|w| (w, D::ALL.iter().map(|d| (*d, 0)).collect()))
        .collect();

    for record in records {
        if let Some(cell) = pivot
            .get_mut(&ward_of(record))
            .and_then(|row| row.get_mut(&key(record)))
        {
            *cell += measure(record);
        }
    }
    pivot
}

/// Collapse totals into the top `n` non-zero categories (descending by
/// total, ties broken by enumeration order) plus a synthetic remainder.
/// No remainder entry is emitted when the remainder is zero.
pub fn collapse_top_n<D: Dimension>(totals: &BTreeMap<D, i64>, n: usize) -> Vec<TopEntry<D>> {
    let mut nonzero: Vec<(D, i64)> = totals
        .iter()
        .filter(|(_, total)| **total != 0)
        .map(|(d, total)| (*d, *total))
        .collect();
    nonzero.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut entries: Vec<TopEntry<D>> = nonzero
        .iter()
        .take(n)
        .map(|(d, total)| TopEntry {
            category: Some(*d),
            total: *total,
        })
        .collect();

    let remainder: i64 = nonzero.iter().skip(n).map(|(_, total)| total).sum();
    if remainder != 0 {
        entries.push(TopEntry {
            category: None,
            total: remainder,
        });
    }
    entries
}

/// Share of `value` in `total` as a percentage. Defined for every input:
/// an empty grand total yields 0.0, never NaN or infinity.
pub fn percentage(value: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

/// Advisory duplicate scan: first record whose key matches the candidate,
/// skipping the record being edited. Linear over the loaded snapshot; the
/// storage unique index remains the authority.
pub fn find_conflict<'a>(
    records: &'a [SurveyRecord],
    key: &RecordKey,
    exclude_id: Option<Uuid>,
) -> Option<&'a SurveyRecord> {
    records
        .iter()
        .find(|record| Some(record.id) != exclude_id && record.key() == *key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Gender, Religion, SurveyDomain};
    use chrono::Utc;

    fn population_record(ward: u16, gender: Gender, population: i64) -> SurveyRecord {
        SurveyRecord {
            id: Uuid::new_v4(),
            domain: SurveyDomain::Population,
            ward_number: ward,
            gender: Some(gender),
            age_group: None,
            category: None,
            population,
            households: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn gender_of(record: &SurveyRecord) -> Gender {
        record.gender.unwrap_or(Gender::Other)
    }

    #[test]
    fn concrete_scenario_matches_hand_computed_totals() {
        // ward 1: 50 male + 40 female, ward 2: 30 male
        let records = vec![
            population_record(1, Gender::Male, 50),
            population_record(1, Gender::Female, 40),
            population_record(2, Gender::Male, 30),
        ];

        let totals = dimension_totals(&records, gender_of, |r| r.population);
        assert_eq!(totals[&Gender::Male], 80);
        assert_eq!(totals[&Gender::Female], 40);
        assert_eq!(totals[&Gender::Other], 0);

        let grand_total: i64 = totals.values().sum();
        assert_eq!(grand_total, 120);

        let by_ward = ward_totals(&records, &[], |r| r.ward_number, |r| r.population);
        assert_eq!(by_ward[&1], 90);
        assert_eq!(by_ward[&2], 30);

        let ward1_male_pct = percentage(50, grand_total);
        assert!((ward1_male_pct - 41.666_666_666_666_664).abs() < 1e-9);
    }

    #[test]
    fn completeness_no_record_dropped() {
        let records = vec![
            population_record(1, Gender::Male, 7),
            population_record(3, Gender::Female, 11),
            population_record(5, Gender::Other, 2),
            population_record(5, Gender::Male, 0),
        ];
        let input_sum: i64 = records.iter().map(|r| r.population).sum();

        let totals = dimension_totals(&records, gender_of, |r| r.population);
        let bucket_sum: i64 = totals.values().sum();
        assert_eq!(bucket_sum, input_sum);
    }

    #[test]
    fn zero_filling_covers_whole_enumeration() {
        let records = vec![population_record(1, Gender::Male, 10)];
        let totals = dimension_totals(&records, gender_of, |r| r.population);

        for gender in Gender::ALL {
            assert!(totals.contains_key(gender), "missing {:?}", gender);
        }
        assert_eq!(totals[&Gender::Female], 0);
        assert_eq!(totals[&Gender::Other], 0);
    }

    #[test]
    fn pivot_rows_and_columns_reconcile() {
        let records = vec![
            population_record(1, Gender::Male, 50),
            population_record(1, Gender::Female, 40),
            population_record(2, Gender::Male, 30),
            population_record(4, Gender::Other, 5),
        ];
        let wards = [1, 2, 3, 4];

        let pivot = ward_pivot(&records, &wards, |r| r.ward_number, gender_of, |r| r.population);
        let by_ward = ward_totals(&records, &wards, |r| r.ward_number, |r| r.population);
        let by_gender = dimension_totals(&records, gender_of, |r| r.population);

        // row sums match per-ward totals, including the empty ward 3
        for (ward, row) in &pivot {
            let row_sum: i64 = row.values().sum();
            assert_eq!(row_sum, by_ward[ward], "ward {}", ward);
        }

        // column sums match per-category totals
        for gender in Gender::ALL {
            let column_sum: i64 = pivot.values().map(|row| row[gender]).sum();
            assert_eq!(column_sum, by_gender[gender], "{:?}", gender);
        }

        // every configured ward has a full row even without records
        assert_eq!(pivot[&3].values().sum::<i64>(), 0);
        assert_eq!(pivot[&3].len(), Gender::ALL.len());
    }

    #[test]
    fn top_n_conserves_the_grand_total() {
        let mut totals: BTreeMap<Religion, i64> = Religion::ALL.iter().map(|r| (*r, 0)).collect();
        totals.insert(Religion::Hindu, 800);
        totals.insert(Religion::Buddhist, 120);
        totals.insert(Religion::Kirant, 50);
        totals.insert(Religion::Christian, 20);
        totals.insert(Religion::Islam, 10);
        let grand_total: i64 = totals.values().sum();

        let top = collapse_top_n(&totals, 3);
        assert_eq!(top.len(), 4);
        assert_eq!(top[0].category, Some(Religion::Hindu));
        assert_eq!(top[1].category, Some(Religion::Buddhist));
        assert_eq!(top[2].category, Some(Religion::Kirant));
        assert_eq!(top[3].category, None);
        assert_eq!(top[3].total, 30);

        let sum: i64 = top.iter().map(|e| e.total).sum();
        assert_eq!(sum, grand_total);
    }

    #[test]
    fn top_n_omits_remainder_when_everything_fits() {
        let mut totals: BTreeMap<Religion, i64> = Religion::ALL.iter().map(|r| (*r, 0)).collect();
        totals.insert(Religion::Hindu, 800);
        totals.insert(Religion::Buddhist, 120);

        let top = collapse_top_n(&totals, 5);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|e| e.category.is_some()));
    }

    #[test]
    fn top_n_breaks_ties_by_enumeration_order() {
        let mut totals: BTreeMap<Religion, i64> = Religion::ALL.iter().map(|r| (*r, 0)).collect();
        totals.insert(Religion::Buddhist, 100);
        totals.insert(Religion::Hindu, 100);
        totals.insert(Religion::Kirant, 100);

        let top = collapse_top_n(&totals, 2);
        assert_eq!(top[0].category, Some(Religion::Hindu));
        assert_eq!(top[1].category, Some(Religion::Buddhist));
        assert_eq!(top[2].category, None);
        assert_eq!(top[2].total, 100);
    }

    #[test]
    fn percentage_is_bounded_and_never_nan() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(25, 0), 0.0);
        assert_eq!(percentage(0, 100), 0.0);
        assert_eq!(percentage(100, 100), 100.0);

        let p = percentage(50, 120);
        assert!(p > 0.0 && p < 100.0);
        assert!(p.is_finite());
    }

    #[test]
    fn duplicate_detection_is_deterministic_and_excludes_self() {
        let existing = population_record(3, Gender::Male, 10);
        let existing_id = existing.id;
        let records = vec![existing];

        let candidate = records[0].key();
        let hit = find_conflict(&records, &candidate, None);
        assert_eq!(hit.map(|r| r.id), Some(existing_id));

        // editing the same row is not a conflict with itself
        let self_edit = find_conflict(&records, &candidate, Some(existing_id));
        assert!(self_edit.is_none());

        // a different ward does not conflict
        let mut other_ward = candidate;
        other_ward.ward_number = 4;
        assert!(find_conflict(&records, &other_ward, None).is_none());
    }
}
