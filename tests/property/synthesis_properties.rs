use esg_synth::application::value_estimator::{bucket_for, estimate_text};
use esg_synth::infrastructure::number_format::{Locale, NumberFormat};
use esg_synth::{derive_seed, estimate, synthesize, Criterion, Estimate, MetricDescriptor};
use proptest::prelude::*;

const UNITS: &[&str] = &[
    "%",
    "Percent",
    "thousand currency units",
    "currency units",
    "people",
    "tons",
    "hours",
    "gigajoule",
    "рублей",
    "",
    "furlongs",
];

proptest! {
    #[test]
    fn estimate_is_deterministic(id in ".{1,40}", unit_idx in 0..UNITS.len()) {
        let metric = MetricDescriptor::numeric(id, UNITS[unit_idx]);
        prop_assert_eq!(estimate(&metric), estimate(&metric));
    }

    #[test]
    fn boolean_estimate_is_one_of_two_labels(id in ".{1,40}") {
        let metric = MetricDescriptor::boolean(id);
        let ru = estimate_text(&metric, &NumberFormat::for_locale(Locale::RuRu));
        let en = estimate_text(&metric, &NumberFormat::for_locale(Locale::EnUs));
        prop_assert!(ru == "Да" || ru == "Нет", "unexpected label {}", ru);
        prop_assert!(en == "Yes" || en == "No", "unexpected label {}", en);
        prop_assert_eq!(ru == "Да", en == "Yes");
    }

    #[test]
    fn numeric_estimate_stays_in_bucket(id in ".{1,40}", unit_idx in 0..UNITS.len()) {
        let unit = UNITS[unit_idx];
        let bucket = bucket_for(unit);
        match estimate(&MetricDescriptor::numeric(id, unit)) {
            Estimate::Amount(n) => {
                prop_assert!(n >= bucket.min() && n <= bucket.max(), "{} outside {:?}", n, bucket);
            }
            Estimate::Flag(_) => prop_assert!(false, "numeric metric produced a flag"),
        }
    }

    #[test]
    fn grouped_text_parses_back(id in ".{1,40}", unit_idx in 0..UNITS.len()) {
        let metric = MetricDescriptor::numeric(id, UNITS[unit_idx]);
        let text = estimate_text(&metric, &NumberFormat::for_locale(Locale::EnUs));
        let parsed: u64 = text.replace(',', "").parse().unwrap();
        prop_assert_eq!(Estimate::Amount(parsed), estimate(&metric));
    }

    #[test]
    fn trend_endpoints_are_anchored(
        name in "[A-Za-zА-Яа-я ]{1,30}",
        target in 0.0f64..100.0,
        len in 2usize..24,
    ) {
        let points = synthesize(&Criterion::new(name, target), len).unwrap();
        prop_assert_eq!(points.len(), len);
        prop_assert_eq!(points[0].value, 0.0);
        prop_assert_eq!(points[len - 1].value, target.round());
    }

    #[test]
    fn trend_intermediates_are_non_negative_integers(
        name in ".{1,30}",
        target in -100.0f64..100.0,
        len in 3usize..24,
    ) {
        let points = synthesize(&Criterion::new(name, target), len).unwrap();
        for p in &points[1..len - 1] {
            prop_assert!(p.value >= 0.0);
            prop_assert!(!p.value.is_sign_negative());
            prop_assert_eq!(p.value, p.value.round());
        }
    }

    #[test]
    fn trend_is_deterministic(name in ".{1,30}", target in 0.0f64..100.0, len in 2usize..24) {
        let criterion = Criterion::new(name, target);
        prop_assert_eq!(synthesize(&criterion, len).unwrap(), synthesize(&criterion, len).unwrap());
    }

    #[test]
    fn same_name_scales_with_target(name in "[a-z]{1,12}", len in 3usize..13) {
        // Same name means same curve and noise, so unrounded values scale linearly.
        let low = synthesize(&Criterion::new(name.clone(), 40.0), len).unwrap();
        let high = synthesize(&Criterion::new(name, 80.0), len).unwrap();
        for (a, b) in low.iter().zip(&high) {
            prop_assert!((b.value - 2.0 * a.value).abs() <= 1.0, "{} vs {}", a.value, b.value);
        }
    }
}

#[test]
fn equal_seeds_share_a_curve() {
    // Anagrams have equal seeds and therefore the same curve and noise.
    assert_eq!(derive_seed("Health"), derive_seed("Htlaeh"));
    let a = synthesize(&Criterion::new("Health", 64.0), 6).unwrap();
    let b = synthesize(&Criterion::new("Htlaeh", 64.0), 6).unwrap();
    assert_eq!(a, b);
}
