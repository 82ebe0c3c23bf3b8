//! tests untuk perender panel info langkah

use metnum::info_panel::describe_step;
use metnum::iterations::IterationRecord;
use metnum::method::MethodVariant;

fn bracket_record() -> IterationRecord {
    IterationRecord {
        iteration: 3,
        xr: 1.5,
        f_xr: 0.25,
        error: 9.090909,
        a: Some(1.25),
        b: Some(1.5),
        ..Default::default()
    }
}

#[test]
fn header_counts_steps_from_one() {
    let info = describe_step(&bracket_record(), 2, 10, MethodVariant::Bisection);
    assert_eq!(info.header, "Iterasi 3 dari 10");
}

#[test]
fn numbers_are_formatted_to_six_decimals() {
    let info = describe_step(&bracket_record(), 0, 5, MethodVariant::Bisection);

    let find = |label: &str| {
        info.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("baris '{}' tidak ada", label))
    };

    assert_eq!(find("x"), "1.500000");
    assert_eq!(find("f(x)"), "0.250000");
    assert_eq!(find("Error relatif (%)"), "9.090909");
    assert_eq!(find("Interval [a, b]"), "[1.250000, 1.500000]");
}

#[test]
fn newton_row_for_derivative_only_when_present() {
    let mut record = IterationRecord {
        iteration: 1,
        xr: 1.0,
        f_xr: -1.0,
        error: 100.0,
        ..Default::default()
    };

    let info = describe_step(&record, 0, 5, MethodVariant::NewtonRaphson);
    assert!(!info.rows.iter().any(|(l, _)| l == "f'(x)"));

    record.f_prime_x = Some(2.0);
    let info = describe_step(&record, 0, 5, MethodVariant::NewtonRaphson);
    assert!(info
        .rows
        .iter()
        .any(|(l, v)| l == "f'(x)" && v == "2.000000"));
}

#[test]
fn fixed_point_has_no_interval_row() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.5,
        f_xr: 0.25,
        error: 100.0,
        x_prev: Some(1.0),
        ..Default::default()
    };
    let info = describe_step(&record, 0, 4, MethodVariant::FixedPoint);
    assert!(!info.rows.iter().any(|(l, _)| l.starts_with("Interval")));
}

#[test]
fn secant_labels_points_instead_of_interval() {
    let record = IterationRecord {
        a: Some(1.0),
        b: Some(2.0),
        ..bracket_record()
    };
    let info = describe_step(&record, 0, 4, MethodVariant::Secant);
    assert!(info.rows.iter().any(|(l, _)| l == "Titik [x₀, x₁]"));
}

#[test]
fn description_is_never_empty() {
    for variant in MethodVariant::ALL {
        let info = describe_step(&bracket_record(), 0, 5, variant);
        assert!(
            !info.description.is_empty(),
            "deskripsi kosong untuk {:?}",
            variant
        );
    }
}

#[test]
fn describe_step_is_idempotent() {
    let record = bracket_record();
    let first = describe_step(&record, 2, 10, MethodVariant::FalsePosition);
    let second = describe_step(&record, 2, 10, MethodVariant::FalsePosition);
    assert_eq!(first, second);
}
