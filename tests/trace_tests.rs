//! tests untuk generator geometri overlay per metode

use metnum::eval::EvalError;
use metnum::iterations::{IterationRecord, PlotDataset, StepAux};
use metnum::method::MethodVariant;
use metnum::traces::{generate_method_traces, PlotTrace};

fn working_evaluator(expr: &str, x: f64) -> Result<f64, EvalError> {
    match expr {
        "x^2 - 2" => Ok(x * x - 2.0),
        "(x + 2/x)/2" => Ok((x + 2.0 / x) * 0.5),
        _ => Err(EvalError::UnknownFunction {
            expr: expr.to_string(),
        }),
    }
}

fn failing_evaluator(expr: &str, _x: f64) -> Result<f64, EvalError> {
    Err(EvalError::UnknownFunction {
        expr: expr.to_string(),
    })
}

fn plot_dataset() -> PlotDataset {
    PlotDataset {
        x_range: vec![0.0, 1.0, 2.0, 3.0],
        y_values: vec![-2.0, -1.0, 2.0, 7.0],
        func_str: "x^2 - 2".to_string(),
        g_values: None,
        g_func_str: None,
        root: None,
    }
}

fn bracket_record() -> IterationRecord {
    IterationRecord {
        iteration: 1,
        xr: 1.5,
        f_xr: 0.25,
        error: 10.0,
        a: Some(1.0),
        b: Some(2.0),
        ..Default::default()
    }
}

/// Urutan tetap per metode: semua marker muncul sebelum garis penghubung.
fn assert_markers_first(traces: &[PlotTrace]) {
    let mut seen_line = false;
    for trace in traces {
        if trace.is_markers() {
            assert!(
                !seen_line,
                "marker '{}' muncul setelah garis, urutan tidak stabil",
                trace.name
            );
        } else {
            seen_line = true;
        }
    }
}

#[test]
fn bisection_yields_exactly_three_traces() {
    let traces = generate_method_traces(
        &bracket_record(),
        None,
        0,
        MethodVariant::Bisection,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 3);
    assert_markers_first(&traces);

    // marker interval di (a, 0) dan (b, 0)
    assert_eq!(traces[0].points, vec![[1.0, 0.0], [2.0, 0.0]]);
    // marker titik potong di (xr, f(xr))
    assert_eq!(traces[1].points, vec![[1.5, 0.25]]);
    // segmen evaluasi vertikal dari (xr, 0) ke (xr, f(xr))
    assert_eq!(traces[2].points, vec![[1.5, 0.0], [1.5, 0.25]]);
}

#[test]
fn bisection_without_bounds_still_marks_cut_point() {
    let record = IterationRecord {
        a: None,
        b: None,
        ..bracket_record()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::Bisection,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].points, vec![[1.5, 0.25]]);
}

#[test]
fn false_position_adds_secant_from_aux() {
    let aux = StepAux {
        fa: Some(-0.5),
        fb: Some(0.75),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &bracket_record(),
        Some(&aux),
        0,
        MethodVariant::FalsePosition,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 4);
    let secant = &traces[3];
    assert_eq!(secant.points, vec![[1.0, -0.5], [2.0, 0.75]]);
}

#[test]
fn false_position_falls_back_to_evaluator() {
    let traces = generate_method_traces(
        &bracket_record(),
        None,
        0,
        MethodVariant::FalsePosition,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 4);
    // fa = f(1) = -1, fb = f(2) = 2
    assert_eq!(traces[3].points, vec![[1.0, -1.0], [2.0, 2.0]]);
}

#[test]
fn false_position_eval_failure_returns_partial_traces() {
    let traces = generate_method_traces(
        &bracket_record(),
        None,
        0,
        MethodVariant::FalsePosition,
        &plot_dataset(),
        &failing_evaluator,
    );

    // garis secant hilang, tiga trace lainnya tetap dikembalikan
    assert_eq!(traces.len(), 3);
}

#[test]
fn fixed_point_without_x_prev_is_empty() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.5,
        f_xr: 0.25,
        error: 10.0,
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::FixedPoint,
        &plot_dataset(),
        &working_evaluator,
    );
    assert!(traces.is_empty());
}

#[test]
fn fixed_point_staircase_geometry() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.5,
        f_xr: 0.25,
        error: 100.0,
        x_prev: Some(1.0),
        g_x_prev: Some(1.5),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::FixedPoint,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 3);
    assert_markers_first(&traces);
    assert_eq!(traces[0].points, vec![[1.0, 1.5]]);
    assert_eq!(traces[1].points, vec![[1.0, 1.5], [1.5, 1.5]]);
    assert_eq!(traces[2].points, vec![[1.5, 1.5], [1.5, 0.25]]);
}

#[test]
fn fixed_point_evaluates_g_when_value_missing() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.5,
        f_xr: 0.25,
        error: 100.0,
        x_prev: Some(1.0),
        g_x_prev: None,
        ..Default::default()
    };
    let mut plot = plot_dataset();
    plot.g_func_str = Some("(x + 2/x)/2".to_string());

    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::FixedPoint,
        &plot,
        &working_evaluator,
    );

    assert_eq!(traces.len(), 3);
    // g(1) = (1 + 2)/2 = 1.5
    assert_eq!(traces[0].points, vec![[1.0, 1.5]]);
}

#[test]
fn newton_without_derivative_is_empty() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.0,
        f_xr: -1.0,
        error: 100.0,
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::NewtonRaphson,
        &plot_dataset(),
        &working_evaluator,
    );
    assert!(traces.is_empty());
}

#[test]
fn newton_tangent_spans_full_plot_range() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.0,
        f_xr: -1.0,
        error: 100.0,
        f_prime_x: Some(2.0),
        x_next: Some(1.5),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::NewtonRaphson,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 4);
    assert_markers_first(&traces);

    assert_eq!(traces[0].points, vec![[1.0, -1.0]]);
    assert_eq!(traces[1].points, vec![[1.5, 0.0]]);

    // intersep = f(xr) - f'(xr) * xr = -1 - 2 = -3; rentang x plot [0, 3]
    let tangent = &traces[2];
    assert_eq!(tangent.points, vec![[0.0, -3.0], [3.0, 3.0]]);

    assert_eq!(traces[3].points, vec![[1.0, 0.0], [1.0, -1.0]]);
}

#[test]
fn newton_without_x_next_skips_that_marker() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.0,
        f_xr: -1.0,
        error: 100.0,
        f_prime_x: Some(2.0),
        x_next: None,
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::NewtonRaphson,
        &plot_dataset(),
        &working_evaluator,
    );
    assert_eq!(traces.len(), 3);
}

#[test]
fn secant_uses_params_from_record() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.333333,
        f_xr: -0.222222,
        error: 50.0,
        a: Some(1.0),
        b: Some(2.0),
        m_secant: Some(3.0),
        b_secant: Some(-4.0),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::Secant,
        &plot_dataset(),
        &working_evaluator,
    );

    assert_eq!(traces.len(), 3);
    assert_markers_first(&traces);

    // marker dua titik sebelumnya di (a, f(a)) dan (b, f(b))
    assert_eq!(traces[0].points, vec![[1.0, -1.0], [2.0, 2.0]]);
    assert_eq!(traces[1].points, vec![[1.333333, 0.0]]);
    // garis y = 3x - 4 direntangkan pada [0, 3]
    assert_eq!(traces[2].points, vec![[0.0, -4.0], [3.0, 5.0]]);
}

#[test]
fn secant_recomputes_params_via_evaluator() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.333333,
        f_xr: -0.222222,
        error: 50.0,
        a: Some(1.0),
        b: Some(2.0),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::Secant,
        &plot_dataset(),
        &working_evaluator,
    );

    // m = (f(2) - f(1)) / (2 - 1) = 3, intersep = f(2) - 3*2 = -4
    assert_eq!(traces.len(), 3);
    assert_eq!(traces[2].points, vec![[0.0, -4.0], [3.0, 5.0]]);
}

#[test]
fn secant_params_from_aux_when_record_lacks_them() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.333333,
        f_xr: -0.222222,
        error: 50.0,
        a: Some(1.0),
        b: Some(2.0),
        ..Default::default()
    };
    let aux = StepAux {
        m_secant: Some(3.0),
        b_secant: Some(-4.0),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        Some(&aux),
        0,
        MethodVariant::Secant,
        &plot_dataset(),
        &failing_evaluator,
    );

    // garis tetap tergambar dari data bantu; marker titik sebelumnya hilang
    // karena evaluasinya gagal
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[1].points, vec![[0.0, -4.0], [3.0, 5.0]]);
}

#[test]
fn secant_without_any_params_is_empty() {
    let record = IterationRecord {
        iteration: 1,
        xr: 1.333333,
        f_xr: -0.222222,
        error: 50.0,
        a: Some(1.0),
        b: Some(2.0),
        ..Default::default()
    };
    let traces = generate_method_traces(
        &record,
        None,
        0,
        MethodVariant::Secant,
        &plot_dataset(),
        &failing_evaluator,
    );
    assert!(traces.is_empty());
}
