//! Reference scenarios
//!
//! Worked examples the plotting scripts rely on, checked through the public API exactly
//! as a caller would use it.

use approx::assert_relative_eq;
use plot_recipes::{
    AxisFormat, BoxMesh, DEFAULT_COMB, FigureLayout, RecipeError, ScaleType, UnitWidths,
    linear_axis_padding, log_axis_padding, log_ticks_base10, padded_limits,
    pcolor_box_coordinates,
};

#[test]
fn test_linear_axis_padding() {
    let (xmin, xmax) = linear_axis_padding(0.0, 2.0, 0.05);
    assert_relative_eq!(xmin, -0.1);
    assert_relative_eq!(xmax, 2.1);
}

#[test]
fn test_log_axis_padding() {
    let (xmin, xmax) = log_axis_padding(1.0e-11, 1.0e-9, 0.04);
    assert_relative_eq!(xmin, 8.317637711026709e-12, max_relative = 1e-12);
    assert_relative_eq!(xmax, 1.202264434617413e-09, max_relative = 1e-12);
}

#[test]
fn test_pcolor_box_coordinates_linear() {
    let edges = pcolor_box_coordinates(&[0.0, 1.0, 2.0], ScaleType::Linear, None);
    assert_eq!(edges, Some(vec![-0.5, 0.5, 1.5, 2.5]));
}

#[test]
fn test_pcolor_box_coordinates_single_sample() {
    let edges = pcolor_box_coordinates(&[0.0], ScaleType::Linear, Some(1.0));
    assert_eq!(edges, Some(vec![-0.5, 0.5]));
    assert_eq!(pcolor_box_coordinates(&[0.0], ScaleType::Linear, None), None);
}

#[test]
fn test_pcolor_box_coordinates_from_parsed_scale() {
    let scale = ScaleType::parse("log").unwrap();
    let edges = pcolor_box_coordinates(&[1.0e-2, 1.0e-1, 1.0], scale, None).unwrap();
    for (edge, exp) in edges.iter().zip([-2.5, -1.5, -0.5, 0.5]) {
        assert_relative_eq!(edge.log10(), exp, epsilon = 1e-12);
    }

    // Misspelled scales are rejected where the text is parsed
    assert!(matches!(
        ScaleType::parse("lin"),
        Err(RecipeError::UnknownScale(_))
    ));
}

#[test]
fn test_log_ticks_base10_documented_example() {
    let ticks = log_ticks_base10(3.0e2, 8.0e4, &DEFAULT_COMB);
    let expected = vec![
        300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, //
        1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 9000.0, //
        10000.0, 20000.0, 30000.0, 40000.0, 50000.0, 60000.0, 70000.0, 80000.0,
    ];
    assert_eq!(ticks, expected);
}

#[test]
fn test_log_ticks_base10_empty_sub_decade() {
    assert_eq!(log_ticks_base10(1.01e-1, 1.02e-1, &DEFAULT_COMB), Vec::<f64>::new());
}

#[test]
fn test_log_ticks_base10_small_values() {
    let ticks = log_ticks_base10(2.0e-12, 3.0e-11, &DEFAULT_COMB);
    assert_eq!(ticks.len(), 8 + 3);
    assert_relative_eq!(ticks[0], 2.0e-12, max_relative = 1e-12);
    assert_relative_eq!(ticks[10], 3.0e-11, max_relative = 1e-12);
}

#[test]
fn test_format_pcolor_figure() {
    // The steps a pcolor recipe goes through before handing off to a plotting library
    let x: Vec<f64> = (0..5).map(|i| i as f64 * 0.25).collect();
    let y = plot_recipes::logspace(-3.0, 0.0, 4);

    let mesh = BoxMesh::new(&x, ScaleType::Linear, &y, ScaleType::Log, UnitWidths::default())
        .unwrap();
    assert_eq!(mesh.shape(), (4, 5));

    let (ymin, ymax) = padded_limits(&mesh.y_edges, ScaleType::Log, 0.0).unwrap();
    let y_axis = AxisFormat::from_data(ymin, ymax, 0.04, ScaleType::Log)
        .unwrap()
        .with_label("amplitude");
    assert_eq!(y_axis.major_ticks().len(), 4);

    let x_axis = AxisFormat::from_data(mesh.x_edges[0], mesh.x_edges[5], 0.0, ScaleType::Linear)
        .unwrap();
    assert_relative_eq!(x_axis.min, -0.125);
    assert_relative_eq!(x_axis.max, 1.125);

    let layout = FigureLayout::default();
    let rect = layout.axes_rect().unwrap();
    assert!(rect.left > 0.0 && rect.left + rect.width < 1.0);
}
