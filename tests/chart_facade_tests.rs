use approx::assert_abs_diff_eq;
use estate_charts::api::{
    BarChartConfig, ChartKind, ChartOutput, DonutChartConfig, LineChartConfig, NO_DATA_MESSAGE,
    build_bar_chart, build_donut_chart, build_line_chart,
};
use estate_charts::core::{BarOrientation, DataPoint, TextAnchor, ValueFormatter};

fn monthly_revenue() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 10.0),
        DataPoint::new("Feb", 20.0),
        DataPoint::new("Mar", 0.0),
    ]
}

#[test]
fn empty_series_short_circuits_every_chart_kind() {
    let kinds = [
        ChartKind::Bar(BarChartConfig::default()),
        ChartKind::Line(LineChartConfig::default()),
        ChartKind::Donut(DonutChartConfig::default()),
    ];
    for kind in &kinds {
        for _ in 0..2 {
            let output = kind.build(&[]).expect("build");
            let ChartOutput::NoData(placeholder) = output else {
                panic!("{} chart must emit the no-data placeholder", kind.name());
            };
            assert_eq!(placeholder.label.text, NO_DATA_MESSAGE);
            assert_eq!(placeholder.label.anchor, TextAnchor::Middle);
        }
    }
}

#[test]
fn default_bar_chart_uses_260px_plot() {
    let output = build_bar_chart(&monthly_revenue(), &BarChartConfig::default()).expect("build");
    let chart = output.as_bar().expect("bar output");

    assert_eq!(chart.plot.height, 260.0);
    assert_eq!(chart.orientation, BarOrientation::Vertical);
    let heights: Vec<f64> = chart.bars.iter().map(|bar| bar.rect.height).collect();
    assert_eq!(heights, vec![130.0, 260.0, 0.0]);
    assert_eq!(chart.bars[1].label, "Feb");
}

#[test]
fn bar_chart_axis_and_gridlines_follow_ticks() {
    let output = build_bar_chart(&monthly_revenue(), &BarChartConfig::default()).expect("build");
    let chart = output.as_bar().expect("bar output");

    let texts: Vec<&str> = chart.axis_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "5", "10", "15", "20"]);
    assert!(chart.axis_labels.iter().all(|l| l.anchor == TextAnchor::End));

    let grid_y: Vec<f64> = chart.gridlines.iter().map(|g| g.from.y).collect();
    assert_eq!(grid_y, vec![270.0, 205.0, 140.0, 75.0, 10.0]);
    assert!(chart.gridlines.iter().all(|g| g.from.x == 40.0 && g.to.x == 590.0));

    let no_grid = build_bar_chart(&monthly_revenue(), &BarChartConfig::new().with_grid(false))
        .expect("build");
    let chart = no_grid.as_bar().expect("bar output");
    assert!(chart.gridlines.is_empty());
    assert_eq!(chart.axis_labels.len(), 5);
}

#[test]
fn bar_value_labels_sit_above_bars_when_enabled() {
    let hidden = build_bar_chart(&monthly_revenue(), &BarChartConfig::default()).expect("build");
    assert!(hidden.as_bar().expect("bar").value_labels.is_empty());

    let config = BarChartConfig::new()
        .with_values(true)
        .with_format_value(ValueFormatter::new(|v| format!("${v}")));
    let output = build_bar_chart(&monthly_revenue(), &config).expect("build");
    let chart = output.as_bar().expect("bar output");

    assert_eq!(chart.value_labels.len(), 3);
    assert_eq!(chart.value_labels[0].text, "$10");
    assert_abs_diff_eq!(chart.value_labels[0].y, chart.bars[0].rect.y - 5.0);
    assert_abs_diff_eq!(chart.value_labels[0].x, chart.bars[0].rect.center_x());
}

#[test]
fn horizontal_bar_chart_moves_value_axis_to_bottom() {
    let config = BarChartConfig::new().with_horizontal(true).with_values(true);
    let output = build_bar_chart(&monthly_revenue(), &config).expect("build");
    let chart = output.as_bar().expect("bar output");

    assert_eq!(chart.orientation, BarOrientation::Horizontal);
    let widths: Vec<f64> = chart.bars.iter().map(|bar| bar.rect.width).collect();
    assert_eq!(widths, vec![275.0, 550.0, 0.0]);
    assert!(chart.gridlines.iter().all(|g| g.from.x == g.to.x));
    assert!(chart.category_labels.iter().all(|l| l.anchor == TextAnchor::End));
    assert!(chart.value_labels.iter().all(|l| l.anchor == TextAnchor::Start));
}

#[test]
fn dense_bar_chart_thins_category_labels() {
    let series: Vec<DataPoint> = (1..=12)
        .map(|month| DataPoint::new(format!("M{month}"), month as f64 * 100.0))
        .collect();
    let output = build_bar_chart(&series, &BarChartConfig::default()).expect("build");
    let chart = output.as_bar().expect("bar output");

    let texts: Vec<&str> = chart
        .category_labels
        .iter()
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(texts, vec!["M1", "M3", "M5", "M7", "M9", "M11", "M12"]);
    assert_eq!(chart.bars.len(), 12);
}

#[test]
fn line_chart_emits_paths_markers_and_labels() {
    let output = build_line_chart(&monthly_revenue(), &LineChartConfig::default()).expect("build");
    let chart = output.as_line().expect("line output");

    assert!(chart.line_path.starts_with("M 40 "));
    let area = chart.area_path.as_deref().expect("area enabled by default");
    assert!(area.ends_with(" Z"));
    assert_eq!(chart.markers.len(), 3);
    assert!(chart.markers.iter().all(|m| m.hit_radius > m.radius));
    assert_eq!(chart.category_labels.len(), 3);
    assert_eq!(chart.axis_labels.first().map(|l| l.text.as_str()), Some("0"));
    assert_eq!(chart.axis_labels.last().map(|l| l.text.as_str()), Some("20"));
}

#[test]
fn line_chart_toggles_points_and_area() {
    let config = LineChartConfig::new()
        .with_points(false)
        .with_fill_area(false)
        .with_grid(false);
    let output = build_line_chart(&monthly_revenue(), &config).expect("build");
    let chart = output.as_line().expect("line output");

    assert!(chart.markers.is_empty());
    assert!(chart.area_path.is_none());
    assert!(chart.gridlines.is_empty());
    assert_eq!(chart.points.len(), 3);
}

#[test]
fn single_point_line_chart_is_centered() {
    let config = LineChartConfig::default();
    let output = build_line_chart(&[DataPoint::new("X", 5.0)], &config).expect("build");
    let chart = output.as_line().expect("line output");

    let plot = config.plot_area();
    assert_abs_diff_eq!(chart.points[0].x, plot.x + plot.width / 2.0);
    assert_abs_diff_eq!(chart.points[0].y, plot.y + plot.height / 2.0);
}

#[test]
fn donut_chart_reports_legend_and_total() {
    let series = vec![DataPoint::new("A", 1_000.0), DataPoint::new("B", 3_000.0)];
    let output = build_donut_chart(&series, &DonutChartConfig::default()).expect("build");
    let chart = output.as_donut().expect("donut output");

    assert_eq!(chart.outer_radius, 100.0);
    assert_abs_diff_eq!(chart.inner_radius, 60.0, epsilon = 1e-9);
    assert_eq!(chart.legend.len(), 2);
    assert_eq!(chart.legend[0].percentage_text, "25.0%");
    assert!(chart.arcs[1].large_arc);
    let total = chart.total_label.as_ref().expect("donut hole label");
    assert_eq!(total.text, "4.0K");
    assert_eq!((total.x, total.anchor), (100.0, TextAnchor::Middle));
}

#[test]
fn donut_chart_zero_total_is_no_data() {
    let series = vec![DataPoint::new("A", 0.0), DataPoint::new("B", 0.0)];
    let output = build_donut_chart(&series, &DonutChartConfig::default()).expect("build");
    assert!(output.is_no_data());
}

#[test]
fn pie_chart_has_no_total_label_and_legend_can_be_hidden() {
    let config = DonutChartConfig::new().with_inner_radius(0.0).with_legend(false);
    let series = vec![DataPoint::new("A", 2.0), DataPoint::new("B", 2.0)];
    let output = build_donut_chart(&series, &config).expect("build");
    let chart = output.as_donut().expect("donut output");

    assert!(chart.total_label.is_none());
    assert!(chart.legend.is_empty());
    assert_eq!(chart.arcs.len(), 2);
}

#[test]
fn invalid_configs_are_rejected() {
    let err = build_bar_chart(&monthly_revenue(), &BarChartConfig::new().with_size(0.0, 300.0))
        .expect_err("zero width");
    assert!(format!("{err}").contains("invalid viewport"));

    let err = build_donut_chart(
        &monthly_revenue(),
        &DonutChartConfig::new().with_inner_radius(1.2),
    )
    .expect_err("ratio above one");
    assert!(format!("{err}").contains("inner radius"));
}
