use plotters::prelude::*;
use thiserror::Error;

use crate::domain::currency::Currency;
use crate::domain::results::BenefitResult;
use crate::services::business_case::{ProjectionYear, ScenarioComparison};
use crate::services::number_format::format_number;
use crate::services::tornado::TornadoBar;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("sensitivity data is empty")]
    EmptyTornado,
    #[error("projection data is empty")]
    EmptyProjection,
    #[error("scenario comparison data is empty")]
    EmptyComparison,
    #[error("failed to render chart: {0}")]
    Render(String),
}

const BENEFIT_GREEN: RGBColor = RGBColor(40, 167, 69);
const TOTAL_BLUE: RGBColor = RGBColor(0, 123, 255);
const IMPACT_RED: RGBColor = RGBColor(220, 53, 69);
const SCENARIO_COLORS: [RGBColor; 3] = [
    RGBColor(40, 167, 69),
    RGBColor(23, 162, 184),
    RGBColor(255, 193, 7),
];
const BAR_HALF_WIDTH: f64 = 0.3;

/// One bar of the benefit waterfall, spanning `start..end` on the amount axis.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallSegment {
    pub label: &'static str,
    pub start: f64,
    pub end: f64,
    pub is_total: bool,
}

/// Stacks the five categories on top of each other and closes with a total
/// bar drawn from zero.
pub fn waterfall_segments(benefits: &BenefitResult) -> Vec<WaterfallSegment> {
    let mut running = 0.0;
    let mut segments: Vec<WaterfallSegment> = benefits
        .categories()
        .into_iter()
        .map(|(label, amount)| {
            let start = running;
            running += amount;
            WaterfallSegment {
                label,
                start,
                end: running,
                is_total: false,
            }
        })
        .collect();
    segments.push(WaterfallSegment {
        label: "Total",
        start: 0.0,
        end: benefits.total_annual,
        is_total: true,
    });
    segments
}

/// Symmetric x-axis bounds that fit every bar with some headroom.
pub fn tornado_extent(bars: &[TornadoBar]) -> (f64, f64) {
    let widest = bars
        .iter()
        .flat_map(|bar| [bar.min_impact.abs(), bar.max_impact.abs()])
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    let bound = (widest * 1.1).max(1.0);
    (-bound, bound)
}

/// Axis bounds that include zero and every finite value, padded by a tenth of
/// the span on the sides that hold data.
pub fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let (low, high) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((0.0_f64, 0.0_f64), |(low, high), value| {
            (low.min(value), high.max(value))
        });
    let span = high - low;
    if span == 0.0 {
        return (0.0, 1.0);
    }
    let pad = span * 0.1;
    let low = if low < 0.0 { low - pad } else { 0.0 };
    let high = if high > 0.0 { high + pad } else { 0.0 };
    (low, high)
}

/// Label of the category drawn centred on `position`, or an empty string
/// between categories.
pub fn category_label(position: f64, labels: &[String]) -> String {
    let rounded = position.round();
    if (position - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

pub fn write_waterfall_png(
    output_path: &str,
    benefits: &BenefitResult,
    title: &str,
) -> Result<(), ChartError> {
    let segments = waterfall_segments(benefits);
    let symbol = benefits.currency.symbol();

    let (y_min, y_max) = padded_range(segments.iter().flat_map(|s| [s.start, s.end]));

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(110)
        .build_cartesian_2d(0..segments.len() as i32, y_min..y_max)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Benefit category")
        .y_desc(format!("Benefit amount ({symbol})"))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(segments.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            segments
                .get(*index as usize)
                .map(|segment| segment.label.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format_number(*value, 0, symbol, ""))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .draw_series(segments.iter().enumerate().map(|(idx, segment)| {
            let color = if segment.is_total { TOTAL_BLUE } else { BENEFIT_GREEN };
            Rectangle::new(
                [(idx as i32, segment.start), (idx as i32 + 1, segment.end)],
                ShapeStyle::from(&color).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

/// Horizontal bars of the lowest and highest ROI change per variable,
/// most sensitive variable on top.
pub fn write_tornado_png(
    output_path: &str,
    bars: &[TornadoBar],
    currency: Currency,
) -> Result<(), ChartError> {
    if bars.is_empty() {
        return Err(ChartError::EmptyTornado);
    }

    let (x_min, x_max) = tornado_extent(bars);
    let rows = bars.len() as i32;
    let row_of = |rank: usize| rows - 1 - rank as i32;

    let root = BitMapBackend::new(output_path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("ROI Sensitivity to Key Variables (Base Case, {currency})"),
            ("sans-serif", 28),
        )
        .x_label_area_size(55)
        .y_label_area_size(170)
        .build_cartesian_2d(x_min..x_max, 0..rows)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Impact on 3-Year ROI (percentage points)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .y_labels(bars.len())
        .y_label_formatter(&|row| {
            let rank = rows - 1 - *row;
            if rank < 0 {
                return String::new();
            }
            bars.get(rank as usize)
                .map(|bar| bar.variable.name().to_string())
                .unwrap_or_default()
        })
        .x_label_formatter(&|value| format!("{value:+.0}"))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let clamp = |value: f64| value.clamp(x_min, x_max);
    chart
        .draw_series(bars.iter().enumerate().map(|(rank, bar)| {
            let row = row_of(rank);
            Rectangle::new(
                [(clamp(bar.min_impact), row), (0.0, row + 1)],
                ShapeStyle::from(&IMPACT_RED).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;
    chart
        .draw_series(bars.iter().enumerate().map(|(rank, bar)| {
            let row = row_of(rank);
            Rectangle::new(
                [(0.0, row), (clamp(bar.max_impact), row + 1)],
                ShapeStyle::from(&BENEFIT_GREEN).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

/// Annual benefit and cost bars per year with the cumulative net benefit
/// drawn as a line on top.
pub fn write_projection_png(
    output_path: &str,
    projection: &[ProjectionYear],
    currency: Currency,
    title: &str,
) -> Result<(), ChartError> {
    if projection.is_empty() {
        return Err(ChartError::EmptyProjection);
    }

    let symbol = currency.symbol();
    let labels: Vec<String> = projection
        .iter()
        .map(|year| format!("Year {}", year.year))
        .collect();
    let (y_min, y_max) = padded_range(
        projection
            .iter()
            .flat_map(|year| [year.benefit, -year.cost, year.cumulative_net]),
    );
    let x_max = projection.len() as f64 - 0.5;

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(110)
        .build_cartesian_2d(-0.5..x_max, y_min..y_max)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc(format!("Amount ({symbol})"))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(projection.len())
        .x_label_formatter(&|value| category_label(*value, &labels))
        .y_label_formatter(&|value| format_number(*value, 0, symbol, ""))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .draw_series(projection.iter().enumerate().map(|(idx, year)| {
            let x = idx as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, year.benefit)],
                ShapeStyle::from(&BENEFIT_GREEN).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?
        .label("Annual Benefit")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], ShapeStyle::from(&BENEFIT_GREEN).filled())
        });
    chart
        .draw_series(projection.iter().enumerate().map(|(idx, year)| {
            let x = idx as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, -year.cost)],
                ShapeStyle::from(&IMPACT_RED).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?
        .label("Annual Cost")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], ShapeStyle::from(&IMPACT_RED).filled())
        });

    let cumulative: Vec<(f64, f64)> = projection
        .iter()
        .enumerate()
        .map(|(idx, year)| (idx as f64, year.cumulative_net))
        .collect();
    chart
        .draw_series(LineSeries::new(
            cumulative.clone(),
            ShapeStyle::from(&TOTAL_BLUE).stroke_width(3),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?
        .label("Cumulative Net Benefit")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], TOTAL_BLUE.stroke_width(3)));
    chart
        .draw_series(
            cumulative
                .iter()
                .map(|&point| Circle::new(point, 5, ShapeStyle::from(&TOTAL_BLUE).filled())),
        )
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 16))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

/// 3-year net benefit per scenario as bars, with the 3-year ROI on a second
/// axis. Unbounded ROI points are left out of the line.
pub fn write_scenario_comparison_png(
    output_path: &str,
    comparison: &[ScenarioComparison],
    currency: Currency,
) -> Result<(), ChartError> {
    if comparison.is_empty() {
        return Err(ChartError::EmptyComparison);
    }

    let symbol = currency.symbol();
    let labels: Vec<String> = comparison
        .iter()
        .map(|row| row.scenario.name().to_string())
        .collect();
    let (y_min, y_max) = padded_range(comparison.iter().map(|row| row.three_year_net));
    let (roi_min, roi_max) = padded_range(comparison.iter().map(|row| row.roi_3year));
    let x_max = comparison.len() as f64 - 0.5;

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Financial Outcomes Across Scenarios", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(110)
        .right_y_label_area_size(80)
        .build_cartesian_2d(-0.5..x_max, y_min..y_max)
        .map_err(|e| ChartError::Render(e.to_string()))?
        .set_secondary_coord(-0.5..x_max, roi_min..roi_max);

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc(format!("3-Year Net Benefit ({symbol})"))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(comparison.len())
        .x_label_formatter(&|value| category_label(*value, &labels))
        .y_label_formatter(&|value| format_number(*value, 0, symbol, ""))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    chart
        .configure_secondary_axes()
        .y_desc("3-Year ROI (%)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .y_label_formatter(&|value| format!("{value:.0}%"))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .draw_series(comparison.iter().enumerate().map(|(idx, row)| {
            let x = idx as f64;
            let color = SCENARIO_COLORS[idx % SCENARIO_COLORS.len()];
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, row.three_year_net)],
                ShapeStyle::from(&color).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let roi_points: Vec<(f64, f64)> = comparison
        .iter()
        .enumerate()
        .filter(|(_, row)| row.roi_3year.is_finite())
        .map(|(idx, row)| (idx as f64, row.roi_3year))
        .collect();
    chart
        .draw_secondary_series(LineSeries::new(
            roi_points.clone(),
            ShapeStyle::from(&IMPACT_RED).stroke_width(3),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?;
    chart
        .draw_secondary_series(
            roi_points
                .iter()
                .map(|&point| Circle::new(point, 6, ShapeStyle::from(&IMPACT_RED).filled())),
        )
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}
