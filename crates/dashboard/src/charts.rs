//! Server-side chart geometry.
//!
//! Chart math happens here so the templates only print coordinates and
//! preformatted labels. Bars are sized as percentages for CSS, the
//! donut is a stroke-dashed SVG circle, and the line chart emits
//! polyline points in a fixed 640x280 view box.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use salesboard_core::YearlySales;

use crate::filters;

/// Sequential teal palette for donut segments, darkest last.
const TEAL: [&str; 7] = [
    "#d1eeea", "#a8dbd9", "#85c4c9", "#68abb8", "#4f90a6", "#3b738f", "#2a5674",
];

const UNITS_COLOR: &str = "#636EFA";
const AOV_COLOR: &str = "#EF553B";

// Line chart plot area within the 640x280 view box.
const PLOT_LEFT: f64 = 50.0;
const PLOT_RIGHT: f64 = 620.0;
const PLOT_TOP: f64 = 16.0;
const PLOT_BOTTOM: f64 = 248.0;

/// Number of horizontal gridlines on the line chart, including zero.
const Y_TICKS: u32 = 5;

// =============================================================================
// Bar chart
// =============================================================================

/// One vertical bar.
#[derive(Debug, Clone)]
pub struct BarRow {
    pub label: String,
    pub value_label: String,
    /// Bar height as a percentage of the tallest bar.
    pub height_pct: f64,
}

/// Vertical bar chart scaled to its largest value.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub rows: Vec<BarRow>,
}

impl BarChart {
    /// Build bars from label/value pairs, preserving input order.
    ///
    /// Values are labelled in millions. Bars for non-positive values
    /// collapse to zero height rather than rendering downwards.
    #[must_use]
    pub fn new(rows: Vec<(String, Decimal)>) -> Self {
        let max = rows
            .iter()
            .map(|(_, value)| *value)
            .max()
            .unwrap_or(Decimal::ZERO);

        let rows = rows
            .into_iter()
            .map(|(label, value)| {
                let height_pct = if max > Decimal::ZERO {
                    (value / max * Decimal::from(100))
                        .to_f64()
                        .unwrap_or(0.0)
                        .clamp(0.0, 100.0)
                } else {
                    0.0
                };
                BarRow {
                    label,
                    value_label: filters::format_millions(value),
                    height_pct,
                }
            })
            .collect();

        Self { rows }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Donut chart
// =============================================================================

/// One slice of the donut, precomputed for `stroke-dasharray` rendering
/// on a circle with circumference 100.
#[derive(Debug, Clone)]
pub struct DonutSegment {
    pub label: String,
    pub value_label: String,
    pub pct_label: String,
    pub color: &'static str,
    pub dash_array: String,
    pub dash_offset: String,
}

/// Donut chart over label/value pairs.
#[derive(Debug, Clone)]
pub struct DonutChart {
    pub segments: Vec<DonutSegment>,
}

impl DonutChart {
    /// Build segments from label/value pairs, preserving input order.
    ///
    /// Slices start at twelve o'clock and run clockwise. A chart whose
    /// values sum to zero has no segments.
    #[must_use]
    pub fn new(rows: Vec<(String, Decimal)>) -> Self {
        let total: Decimal = rows.iter().map(|(_, value)| *value).sum();
        if total <= Decimal::ZERO {
            return Self { segments: vec![] };
        }

        let mut cumulative = 0.0_f64;
        let mut segments = Vec::with_capacity(rows.len());
        for ((label, value), color) in rows.into_iter().zip(TEAL.iter().cycle().copied()) {
            let pct = (value / total * Decimal::from(100))
                .to_f64()
                .unwrap_or(0.0);
            segments.push(DonutSegment {
                label,
                value_label: filters::format_usd(value),
                pct_label: format!("{pct:.1}%"),
                color,
                dash_array: format!("{pct:.2} {:.2}", 100.0 - pct),
                dash_offset: format!("{:.2}", 25.0 - cumulative),
            });
            cumulative += pct;
        }

        Self { segments }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

// =============================================================================
// Line chart
// =============================================================================

/// A marker on a line, with its tooltip label.
#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// One plotted series.
#[derive(Debug, Clone)]
pub struct LineSeries {
    pub name: &'static str,
    pub color: &'static str,
    /// Space-separated `x,y` pairs for a `<polyline>` points attribute.
    pub points_attr: String,
    pub markers: Vec<ChartPoint>,
}

/// A horizontal gridline and its axis label.
#[derive(Debug, Clone)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

/// An x-axis label under a plotted column.
#[derive(Debug, Clone)]
pub struct XLabel {
    pub x: f64,
    pub label: String,
}

/// Dual-line chart of yearly units sold and average order value.
///
/// Both series share one y-axis scaled to the larger of the two, which
/// matches how the source data is read: the lines are compared by
/// shape, not unit.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub series: Vec<LineSeries>,
    pub x_labels: Vec<XLabel>,
    pub y_ticks: Vec<AxisTick>,
}

impl LineChart {
    /// Plot yearly rows, assumed sorted ascending by year.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn from_yearly(rows: &[YearlySales]) -> Self {
        if rows.is_empty() {
            return Self {
                series: vec![],
                x_labels: vec![],
                y_ticks: vec![],
            };
        }

        let units_max = rows
            .iter()
            .map(|row| row.total_units_sold)
            .max()
            .unwrap_or(0) as f64;
        let aov_max = rows
            .iter()
            .map(|row| row.avg_order_value)
            .max()
            .and_then(|value| value.to_f64())
            .unwrap_or(0.0);
        let y_max = units_max.max(aov_max);

        let mut units = Vec::with_capacity(rows.len());
        let mut aov = Vec::with_capacity(rows.len());
        let mut x_labels = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let x = x_position(i, rows.len());
            units.push(ChartPoint {
                x,
                y: y_position(row.total_units_sold as f64, y_max),
                label: filters::format_count(row.total_units_sold),
            });
            aov.push(ChartPoint {
                x,
                y: y_position(row.avg_order_value.to_f64().unwrap_or(0.0), y_max),
                label: filters::format_usd(row.avg_order_value),
            });
            x_labels.push(XLabel {
                x,
                label: row.order_year.to_string(),
            });
        }

        let y_ticks = (0..Y_TICKS)
            .map(|i| {
                let fraction = f64::from(i) / f64::from(Y_TICKS - 1);
                let value = y_max * fraction;
                AxisTick {
                    y: y_position(value, y_max),
                    label: filters::format_count(value.round() as i64),
                }
            })
            .collect();

        Self {
            series: vec![
                series("Total Units Sold", UNITS_COLOR, units),
                series("Average Order Value", AOV_COLOR, aov),
            ],
            x_labels,
            y_ticks,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

fn series(name: &'static str, color: &'static str, markers: Vec<ChartPoint>) -> LineSeries {
    let points_attr = markers
        .iter()
        .map(|point| format!("{:.1},{:.1}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ");
    LineSeries {
        name,
        color,
        points_attr,
        markers,
    }
}

/// Evenly space `count` columns across the plot; a single column sits
/// in the middle.
#[allow(clippy::cast_precision_loss)]
fn x_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        round1(f64::midpoint(PLOT_LEFT, PLOT_RIGHT))
    } else {
        let step = (PLOT_RIGHT - PLOT_LEFT) / (count - 1) as f64;
        round1(PLOT_LEFT + index as f64 * step)
    }
}

fn y_position(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return PLOT_BOTTOM;
    }
    let clamped = value.clamp(0.0, max);
    round1(PLOT_BOTTOM - clamped / max * (PLOT_BOTTOM - PLOT_TOP))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
