use std::fmt::Write as _;

use crate::error::ChartRenderError;
use crate::report::escape_text;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 500.0;
const PLOT_LEFT: f64 = 90.0;
const PLOT_RIGHT: f64 = 40.0;
const PLOT_TOP: f64 = 90.0;
const PLOT_BOTTOM: f64 = 90.0;
const BAR_FILL_RATIO: f64 = 0.6;
const HEADROOM: f64 = 1.2;
const GRID_LINES: usize = 5;
const FONT: &str = "'NanumGothic', 'Malgun Gothic', 'AppleGothic', sans-serif";

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Category label; `\n` starts a new line under the axis.
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    /// Suffix after each annotated value, e.g. "분".
    pub unit: String,
    pub bars: Vec<Bar>,
}

pub trait ChartRenderer {
    fn extension(&self) -> &'static str;
    fn render(&self, chart: &BarChart) -> Result<String, ChartRenderError>;
}

/// Self-contained SVG output; needs no fonts or raster backend at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl ChartRenderer for SvgRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, chart: &BarChart) -> Result<String, ChartRenderError> {
        if chart.bars.is_empty() {
            return Err(ChartRenderError::Empty);
        }
        for bar in &chart.bars {
            if !bar.value.is_finite() {
                return Err(ChartRenderError::NonFiniteValue {
                    label: bar.label.clone(),
                    value: bar.value,
                });
            }
        }

        let plot_w = CANVAS_WIDTH - PLOT_LEFT - PLOT_RIGHT;
        let plot_h = CANVAS_HEIGHT - PLOT_TOP - PLOT_BOTTOM;
        let baseline = PLOT_TOP + plot_h;
        let max_value = chart.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        let y_max = if max_value > 0.0 {
            max_value * HEADROOM
        } else {
            1.0
        };
        let scale = |v: f64| v.max(0.0) / y_max * plot_h;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{CANVAS_WIDTH:.0}' height='{CANVAS_HEIGHT:.0}' viewBox='0 0 {CANVAS_WIDTH:.0} {CANVAS_HEIGHT:.0}' role='img'>"
        );
        let _ = writeln!(
            svg,
            "  <rect width='{CANVAS_WIDTH:.0}' height='{CANVAS_HEIGHT:.0}' fill='#ffffff'/>"
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='50' text-anchor='middle' fill='#2d3748' font-family=\"{FONT}\" font-size='22' font-weight='700'>{}</text>",
            CANVAS_WIDTH / 2.0,
            escape_text(&chart.title)
        );

        for i in 0..=GRID_LINES {
            let v = y_max * i as f64 / GRID_LINES as f64;
            let y = baseline - scale(v);
            let _ = writeln!(
                svg,
                "  <line x1='{PLOT_LEFT:.1}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}' stroke='#cbd5e0' stroke-opacity='0.6' stroke-dasharray='4 4'/>",
                PLOT_LEFT + plot_w
            );
            let _ = writeln!(
                svg,
                "  <text x='{:.1}' y='{:.1}' text-anchor='end' fill='#4a5568' font-family=\"{FONT}\" font-size='12'>{v:.0}</text>",
                PLOT_LEFT - 8.0,
                y + 4.0
            );
        }
        let _ = writeln!(
            svg,
            "  <text transform='translate(28 {:.1}) rotate(-90)' text-anchor='middle' fill='#2d3748' font-family=\"{FONT}\" font-size='14'>{}</text>",
            PLOT_TOP + plot_h / 2.0,
            escape_text(&chart.y_label)
        );

        let slot = plot_w / chart.bars.len() as f64;
        let bar_w = slot * BAR_FILL_RATIO;
        for (i, bar) in chart.bars.iter().enumerate() {
            let x = PLOT_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let h = scale(bar.value);
            let top = baseline - h;
            let center = x + bar_w / 2.0;
            let _ = writeln!(
                svg,
                "  <rect x='{x:.1}' y='{top:.1}' width='{bar_w:.1}' height='{h:.1}' fill='{}' fill-opacity='0.8'/>",
                escape_text(&bar.color)
            );
            let _ = writeln!(
                svg,
                "  <text x='{center:.1}' y='{:.1}' text-anchor='middle' fill='#1a202c' font-family=\"{FONT}\" font-size='15' font-weight='700'>{:.1}{}</text>",
                top - 8.0,
                bar.value,
                escape_text(&chart.unit)
            );
            let _ = write!(
                svg,
                "  <text x='{center:.1}' y='{:.1}' text-anchor='middle' fill='#2d3748' font-family=\"{FONT}\" font-size='14'>",
                baseline + 24.0
            );
            for (line_no, line) in bar.label.split('\n').enumerate() {
                let dy = if line_no == 0 { 0.0 } else { 18.0 };
                let _ = write!(
                    svg,
                    "<tspan x='{center:.1}' dy='{dy:.0}'>{}</tspan>",
                    escape_text(line)
                );
            }
            let _ = writeln!(svg, "</text>");
        }

        let _ = writeln!(
            svg,
            "  <line x1='{PLOT_LEFT:.1}' y1='{baseline:.1}' x2='{:.1}' y2='{baseline:.1}' stroke='#2d3748'/>",
            PLOT_LEFT + plot_w
        );
        let _ = writeln!(svg, "</svg>");
        Ok(svg)
    }
}
