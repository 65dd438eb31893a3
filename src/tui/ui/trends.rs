//! Trends view: daily cases as a line chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::domain::{Disease, DiseaseDataset, TrendPoint};
use crate::tui::styles::ThemeStyles;

use super::{format_count, render_loading, ChartPageState};

pub fn render_trends(f: &mut Frame, area: Rect, state: &ChartPageState, styles: &ThemeStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Disease selector
            Constraint::Min(0),    // Chart
        ])
        .split(area);

    let selector = Paragraph::new(Line::from(vec![
        Span::styled("Choose a disease: ", styles.text_muted()),
        Span::styled("◀ ", styles.key_hint()),
        Span::styled(state.disease.name(), styles.text_bold()),
        Span::styled(" ▶", styles.key_hint()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused()),
    );
    f.render_widget(selector, chunks[0]);

    if state.loading {
        render_loading(f, chunks[1], styles);
        return;
    }

    match &state.dataset {
        Some(DiseaseDataset::Trend(points)) if !points.is_empty() => {
            render_chart(f, chunks[1], state.disease, points, styles)
        }
        _ => {
            let p = Paragraph::new(Line::from(Span::styled(
                "No data loaded. Press [R] to reload.",
                styles.text_muted(),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.border()),
            );
            f.render_widget(p, chunks[1]);
        }
    }
}

/// Chart title, e.g. `COVID-19 Trends (30 Days)`.
#[must_use]
pub fn chart_title(disease: Disease, days: usize) -> String {
    format!("{} Trends ({} Days)", disease.name(), days)
}

/// Y-axis bounds with a little headroom above and below the series.
fn y_bounds(points: &[TrendPoint]) -> [f64; 2] {
    let min = points.iter().map(|p| p.cases).min().unwrap_or(0) as f64;
    let max = points.iter().map(|p| p.cases).max().unwrap_or(0) as f64;
    let pad = ((max - min) * 0.05).max(1.0);
    [(min - pad).max(0.0), max + pad]
}

fn render_chart(
    f: &mut Frame,
    area: Rect,
    disease: Disease,
    points: &[TrendPoint],
    styles: &ThemeStyles,
) {
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.cases as f64))
        .collect();

    let last = points.len() - 1;
    let x_labels: Vec<Span> = [0, last / 2, last]
        .iter()
        .map(|&i| Span::styled(points[i].date.format("%b %d").to_string(), styles.axis()))
        .collect();

    let [y_min, y_max] = y_bounds(points);
    let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|&v| Span::styled(format_count(v.round() as u64), styles.axis()))
        .collect();

    let datasets = vec![Dataset::default()
        .name("cases")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(styles.series())
        .data(&data)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", chart_title(disease, points.len())),
                    styles.subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(styles.border())
                .style(styles.panel()),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("date", styles.axis()))
                .style(styles.axis())
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("cases", styles.axis()))
                .style(styles.axis())
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
