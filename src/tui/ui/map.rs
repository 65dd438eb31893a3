//! Dashboard view: case counts on a world map.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Map, MapResolution},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::domain::{DiseaseDataset, MapPoint};
use crate::tui::styles::ThemeStyles;

use super::{format_count, render_loading, ChartPageState};

/// Countries labelled on the map and listed beside it.
const LABELLED_COUNTRIES: usize = 10;

/// Largest marker radius, in degrees.
const MAX_RADIUS: f64 = 8.0;

pub fn render_dashboard(f: &mut Frame, area: Rect, state: &ChartPageState, styles: &ThemeStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Disease selector
            Constraint::Min(0),    // Map
        ])
        .split(area);

    render_selector(f, chunks[0], state, styles);

    if state.loading {
        render_loading(f, chunks[1], styles);
        return;
    }

    match &state.dataset {
        Some(dataset) => match dataset {
            DiseaseDataset::Map(points) => {
                render_map(f, chunks[1], points, dataset.max_cases(), styles)
            }
            DiseaseDataset::Trend(_) => render_empty(f, chunks[1], styles),
        },
        None => render_empty(f, chunks[1], styles),
    }
}

fn render_selector(f: &mut Frame, area: Rect, state: &ChartPageState, styles: &ThemeStyles) {
    let line = Line::from(vec![
        Span::styled("Select Disease: ", styles.text_muted()),
        Span::styled("◀ ", styles.key_hint()),
        Span::styled(state.disease.map_label(), styles.text_bold()),
        Span::styled(" ▶", styles.key_hint()),
    ]);

    let p = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused()),
    );
    f.render_widget(p, area);
}

fn render_empty(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let p = Paragraph::new(Line::from(Span::styled(
        "No data loaded. Press [R] to reload.",
        styles.text_muted(),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border()),
    );
    f.render_widget(p, area);
}

/// Points sorted by descending case count.
fn ranked(points: &[MapPoint]) -> Vec<&MapPoint> {
    let mut ranked: Vec<&MapPoint> = points.iter().collect();
    ranked.sort_by(|a, b| b.cases.cmp(&a.cases));
    ranked
}

fn render_map(
    f: &mut Frame,
    area: Rect,
    points: &[MapPoint],
    max_cases: u64,
    styles: &ThemeStyles,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(area);

    let max_cases = max_cases.max(1) as f64;
    let ranked = ranked(points);
    let outline = styles.muted_color();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(Span::styled(" Cases by Country ", styles.subtitle()))
                .borders(Borders::ALL)
                .border_style(styles.border()),
        )
        .background_color(styles.panel_color())
        .marker(Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: outline,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for point in points {
                // Area, not radius, tracks the count.
                let share = point.cases as f64 / max_cases;
                ctx.draw(&Circle {
                    x: point.long,
                    y: point.lat,
                    radius: (share.sqrt() * MAX_RADIUS).max(0.5),
                    color: styles.marker(share),
                });
            }

            for point in ranked.iter().take(LABELLED_COUNTRIES) {
                ctx.print(
                    point.long,
                    point.lat,
                    Span::styled(point.country.clone(), styles.text_bold()),
                );
            }
        });

    f.render_widget(canvas, chunks[0]);

    let lines: Vec<Line> = ranked
        .iter()
        .take(LABELLED_COUNTRIES)
        .map(|p| {
            Line::from(vec![
                Span::styled(format!("{:<14}", p.country), styles.text()),
                Span::styled(format_count(p.cases), styles.text_bold()),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Top Countries ", styles.subtitle()))
            .borders(Borders::ALL)
            .border_style(styles.border())
            .style(styles.panel()),
    );
    f.render_widget(legend, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SyntheticGenerator;
    use crate::domain::{Action, Disease, Page, Session};
    use crate::tui::ui::test_support::{draw, text};
    use crate::tui::ui::PageStates;

    fn dashboard_session() -> Session {
        let mut session = Session::new();
        session.apply(Action::EnterSite);
        session.apply(Action::SelectPage(Page::Dashboard));
        session
    }

    #[test]
    fn test_ranked_descending() {
        let points = SyntheticGenerator::with_seed(1).map_points();
        let ranked = ranked(&points);
        for pair in ranked.windows(2) {
            assert!(pair[0].cases >= pair[1].cases);
        }
    }

    #[test]
    fn test_map_lists_countries() {
        let mut pages = PageStates::default();
        pages.dashboard.disease = Disease::Flu;
        pages.dashboard.dataset = Some(DiseaseDataset::Map(
            SyntheticGenerator::with_seed(1).map_points(),
        ));

        let screen = text(&draw(&dashboard_session(), &pages));
        assert!(screen.contains("Flu (Simulated)"));
        assert!(screen.contains("Top Countries"));
        for country in ["USA", "India", "Brazil", "France"] {
            assert!(screen.contains(country), "missing {country}");
        }
    }

    #[test]
    fn test_missing_dataset_prompts_reload() {
        let screen = text(&draw(&dashboard_session(), &PageStates::default()));
        assert!(screen.contains("No data loaded"));
    }
}
