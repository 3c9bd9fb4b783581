use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use portfolio_tracker_core::models::chart::ChartSeries;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame, Terminal,
};

const DISMISS_HINT: &str = "Press any key to return to the menu";

/// Something that can show a price chart to the user.
pub trait ChartRenderer {
    /// Show `series` and return once the user is done with it.
    fn render(&mut self, series: &ChartSeries) -> io::Result<()>;
}

/// Full-screen line chart drawn in the terminal's alternate screen.
/// Blocks until a key is pressed, then restores the terminal.
#[derive(Debug, Default)]
pub struct TerminalChart;

impl TerminalChart {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&mut self, series: &ChartSeries) -> io::Result<()> {
        debug!("Rendering {} point(s) for {}", series.len(), series.series_label);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = draw_until_key(&mut terminal, series);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

fn draw_until_key<B: Backend>(terminal: &mut Terminal<B>, series: &ChartSeries) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_chart(f, series))?;

        // Resize and mouse events just trigger a redraw
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Draw the chart and the dismiss hint into the whole frame.
pub fn draw_chart(f: &mut Frame, series: &ChartSeries) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    let grid = grid_lines(series);
    let mut datasets: Vec<Dataset> = grid
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();

    // Price line last so it is drawn over the grid
    datasets.push(
        Dataset::default()
            .name(series.series_label.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&series.points),
    );

    let x_labels: Vec<Span> = series.x_labels.iter().map(|l| Span::raw(l.as_str())).collect();
    let y_labels: Vec<Span> = series.y_labels.iter().map(|l| Span::raw(l.as_str())).collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", series.title)),
        )
        .x_axis(
            Axis::default()
                .title(series.x_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(series.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(series.y_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(series.y_bounds)
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopLeft));

    f.render_widget(chart, chunks[0]);
    f.render_widget(
        Paragraph::new(DISMISS_HINT).alignment(Alignment::Center),
        chunks[1],
    );
}

/// Horizontal grid lines across the full x range, one per grid level.
pub fn grid_lines(series: &ChartSeries) -> Vec<Vec<(f64, f64)>> {
    let [x0, x1] = series.x_bounds;
    series
        .grid_levels
        .iter()
        .map(|&y| vec![(x0, y), (x1, y)])
        .collect()
}
