//! # Analytics View
//!
//! The dashboard pane: a grouped bar chart of the sample rows (two bars per
//! period) with a legend, and two summary cards underneath. Purely
//! presentational; every number comes straight from `sample_data`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Paragraph};

use crate::core::sample_data::{
    CHART_ROWS, SERIES_A_LABEL, SERIES_B_LABEL, SUMMARY_CARDS, SampleChartRow, SummaryCard,
};
use crate::tui::component::Component;

const SERIES_A_COLOR: Color = Color::Blue;
const SERIES_B_COLOR: Color = Color::LightCyan;
const CARD_HEIGHT: u16 = 6;
const MAX_WIDTH: u16 = 96;

pub struct AnalyticsView<'a> {
    pub rows: &'a [SampleChartRow],
    pub cards: &'a [SummaryCard],
}

impl Default for AnalyticsView<'static> {
    fn default() -> Self {
        Self {
            rows: CHART_ROWS,
            cards: &SUMMARY_CARDS,
        }
    }
}

fn card_color(label: &str) -> Color {
    if label == SERIES_A_LABEL {
        SERIES_A_COLOR
    } else {
        SERIES_B_COLOR
    }
}

fn bar_groups(rows: &[SampleChartRow]) -> Vec<BarGroup<'static>> {
    rows.iter()
        .map(|row| {
            BarGroup::default()
                .label(Line::from(row.short_label()))
                .bars(&[
                    Bar::default()
                        .value(row.desktop)
                        .style(Style::default().fg(SERIES_A_COLOR))
                        .value_style(Style::default().fg(Color::White).bg(SERIES_A_COLOR)),
                    Bar::default()
                        .value(row.mobile)
                        .style(Style::default().fg(SERIES_B_COLOR))
                        .value_style(Style::default().fg(Color::Black).bg(SERIES_B_COLOR)),
                ])
        })
        .collect()
}

fn legend() -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(SERIES_A_COLOR)),
        Span::raw(SERIES_A_LABEL),
        Span::raw("   "),
        Span::styled("■ ", Style::default().fg(SERIES_B_COLOR)),
        Span::raw(SERIES_B_LABEL),
    ])
    .centered()
}

fn summary_card(card: &SummaryCard) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            card.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            card.total,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.delta, Style::default().fg(Color::DarkGray))),
    ];

    Paragraph::new(lines).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(vec![
                Span::styled(" ■ ", Style::default().fg(card_color(card.label))),
                Span::styled(
                    format!("{} ", card.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])),
    )
}

impl<'a> Component for AnalyticsView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [chart_area, cards_area] =
            Layout::vertical([Constraint::Min(8), Constraint::Length(CARD_HEIGHT)]).areas(column);

        let chart_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " User Activity Analytics ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(legend());
        let chart_inner = chart_block.inner(chart_area);
        frame.render_widget(chart_block, chart_area);

        let [description, bars] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(chart_inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                " Showing total visitors for the last 6 months",
                Style::default().fg(Color::Gray),
            )),
            description,
        );

        let mut chart = BarChart::default().bar_width(4).bar_gap(1).group_gap(3);
        for group in bar_groups(self.rows) {
            chart = chart.data(group);
        }
        let [bars] = Layout::horizontal([Constraint::Min(0)])
            .horizontal_margin(1)
            .areas(bars);
        frame.render_widget(chart, bars);

        let card_areas = Layout::horizontal(vec![
            Constraint::Ratio(1, self.cards.len().max(1) as u32);
            self.cards.len()
        ])
        .spacing(1)
        .split(cards_area);
        for (card, rect) in self.cards.iter().zip(card_areas.iter()) {
            frame.render_widget(summary_card(card), *rect);
        }
    }
}
