//! Rendering.
//!
//! Layout:
//!   ┌─── header (title, status, spinner) ─────────────────────────────────┐
//!   ├─── symptoms input ──────────────────────────────────────────────────┤
//!   ├─── location input ──────────────────────────────────────────────────┤
//!   ├─── analysis ────────────────────┬─── triage ────────────────────────┤
//!   │  condition, urgency, confidence │  urgency, summary                 │
//!   │  symptom severity bars          │  recommendations                  │
//!   │  treatment effectiveness bars   │  nearby resources                 │
//!   ├─────────────────────────────────┴───────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use triage_contracts::{
    assessment::TriageResult,
    condition::AnalysisResult,
    urgency::{color_class_for, Urgency},
};

use crate::app::{App, Field};

const ORANGE: Color = Color::Rgb(255, 140, 0);

/// Terminal color for an urgency color class.
pub fn urgency_color(label: &str) -> Color {
    match color_class_for(label) {
        "red" => Color::Red,
        "orange" => ORANGE,
        "green" => Color::Green,
        _ => Color::Gray,
    }
}

fn badge(urgency: Urgency) -> Span<'static> {
    Span::styled(
        format!(" {} ", urgency.as_str().to_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(urgency_color(urgency.as_str()))
            .add_modifier(Modifier::BOLD),
    )
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // symptoms
            Constraint::Length(3), // location
            Constraint::Min(12),   // results
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, outer[0], app);
    render_input(f, outer[1], app, Field::Symptoms);
    render_input(f, outer[2], app, Field::Location);

    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[3]);

    render_analysis(f, results[0], app);
    render_triage(f, results[1], app);
    render_footer(f, outer[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled("TRIAGE Symptom Intake    ", title_style)];
    if app.is_busy() {
        spans.push(Span::styled(
            format!("{} ", app.spinner()),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(app.status.clone(), Style::default().fg(Color::Gray)));

    f.render_widget(Paragraph::new(Line::from(spans)).block(panel("")), area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App, field: Field) {
    let (title, value, placeholder) = match field {
        Field::Symptoms => (
            " Symptoms ",
            &app.session.symptoms,
            "e.g. dry cough and a sore throat since Tuesday",
        ),
        Field::Location => (" Location (optional) ", &app.session.location, "city or zip"),
    };
    let focused = app.focus == field;

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        let mut spans = vec![Span::raw(value.clone())];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_analysis(f: &mut Frame, area: Rect, app: &App) {
    let slot = app.session.analysis();
    let Some(result) = slot.value() else {
        let text = if slot.is_busy() {
            format!("{} Analyzing... (Esc to cancel)", app.spinner())
        } else {
            "No analysis yet.".to_string()
        };
        let body = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(panel(" Symptom Analysis "));
        f.render_widget(body, area);
        return;
    };

    let block = panel(" Symptom Analysis ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bars = result.symptom_profile.len() as u16;
    let treatments = result.treatment_profile.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(bars + 2),
            Constraint::Length(treatments + 2),
            Constraint::Min(0),
        ])
        .split(inner);

    render_analysis_summary(f, rows[0], result, slot.is_busy(), app.spinner());
    render_symptom_bars(f, rows[1], result);
    render_treatment_bars(f, rows[2], result);

    let recs: Vec<ListItem> = result
        .recommendations
        .iter()
        .map(|r| ListItem::new(format!("• {}", r)))
        .collect();
    f.render_widget(List::new(recs), rows[3]);
}

fn render_analysis_summary(
    f: &mut Frame,
    area: Rect,
    result: &AnalysisResult,
    busy: bool,
    spinner: &str,
) {
    let mut head = vec![
        Span::styled(
            result.condition.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        badge(result.urgency),
        Span::styled(
            format!("  {}% confidence", result.confidence),
            Style::default().fg(Color::Gray),
        ),
    ];
    if busy {
        head.push(Span::styled(format!("  {}", spinner), Style::default().fg(Color::Yellow)));
    }
    let matched = match &result.matched_keyword {
        Some(kw) => format!("matched \"{}\"", kw),
        None => "no keyword matched; default category".to_string(),
    };

    let lines = vec![
        Line::from(head),
        Line::from(Span::styled(matched, Style::default().fg(Color::DarkGray))),
        Line::from(result.description.clone()),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_symptom_bars(f: &mut Frame, area: Rect, result: &AnalysisResult) {
    let max = result.symptom_profile.iter().map(|s| s.value).max().unwrap_or(0);
    let bars: Vec<Bar> = result
        .symptom_profile
        .iter()
        .map(|s| {
            Bar::default()
                .value(u64::from(s.value))
                .label(Line::from(s.name.to_string()))
                .style(Style::default().fg(urgency_color(s.severity.as_str())))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("Symptom severity"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(u64::from(max))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn render_treatment_bars(f: &mut Frame, area: Rect, result: &AnalysisResult) {
    let max = result
        .treatment_profile
        .iter()
        .map(|t| t.effectiveness)
        .max()
        .unwrap_or(0);
    let bars: Vec<Bar> = result
        .treatment_profile
        .iter()
        .map(|t| {
            Bar::default()
                .value(u64::from(t.effectiveness))
                .label(Line::from(format!("{}. {}", t.priority, t.name)))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("Treatment effectiveness"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(u64::from(max))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn render_triage(f: &mut Frame, area: Rect, app: &App) {
    let slot = app.session.triage();
    let mut lines: Vec<Line<'static>> = Vec::new();

    if slot.is_busy() {
        lines.push(Line::from(Span::styled(
            format!("{} Waiting for triage service...", app.spinner()),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    match slot.value() {
        Some(result) => triage_lines(result, &mut lines),
        None if !slot.is_busy() => lines.push(Line::from(Span::styled(
            "No triage assessment yet.",
            Style::default().fg(Color::DarkGray),
        ))),
        None => {}
    }

    let body = Paragraph::new(lines)
        .block(panel(" Triage Assessment "))
        .wrap(Wrap { trim: true });
    f.render_widget(body, area);
}

fn triage_lines(result: &TriageResult, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![Span::raw("Urgency "), badge(result.urgency_level)]));
    lines.push(Line::from(result.summary.clone()));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Recommendations",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for r in &result.recommendations {
        lines.push(Line::from(format!("• {}", r)));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Nearby resources",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for r in &result.nearby_resources {
        lines.push(Line::from(vec![
            Span::styled(r.name.clone(), Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}", r.kind), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} · wait {} · {}", r.distance, r.wait_time, r.phone),
            Style::default().fg(Color::Gray),
        )));
    }

    if let Some(disclaimer) = &result.disclaimer {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            disclaimer.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn key_hint(key: &'static str, label: &'static str, enabled: bool) -> [Span<'static>; 2] {
    let (key_style, label_style) = if enabled {
        (Style::default().fg(Color::Cyan), Style::default())
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    [Span::styled(key, key_style), Span::styled(label, label_style)]
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();
    spans.extend(key_hint(" [F2] ", "Analyze  ", app.session.can_analyze()));
    spans.extend(key_hint("[F3] ", "Triage  ", app.session.can_submit_triage()));
    spans.extend(key_hint("[Esc] ", "Cancel  ", app.session.analysis().is_busy()));
    spans.extend(key_hint("[Tab] ", "Switch field  ", true));
    spans.extend(key_hint("[Ctrl-C] ", "Quit", true));

    f.render_widget(Paragraph::new(Line::from(spans)).block(panel("")), area);
}
