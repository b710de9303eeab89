//! Chart blocks for the experience and skills sections.
//!
//! Free functions that render straight into a buffer region, so the page
//! renderer can place them inside the virtual document. Heights are fixed
//! per chart and exported as constants for the layout pass.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Bar, BarChart, BarGroup, Gauge, LineGauge, Paragraph, Widget};

use crate::content::{ExperiencePoint, RadarAxis, SkillEntry, TechnologyEntry};
use crate::tui::theme::{self, Theme};

/// Rows the year-over-year bar chart occupies.
pub const EVOLUTION_HEIGHT: u16 = 10;
/// Rows the skill distribution bar chart occupies.
pub const DISTRIBUTION_HEIGHT: u16 = 7;
/// Rows the radar canvas occupies.
pub const RADAR_HEIGHT: u16 = 15;

/// Year-over-year proficiency bars for the experience section.
pub fn evolution(points: &[ExperiencePoint], theme: &Theme, area: Rect, buf: &mut Buffer) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(u64::from(point.level))
                .label(Line::from(point.year))
                .style(theme.accent_style())
                .value_style(Style::default().fg(Color::Black).bg(theme.accent))
        })
        .collect();

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(2)
        .max(100)
        .render(area, buf);
}

/// Skill distribution bars, one per skill, in the skill's own color.
pub fn distribution(skills: &[SkillEntry], theme: &Theme, area: Rect, buf: &mut Buffer) {
    let bars: Vec<Bar> = skills
        .iter()
        .map(|skill| {
            let color = theme::content_color(skill.color, theme.accent);
            Bar::default()
                .value(u64::from(skill.value))
                .label(Line::from(truncate(skill.name, 6)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .max(100)
        .render(area, buf);
}

/// One gauge row per skill: name column on the left, filled gauge on the
/// right. Rows beyond the area are clipped.
pub fn skill_gauges(skills: &[SkillEntry], theme: &Theme, area: Rect, buf: &mut Buffer) {
    for (i, skill) in skills.iter().enumerate() {
        let Some(row) = nth_row(area, i) else { break };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(15), Constraint::Min(10)])
            .split(row);

        Paragraph::new(skill.name).render(cols[0], buf);
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme::content_color(skill.color, theme.accent))
                    .bg(Color::DarkGray),
            )
            .percent(u16::from(skill.value.min(100)))
            .label(format!("{}%", skill.value))
            .use_unicode(theme.unicode)
            .render(cols[1], buf);
    }
}

/// One line gauge per technology, with the category in a dim right column.
pub fn technology_gauges(techs: &[TechnologyEntry], theme: &Theme, area: Rect, buf: &mut Buffer) {
    for (i, tech) in techs.iter().enumerate() {
        let Some(row) = nth_row(area, i) else { break };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(10),
                Constraint::Length(15),
            ])
            .split(row);

        Paragraph::new(tech.name).render(cols[0], buf);
        LineGauge::default()
            .filled_style(Style::default().fg(theme::level_color(tech.level)))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .line_set(if theme.unicode {
                symbols::line::THICK
            } else {
                symbols::line::NORMAL
            })
            .ratio(f64::from(tech.level.min(100)) / 100.0)
            .label(format!("{:>3}%", tech.level))
            .render(cols[1], buf);
        Paragraph::new(tech.category)
            .style(theme.dim_style())
            .right_aligned()
            .render(cols[2], buf);
    }
}

/// Radar polygon over the skill axes. Grid rings and spokes render dim;
/// the score outline uses the accent color, with axis labels at the rim.
pub fn radar(axes: &[RadarAxis], theme: &Theme, area: Rect, buf: &mut Buffer) {
    if axes.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }
    let n = axes.len();
    let char_step = 3.2 / f64::from(area.width.max(1));

    Canvas::default()
        .marker(theme.marker())
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.3, 1.3])
        .paint(|ctx| {
            for ring in [0.5, 1.0] {
                for i in 0..n {
                    let (x1, y1) = spoke(i, n, ring);
                    let (x2, y2) = spoke((i + 1) % n, n, ring);
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color: Color::DarkGray });
                }
            }
            for i in 0..n {
                let (x, y) = spoke(i, n, 1.0);
                ctx.draw(&CanvasLine { x1: 0.0, y1: 0.0, x2: x, y2: y, color: Color::DarkGray });
            }
            for i in 0..n {
                let (x1, y1) = score_point(&axes[i], i, n);
                let (x2, y2) = score_point(&axes[(i + 1) % n], (i + 1) % n, n);
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color: theme.accent });
            }
            for (i, axis) in axes.iter().enumerate() {
                let (x, y) = spoke(i, n, 1.12);
                let label_chars = axis.subject.chars().count() as f64;
                let x = if x < -0.2 {
                    x - char_step * label_chars
                } else if x <= 0.2 {
                    x - char_step * label_chars / 2.0
                } else {
                    x
                };
                // An anchor left of the canvas drops the whole label.
                let x = x.max(-1.58);
                ctx.print(x, y, Line::styled(axis.subject, theme.dim_style()));
            }
        })
        .render(area, buf);
}

/// Point on axis `i` of `n` at radius `r`, starting at the top and going
/// clockwise.
fn spoke(i: usize, n: usize, r: f64) -> (f64, f64) {
    let theta = FRAC_PI_2 - TAU * (i as f64) / (n as f64);
    (r * theta.cos(), r * theta.sin())
}

fn score_point(axis: &RadarAxis, i: usize, n: usize) -> (f64, f64) {
    let full = f64::from(axis.full_mark.max(1));
    let r = f64::from(axis.score.min(axis.full_mark)) / full;
    spoke(i, n, r)
}

fn nth_row(area: Rect, i: usize) -> Option<Rect> {
    let y = area.y.checked_add(u16::try_from(i).ok()?)?;
    if y >= area.bottom() {
        return None;
    }
    Some(Rect::new(area.x, y, area.width, 1))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    } else {
        s.to_string()
    }
}
