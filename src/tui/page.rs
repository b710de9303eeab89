//! The virtual page document.
//!
//! Every visible section renders once into an off-screen buffer at the
//! current width; the event loop blits the viewport window out of it. Anchor
//! rows come from the same layout pass that sizes the buffer, so navigation
//! and pixels cannot disagree.

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Tabs, Widget};
use textwrap::Options;

use crate::config::Config;
use crate::content::Portfolio;
use crate::nav::{AnchorMap, SECTIONS, SectionId, SectionSpan};
use crate::tui::charts;
use crate::tui::theme::{self, Theme};

/// Horizontal padding inside the document, in columns.
const PAD: u16 = 2;
/// Paragraph text never wraps wider than this.
const MAX_TEXT_WIDTH: u16 = 76;

/// Which skills subview is on screen. The section keeps the same height on
/// every tab so anchors below it never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsTab {
    #[default]
    Overview,
    Technologies,
    Radar,
}

impl SkillsTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Technologies, Self::Radar];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Competências",
            Self::Technologies => "Tecnologias",
            Self::Radar => "Radar",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Technologies => 1,
            Self::Radar => 2,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Technologies,
            Self::Technologies => Self::Radar,
            Self::Radar => Self::Overview,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Radar,
            Self::Technologies => Self::Overview,
            Self::Radar => Self::Technologies,
        }
    }
}

/// The rendered page: one off-screen buffer holding every visible section.
pub struct Document {
    buffer: Buffer,
    anchors: AnchorMap,
}

impl Document {
    /// Lay out and render every visible section at `width` columns.
    pub fn build(portfolio: &Portfolio, config: &Config, width: u16, tab: SkillsTab) -> Self {
        let theme = Theme::from_config(&config.ui);
        let anchors = layout(portfolio, config, width);
        let height = anchors.content_height().max(1);
        let mut buffer = Buffer::empty(Rect::new(0, 0, width.max(1), height));

        for (id, span) in anchors.ordered() {
            let area = Rect::new(0, span.top, buffer.area.width, span.height);
            render_section(portfolio, id, &theme, tab, area, &mut buffer);
        }

        Self { buffer, anchors }
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    pub fn width(&self) -> u16 {
        self.buffer.area.width
    }

    /// Copy the document window starting at `offset` into `area` of `buf`.
    /// Rows belonging to a section flagged in `dimmed` render with the DIM
    /// modifier, which is what the reveal fade looks like.
    pub fn blit(
        &self,
        offset: u16,
        area: Rect,
        buf: &mut Buffer,
        dimmed: &[bool; SectionId::COUNT],
    ) {
        for row in 0..area.height {
            let Some(src_y) = offset.checked_add(row) else { break };
            if src_y >= self.height() {
                break;
            }
            let dim_row = self
                .anchors
                .section_at(src_y)
                .is_some_and(|id| dimmed[id.index()]);

            for col in 0..area.width.min(self.width()) {
                let Some(src) = self.buffer.cell((col, src_y)) else { continue };
                if let Some(dst) = buf.cell_mut((area.x + col, area.y + row)) {
                    *dst = src.clone();
                    if dim_row {
                        dst.set_style(Style::default().add_modifier(Modifier::DIM));
                    }
                }
            }
        }
    }
}

/// Compute each visible section's anchor row and height at `width` columns.
/// Pure: same inputs, same map. The `sections` command and the TUI share it.
#[must_use]
pub fn layout(portfolio: &Portfolio, config: &Config, width: u16) -> AnchorMap {
    let theme = Theme::from_config(&config.ui);
    let text_width = text_width(width);
    let mut anchors = AnchorMap::default();
    let mut top = 0u16;

    for descriptor in &SECTIONS {
        if !config.nav.is_visible(descriptor.id) {
            continue;
        }
        let height = section_height(portfolio, descriptor.id, &theme, text_width);
        anchors.insert(descriptor.id, SectionSpan { top, height });
        top = top.saturating_add(height);
    }
    anchors
}

fn section_height(portfolio: &Portfolio, id: SectionId, theme: &Theme, text_width: usize) -> u16 {
    match id {
        SectionId::Home => rows(&hero_lines(portfolio, theme, text_width)),
        SectionId::About => rows(&about_lines(portfolio, theme, text_width)),
        SectionId::Experience => {
            rows(&experience_lines(portfolio, theme, text_width))
                .saturating_add(charts::EVOLUTION_HEIGHT)
                .saturating_add(1)
        }
        SectionId::Skills => {
            // header + tab row + blank + tab-independent body + trailing blank
            rows(&skills_header_lines(theme))
                .saturating_add(2)
                .saturating_add(skills_body_height(portfolio))
                .saturating_add(1)
        }
        SectionId::Education => rows(&education_lines(portfolio, theme, text_width)),
        SectionId::Contact => rows(&contact_lines(portfolio, theme, text_width)),
    }
}

/// The tallest of the three tab bodies, so switching tabs never relayouts.
fn skills_body_height(portfolio: &Portfolio) -> u16 {
    let overview = count(portfolio.skills.len())
        .saturating_add(2)
        .saturating_add(charts::DISTRIBUTION_HEIGHT);
    let technologies = count(portfolio.technologies.len());
    overview.max(technologies).max(charts::RADAR_HEIGHT)
}

fn render_section(
    portfolio: &Portfolio,
    id: SectionId,
    theme: &Theme,
    tab: SkillsTab,
    area: Rect,
    buf: &mut Buffer,
) {
    let inner = area.inner(Margin::new(PAD, 0));
    let text_width = text_width(area.width);

    match id {
        SectionId::Home => render_lines(hero_lines(portfolio, theme, text_width), inner, buf),
        SectionId::About => render_lines(about_lines(portfolio, theme, text_width), inner, buf),
        SectionId::Experience => {
            let lines = experience_lines(portfolio, theme, text_width);
            let text_height = rows(&lines);
            render_lines(lines, inner, buf);
            let chart = Rect::new(
                inner.x,
                inner.y.saturating_add(text_height),
                inner.width.min(44),
                charts::EVOLUTION_HEIGHT,
            );
            charts::evolution(portfolio.experience, theme, chart, buf);
        }
        SectionId::Skills => render_skills(portfolio, theme, tab, inner, buf),
        SectionId::Education => {
            render_lines(education_lines(portfolio, theme, text_width), inner, buf);
        }
        SectionId::Contact => {
            render_lines(contact_lines(portfolio, theme, text_width), inner, buf);
        }
    }
}

fn render_skills(portfolio: &Portfolio, theme: &Theme, tab: SkillsTab, inner: Rect, buf: &mut Buffer) {
    let header = skills_header_lines(theme);
    let header_height = rows(&header);
    render_lines(header, inner, buf);

    let tabs_area = Rect::new(inner.x, inner.y.saturating_add(header_height), inner.width, 1);
    let titles = SkillsTab::ALL.map(|t| Line::from(t.label()));
    Tabs::new(titles)
        .select(tab.index())
        .style(theme.dim_style())
        .highlight_style(theme.title_style())
        .divider(if theme.unicode { "│" } else { "|" })
        .render(tabs_area, buf);

    let body = Rect::new(
        inner.x,
        tabs_area.y.saturating_add(2),
        inner.width,
        skills_body_height(portfolio),
    );
    match tab {
        SkillsTab::Overview => {
            let gauges = Rect::new(body.x, body.y, body.width.min(58), count(portfolio.skills.len()));
            charts::skill_gauges(portfolio.skills, theme, gauges, buf);

            let label_y = gauges.y.saturating_add(gauges.height).saturating_add(1);
            Paragraph::new(Line::styled("Distribuição por área", theme.title_style()))
                .render(Rect::new(body.x, label_y, body.width, 1), buf);

            let chart = Rect::new(
                body.x,
                label_y.saturating_add(1),
                body.width.min(44),
                charts::DISTRIBUTION_HEIGHT,
            );
            charts::distribution(portfolio.skills, theme, chart, buf);
        }
        SkillsTab::Technologies => {
            let area = Rect::new(
                body.x,
                body.y,
                body.width.min(58),
                count(portfolio.technologies.len()),
            );
            charts::technology_gauges(portfolio.technologies, theme, area, buf);
        }
        SkillsTab::Radar => {
            let area = Rect::new(body.x, body.y, body.width.min(50), charts::RADAR_HEIGHT);
            charts::radar(portfolio.radar, theme, area, buf);
        }
    }
}

// =============================================================================
// Section line builders
// =============================================================================

fn hero_lines(portfolio: &Portfolio, theme: &Theme, text_width: usize) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let mut lines = vec![
        Line::default(),
        Line::styled(profile.name, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(
            theme.rule_glyph().repeat(profile.name.chars().count()),
            theme.accent_style(),
        ),
        Line::styled(profile.headline, theme.accent_style()),
        Line::default(),
    ];
    push_wrapped(&mut lines, profile.tagline, text_width, Style::default());
    lines.push(Line::default());
    let hint = if theme.unicode {
        "↓ role para explorar"
    } else {
        "v role para explorar"
    };
    lines.push(Line::styled(hint, theme.dim_style()));
    lines.push(Line::default());
    lines
}

fn about_lines(portfolio: &Portfolio, theme: &Theme, text_width: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Sobre mim", theme);
    lines.push(Line::default());

    for paragraph in portfolio.profile.bio {
        push_wrapped(&mut lines, paragraph, text_width, Style::default());
        lines.push(Line::default());
    }

    let separator = if theme.unicode { " · " } else { " | " };
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, badge) in portfolio.profile.badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(separator, theme.dim_style()));
        }
        spans.push(Span::styled(
            badge.label,
            Style::default().fg(theme::content_color(badge.color, theme.accent)),
        ));
    }
    lines.push(Line::from(spans));
    lines.push(Line::default());

    for card in portfolio.highlights {
        lines.push(Line::styled(
            card.title,
            Style::default()
                .fg(theme::content_color(card.color, theme.accent))
                .add_modifier(Modifier::BOLD),
        ));
        push_wrapped(&mut lines, card.body, text_width, Style::default());
        lines.push(Line::default());
    }
    lines
}

fn experience_lines(portfolio: &Portfolio, theme: &Theme, text_width: usize) -> Vec<Line<'static>> {
    let job = &portfolio.job;
    let mut lines = heading("Experiência", theme);
    lines.push(Line::default());

    lines.push(Line::styled(job.role, Style::default().add_modifier(Modifier::BOLD)));
    let separator = if theme.unicode { " · " } else { " | " };
    lines.push(Line::styled(
        format!("{}{separator}{}", job.company, job.period),
        theme.dim_style(),
    ));
    lines.push(Line::default());

    for duty in job.duties {
        push_bullet(&mut lines, duty, text_width, theme.bullet_glyph());
    }
    lines.push(Line::default());
    lines.push(Line::styled("Evolução profissional", theme.title_style()));
    lines.push(Line::default());
    lines
}

fn skills_header_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = heading("Habilidades", theme);
    lines.push(Line::default());
    lines
}

fn education_lines(portfolio: &Portfolio, theme: &Theme, text_width: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Formação", theme);
    lines.push(Line::default());

    for entry in portfolio.education {
        lines.push(Line::styled(entry.degree, Style::default().add_modifier(Modifier::BOLD)));
        push_wrapped(
            &mut lines,
            &format!("{} ({})", entry.institution, entry.year),
            text_width,
            theme.dim_style(),
        );
        lines.push(Line::default());
    }

    lines.push(Line::styled("Idiomas", theme.title_style()));
    for language in portfolio.languages {
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", language.name)),
            Span::styled(language.level, theme.dim_style()),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::styled("Certificações", theme.title_style()));
    for cert in portfolio.certifications {
        let mut spans = vec![
            Span::raw(format!("{} {}", theme.bullet_glyph(), cert.name)),
            Span::styled(format!(" ({})", cert.year), theme.dim_style()),
        ];
        if let Some(org) = cert.org {
            spans.push(Span::styled(format!(", {org}"), theme.dim_style()));
        }
        if let Some(id) = cert.id {
            spans.push(Span::styled(format!(" [{id}]"), theme.dim_style()));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines
}

fn contact_lines(portfolio: &Portfolio, theme: &Theme, text_width: usize) -> Vec<Line<'static>> {
    let contact = &portfolio.contact;
    let mut lines = heading("Contato", theme);
    lines.push(Line::default());

    push_wrapped(&mut lines, contact.blurb, text_width, Style::default());
    lines.push(Line::default());

    for link in contact.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", link.label), theme.accent_style()),
            Span::raw(link.value),
            Span::styled(format!("  {}", link.url), theme.dim_style()),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::styled(contact.callout_title, theme.title_style()));
    push_wrapped(&mut lines, contact.callout_body, text_width, Style::default());
    lines.push(Line::default());
    lines.push(Line::styled(portfolio.footer, theme.dim_style()));
    lines.push(Line::default());
    lines
}

// =============================================================================
// Helpers
// =============================================================================

fn heading(label: &'static str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled(label, theme.title_style()),
        Line::styled(
            theme.rule_glyph().repeat(label.chars().count() + 2),
            theme.dim_style(),
        ),
    ]
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for wrapped in textwrap::wrap(text, width) {
        lines.push(Line::styled(wrapped.into_owned(), style));
    }
}

fn push_bullet(lines: &mut Vec<Line<'static>>, text: &str, width: usize, glyph: &str) {
    let initial = format!("{glyph} ");
    let options = Options::new(width)
        .initial_indent(&initial)
        .subsequent_indent("  ");
    for wrapped in textwrap::wrap(text, options) {
        lines.push(Line::raw(wrapped.into_owned()));
    }
}

fn render_lines(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Text::from(lines)).render(area, buf);
}

fn text_width(width: u16) -> usize {
    usize::from(width.saturating_sub(PAD * 2).clamp(20, MAX_TEXT_WIDTH))
}

fn rows(lines: &[Line]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

fn count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
