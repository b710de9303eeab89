//! Event loop and frame composition for the portfolio page.
//!
//! One frame is: fixed nav bar, the blitted document window, status bar,
//! optional help overlay. Key events feed the navigator; the poll timeout is
//! the animation tick that advances smooth scrolling and the reveal fade.

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::AppContext;
use crate::config::Config;
use crate::content::Portfolio;
use crate::error::Result;
use crate::nav::{Navigator, SECTIONS, ScrollMode, SectionId, Viewport};
use crate::tui::page::{Document, SkillsTab};
use crate::tui::theme::Theme;

/// How long a freshly revealed section stays dimmed.
const REVEAL_FADE: Duration = Duration::from_millis(400);

/// TUI application state.
pub struct PortfolioTui<'a> {
    /// The content store backing every section.
    portfolio: &'static Portfolio,
    config: &'a Config,
    theme: Theme,
    /// Active-section tracking.
    navigator: Navigator,
    /// Scroll offset and animation over the document.
    viewport: Viewport,
    /// The rendered page at the current width and skills tab.
    document: Document,
    tab: SkillsTab,
    needs_rebuild: bool,
    /// Section requested via `view --section`, consumed on the first layout.
    pending_start: Option<SectionId>,
    /// When each section first intersected the viewport.
    revealed: [Option<Instant>; SectionId::COUNT],
    show_help: bool,
    should_quit: bool,
}

impl<'a> PortfolioTui<'a> {
    pub fn new(ctx: &'a AppContext, start: Option<SectionId>) -> Self {
        let config = &ctx.config;
        Self {
            portfolio: ctx.portfolio,
            config,
            theme: Theme::from_config(&config.ui),
            navigator: Navigator::new(),
            viewport: Viewport::new(config.scroll.duration),
            document: Document::build(ctx.portfolio, config, 0, SkillsTab::default()),
            tab: SkillsTab::default(),
            needs_rebuild: true,
            pending_start: start,
            revealed: [None; SectionId::COUNT],
            show_help: false,
            should_quit: false,
        }
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(self.config.ui.tick)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key.code, key.modifiers),
                    Event::Mouse(mouse) => self.handle_mouse(mouse.kind),
                    _ => {}
                }
            }
            self.viewport.tick(Instant::now());
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Nav bar
                Constraint::Min(5),    // Page
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.relayout(chunks[1]);
        self.draw_nav_bar(f, chunks[0]);
        self.draw_page(f, chunks[1]);
        self.draw_status_bar(f, chunks[2]);

        if self.show_help {
            self.draw_help_overlay(f);
        }
    }

    /// Rebuild the document when the width or the skills tab changed, keep
    /// the viewport dimensions current, and stamp newly visible sections.
    fn relayout(&mut self, body: Rect) {
        if self.needs_rebuild || self.document.width() != body.width {
            self.document = Document::build(self.portfolio, self.config, body.width, self.tab);
            self.needs_rebuild = false;
        }
        // Resize cancels a scroll in flight, so only on real changes.
        if self.viewport.view_height() != body.height
            || self.viewport.content_height() != self.document.height()
        {
            self.viewport.resize(body.height, self.document.height());
        }
        if let Some(target) = self.pending_start.take() {
            self.navigator.go_to_section(
                target,
                self.document.anchors(),
                &mut self.viewport,
                ScrollMode::Instant,
            );
        }
        self.mark_reveals();
    }

    fn mark_reveals(&mut self) {
        let top = self.viewport.offset();
        let bottom = top.saturating_add(self.viewport.view_height());
        let now = Instant::now();
        for (id, span) in self.document.anchors().ordered() {
            let visible = span.top < bottom && span.top.saturating_add(span.height) > top;
            if visible && self.revealed[id.index()].is_none() {
                self.revealed[id.index()] = Some(now);
            }
        }
    }

    fn draw_nav_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("vitae", self.theme.title_style()), Span::raw("  ")];
        for descriptor in &SECTIONS {
            if !self.config.nav.is_visible(descriptor.id) {
                continue;
            }
            let style = if descriptor.id == self.navigator.active() {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(
                format!(" {} {} ", descriptor.id.index() + 1, descriptor.label),
                style,
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_page(&self, f: &mut Frame, area: Rect) {
        let now = Instant::now();
        let mut dimmed = [false; SectionId::COUNT];
        for id in SectionId::ALL {
            dimmed[id.index()] = self.revealed[id.index()]
                .is_some_and(|at| now.saturating_duration_since(at) < REVEAL_FADE);
        }
        self.document.blit(self.viewport.offset(), area, f.buffer_mut(), &dimmed);
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let hints = "1-6/Tab: seções  j/k: rolar  t: abas  ?: ajuda  q: sair";
        let position = format!("{:>3}%", self.scroll_percent());
        let pad = usize::from(area.width)
            .saturating_sub(hints.chars().count())
            .saturating_sub(position.chars().count());

        let line = Line::from(vec![
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
            Span::raw(" ".repeat(pad)),
            Span::styled(position, self.theme.accent_style()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_help_overlay(&self, f: &mut Frame) {
        let area = f.area();
        let width = 44.min(area.width.saturating_sub(4));
        let height = 15.min(area.height.saturating_sub(4));
        let x = area.width.saturating_sub(width) / 2;
        let y = area.height.saturating_sub(height) / 2;
        let help_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, help_area);

        let lines = vec![
            Line::styled("Atalhos", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from("  1-6          Ir para a seção"),
            Line::from("  Tab/BackTab  Próxima / anterior"),
            Line::from("  j/k, setas   Rolar"),
            Line::from("  PgUp/PgDn    Rolar uma página"),
            Line::from("  g / G        Início / fim"),
            Line::from("  t, ←/→       Trocar aba de habilidades"),
            Line::from("  ?            Esta ajuda"),
            Line::from("  q, Esc       Sair"),
            Line::from(""),
            Line::from("Pressione ? ou Esc para fechar"),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" Ajuda "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, help_area);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if self.show_help {
            if matches!(
                key,
                KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter
            ) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                if let Some(id) = SectionId::from_index(index) {
                    self.jump(id);
                }
            }
            KeyCode::Tab => {
                self.navigator.go_next(
                    self.document.anchors(),
                    &mut self.viewport,
                    ScrollMode::Smooth,
                );
            }
            KeyCode::BackTab => {
                self.navigator.go_prev(
                    self.document.anchors(),
                    &mut self.viewport,
                    ScrollMode::Smooth,
                );
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll(i32::from(self.config.scroll.step)),
            KeyCode::Char('k') | KeyCode::Up => self.scroll(-i32::from(self.config.scroll.step)),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll(self.page_step()),
            KeyCode::PageUp => self.scroll(-self.page_step()),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_edge(0),
            KeyCode::Char('G') | KeyCode::End => self.scroll_edge(u16::MAX),
            KeyCode::Char('t') | KeyCode::Right => self.switch_tab(SkillsTab::next),
            KeyCode::Left => self.switch_tab(SkillsTab::prev),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, kind: MouseEventKind) {
        match kind {
            MouseEventKind::ScrollDown => self.scroll(i32::from(self.config.scroll.step)),
            MouseEventKind::ScrollUp => self.scroll(-i32::from(self.config.scroll.step)),
            _ => {}
        }
    }

    /// Explicit jump; a missing anchor (hidden section) is a silent no-op.
    fn jump(&mut self, target: SectionId) {
        self.navigator.go_to_section(
            target,
            self.document.anchors(),
            &mut self.viewport,
            ScrollMode::Smooth,
        );
    }

    fn scroll(&mut self, delta: i32) {
        self.viewport.scroll_by(delta);
        self.resync();
    }

    fn scroll_edge(&mut self, row: u16) {
        self.viewport.scroll_to(row, ScrollMode::Instant);
        self.resync();
    }

    /// Free scrolling drags the active marker along when configured to.
    fn resync(&mut self) {
        if self.config.nav.follow_scroll {
            self.navigator
                .sync_to_scroll(self.document.anchors(), &self.viewport);
        }
    }

    fn switch_tab(&mut self, step: fn(SkillsTab) -> SkillsTab) {
        self.tab = step(self.tab);
        self.needs_rebuild = true;
    }

    fn page_step(&self) -> i32 {
        i32::from(self.viewport.view_height().saturating_sub(1).max(1))
    }

    fn scroll_percent(&self) -> u16 {
        let max = self.viewport.max_offset();
        if max == 0 {
            100
        } else {
            (u32::from(self.viewport.offset()) * 100 / u32::from(max)) as u16
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn test_context() -> AppContext {
        AppContext {
            config: Config::default(),
            portfolio: Portfolio::get(),
            format: OutputFormat::Human,
        }
    }

    fn context_with(config: Config) -> AppContext {
        AppContext {
            config,
            portfolio: Portfolio::get(),
            format: OutputFormat::Human,
        }
    }

    /// App with one layout pass behind it, as after the first frame.
    fn ready_app(ctx: &AppContext) -> PortfolioTui<'_> {
        let mut app = PortfolioTui::new(ctx, None);
        app.relayout(Rect::new(0, 0, 80, 24));
        app
    }

    // =========================================================================
    // Navigation keys
    // =========================================================================

    #[test]
    fn starts_at_home() {
        let ctx = test_context();
        let app = ready_app(&ctx);
        assert_eq!(app.navigator.active(), SectionId::Home);
        assert_eq!(app.viewport.offset(), 0);
    }

    #[test]
    fn digit_key_jumps_to_section() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(app.navigator.active(), SectionId::Experience);
        assert_eq!(
            app.viewport.target(),
            app.document.anchors().anchor(SectionId::Experience).unwrap()
        );
    }

    #[test]
    fn digit_for_hidden_section_is_a_noop() {
        let mut config = Config::default();
        config.nav.hidden = vec![SectionId::Education];
        let ctx = context_with(config);
        let mut app = ready_app(&ctx);

        app.handle_key(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(app.navigator.active(), SectionId::Home);
        assert_eq!(app.viewport.offset(), 0);
    }

    #[test]
    fn tab_cycles_to_next_section() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.navigator.active(), SectionId::About);
        app.handle_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(app.navigator.active(), SectionId::Home);
    }

    #[test]
    fn start_section_is_applied_on_first_layout() {
        let ctx = test_context();
        let mut app = PortfolioTui::new(&ctx, Some(SectionId::Skills));
        app.relayout(Rect::new(0, 0, 80, 24));

        assert_eq!(app.navigator.active(), SectionId::Skills);
        let anchor = app.document.anchors().anchor(SectionId::Skills).unwrap();
        assert_eq!(app.viewport.offset(), anchor.min(app.viewport.max_offset()));
    }

    // =========================================================================
    // Free scrolling
    // =========================================================================

    #[test]
    fn free_scroll_resyncs_active_section() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        let about = app.document.anchors().anchor(SectionId::About).unwrap();
        app.viewport.scroll_to(about, ScrollMode::Instant);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.navigator.active(), SectionId::About);
    }

    #[test]
    fn follow_scroll_off_keeps_active_unchanged() {
        let mut config = Config::default();
        config.nav.follow_scroll = false;
        let ctx = context_with(config);
        let mut app = ready_app(&ctx);

        let about = app.document.anchors().anchor(SectionId::About).unwrap();
        app.viewport.scroll_to(about, ScrollMode::Instant);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.navigator.active(), SectionId::Home);
    }

    #[test]
    fn end_key_reaches_bottom() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        app.handle_key(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(app.viewport.offset(), app.viewport.max_offset());
        app.handle_key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(app.viewport.offset(), 0);
    }

    #[test]
    fn mouse_wheel_scrolls() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        app.handle_mouse(MouseEventKind::ScrollDown);
        assert_eq!(app.viewport.offset(), ctx.config.scroll.step);
        app.handle_mouse(MouseEventKind::ScrollUp);
        assert_eq!(app.viewport.offset(), 0);
    }

    // =========================================================================
    // Skills tabs, reveal, help
    // =========================================================================

    #[test]
    fn tab_switch_keeps_anchors_stable() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);
        let before = app.document.anchors().anchor(SectionId::Contact).unwrap();

        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        app.relayout(Rect::new(0, 0, 80, 24));

        assert_eq!(app.tab, SkillsTab::Technologies);
        assert_eq!(app.document.anchors().anchor(SectionId::Contact), Some(before));
    }

    #[test]
    fn reveal_stamps_sections_when_they_enter_the_viewport() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        assert!(app.revealed[SectionId::Home.index()].is_some());
        assert!(app.revealed[SectionId::Contact.index()].is_none());

        app.handle_key(KeyCode::Char('G'), KeyModifiers::SHIFT);
        app.relayout(Rect::new(0, 0, 80, 24));
        assert!(app.revealed[SectionId::Contact.index()].is_some());
    }

    #[test]
    fn reveal_stamp_is_kept_on_revisit() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);
        let first = app.revealed[SectionId::Home.index()].unwrap();

        app.handle_key(KeyCode::Char('G'), KeyModifiers::SHIFT);
        app.relayout(Rect::new(0, 0, 80, 24));
        app.handle_key(KeyCode::Char('g'), KeyModifiers::NONE);
        app.relayout(Rect::new(0, 0, 80, 24));

        assert_eq!(app.revealed[SectionId::Home.index()], Some(first));
    }

    #[test]
    fn help_overlay_swallows_navigation_keys() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        app.handle_key(KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.show_help);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.viewport.offset(), 0);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys_request_exit() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);

        let mut app = ready_app(&ctx);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn resize_clamps_scroll_position() {
        let ctx = test_context();
        let mut app = ready_app(&ctx);

        app.handle_key(KeyCode::Char('G'), KeyModifiers::SHIFT);
        let bottom = app.viewport.offset();
        // A taller window must pull the offset back into range.
        app.relayout(Rect::new(0, 0, 80, 50));
        assert!(app.viewport.offset() <= bottom);
        assert!(app.viewport.offset() <= app.viewport.max_offset());
    }
}
