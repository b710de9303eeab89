//! Scroll-spy navigation: the section registry, the anchor map produced by
//! layout, and the [`Navigator`] that keeps the active section in step with
//! the viewport.
//!
//! Two flows update the active section:
//! - explicit jumps via [`Navigator::go_to_section`], which always win;
//! - free scrolling, which may resync via [`Navigator::sync_to_scroll`]
//!   when the caller has `nav.follow_scroll` enabled.

pub mod section;
pub mod viewport;

pub use section::{SECTIONS, SectionDescriptor, SectionId};
pub use viewport::{ScrollMode, Viewport};

/// Row extent of one section inside the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// First document row of the section.
    pub top: u16,
    /// Number of rows the section occupies.
    pub height: u16,
}

impl SectionSpan {
    #[must_use]
    pub const fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.top.saturating_add(self.height)
    }
}

/// Maps section identifiers to their document rows. Sections excluded from
/// the layout (hidden, or not yet measured) simply have no entry, which is
/// what makes a jump to them a no-op.
#[derive(Debug, Default, Clone)]
pub struct AnchorMap {
    spans: [Option<SectionSpan>; SectionId::COUNT],
}

impl AnchorMap {
    pub fn insert(&mut self, id: SectionId, span: SectionSpan) {
        self.spans[id.index()] = Some(span);
    }

    /// Anchor row of a section: the document row its heading starts on.
    #[must_use]
    pub fn anchor(&self, id: SectionId) -> Option<u16> {
        self.spans[id.index()].map(|s| s.top)
    }

    #[must_use]
    pub fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.spans[id.index()]
    }

    #[must_use]
    pub fn contains(&self, id: SectionId) -> bool {
        self.spans[id.index()].is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Option::is_none)
    }

    /// Section whose span contains the given document row.
    #[must_use]
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|id| self.span(*id).is_some_and(|s| s.contains(row)))
    }

    /// Sections present in the layout, in page order.
    pub fn ordered(&self) -> impl Iterator<Item = (SectionId, SectionSpan)> + '_ {
        SectionId::ALL
            .into_iter()
            .filter_map(|id| self.span(id).map(|s| (id, s)))
    }

    /// Total document height implied by the spans.
    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.spans
            .iter()
            .flatten()
            .map(|s| s.top.saturating_add(s.height))
            .max()
            .unwrap_or(0)
    }
}

/// Tracks which section is active and drives the viewport toward targets.
#[derive(Debug)]
pub struct Navigator {
    active: SectionId,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// A fresh navigator starts on the hero section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: SectionId::Home,
        }
    }

    #[must_use]
    pub const fn active(&self) -> SectionId {
        self.active
    }

    /// Jump to a section. If the section has no anchor (hidden, or layout
    /// not run yet) this is a silent no-op: the viewport does not move and
    /// the active section is retained. Returns whether the jump happened.
    pub fn go_to_section(
        &mut self,
        target: SectionId,
        anchors: &AnchorMap,
        viewport: &mut Viewport,
        mode: ScrollMode,
    ) -> bool {
        let Some(row) = anchors.anchor(target) else {
            return false;
        };
        viewport.scroll_to(row, mode);
        self.active = target;
        true
    }

    /// Jump to the next anchored section in page order, wrapping. Skips
    /// sections missing from the layout.
    pub fn go_next(
        &mut self,
        anchors: &AnchorMap,
        viewport: &mut Viewport,
        mode: ScrollMode,
    ) -> bool {
        self.go_cycle(anchors, viewport, mode, SectionId::next)
    }

    /// Jump to the previous anchored section in page order, wrapping.
    pub fn go_prev(
        &mut self,
        anchors: &AnchorMap,
        viewport: &mut Viewport,
        mode: ScrollMode,
    ) -> bool {
        self.go_cycle(anchors, viewport, mode, SectionId::prev)
    }

    fn go_cycle(
        &mut self,
        anchors: &AnchorMap,
        viewport: &mut Viewport,
        mode: ScrollMode,
        step: fn(SectionId) -> SectionId,
    ) -> bool {
        let mut candidate = step(self.active);
        while candidate != self.active {
            if self.go_to_section(candidate, anchors, viewport, mode) {
                return true;
            }
            candidate = step(candidate);
        }
        false
    }

    /// Resync the active section from the scroll position after a manual
    /// scroll. The focus row sits a third of the way down the screen; the
    /// section under it becomes active. Rows past every span (short or
    /// empty layouts) retain the current section.
    pub fn sync_to_scroll(&mut self, anchors: &AnchorMap, viewport: &Viewport) {
        let focus = viewport
            .offset()
            .saturating_add(viewport.view_height() / 3)
            .min(viewport.content_height().saturating_sub(1));
        if let Some(id) = anchors.section_at(focus) {
            self.active = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Standard layout used across the tests: six contiguous sections.
    fn full_anchors() -> AnchorMap {
        let mut map = AnchorMap::default();
        map.insert(SectionId::Home, SectionSpan { top: 0, height: 20 });
        map.insert(SectionId::About, SectionSpan { top: 20, height: 30 });
        map.insert(SectionId::Experience, SectionSpan { top: 50, height: 40 });
        map.insert(SectionId::Skills, SectionSpan { top: 90, height: 40 });
        map.insert(SectionId::Education, SectionSpan { top: 130, height: 30 });
        map.insert(SectionId::Contact, SectionSpan { top: 160, height: 20 });
        map
    }

    fn viewport_for(map: &AnchorMap) -> Viewport {
        let mut vp = Viewport::new(Duration::from_millis(300));
        vp.resize(30, map.content_height());
        vp
    }

    // =========================================================================
    // AnchorMap tests
    // =========================================================================

    #[test]
    fn anchor_map_reports_spans_and_height() {
        let map = full_anchors();
        assert_eq!(map.anchor(SectionId::Experience), Some(50));
        assert_eq!(map.content_height(), 180);
        assert!(!map.is_empty());
        assert_eq!(map.ordered().count(), 6);
    }

    #[test]
    fn section_at_resolves_interior_and_boundary_rows() {
        let map = full_anchors();
        assert_eq!(map.section_at(0), Some(SectionId::Home));
        assert_eq!(map.section_at(19), Some(SectionId::Home));
        assert_eq!(map.section_at(20), Some(SectionId::About));
        assert_eq!(map.section_at(179), Some(SectionId::Contact));
        assert_eq!(map.section_at(180), None);
    }

    #[test]
    fn empty_map_has_no_sections() {
        let map = AnchorMap::default();
        assert!(map.is_empty());
        assert_eq!(map.content_height(), 0);
        assert_eq!(map.section_at(0), None);
    }

    // =========================================================================
    // Navigator jump tests
    // =========================================================================

    #[test]
    fn initial_active_section_is_home() {
        assert_eq!(Navigator::new().active(), SectionId::Home);
        assert_eq!(Navigator::default().active(), SectionId::Home);
    }

    #[test]
    fn jump_sets_active_and_moves_viewport() {
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        let moved = nav.go_to_section(SectionId::Experience, &map, &mut vp, ScrollMode::Instant);
        assert!(moved);
        assert_eq!(nav.active(), SectionId::Experience);
        assert_eq!(vp.offset(), 50);
    }

    #[test]
    fn jump_to_missing_anchor_is_a_silent_noop() {
        let mut map = full_anchors();
        map = {
            // Rebuild without the education span
            let mut m = AnchorMap::default();
            for (id, span) in map.ordered() {
                if id != SectionId::Education {
                    m.insert(id, span);
                }
            }
            m
        };
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();
        nav.go_to_section(SectionId::Experience, &map, &mut vp, ScrollMode::Instant);

        let before = vp.offset();
        let moved = nav.go_to_section(SectionId::Education, &map, &mut vp, ScrollMode::Instant);
        assert!(!moved);
        assert_eq!(nav.active(), SectionId::Experience);
        assert_eq!(vp.offset(), before);
    }

    #[test]
    fn repeated_jump_to_same_section_is_idempotent() {
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        assert!(nav.go_to_section(SectionId::Skills, &map, &mut vp, ScrollMode::Instant));
        let offset = vp.offset();
        assert!(nav.go_to_section(SectionId::Skills, &map, &mut vp, ScrollMode::Smooth));
        assert_eq!(nav.active(), SectionId::Skills);
        assert_eq!(vp.offset(), offset);
        assert!(!vp.is_animating());
    }

    #[test]
    fn jump_before_first_layout_retains_state() {
        let map = AnchorMap::default();
        let mut vp = Viewport::new(Duration::from_millis(300));
        let mut nav = Navigator::new();

        assert!(!nav.go_to_section(SectionId::Contact, &map, &mut vp, ScrollMode::Smooth));
        assert_eq!(nav.active(), SectionId::Home);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn jump_sequence_with_one_missing_section() {
        // Navigate to experience, then attempt a section that is not in the
        // layout: the first jump sticks, the second changes nothing.
        let mut map = AnchorMap::default();
        for (id, span) in full_anchors().ordered() {
            if id != SectionId::Education {
                map.insert(id, span);
            }
        }
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        assert!(nav.go_to_section(SectionId::Experience, &map, &mut vp, ScrollMode::Instant));
        assert!(!nav.go_to_section(SectionId::Education, &map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::Experience);
        assert_eq!(vp.offset(), map.anchor(SectionId::Experience).unwrap());
    }

    // =========================================================================
    // Cycling tests
    // =========================================================================

    #[test]
    fn go_next_walks_the_registry_in_order() {
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        assert!(nav.go_next(&map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::About);
        assert!(nav.go_next(&map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::Experience);
    }

    #[test]
    fn go_next_skips_missing_sections_and_wraps() {
        let mut map = AnchorMap::default();
        map.insert(SectionId::Home, SectionSpan { top: 0, height: 20 });
        map.insert(SectionId::Contact, SectionSpan { top: 20, height: 20 });
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        assert!(nav.go_next(&map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::Contact);
        assert!(nav.go_next(&map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::Home);
    }

    #[test]
    fn go_prev_wraps_to_contact() {
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        assert!(nav.go_prev(&map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::Contact);
    }

    #[test]
    fn cycling_with_no_other_anchored_section_fails() {
        let mut map = AnchorMap::default();
        map.insert(SectionId::Home, SectionSpan { top: 0, height: 20 });
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        assert!(!nav.go_next(&map, &mut vp, ScrollMode::Instant));
        assert_eq!(nav.active(), SectionId::Home);
    }

    // =========================================================================
    // Scroll-spy resync tests
    // =========================================================================

    #[test]
    fn sync_follows_manual_scroll() {
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        // Focus row = offset + view_height/3 = 55 + 10 = 65, inside experience
        vp.scroll_to(55, ScrollMode::Instant);
        nav.sync_to_scroll(&map, &vp);
        assert_eq!(nav.active(), SectionId::Experience);

        vp.scroll_to(vp.max_offset(), ScrollMode::Instant);
        nav.sync_to_scroll(&map, &vp);
        assert_eq!(nav.active(), SectionId::Contact);
    }

    #[test]
    fn sync_at_top_selects_home() {
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        nav.go_to_section(SectionId::Contact, &map, &mut vp, ScrollMode::Instant);
        vp.scroll_to(0, ScrollMode::Instant);
        nav.sync_to_scroll(&map, &vp);
        assert_eq!(nav.active(), SectionId::Home);
    }

    #[test]
    fn sync_with_empty_layout_retains_active() {
        let map = AnchorMap::default();
        let vp = Viewport::new(Duration::from_millis(300));
        let mut nav = Navigator::new();

        nav.sync_to_scroll(&map, &vp);
        assert_eq!(nav.active(), SectionId::Home);
    }

    #[test]
    fn explicit_jump_wins_over_later_resync_position() {
        // A jump lands the anchor at the top of the screen; the focus row is
        // then inside the jumped-to section, so an immediate resync agrees
        // with the jump instead of fighting it.
        let map = full_anchors();
        let mut vp = viewport_for(&map);
        let mut nav = Navigator::new();

        nav.go_to_section(SectionId::Skills, &map, &mut vp, ScrollMode::Instant);
        nav.sync_to_scroll(&map, &vp);
        assert_eq!(nav.active(), SectionId::Skills);
    }
}
