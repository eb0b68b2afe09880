//! Scroll-derived state of the floating navigation bar.

/// Past this offset the bar switches to its compact, opaque style.
pub const SCROLL_THRESHOLD: f64 = 20.0;
/// Scrolling down past this offset hides the bar.
pub const SCROLL_HIDE_THRESHOLD: f64 = 100.0;
/// Fraction of the viewport height a section must straddle to be active.
pub const VIEWPORT_SECTION_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Works,
    About,
    Testimonials,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Works,
        Section::About,
        Section::Testimonials,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Works => "works",
            Section::About => "about",
            Section::Testimonials => "testimonials",
        }
    }
}

/// Viewport-relative vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone)]
pub struct NavigationTracker {
    is_scrolled: bool,
    is_visible: bool,
    last_scroll_y: f64,
    active: Section,
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self {
            is_scrolled: false,
            is_visible: true,
            last_scroll_y: 0.0,
            active: Section::Home,
        }
    }
}

impl NavigationTracker {
    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    /// Recompute the bar state for a new scroll offset. `bounds` reports
    /// where each section currently sits, or `None` if it is not rendered.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, viewport_height: f64, bounds: F)
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        self.is_scrolled = scroll_y > SCROLL_THRESHOLD;
        self.is_visible = !(scroll_y > self.last_scroll_y && scroll_y > SCROLL_HIDE_THRESHOLD);
        self.last_scroll_y = scroll_y;

        let line = viewport_height * VIEWPORT_SECTION_THRESHOLD;
        if let Some(section) = Section::ALL.into_iter().rev().find(|section| {
            bounds(*section).is_some_and(|rect| rect.top <= line && rect.bottom >= line)
        }) {
            self.active = section;
        }
    }

    pub fn on_nav_click(&mut self, section: Section) {
        self.active = section;
    }
}
