use std::{fmt, str::FromStr};
use thiserror::Error;

/// Fraction of a section that must be on screen before it counts as active.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

// The cursor glow is a 400px disc centred on the pointer
const GLOW_RADIUS: f64 = 200.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Work,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [Self::Hero, Self::Work, Self::About, Self::Contact];
    pub const NAV: [SectionId; 3] = [Self::Work, Self::About, Self::Contact];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Work => "work",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One intersection report for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisibility {
    pub section: SectionId,
    pub ratio: f64,
    pub intersecting: bool,
}

impl SectionVisibility {
    /// Builds a report from the DOM id of the observed element.
    pub fn from_dom(id: &str, ratio: f64, intersecting: bool) -> Result<Self, UnknownSection> {
        Ok(Self {
            section: id.parse()?,
            ratio,
            intersecting,
        })
    }

    fn is_visible(&self) -> bool {
        self.intersecting && self.ratio >= VISIBILITY_THRESHOLD
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    loaded: bool,
    pointer: PointerPosition,
    active_section: Option<SectionId>,
    mobile_menu_open: bool,
}

impl ViewState {
    pub fn mount(&mut self) {
        self.loaded = true;
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn move_pointer(&mut self, pointer: PointerPosition) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Top-left corner of the cursor glow for the current pointer.
    pub fn glow_offset(&self) -> (f64, f64) {
        (self.pointer.x - GLOW_RADIUS, self.pointer.y - GLOW_RADIUS)
    }

    /// Applies a batch of intersection reports in the order they were observed.
    /// Each visible section overwrites the previous one, so the last wins.
    /// Returns whether the active section changed.
    pub fn observe<I>(&mut self, reports: I) -> bool
    where
        I: IntoIterator<Item = SectionVisibility>,
    {
        let before = self.active_section;
        for report in reports.into_iter().filter(SectionVisibility::is_visible) {
            self.active_section = Some(report.section);
        }
        if before != self.active_section {
            log::debug!("active section: {:?}", self.active_section);
        }
        before != self.active_section
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == Some(section)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Nav clicks close the menu before scrolling.
    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(section: SectionId, ratio: f64) -> SectionVisibility {
        SectionVisibility {
            section,
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn test_section_ids() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
        assert_eq!(SectionId::About.to_string(), "about");
        assert_eq!(SectionId::NAV.map(SectionId::label), ["Work", "About", "Contact"]);
    }

    #[test]
    fn test_report_from_dom_id() {
        let report = SectionVisibility::from_dom("about", 0.4, true).expect("about is a section");
        assert_eq!(report.section, SectionId::About);

        let mut state = ViewState::default();
        assert!(state.observe([report]));
        assert!(state.is_active(SectionId::About));

        assert_eq!(
            SectionVisibility::from_dom("", 1.0, true),
            Err(UnknownSection(String::new()))
        );
    }

    #[test]
    fn test_about_takes_over_from_work() {
        let mut state = ViewState::default();
        assert!(state.observe([report(SectionId::Work, 0.8)]));
        assert!(state.is_active(SectionId::Work));

        // work scrolls below the threshold while about crosses it
        let changed = state.observe([report(SectionId::Work, 0.2), report(SectionId::About, 0.35)]);
        assert!(changed);
        assert_eq!(state.active_section(), Some(SectionId::About));
        assert!(!state.is_active(SectionId::Work));
    }

    #[test]
    fn test_below_threshold_keeps_active() {
        let mut state = ViewState::default();
        state.observe([report(SectionId::Hero, 1.0)]);
        assert!(!state.observe([report(SectionId::Hero, 0.1), report(SectionId::Work, 0.29)]));
        assert_eq!(state.active_section(), Some(SectionId::Hero));

        // intersecting flag off means not visible even with a stale ratio
        let stale = SectionVisibility {
            section: SectionId::Work,
            ratio: 0.5,
            intersecting: false,
        };
        assert!(!state.observe([stale]));
        assert_eq!(state.active_section(), Some(SectionId::Hero));
    }

    #[test]
    fn test_last_visible_report_wins() {
        let mut state = ViewState::default();
        state.observe([
            report(SectionId::About, 0.5),
            report(SectionId::Contact, 0.3),
            report(SectionId::Work, 0.0),
        ]);
        assert_eq!(state.active_section(), Some(SectionId::Contact));
    }

    #[test]
    fn test_pointer_and_glow() {
        let mut state = ViewState::default();
        assert!(!state.loaded());
        state.mount();
        state.mount();
        assert!(state.loaded());

        state.move_pointer(PointerPosition::new(250.0, 410.0));
        assert_eq!(state.pointer(), PointerPosition::new(250.0, 410.0));
        assert_eq!(state.glow_offset(), (50.0, 210.0));
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut state = ViewState::default();
        state.toggle_menu();
        assert!(state.mobile_menu_open());
        state.close_menu();
        assert!(!state.mobile_menu_open());

        // navigating with the menu already closed leaves it closed
        state.close_menu();
        assert!(!state.mobile_menu_open());
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.mobile_menu_open());
    }
}
