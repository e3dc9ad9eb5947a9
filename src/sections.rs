//! Landing-page section registry and active-section resolution.
//!
//! The navbar highlights whichever section currently crosses the activation
//! band near the top of the viewport. The client script mirrors
//! [`resolve_active`] exactly and reads its configuration (section order and
//! band offset) from a blob the server embeds into the landing page, so the
//! two sides cannot drift.

/// Viewport offset (in CSS pixels) a section must straddle to become active.
pub const ACTIVATION_BAND: f64 = 100.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// Document order of the landing page. First match against the
    /// activation band wins, so overlapping sections resolve to the earlier
    /// entry.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }
}

/// Bounding box of one section, relative to the viewport.
#[derive(Clone, Copy, Debug)]
pub struct SectionRect {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    fn straddles_band(&self) -> bool {
        self.top <= ACTIVATION_BAND && self.bottom >= ACTIVATION_BAND
    }
}

/// Resolve the active section for a scroll snapshot.
///
/// Walks [`Section::ALL`] in order and returns the first section whose rect
/// straddles the activation band. When nothing matches (e.g. mid-flight
/// between sections) the previous active section is retained, which is why
/// the caller owns that value and passes it in.
pub fn resolve_active(rects: &[SectionRect], previous: Section) -> Section {
    for section in Section::ALL {
        let hit = rects
            .iter()
            .find(|r| r.section == section)
            .is_some_and(|r| r.straddles_band());
        if hit {
            return section;
        }
    }
    previous
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(section: Section, top: f64, bottom: f64) -> SectionRect {
        SectionRect {
            section,
            top,
            bottom,
        }
    }

    #[test]
    fn section_in_band_becomes_active() {
        let rects = [
            rect(Section::Home, -500.0, 40.0),
            rect(Section::About, 50.0, 300.0),
            rect(Section::Skills, 300.0, 900.0),
        ];
        assert_eq!(resolve_active(&rects, Section::Home), Section::About);
    }

    #[test]
    fn overlapping_sections_resolve_to_earlier_one() {
        let rects = [
            rect(Section::Skills, 60.0, 400.0),
            rect(Section::About, 20.0, 250.0),
        ];
        // Both straddle the band; About comes first in document order even
        // though Skills appears first in the snapshot.
        assert_eq!(resolve_active(&rects, Section::Home), Section::About);
    }

    #[test]
    fn no_match_retains_previous() {
        let rects = [
            rect(Section::Home, -900.0, -100.0),
            rect(Section::About, 400.0, 800.0),
        ];
        assert_eq!(resolve_active(&rects, Section::Skills), Section::Skills);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        let rects = [rect(Section::Contact, 100.0, 100.0)];
        assert_eq!(resolve_active(&rects, Section::Home), Section::Contact);
    }

    #[test]
    fn empty_snapshot_retains_previous() {
        assert_eq!(resolve_active(&[], Section::Education), Section::Education);
    }
}
