//! Page sections and the inclusion rules that pick them.

use folio_record::ResumeRecord;

/// A top-level block of the rendered page.
///
/// Declaration order is navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Home,
    Summary,
    Experience,
    Skills,
    Accomplishments,
    Education,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Summary,
        Section::Experience,
        Section::Skills,
        Section::Accomplishments,
        Section::Education,
        Section::Contact,
    ];

    /// Compute the sections a record produces, in navigation order.
    ///
    /// This is the only place inclusion is decided. Both the menu and the
    /// emitted blocks are derived from the returned list.
    pub fn plan(record: &ResumeRecord) -> Vec<Section> {
        Self::ALL
            .into_iter()
            .filter(|section| section.is_included(record))
            .collect()
    }

    /// Anchor id, also the template name.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Accomplishments => "accomplishments",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Menu label.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Summary => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Accomplishments => "Awards",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Position in the page body, top to bottom.
    ///
    /// Awards sit right after the summary on the page even though the menu
    /// lists them after skills.
    pub fn body_rank(self) -> u8 {
        match self {
            Section::Home => 0,
            Section::Summary => 1,
            Section::Accomplishments => 2,
            Section::Experience => 3,
            Section::Skills => 4,
            Section::Education => 5,
            Section::Contact => 6,
        }
    }

    fn is_included(self, record: &ResumeRecord) -> bool {
        match self {
            Section::Home | Section::Contact => true,
            Section::Summary => !record.summary.is_empty(),
            Section::Experience => !record.experience.is_empty(),
            Section::Skills => !record.skills.is_empty(),
            Section::Accomplishments => !record.accomplishments.is_empty(),
            Section::Education => !record.education.is_empty(),
        }
    }
}

/// Reorder a plan into page-body order.
pub fn body_order(plan: &[Section]) -> Vec<Section> {
    let mut body = plan.to_vec();
    body.sort_by_key(|section| section.body_rank());
    body
}
