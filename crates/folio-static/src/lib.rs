//! Static HTML renderer for folio resume sites.
//!
//! Turns a `resume-data.json` record into a single `index.html`. The page is
//! assembled from an ordered list of sections; a section only appears when
//! the record has data for it, and the navigation menu is derived from the
//! same list.
//!
//! Text fields are written into the page as-is. No HTML escaping is applied,
//! so markup such as `<strong>` in the record reaches the browser unchanged.
//! Only render records you wrote yourself.

pub mod builder;
pub mod sections;
pub mod templates;

pub use builder::{render_document, BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use sections::Section;
