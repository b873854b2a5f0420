//! Page graph: output filenames and the forward yes-link chain.
//!
//! Pages form a single path. Each question page's yes button links to the
//! next question page; the last one links to the fireworks page, which in
//! turn links to the agenda. The no button is not a navigational control
//! and never appears here.

/// Output directory, created beside the config file.
pub const OUTPUT_SUBDIR: &str = "_site";

/// Filename of the celebration page.
pub const FIREWORKS_FILE: &str = "fireworks.html";

/// Filename of the final agenda page.
pub const AGENDA_FILE: &str = "agenda.html";

/// Return the output filename for a question page by its 0-based index.
///
/// The first page is the site entry point; later pages are numbered so
/// on-disk ordering matches page order (`page-2.html`, `page-3.html`, ...).
pub fn page_filename(index: usize) -> String {
    if index == 0 {
        "index.html".to_string()
    } else {
        format!("page-{}.html", index + 1)
    }
}

/// Derived linking plan for one question page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// Output filename for this page.
    pub filename: String,
    /// Where the yes button leads.
    pub yes_href: String,
}

/// Compute the linking plan for `count` question pages, in page order.
pub fn plan_pages(count: usize) -> Vec<PagePlan> {
    (0..count)
        .map(|i| PagePlan {
            filename: page_filename(i),
            yes_href: if i + 1 == count {
                FIREWORKS_FILE.to_string()
            } else {
                page_filename(i + 1)
            },
        })
        .collect()
}
