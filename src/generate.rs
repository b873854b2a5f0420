//! HTML site generation.
//!
//! Takes a resolved [`SiteConfig`] plus the rendered agenda markdown and
//! produces the final static site: one question page per config entry, a
//! fireworks celebration page, and the agenda page.
//!
//! ## Output Structure
//!
//! ```text
//! _site/
//! ├── index.html       # First question page (site entry point)
//! ├── page-2.html      # Further question pages, in order
//! ├── fireworks.html   # Celebration, reached from the last yes button
//! └── agenda.html      # The plan, reached from the fireworks page
//! ```
//!
//! ## Self-Contained Pages
//!
//! Every page is a single document with no external fetches: the
//! stylesheet and the behavior scripts are embedded at compile time with
//! `include_str!`, and per-site parameters travel as generated constants
//! blocks (`FLOATING`, `EVADE`, `REVEAL_DELAY_MS`) ahead of the scripts
//! that read them. A built page keeps working from a `file://` URL on an
//! airplane, which is where this kind of site tends to be opened.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; the
//! agenda body and the script/style blocks are the only `PreEscaped`
//! insertions.

use crate::animation::FloatingParams;
use crate::config::{self, SiteConfig};
use crate::evade;
use crate::plan;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("cannot read agenda file {path}: {source}")]
    Agenda {
        path: PathBuf,
        source: std::io::Error,
    },
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const FLOATING_JS: &str = include_str!("../static/floating.js");
const DODGING_JS: &str = include_str!("../static/dodging.js");
const FIREWORKS_JS: &str = include_str!("../static/fireworks.js");

/// Title of the agenda page.
pub const AGENDA_TITLE: &str = "Our Valentine's Day";

/// A fully rendered page, ready to write.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub filename: String,
    pub content: String,
}

/// One written output file, for reporting.
#[derive(Debug, Clone)]
pub struct BuiltFile {
    pub filename: String,
    pub bytes: u64,
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub files: Vec<BuiltFile>,
}

/// Result of a `check` run: the config is valid and the agenda exists.
#[derive(Debug)]
pub struct CheckReport {
    pub page_count: usize,
    pub agenda_path: PathBuf,
}

/// Style and script fragments shared by every page of one site.
pub struct SharedAssets {
    css: String,
    floating_constants: String,
}

impl SharedAssets {
    pub fn from_config(config: &SiteConfig) -> Self {
        let params = FloatingParams::derive(&config.floating);
        Self {
            css: format!("{}\n\n{}", site_css_vars(config), CSS_STATIC),
            floating_constants: floating_constants(config, &params),
        }
    }
}

/// CSS custom properties carrying the per-site style values.
fn site_css_vars(config: &SiteConfig) -> String {
    format!(
        ":root {{\n    --page-background: {};\n    --floater-opacity: {};\n}}",
        config.background, config.floating.opacity
    )
}

/// The `FLOATING` constants block read by `static/floating.js`.
fn floating_constants(config: &SiteConfig, params: &FloatingParams) -> String {
    let symbols =
        serde_json::to_string(&config.floating.symbols).expect("symbol list must serialize");
    format!(
        "var FLOATING = {{ symbols: {symbols}, count: {}, minDuration: {}, \
         durationRange: {}, minSize: {}, sizeRange: {}, spawnIntervalMs: {} }};",
        config.floating.count,
        config.floating.min_duration,
        params.duration_range,
        config.floating.min_size,
        params.size_range,
        params.spawn_interval_ms,
    )
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the base HTML document structure shared by all three page
/// kinds: embedded styles, the floating-symbols layer and its scripts,
/// plus per-kind content and behavior.
fn base_document(title: &str, assets: &SharedAssets, content: Markup, behavior: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(&assets.css)) }
            }
            body {
                div.floaters {}
                (content)
                script { (PreEscaped(&assets.floating_constants)) }
                script { (PreEscaped(FLOATING_JS)) }
                (behavior)
            }
        }
    }
}

/// Renders a question page: a yes button that is a real link, and a no
/// button that only dodges.
pub fn render_button_page(
    title: &str,
    yes_text: &str,
    no_text: &str,
    yes_href: &str,
    assets: &SharedAssets,
) -> Markup {
    let content = html! {
        main.card {
            h1 { (title) }
            div.choices {
                a.btn.btn-yes href=(yes_href) { (yes_text) }
                button.btn.btn-no id="no-btn" type="button" { (no_text) }
            }
        }
    };
    let behavior = html! {
        script { (PreEscaped(evade::script_constants())) }
        script { (PreEscaped(DODGING_JS)) }
    };
    base_document(title, assets, content, behavior)
}

/// Renders the fireworks celebration page. The continue button exists in
/// the markup from the start but is revealed client-side after `delay_ms`.
pub fn render_fireworks_page(
    title: &str,
    button_text: &str,
    delay_ms: u64,
    next_href: &str,
    assets: &SharedAssets,
) -> Markup {
    let content = html! {
        canvas id="fireworks" {}
        main.card.celebrate {
            h1 { (title) }
            a.btn id="continue-btn" href=(next_href) { (button_text) }
        }
    };
    let behavior = html! {
        script { (PreEscaped(format!("var REVEAL_DELAY_MS = {delay_ms};"))) }
        script { (PreEscaped(FIREWORKS_JS)) }
    };
    base_document(title, assets, content, behavior)
}

/// Renders the agenda page from pre-rendered markdown HTML.
pub fn render_agenda_page(title: &str, body_html: &str, assets: &SharedAssets) -> Markup {
    let content = html! {
        main.agenda {
            article {
                (PreEscaped(body_html))
            }
        }
    };
    base_document(title, assets, content, html! {})
}

/// Convert the agenda markdown to HTML.
///
/// Markdown is forgiving by design: malformed input degrades to plain
/// paragraphs, it never fails the build.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Site assembly
// ============================================================================

/// Render every page of the site, in output order. Pure: same config and
/// agenda in, byte-identical pages out.
pub fn render_site(config: &SiteConfig, agenda_html: &str) -> Vec<RenderedPage> {
    let assets = SharedAssets::from_config(config);
    let mut pages = Vec::with_capacity(config.pages.len() + 2);

    for (page, link) in config.pages.iter().zip(plan::plan_pages(config.pages.len())) {
        pages.push(RenderedPage {
            filename: link.filename,
            content: render_button_page(
                &page.title,
                &page.yes_button,
                &page.no_button,
                &link.yes_href,
                &assets,
            )
            .into_string(),
        });
    }

    let delay_ms = (config.fireworks.duration_seconds * 1000.0) as u64;
    pages.push(RenderedPage {
        filename: plan::FIREWORKS_FILE.to_string(),
        content: render_fireworks_page(
            &config.fireworks.title,
            &config.fireworks.button_text,
            delay_ms,
            plan::AGENDA_FILE,
            &assets,
        )
        .into_string(),
    });

    pages.push(RenderedPage {
        filename: plan::AGENDA_FILE.to_string(),
        content: render_agenda_page(AGENDA_TITLE, agenda_html, &assets).into_string(),
    });

    pages
}

fn config_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Run the full build: load config, read the agenda, render every page,
/// and write the site into `_site/` beside the config file.
///
/// All validation and rendering happens before the first write, so a
/// config mistake never leaves a half-written site behind. A write error
/// aborts the remaining writes immediately.
pub fn generate(config_path: &Path) -> Result<BuildReport, GenerateError> {
    let config = config::load_config(config_path)?;
    let dir = config_dir(config_path);

    let agenda_path = dir.join(&config.agenda_file);
    let agenda_md = fs::read_to_string(&agenda_path).map_err(|source| GenerateError::Agenda {
        path: agenda_path.clone(),
        source,
    })?;
    let agenda_html = markdown_to_html(&agenda_md);

    let pages = render_site(&config, &agenda_html);

    let out_dir = dir.join(plan::OUTPUT_SUBDIR);
    fs::create_dir_all(&out_dir)?;

    let mut files = Vec::with_capacity(pages.len());
    for page in &pages {
        fs::write(out_dir.join(&page.filename), &page.content)?;
        files.push(BuiltFile {
            filename: page.filename.clone(),
            bytes: page.content.len() as u64,
        });
    }

    Ok(BuildReport { out_dir, files })
}

/// Validate the config and confirm the agenda file exists, without
/// writing anything.
pub fn check(config_path: &Path) -> Result<CheckReport, GenerateError> {
    let config = config::load_config(config_path)?;
    let agenda_path = config_dir(config_path).join(&config.agenda_file);
    fs::metadata(&agenda_path).map_err(|source| GenerateError::Agenda {
        path: agenda_path.clone(),
        source,
    })?;
    Ok(CheckReport {
        page_count: config.pages.len(),
        agenda_path,
    })
}

// ============================================================================
// Tests
// ============================================================================
