//! # Smitten
//!
//! A tiny static site generator for Valentine's Day proposals. One TOML
//! config and one markdown file become a chain of question pages — each
//! with a yes button that moves forward and a no button that runs away
//! from the cursor — ending in a fireworks finale and the plan for the
//! day.
//!
//! # Build Pipeline
//!
//! ```text
//! config.toml ─┬─> resolve ──> plan links ──> render pages ──> _site/
//! agenda.md  ──┘                                (markdown body)
//! ```
//!
//! Every stage before the final writes is a pure function: resolving the
//! config substitutes stock defaults for every omitted key, the page
//! plan derives filenames and the forward yes-link chain from page
//! positions, and rendering the same inputs yields byte-identical
//! output. A bad config fails before anything touches the disk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, stock defaults, validation |
//! | [`animation`] | Derived floating-symbols parameters (ranges, spawn cadence) |
//! | [`plan`] | Page graph: output filenames and yes-link chaining |
//! | [`generate`] | Maud page rendering and site build orchestration |
//! | [`evade`] | No-button geometry: tuning constants and reposition math |
//! | [`output`] | CLI reporting — pure format functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than a runtime template
//! engine. Malformed markup is a build error, template variables are
//! Rust expressions, and all interpolation is auto-escaped — the agenda
//! body and the embedded style/script blocks are the only deliberate
//! raw insertions.
//!
//! ## Fully Self-Contained Output
//!
//! Each generated page inlines its stylesheet and scripts and references
//! nothing over the network. The site works from a `file://` URL, a USB
//! stick, or any static host, indefinitely — there is exactly one moment
//! to get an answer to the big question, and it must not depend on a CDN.
//!
//! ## Behavior Constants Live in Rust
//!
//! The browser scripts are static assets, but their tuning values
//! (proximity radius, wander bound, spawn cadence) are injected from
//! [`evade`] and [`animation`] as generated constants blocks. The Rust
//! side mirrors the reposition math, so the no button's guarantees are
//! covered by unit tests even though the behavior runs in the browser.

pub mod animation;
pub mod config;
pub mod evade;
pub mod generate;
pub mod output;
pub mod plan;
