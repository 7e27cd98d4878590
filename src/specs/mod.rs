// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction specifications: each spec encodes *where the
//! ground truth lives in the page text* and *how to pull it out robustly*.
//!
//! ## What lives here
//! - **Pure text extraction** from fetched pages. No networking: `game`
//!   fetches, specs read.
//! - Marker/fragment scanning and the repair steps needed to turn a page's
//!   embedded pseudo-literal into strict structured data.
//!
//! ## What does **not** live here
//! - Cookie handling, URL building, the pipeline itself — that is `game`.
//! - The file server — unrelated surface, see `serve`.
//!
//! ## Conventions & invariants
//! - Specs are testable **offline** against captured or synthetic page text.
//! - “Not found” is a value, not an error; a fragment that *was* found but
//!   cannot be repaired into valid data is a hard error. Callers rely on the
//!   distinction to separate site drift from transport trouble.
//!
//! Current specs:
//! - `gadget` – the `gadgetInfo` blob embedded in a game's gadget page.
pub mod gadget;
