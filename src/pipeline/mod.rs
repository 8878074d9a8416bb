//! The Renderer's conversion pipeline, one stage per module:
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. markdown  transform to an HTML fragment (comrak, fixed extensions)
//!  ├─ 2. template  wrap in the fixed document template + timestamp footer
//!  └─ 3. pdf       (pdf output only) pipe the document through the engine
//! ```
//!
//! Stages 1 and 2 are pure string transforms; stage 3 is the only external
//! call a request ever makes.

pub mod markdown;
pub mod pdf;
pub mod template;
