//! Pure view state behind each page behavior.
//!
//! DESIGN
//! ======
//! Every decision a behavior makes (what to label, which annotations to
//! attach, whether to cancel a delete) is computed here without touching the
//! DOM. The `behaviors` modules only translate these results into browser
//! calls, which keeps the logic testable on the native target.

pub mod confirm;
pub mod preview;
pub mod theme;
pub mod validation;
