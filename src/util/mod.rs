//! Browser helpers shared by the behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys lookup and listener glue in one place so each behavior reads
//! as "find elements, attach handler".

pub mod dom;
