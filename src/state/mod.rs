//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `catalog`, `listings`, `toast`)
//! so individual components can depend on small focused models. The only
//! process-wide mutable state is the session; everything else is local
//! to a page or a context signal of plain data.

pub mod catalog;
pub mod listings;
pub mod session;
pub mod toast;
