//! Serializers for the property tables.
//!
//! Both renderers are pure functions over a [`Tables`] snapshot and write to
//! any [`std::io::Write`]. Values are emitted verbatim: neither XML nor C
//! string escaping is applied, so inputs must already be safe for the target
//! format (they come from the build system, not from users).
//!
//! [`Tables`]: crate::props::Tables

pub mod cpp;
pub mod xml;

pub use cpp::render_cpp;
pub use xml::render_xml;
