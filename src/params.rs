//! Substitution parameters and the templates that reference them.
//!
//! Property values are built from [`Segment`]s instead of format strings, so a
//! template can only name a parameter that [`Params`] is guaranteed to hold.

use crate::branding::Branding;

/// A substitution key available to property templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// `Mozc` or `Google Japanese Input`
    ProductName,
    /// Absolute path of the ibus-mozc executable
    IbusMozcPath,
    /// Absolute path of the ibus-mozc icon
    IbusMozcIconPath,
}

impl Param {
    pub const ALL: [Param; 3] = [
        Param::ProductName,
        Param::IbusMozcPath,
        Param::IbusMozcIconPath,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Param::ProductName => "product_name",
            Param::IbusMozcPath => "ibus_mozc_path",
            Param::IbusMozcIconPath => "ibus_mozc_icon_path",
        }
    }
}

/// Values substituted into templates. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub product_name: &'static str,
    pub ibus_mozc_path: String,
    pub ibus_mozc_icon_path: String,
}

impl Params {
    pub fn new(
        branding: Branding,
        ibus_mozc_path: impl Into<String>,
        ibus_mozc_icon_path: impl Into<String>,
    ) -> Self {
        Self {
            product_name: branding.product_name(),
            ibus_mozc_path: ibus_mozc_path.into(),
            ibus_mozc_icon_path: ibus_mozc_icon_path.into(),
        }
    }

    pub fn get(&self, param: Param) -> &str {
        match param {
            Param::ProductName => self.product_name,
            Param::IbusMozcPath => &self.ibus_mozc_path,
            Param::IbusMozcIconPath => &self.ibus_mozc_icon_path,
        }
    }
}

/// One piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text(&'static str),
    Param(Param),
}

/// A property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Emitted as-is
    Literal(&'static str),
    /// Concatenation of text and parameter values
    Segments(&'static [Segment]),
}

impl Template {
    pub fn render(&self, params: &Params) -> String {
        match self {
            Template::Literal(text) => (*text).to_string(),
            Template::Segments(segments) => {
                let mut out = String::new();
                for segment in *segments {
                    match segment {
                        Segment::Text(text) => out.push_str(text),
                        Segment::Param(param) => out.push_str(params.get(*param)),
                    }
                }
                out
            }
        }
    }
}
