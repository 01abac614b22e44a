//! Property tables describing the ibus-mozc component and its engines.
//!
//! Tables keep insertion order; both renderers walk them front to back so the
//! generated files are reproducible.

use crate::error::{GenError, Result};
use crate::params::{Param, Segment, Template};
use crate::probe::Features;

/// Engine name. Referenced by the engine runtime; do not change.
pub const ENGINE_NAME: &str = "mozc-jp";

/// Property key of the input-mode menu. Must match the property name
/// registered by the engine's property handler.
pub const INPUT_MODE_PROP_KEY: &str = "InputMode";

/// HIRAGANA LETTER A, as an XML character reference.
pub const ENGINE_SYMBOL: &str = "&#x3042;";

/// Ordered map from property name to template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    entries: Vec<(&'static str, Template)>,
}

impl PropertyTable {
    /// Inserts or replaces a property. Replacing keeps the original position.
    pub fn set(&mut self, key: &'static str, value: Template) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Template)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered map from property name to one template per engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineTable {
    entries: Vec<(&'static str, Vec<Template>)>,
}

impl EngineTable {
    pub fn set(&mut self, key: &'static str, values: Vec<Template>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = values,
            None => self.entries.push((key, values)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Template]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Template])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of engines, taken from the `name` property.
    ///
    /// Every property must carry exactly that many values; renderers index
    /// all of them in lockstep.
    pub fn engine_count(&self) -> Result<usize> {
        let expected = self.get("name").map_or(0, <[Template]>::len);
        for (key, values) in self.iter() {
            if values.len() != expected {
                return Err(GenError::Structural {
                    key,
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(expected)
    }
}

/// `<component>` properties.
pub fn component_props() -> PropertyTable {
    let mut table = PropertyTable::default();
    table.set("name", Template::Literal("com.google.IBus.Mozc"));
    table.set(
        "description",
        Template::Segments(&[Segment::Param(Param::ProductName), Segment::Text(" Component")]),
    );
    table.set(
        "exec",
        Template::Segments(&[Segment::Param(Param::IbusMozcPath), Segment::Text(" --ibus")]),
    );
    table.set("version", Template::Literal("0.0.0.0"));
    table.set("author", Template::Literal("Google Inc."));
    table.set("license", Template::Literal("New BSD"));
    table.set("homepage", Template::Literal("https://github.com/google/mozc"));
    table.set("textdomain", Template::Literal("ibus-mozc"));
    table
}

/// Properties shared by every engine, before feature probing.
pub fn engine_common_props() -> PropertyTable {
    let mut table = PropertyTable::default();
    table.set(
        "description",
        Template::Segments(&[
            Segment::Param(Param::ProductName),
            Segment::Text(" (Japanese Input Method)"),
        ]),
    );
    table.set("language", Template::Literal("ja"));
    table.set(
        "icon",
        Template::Segments(&[Segment::Param(Param::IbusMozcIconPath)]),
    );
    table.set("rank", Template::Literal("80"));
    table
}

/// Per-engine properties, before feature probing.
pub fn engines_props() -> EngineTable {
    let mut table = EngineTable::default();
    table.set("name", vec![Template::Literal(ENGINE_NAME)]);
    table.set(
        "longname",
        vec![Template::Segments(&[Segment::Param(Param::ProductName)])],
    );
    table
}

/// The full set of tables handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub component: PropertyTable,
    pub engine_common: PropertyTable,
    pub engines: EngineTable,
}

impl Tables {
    /// Static tables with the probed features applied.
    pub fn new(features: Features) -> Self {
        let mut tables = Self {
            component: component_props(),
            engine_common: engine_common_props(),
            engines: engines_props(),
        };
        tables.apply(features);
        tables
    }

    fn apply(&mut self, features: Features) {
        if features.icon_prop_key {
            self.engine_common
                .set("icon_prop_key", Template::Literal(INPUT_MODE_PROP_KEY));
        }

        let layout = if features.symbol {
            self.engine_common
                .set("symbol", Template::Literal(ENGINE_SYMBOL));
            "default"
        } else {
            "jp"
        };
        self.engines.set("layout", vec![Template::Literal(layout)]);
    }
}
