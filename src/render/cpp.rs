//! C++ header with the same properties as constants, compiled into the
//! engine binary so it can register itself without the XML.

use std::io::Write;

use crate::error::Result;
use crate::params::Params;
use crate::props::Tables;

/// Include guard of the generated header.
pub const GUARD_NAME: &str = "MOZC_UNIX_IBUS_MAIN_H_";

const COPYRIGHT: &str = "// Copyright 2010 Google Inc. All Rights Reserved.";

/// Upper-cases the first character and lower-cases the rest, so
/// `icon_prop_key` becomes `Icon_prop_key`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn write_variable<W: Write>(out: &mut W, prefix: &str, name: &str, value: &str) -> Result<()> {
    writeln!(
        out,
        "const char k{}{}[] = \"{}\";",
        prefix,
        capitalize(name),
        value
    )?;
    Ok(())
}

/// Writes the header. The setup command line is not part of it.
pub fn render_cpp<W: Write>(out: &mut W, params: &Params, tables: &Tables) -> Result<()> {
    let engine_count = tables.engines.engine_count()?;

    writeln!(out, "{COPYRIGHT}")?;
    writeln!(out)?;
    writeln!(out, "#ifndef {GUARD_NAME}")?;
    writeln!(out, "#define {GUARD_NAME}")?;
    writeln!(out, "namespace {{")?;

    for (key, value) in tables.component.iter() {
        write_variable(out, "Component", key, &value.render(params))?;
    }
    for (key, value) in tables.engine_common.iter() {
        write_variable(out, "Engine", key, &value.render(params))?;
    }
    for (key, values) in tables.engines.iter() {
        writeln!(out, "const char* kEngine{}Array[] = {{", capitalize(key))?;
        for value in values {
            writeln!(out, "\"{}\",", value.render(params))?;
        }
        writeln!(out, "}};")?;
    }
    writeln!(out, "const size_t kEngineArrayLen = {engine_count};")?;

    writeln!(out, "}}  // namespace")?;
    writeln!(out, "#endif  // {GUARD_NAME}")?;
    Ok(())
}
