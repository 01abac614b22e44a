//! Component XML read by ibus-daemon at registration time.

use std::io::Write;

use crate::error::Result;
use crate::params::Params;
use crate::props::Tables;

fn write_element<W: Write>(out: &mut W, name: &str, value: &str) -> Result<()> {
    writeln!(out, "  <{name}>{value}</{name}>")?;
    Ok(())
}

/// Writes the `<component>` document.
///
/// `setup_arg` becomes a `<setup>` element in every engine unless it is empty.
pub fn render_xml<W: Write>(
    out: &mut W,
    params: &Params,
    tables: &Tables,
    setup_arg: &[String],
) -> Result<()> {
    let engine_count = tables.engines.engine_count()?;

    writeln!(out, "<component>")?;
    for (key, value) in tables.component.iter() {
        write_element(out, key, &value.render(params))?;
    }
    writeln!(out, "<engines>")?;
    for i in 0..engine_count {
        writeln!(out, "<engine>")?;
        for (key, value) in tables.engine_common.iter() {
            write_element(out, key, &value.render(params))?;
        }
        if !setup_arg.is_empty() {
            write_element(out, "setup", &setup_arg.join(" "))?;
        }
        for (key, values) in tables.engines.iter() {
            write_element(out, key, &values[i].render(params))?;
        }
        writeln!(out, "</engine>")?;
    }
    writeln!(out, "</engines>")?;
    writeln!(out, "</component>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::Branding;
    use crate::probe::Features;
    use crate::props::Tables;

    fn render(features: Features, setup_arg: &[String]) -> String {
        let params = Params::new(
            Branding::Mozc,
            "/usr/bin/ibus-mozc",
            "/usr/share/ibus-mozc/icon.png",
        );
        let mut buf = Vec::new();
        render_xml(&mut buf, &params, &Tables::new(features), setup_arg).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_xml_old_ibus_document() {
        let setup = vec![
            "/usr/lib/mozc/mozc_tool".to_string(),
            "--mode=config_dialog".to_string(),
        ];
        let expected = "\
<component>
  <name>com.google.IBus.Mozc</name>
  <description>Mozc Component</description>
  <exec>/usr/bin/ibus-mozc --ibus</exec>
  <version>0.0.0.0</version>
  <author>Google Inc.</author>
  <license>New BSD</license>
  <homepage>https://github.com/google/mozc</homepage>
  <textdomain>ibus-mozc</textdomain>
<engines>
<engine>
  <description>Mozc (Japanese Input Method)</description>
  <language>ja</language>
  <icon>/usr/share/ibus-mozc/icon.png</icon>
  <rank>80</rank>
  <setup>/usr/lib/mozc/mozc_tool --mode=config_dialog</setup>
  <name>mozc-jp</name>
  <longname>Mozc</longname>
  <layout>jp</layout>
</engine>
</engines>
</component>
";
        assert_eq!(render(Features::default(), &setup), expected);
    }

    #[test]
    fn test_xml_new_ibus_fields() {
        let xml = render(
            Features {
                icon_prop_key: true,
                symbol: true,
            },
            &[],
        );
        assert!(xml.contains("  <icon_prop_key>InputMode</icon_prop_key>\n"));
        assert!(xml.contains("  <symbol>&#x3042;</symbol>\n"));
        assert!(xml.contains("  <layout>default</layout>\n"));
        assert!(!xml.contains("<setup>"));
        assert!(xml.find("<symbol>").unwrap() < xml.find("<name>mozc-jp</name>").unwrap());
    }

    #[test]
    fn test_xml_one_engine_block() {
        let xml = render(Features::default(), &[]);
        assert_eq!(xml.matches("<engines>").count(), 1);
        assert_eq!(xml.matches("<engine>").count(), 1);
        assert!(xml.ends_with("</engines>\n</component>\n"));
    }

    #[test]
    fn test_xml_structural_error_writes_nothing() {
        let params = Params::new(Branding::Mozc, "", "");
        let mut tables = Tables::new(Features::default());
        tables.engines.set("layout", Vec::new());
        let mut buf = Vec::new();
        assert!(render_xml(&mut buf, &params, &tables, &[]).is_err());
        assert!(buf.is_empty());
    }
}
