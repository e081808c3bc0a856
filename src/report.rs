//! Human-readable completeness report for a result.

use std::io::{self, Write};

use crate::domain::GeocodeResult;
use crate::export::is_truthy;

impl GeocodeResult {
    /// Print the debug report to stdout.
    pub fn debug(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)
    }

    /// Write the flattened tree, the export map, and checklists of which OSM
    /// tags and fields were filled.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let export = self.json();
        let filled = |key: &str| export.get(key).is_some_and(is_truthy);

        serde_json::to_writer_pretty(&mut *out, self.parse())?;
        writeln!(out)?;
        serde_json::to_writer_pretty(&mut *out, &export)?;
        writeln!(out)?;
        writeln!(out)?;

        writeln!(out, "OSM Quality")?;
        writeln!(out, "-----------")?;
        let tags = self.osm();
        let mut count = 0;
        for key in tags.keys() {
            if let Some(field) = key.strip_prefix("addr:") {
                if filled(field) {
                    writeln!(out, "- [x] {}", key)?;
                    count += 1;
                } else {
                    writeln!(out, "- [ ] {}", key)?;
                }
            }
        }
        writeln!(out, "({}/{})", count, tags.len().saturating_sub(2))?;
        writeln!(out)?;

        writeln!(out, "Fieldnames")?;
        writeln!(out, "----------")?;
        let fieldnames = self.fieldnames();
        let mut count = 0;
        for name in &fieldnames {
            if filled(name) {
                writeln!(out, "- [x] {}", name)?;
                count += 1;
            } else {
                writeln!(out, "- [ ] {}", name)?;
            }
        }
        writeln!(out, "({}/{})", count, fieldnames.len())?;
        writeln!(out)?;

        writeln!(out, "URL")?;
        writeln!(out, "---")?;
        writeln!(out, "{}", self.url())?;
        Ok(())
    }

    /// The report as a string
    pub fn report(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_report(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
