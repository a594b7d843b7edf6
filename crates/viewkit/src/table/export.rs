//! Flat file export.

use crate::context::{translate, OutputTarget, Translate};
use crate::error::Result;
use crate::value::Cell;

use super::model::Table;

impl<R> Table<R> {
    /// Renders the table as a CSV document.
    ///
    /// The header row holds the translated field names, each data record is
    /// rendered for [`OutputTarget::Csv`], and a footer record follows when
    /// any exported field has a footer. AJAX tables yield the header only.
    pub fn to_csv(&self, translator: Option<&dyn Translate>) -> Result<String> {
        let fields: Vec<_> = self
            .visible_fields()
            .filter(|f| f.is_exported())
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(fields.iter().map(|f| translate(translator, &f.name)))?;

        for row in self.render_rows(OutputTarget::Csv, translator) {
            writer.write_record(fields.iter().map(|f| {
                row.get(&f.id)
                    .map(Cell::to_plain_text)
                    .unwrap_or_default()
            }))?;
        }

        if !self.is_ajax() && self.has_footer() {
            let footer = self.footer_with(OutputTarget::Csv, translator);
            if !footer.is_empty() {
                writer.write_record(fields.iter().map(|f| {
                    footer
                        .get(&f.id)
                        .map(Cell::to_plain_text)
                        .unwrap_or_default()
                }))?;
            }
        }

        let bytes = writer.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}
