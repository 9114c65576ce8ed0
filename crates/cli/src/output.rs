use crate::error::CliError;
use model::schema::column::ColumnSpec;
use std::{
    fs::File,
    io::{self, Write},
};

/// CSV sink for projected rows; header row first, one record per lead,
/// missing values as empty cells.
pub struct RowWriter {
    inner: csv::Writer<Box<dyn Write>>,
}

impl RowWriter {
    pub fn create(columns: &[ColumnSpec], output: Option<String>) -> Result<Self, CliError> {
        let sink: Box<dyn Write> = match output {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };

        let mut inner = csv::Writer::from_writer(sink);
        inner.write_record(columns.iter().map(|column| column.name.as_str()))?;
        Ok(RowWriter { inner })
    }

    pub fn write_row(&mut self, row: &[Option<String>]) -> Result<(), CliError> {
        self.inner
            .write_record(row.iter().map(|value| value.as_deref().unwrap_or("")))?;
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), CliError> {
        self.inner.flush()?;
        Ok(())
    }
}
