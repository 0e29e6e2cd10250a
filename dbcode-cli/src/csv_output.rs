use std::io::Write;

/// CSV table written row by row; the header is emitted before the first row.
pub(crate) struct CsvOutput<W: Write> {
    writer: csv::Writer<W>,
    header: &'static [&'static str],
    initialized: bool,
}

impl<W: Write> CsvOutput<W> {
    #[must_use]
    pub fn new(writer: W, header: &'static [&'static str]) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            header,
            initialized: false,
        }
    }

    pub fn add_record<I, T>(&mut self, values: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        if !self.initialized {
            self.writer.write_record(self.header)?;
            self.initialized = true;
        }
        self.writer.write_record(values)?;

        anyhow::Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        if !self.initialized {
            self.writer.write_record(self.header)?;
        }
        self.writer.flush()?;

        anyhow::Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::csv_output::CsvOutput;

    #[test]
    fn test_header_written_once() {
        let mut data = Vec::new();
        let mut output = CsvOutput::new(&mut data, &["x", "y"]);
        output.add_record(["1", "2"]).unwrap();
        output.add_record(["3", "4"]).unwrap();
        output.finish().unwrap();

        assert_eq!(String::from_utf8(data).unwrap(), "x,y\n1,2\n3,4\n");
    }

    #[test]
    fn test_header_without_records() {
        let mut data = Vec::new();
        CsvOutput::new(&mut data, &["x"]).finish().unwrap();

        assert_eq!(String::from_utf8(data).unwrap(), "x\n");
    }
}
