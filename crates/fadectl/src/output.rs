use materializer::ScalarSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Streams every parameter write to stdout, one line per tick.
pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ScalarSink for StdoutSink {
    fn set_scalar(&mut self, name: &str, value: f32) {
        println!("{}", format_write(self.format, name, value));
    }
}

fn format_write(format: OutputFormat, name: &str, value: f32) -> String {
    match format {
        OutputFormat::Text => format!("{name} = {value:.6}"),
        OutputFormat::Json => {
            serde_json::json!({ "parameter": name, "value": value }).to_string()
        }
    }
}
