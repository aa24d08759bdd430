//! Report rendering for the CLI: JSON for machines, tables for people.

use crate::core::{FishSample, Parameter, StatusTag};
use crate::parser::EnhancedAnalysisResult;
use crate::scoring::{find_best_parameter, invalid_parameters};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// A scored sample collection plus its cross-sample aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub samples: Vec<FishSample>,
    pub best_parameter: Option<crate::core::BestParameter>,
}

impl SampleReport {
    pub fn new(samples: Vec<FishSample>) -> Self {
        let best_parameter = find_best_parameter(&samples);
        Self {
            samples,
            best_parameter,
        }
    }
}

pub trait ReportWriter {
    fn write_samples(&mut self, report: &SampleReport) -> anyhow::Result<()>;
    fn write_analysis(&mut self, result: &EnhancedAnalysisResult) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_samples(&mut self, report: &SampleReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_analysis(&mut self, result: &EnhancedAnalysisResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn colorize_status(label: &str, status: StatusTag) -> String {
    match status {
        StatusTag::Success => label.green().to_string(),
        StatusTag::Warning => label.yellow().to_string(),
        StatusTag::Error => label.red().to_string(),
        StatusTag::Neutral => label.dimmed().to_string(),
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_samples(&mut self, report: &SampleReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header: Vec<String> = vec!["Ikan".to_string()];
        header.extend(Parameter::ALL.iter().map(|p| p.field_name().to_string()));
        header.push("Skor".to_string());
        header.push("Kategori".to_string());
        table.set_header(header);

        for sample in &report.samples {
            let mut row: Vec<String> =
                vec![sample.fish_name.clone().unwrap_or_else(|| "-".to_string())];
            row.extend(Parameter::ALL.iter().map(|p| {
                sample
                    .parameters
                    .get(*p)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string())
            }));
            row.push(format!("{:.2}", sample.skor));
            row.push(colorize_status(
                &sample.kategori.to_string(),
                sample.kategori.status(),
            ));
            table.add_row(row);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        for sample in &report.samples {
            let invalid = invalid_parameters(sample);
            if !invalid.is_empty() {
                let names: Vec<&str> = invalid.iter().map(|p| p.field_name()).collect();
                writeln!(
                    self.writer,
                    "{} sampel {}: nilai 4 pada {} tidak ikut dihitung",
                    "peringatan:".yellow(),
                    sample
                        .fish_name
                        .as_deref()
                        .unwrap_or(&sample.id.to_string()),
                    names.join(", ")
                )?;
            }
        }

        if let Some(best) = &report.best_parameter {
            writeln!(
                self.writer,
                "Parameter terbaik: {} (rata-rata {:.2})",
                best.parameter.field_name(),
                best.score
            )?;
        }

        let mut seen = Vec::new();
        for sample in &report.samples {
            if !seen.contains(&sample.kategori) {
                seen.push(sample.kategori);
                writeln!(
                    self.writer,
                    "{}: {}",
                    sample.kategori,
                    sample.kategori.recommendation()
                )?;
            }
        }

        Ok(())
    }

    fn write_analysis(&mut self, result: &EnhancedAnalysisResult) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Parameter", "Skor", "Keyakinan", "Kondisi"]);

        for p in &result.parameters {
            table.add_row(vec![
                p.display_name.clone(),
                p.score.map(|s| s.to_string()).unwrap_or_default(),
                format!("{:?}", p.confidence).to_lowercase(),
                p.condition.clone(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "Skor keseluruhan: {:.1} ({})",
            result.overall_score, result.category
        )?;
        writeln!(
            self.writer,
            "Keyakinan hasil: {:.0}%",
            result.quality.confidence * 100.0
        )?;

        for issue in &result.quality.issues {
            writeln!(self.writer, "{} {issue}", "masalah:".red())?;
        }
        for warning in &result.quality.warnings {
            writeln!(self.writer, "{} {warning}", "peringatan:".yellow())?;
        }

        if !result.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Rekomendasi:")?;
            for rec in &result.recommendations {
                writeln!(self.writer, "  - {rec}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FishParameter;
    use crate::parser::parse_analysis_result;
    use crate::scoring::calculate_freshness;

    fn sample() -> FishSample {
        calculate_freshness(&FishParameter {
            mata: Some(8),
            insang: Some(7),
            lendir: Some(9),
            daging: Some(8),
            bau: Some(7),
            tekstur: Some(8),
        })
    }

    #[test]
    fn json_sample_report_is_valid_json() {
        let mut buf = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buf);
            writer
                .write_samples(&SampleReport::new(vec![sample()]))
                .unwrap();
        }
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["samples"][0]["Skor"], 7.83);
        assert_eq!(value["best_parameter"]["parameter"], "lendir");
    }

    #[test]
    fn json_analysis_report_is_valid_json() {
        let result = parse_analysis_result("| Mata | 8 | jernih |");
        let mut buf = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buf);
            writer.write_analysis(&result).unwrap();
        }
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["parameters"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn terminal_sample_report_mentions_category() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        {
            let mut writer = TerminalWriter::new(&mut buf);
            writer
                .write_samples(&SampleReport::new(vec![sample()]))
                .unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Sedang"));
        assert!(text.contains("Parameter terbaik: Lendir"));
    }

    #[test]
    fn terminal_analysis_report_lists_recommendations() {
        colored::control::set_override(false);
        let result = parse_analysis_result("teks pendek");
        let mut buf = Vec::new();
        {
            let mut writer = TerminalWriter::new(&mut buf);
            writer.write_analysis(&result).unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Rekomendasi:"));
        assert!(text.contains("pemeriksaan fisik"));
    }
}
