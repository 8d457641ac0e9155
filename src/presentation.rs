// src/presentation.rs
use std::io::Write;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::engine::FileReport;
use crate::stats::WordCount;

/// Emit results to the configured output format.
pub fn print_results(reports: &[FileReport], config: &Config) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(config)?;
    match config.format {
        OutputFormat::Text => output_text(reports, &mut writer)?,
        OutputFormat::Table => output_table(reports, &mut writer)?,
        OutputFormat::Json => output_json(reports, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

struct OutputWriter(Box<dyn Write>);
impl OutputWriter {
    fn create(config: &Config) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}
impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

/// "1 word" / "2 words" の形にする
fn formatted_text(count: usize, single: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {single}")
    } else {
        format!("{count} {plural}")
    }
}

/// ステータスバー風の1行表示
#[must_use]
pub fn status_line(report: &FileReport) -> String {
    let count = report.report.count;
    format!(
        "{}, {}, {}, {} in {} as {}",
        formatted_text(count.words, "word", "words"),
        formatted_text(count.chars, "char", "chars"),
        formatted_text(count.total_chars, "char with whitespace", "chars with whitespace"),
        formatted_text(report.report.lines, "line", "lines"),
        report.file,
        report.report.language,
    )
}

fn output_text(reports: &[FileReport], out: &mut impl Write) -> anyhow::Result<()> {
    for report in reports {
        writeln!(out, "{}", status_line(report))?;
    }
    Ok(())
}

fn output_table(reports: &[FileReport], out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "    WORDS\t CHARACTERS\t      TOTAL\t   LINES\tFILE")?;
    writeln!(out, "----------------------------------------------")?;
    for report in reports {
        let count = report.report.count;
        writeln!(
            out,
            "{:>9}\t{:>11}\t{:>11}\t{:>8}\t{}",
            count.words, count.chars, count.total_chars, report.report.lines, report.file
        )?;
    }
    if reports.len() > 1 {
        let mut total = WordCount::default();
        let mut lines = 0;
        for report in reports {
            total.accumulate(report.report.count);
            lines += report.report.lines;
        }
        writeln!(out, "----------------------------------------------")?;
        writeln!(
            out,
            "{:>9}\t{:>11}\t{:>11}\t{:>8}\tTOTAL",
            total.words, total.chars, total.total_chars, lines
        )?;
    }
    Ok(())
}

fn output_json(reports: &[FileReport], out: &mut impl Write) -> anyhow::Result<()> {
    let value = serde_json::json!({ "files": reports });
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}
