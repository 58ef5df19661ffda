use crate::domain::model::Statistics;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

fn rows(statistics: &Statistics) -> Vec<[String; 4]> {
    statistics
        .iter()
        .map(|(language, stats)| {
            [
                language.to_string(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats
                    .average_salary
                    .map(|avg| avg.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect()
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width_needed: usize, align: Align) -> String {
    let fill = " ".repeat(width_needed.saturating_sub(width(text)));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

/// ASCII table with the title embedded in the top border.
pub fn render_table(statistics: &Statistics, title: &str) -> String {
    let body = rows(statistics);
    let header: [String; 4] = HEADERS.map(str::to_string);

    let mut widths = [0usize; 4];
    for row in std::iter::once(&header).chain(body.iter()) {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(width(cell));
        }
    }
    let aligns = [Align::Left, Align::Left, Align::Right, Align::Left];

    let border: String = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", segments.join("+"))
    };

    // 標題長度不超過邊框內寬時才嵌入
    let top = if !title.is_empty() && width(title) <= width(&border) - 2 {
        let rest: String = border.chars().skip(width(title) + 1).collect();
        format!("+{}{}", title, rest)
    } else {
        border.clone()
    };

    let format_row = |row: &[String; 4]| -> String {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(column, cell)| format!(" {} ", pad(cell, widths[column], aligns[column])))
            .collect();
        format!("|{}|", cells.join("|"))
    };

    let mut lines = vec![top, format_row(&header), border.clone()];
    lines.extend(body.iter().map(format_row));
    lines.push(border);
    lines.join("\n")
}

pub fn render_csv(statistics: &Statistics) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for row in rows(statistics) {
        writer.write_record(&row)?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&data).trim_end().to_string())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    statistics: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    language: &'a str,
    vacancies_found: u64,
    vacancies_processed: usize,
    average_salary: Option<i64>,
}

pub fn render_json(statistics: &Statistics, title: &str) -> Result<String> {
    let report = JsonReport {
        source: title,
        statistics: statistics
            .iter()
            .map(|(language, stats)| JsonEntry {
                language,
                vacancies_found: stats.vacancies_found,
                vacancies_processed: stats.vacancies_processed,
                average_salary: stats.average_salary,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_report(statistics: &Statistics, title: &str, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(statistics, title)),
        ReportFormat::Csv => render_csv(statistics),
        ReportFormat::Json => render_json(statistics, title),
    }
}

/// Writes the report followed by one blank line.
pub fn print_report<W: Write>(
    out: &mut W,
    statistics: &Statistics,
    title: &str,
    format: ReportFormat,
) -> Result<()> {
    let rendered = render_report(statistics, title, format)?;
    writeln!(out, "{}", rendered)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
