//! # Region Report Parser Service
//!
//! gzip圧縮されたタブ区切りのリージョンレポートをパースする
//!
//! フォーマット: ヘッダ1行、データN行、末尾に固定3行の合計ブロック。
//! 行数フィールドや区切り行は無いため、末尾3行を合計として扱う。

use flate2::read::GzDecoder;
use log::warn;
use std::io::Read;

use crate::domain::entities::record::{first_duplicate, Record};
use crate::domain::entities::region_report::{RegionReport, TOTALS_LINE_COUNT};
use crate::domain::errors::ReportError;

const FIELD_SEPARATOR: char = '\t';

/// レポートパーサー
pub struct ReportParser;

impl ReportParser {
    /// gzipのバイト列を展開してパースする
    ///
    /// # Errors
    ///
    /// - gzipとして不正な場合 `ReportError::Decompression`
    /// - 構造が不正な場合は [`ReportParser::parse_text`] を参照
    pub fn parse(raw: &[u8]) -> Result<RegionReport, ReportError> {
        let text = Self::decompress(raw)?;
        Self::parse_text(&text)
    }

    /// 単一メンバーのgzipを展開する。UTF-8として不正なバイトは置換する。
    pub fn decompress(raw: &[u8]) -> Result<String, ReportError> {
        let mut decoder = GzDecoder::new(raw);
        let mut bytes = Vec::new();
        decoder
            .read_to_end(&mut bytes)
            .map_err(ReportError::Decompression)?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("Region report is not valid UTF-8, replacing invalid bytes");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// 展開済みテキストをパースする
    ///
    /// # Errors
    ///
    /// - ヘッダと合計3行に満たない場合 `ReportError::ReportTooShort`
    /// - 合計行が `ラベル\t値` の2フィールドでない、またはラベルが重複する場合
    ///   `ReportError::MalformedTotals`
    pub fn parse_text(content: &str) -> Result<RegionReport, ReportError> {
        let lines = split_lines(content);
        if lines.len() < 1 + TOTALS_LINE_COUNT {
            return Err(ReportError::ReportTooShort { lines: lines.len() });
        }

        let header: Vec<String> = split_fields(lines[0])
            .into_iter()
            .map(str::to_string)
            .collect();

        if let Some(name) = first_duplicate(header.as_slice()) {
            warn!("Report header repeats column '{}'; the last value wins", name);
        }

        let totals_start = lines.len() - TOTALS_LINE_COUNT;

        let rows = lines[1..totals_start]
            .iter()
            .enumerate()
            .map(|(offset, line)| parse_row(&header, line, offset + 2))
            .collect();

        let mut totals = Record::new();
        for (offset, line) in lines[totals_start..].iter().enumerate() {
            let line_number = totals_start + offset + 1;
            let (label, value) = parse_totals_line(line, line_number)?;
            if totals.contains_key(label) {
                return Err(ReportError::MalformedTotals {
                    line_number,
                    reason: format!("duplicate label '{}'", label),
                });
            }
            totals.insert(label, value);
        }

        Ok(RegionReport::new(header, rows, totals))
    }
}

/// `\n`、`\r\n`、単独の `\r` のいずれも改行として扱う
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// データ行をヘッダと位置で対応付ける
///
/// 列数が一致しない場合は短い方に揃え、落ちた列について警告を出す。
fn parse_row(header: &[String], line: &str, line_number: usize) -> Record {
    let values = split_fields(line);
    if values.len() != header.len() {
        warn!(
            "Report line {} has {} fields, header has {}; truncating to the shorter",
            line_number,
            values.len(),
            header.len()
        );
    }
    Record::zip(header, values.as_slice())
}

fn parse_totals_line(line: &str, line_number: usize) -> Result<(&str, &str), ReportError> {
    let fields = split_fields(line);
    match fields.as_slice() {
        [label, value] => Ok((*label, *value)),
        _ => Err(ReportError::MalformedTotals {
            line_number,
            reason: format!("expected 2 tab-separated fields, found {}", fields.len()),
        }),
    }
}
