use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};
use ssfmt::{FormatOptions, NumberFormat};
use std::path::Path;
use umya_spreadsheet::structs::Worksheet;
use umya_spreadsheet::Spreadsheet;

pub fn open_workbook(path: &Path) -> Result<Spreadsheet> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" => open_xlsx(path),
        "xls" => open_xls(path),
        _ => Err(Error::UnsupportedFormat(extension)),
    }
}

fn open_xlsx(path: &Path) -> Result<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| Error::InvalidExcel {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

fn open_xls(path: &Path) -> Result<Spreadsheet> {
    xlrd::open(path).map_err(|e| Error::InvalidExcel {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

pub fn get_sheet_names(workbook: &Spreadsheet) -> Vec<String> {
    workbook
        .get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

/// A selector that parses as a number picks a sheet by zero-based index,
/// anything else picks by name.
pub fn parse_sheet_selector(selector: &str) -> SheetSelector {
    match selector.parse::<usize>() {
        Ok(index) => SheetSelector::Index(index),
        Err(_) => SheetSelector::Name(selector.to_string()),
    }
}

/// Decode a worksheet into a loosely-typed grid of cells.
///
/// Numeric cells carrying a number format other than General are rendered
/// through their format code, so times and dates stored as serial numbers
/// surface as the text the report shows (e.g. "9:30"). General numerics
/// stay numbers; everything else is trimmed text.
pub fn read_grid(sheet: &Worksheet) -> Grid {
    let (max_col, max_row) = sheet.get_highest_column_and_row();
    let opts = FormatOptions::default();

    let mut rows = Vec::with_capacity(max_row as usize);
    for row in 1..=max_row {
        let mut cells = Vec::with_capacity(max_col as usize);
        for col in 1..=max_col {
            cells.push(decode_cell(sheet, col, row, &opts));
        }
        rows.push(cells);
    }
    Grid::from_rows(rows)
}

fn decode_cell(sheet: &Worksheet, col: u32, row: u32, opts: &FormatOptions) -> Cell {
    let Some(cell) = sheet.get_cell((col, row)) else {
        return Cell::Empty;
    };

    let raw_value = cell.get_value();
    if raw_value.is_empty() {
        return Cell::Empty;
    }

    let format_code = cell
        .get_style()
        .get_number_format()
        .map(|nf| nf.get_format_code())
        .unwrap_or("General");

    if let Ok(num) = raw_value.parse::<f64>() {
        if format_code == "General" {
            return Cell::Number(num);
        }
        return match NumberFormat::parse(format_code) {
            Ok(fmt) => Cell::Text(fmt.format(num, opts)),
            Err(_) => Cell::Number(num),
        };
    }

    Cell::Text(raw_value.to_string())
}
