mod error;
mod grid;
mod parser;
mod reader;
mod roster;
mod writer;

use clap::{Parser, ValueEnum};
use roster::Roster;
use std::io;
use std::path::PathBuf;

/// Operator roster of the reference deployment. Override with --operators.
pub const DEFAULT_OPERATORS: [&str; 7] = [
    "Amber",
    "Brittany",
    "Megan",
    "Sarah",
    "Stephanie",
    "Vanessa",
    "Kaylee",
];

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    European,
}

impl OutputFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            OutputFormat::Csv => b',',
            OutputFormat::Tsv => b'\t',
            OutputFormat::European => b';',
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "appt2csv")]
#[command(version, about = "Extract appointment schedules from 'Appointment List - By Operator' Excel exports to CSV")]
pub struct Args {
    /// Appointment report to parse (.xls or .xlsx)
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parse a specific sheet by name or index (default: first sheet)
    #[arg(short, long)]
    pub sheet: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Comma-separated operator roster (default: built-in list)
    #[arg(long)]
    pub operators: Option<String>,

    /// Print detailed progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> error::Result<()> {
    let roster = match &args.operators {
        Some(list) => Roster::new(
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        ),
        None => Roster::new(DEFAULT_OPERATORS),
    };
    if roster.is_empty() {
        return Err(error::Error::EmptyRoster);
    }

    if args.verbose {
        eprintln!("reading: {:?}", args.input);
    }

    let workbook = reader::open_workbook(&args.input)?;
    let sheet_names = reader::get_sheet_names(&workbook);

    if args.verbose {
        eprintln!("format: {}", args.input.extension().unwrap_or_default().to_string_lossy());
        eprintln!("sheets: {}", sheet_names.join(", "));
    }

    // The report is a single-sheet export; default to the first sheet.
    let sheet_idx = match &args.sheet {
        Some(selector) => {
            let sel = reader::parse_sheet_selector(selector);
            resolve_sheet_index(&sel, &sheet_names)?
        }
        None => 0,
    };

    let sheet = workbook
        .get_sheet(&sheet_idx)
        .ok_or(error::Error::SheetIndexOutOfRange {
            index: sheet_idx,
            count: sheet_names.len(),
        })?;

    if args.verbose {
        let (cols, rows) = sheet.get_highest_column_and_row();
        eprintln!("processing: {} ({} rows, {} columns)", sheet.get_name(), rows, cols);
    }

    let grid = reader::read_grid(sheet);
    let header = parser::locate_header(&grid)?;

    if args.verbose {
        eprintln!("header row: {}", header.row + 1);
    }

    let records = parser::extract_records(&grid, &header);
    let groups = roster::group_by_operator(records, &roster);

    if args.verbose {
        for (name, group) in groups.iter() {
            eprintln!("{}: {} appointments", name, group.len());
        }
        eprintln!("total: {} appointments", groups.total_records());
    }

    let config = writer::CsvConfig {
        format: args.format,
    };

    match &args.output {
        None => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            writer::write_groups(&groups, handle, &config)?;
        }
        Some(output_path) => {
            if args.verbose {
                eprintln!("output: {:?}", output_path);
            }
            let file = std::fs::File::create(output_path)?;
            writer::write_groups(&groups, file, &config)?;
        }
    }

    Ok(())
}

fn resolve_sheet_index(
    selector: &reader::SheetSelector,
    sheet_names: &[String],
) -> error::Result<usize> {
    match selector {
        reader::SheetSelector::Index(idx) => {
            if *idx < sheet_names.len() {
                Ok(*idx)
            } else {
                Err(error::Error::SheetIndexOutOfRange {
                    index: *idx,
                    count: sheet_names.len(),
                })
            }
        }
        reader::SheetSelector::Name(name) => {
            sheet_names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| error::Error::SheetNotFound {
                    name: name.clone(),
                    available: sheet_names.join(", "),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_sheet_by_index_and_name() {
        let names = vec!["Report".to_string(), "Notes".to_string()];
        let sel = reader::parse_sheet_selector("1");
        assert_eq!(resolve_sheet_index(&sel, &names).unwrap(), 1);
        let sel = reader::parse_sheet_selector("Notes");
        assert_eq!(resolve_sheet_index(&sel, &names).unwrap(), 1);
    }

    #[test]
    fn rejects_unknown_sheet_selectors() {
        let names = vec!["Report".to_string()];
        let sel = reader::parse_sheet_selector("3");
        assert!(matches!(
            resolve_sheet_index(&sel, &names),
            Err(error::Error::SheetIndexOutOfRange { index: 3, count: 1 })
        ));
        let sel = reader::parse_sheet_selector("Missing");
        assert!(matches!(
            resolve_sheet_index(&sel, &names),
            Err(error::Error::SheetNotFound { .. })
        ));
    }
}
