//! Creates a sample "Appointment List - By Operator" export for manual runs.
//!
//! The layout mirrors the real report: title rows above the header, date
//! section rows, operator name rows in the TIME column, totals rows and
//! blank separators, plus one operator who is not on the default roster.

use umya_spreadsheet::*;

fn main() {
    let mut book = new_file();

    {
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.set_name("Report");

        // Title block above the header row
        sheet.get_cell_mut("A1").set_value("Appointment List - By Operator");
        sheet.get_cell_mut("A2").set_value("Lakeside Day Spa");

        // Header row
        sheet.get_cell_mut("A4").set_value("Time");
        sheet.get_cell_mut("B4").set_value("Guest");
        sheet.get_cell_mut("C4").set_value("Service");
        sheet.get_cell_mut("D4").set_value("Duration");

        // First date section
        sheet.get_cell_mut("A6").set_value("Wed Jan 15 2024");

        sheet.get_cell_mut("A7").set_value("Amber Johnson");
        sheet.get_cell_mut("A8").set_value("9:00");
        sheet.get_cell_mut("B8").set_value("J. Lee");
        sheet.get_cell_mut("C8").set_value("Facial");
        sheet.get_cell_mut("D8").set_value("50 min");
        sheet.get_cell_mut("A9").set_value("10:00");
        sheet.get_cell_mut("B9").set_value("K. Ito");
        sheet.get_cell_mut("C9").set_value("Deep Tissue Massage");
        sheet.get_cell_mut("D9").set_value("80 min");
        sheet.get_cell_mut("A10").set_value("Total");
        sheet.get_cell_mut("D10").set_value_number(130);

        sheet.get_cell_mut("A12").set_value("Megan Fields");
        sheet.get_cell_mut("A13").set_value("9:30");
        sheet.get_cell_mut("B13").set_value("M. O\"Hara");
        sheet.get_cell_mut("C13").set_value("Manicure");
        sheet.get_cell_mut("D13").set_value("45 min");

        // Second date section; operators repeat across dates
        sheet.get_cell_mut("A15").set_value("Thu Jan 16 2024");

        sheet.get_cell_mut("A16").set_value("Amber Johnson");
        sheet.get_cell_mut("A17").set_value("14:00");
        sheet.get_cell_mut("B17").set_value("P. Singh");
        sheet.get_cell_mut("C17").set_value("Body Wrap");
        sheet.get_cell_mut("D17").set_value("60 min");

        // Off-roster operator: parsed but dropped at grouping
        sheet.get_cell_mut("A19").set_value("Zoe Park");
        sheet.get_cell_mut("A20").set_value("15:00");
        sheet.get_cell_mut("B20").set_value("R. Diaz");
        sheet.get_cell_mut("C20").set_value("Pedicure");
        sheet.get_cell_mut("D20").set_value("45 min");
    }

    let path = "sample_report.xlsx";
    writer::xlsx::write(&book, path).expect("Failed to write sample_report.xlsx");
    println!("Created {} successfully!", path);
    println!("Try: cargo run -- {} -v", path);
}
