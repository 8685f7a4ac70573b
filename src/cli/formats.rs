use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::formats::ALL_FORMATS;

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Format", "Preamble rows"]);
    for kind in ALL_FORMATS {
        table.add_row(vec![
            Cell::new(kind.key()),
            Cell::new(kind.name()),
            Cell::new(kind.profile().skip_rows),
        ]);
    }
    println!("Supported bill formats\n{table}");
    Ok(())
}
