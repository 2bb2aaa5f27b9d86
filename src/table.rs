use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::MachineRecord;

#[derive(Tabled)]
struct MachineRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "In Use")]
    in_use: bool,
    #[tabled(rename = "Status")]
    status: &'a str,
    #[tabled(rename = "Unit Name")]
    unit_name: &'a str,
}

/// Render the current machine fleet as a bordered table, one row per
/// machine, with a header separator.
pub fn render_table(records: &[MachineRecord]) -> String {
    let rows = records.iter().map(|machine| MachineRow {
        id: &machine.id,
        kind: machine.kind.to_string(),
        in_use: machine.in_use,
        status: &machine.status_text,
        unit_name: &machine.unit_name,
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
