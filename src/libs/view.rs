use super::clock::seconds_to_clock;
use super::timer::RunningTimer;
use super::timesheet::Timesheet;
use crate::db::entries::TimeEntry;
use crate::db::record::DATETIME_FORMAT;
use crate::db::workitems::WorkItem;
use prettytable::{row, Cell, Row, Table};

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

pub struct View {}

impl View {
    pub fn work_items(items: &[WorkItem]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "LABEL", "CREATED"]);
        for item in items {
            table.add_row(row![
                item.id,
                item.label,
                item.timestamp.map(|ts| ts.format(DATETIME_FORMAT).to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();
    }

    pub fn entries(entries: &[TimeEntry]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "WORK ITEM", "TIME", "DESCRIPTION", "AT"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.workitem,
                seconds_to_clock(entry.time),
                entry.desc,
                entry.timestamp.map(|ts| ts.format(TIME_OF_DAY_FORMAT).to_string()).unwrap_or_default()
            ]);
        }
        let total = entries.iter().fold(0u64, |total, e| total.saturating_add(e.time));
        table.add_row(row!["", "TOTAL", seconds_to_clock(total), "", ""]);
        table.printstd();
    }

    pub fn timesheet(timesheet: &Timesheet) {
        let mut table = Table::new();

        let mut header = vec![Cell::new("WORK ITEM")];
        header.extend(timesheet.column_labels.iter().map(|label| Cell::new(label)));
        header.push(Cell::new("TOTAL"));
        table.add_row(Row::new(header));

        for row in &timesheet.rows {
            let mut cells = vec![Cell::new(&row.workitem)];
            cells.extend(
                row.cells
                    .iter()
                    .map(|cell| Cell::new(&format!("{:.2}\n{}", cell.total_hours, cell.comment))),
            );
            cells.push(Cell::new(&format!("{:.2}", row.total_hours())));
            table.add_row(Row::new(cells));
        }

        let mut totals = vec![Cell::new("TOTAL")];
        totals.extend(timesheet.column_totals().iter().map(|t| Cell::new(&format!("{:.2}", t))));
        totals.push(Cell::new(&format!("{:.2}", timesheet.total_hours())));
        table.add_row(Row::new(totals));

        table.printstd();
    }

    pub fn timer(timer: &RunningTimer, elapsed: u64) {
        let mut table = Table::new();

        table.add_row(row!["WORK ITEM", "DESCRIPTION", "STARTED", "ELAPSED"]);
        table.add_row(row![
            timer.workitem,
            timer.desc,
            timer.started_at.format(DATETIME_FORMAT).to_string(),
            seconds_to_clock(elapsed)
        ]);
        table.printstd();
    }
}
