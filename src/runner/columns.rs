//! The columns command
//!
//! Routes an invocation to exactly one listing and writes it as tables.

use std::io::Write;

use crate::cli::{Invocation, Mode};
use crate::config::Settings;
use crate::error::Result;
use crate::netprofiler::{Column, ReportingApi};
use crate::output::{new_table, text_row, write_table};
use crate::runner::filter::ColumnFilter;
use crate::runner::selection::resolve_selection;
use prettytable::Table;
use tracing::{debug, info};

/// Lists columns, group-bys, realms or centricities from one appliance
pub struct ColumnsCommand<'a> {
    api: &'a dyn ReportingApi,
    settings: &'a Settings,
}

impl<'a> ColumnsCommand<'a> {
    pub fn new(api: &'a dyn ReportingApi, settings: &'a Settings) -> Self {
        ColumnsCommand { api, settings }
    }

    /// Run the listing selected by `invocation.mode`
    pub fn execute<W: Write>(&self, invocation: &Invocation, out: &mut W) -> Result<()> {
        match invocation.mode {
            Mode::Columns => self.list_columns(invocation, out),
            Mode::GroupBys => self.list_group_bys(out),
            Mode::Realms => self.list_realms(out),
            Mode::Centricities => self.list_centricities(out),
        }
    }

    fn list_columns<W: Write>(&self, invocation: &Invocation, out: &mut W) -> Result<()> {
        // bad patterns fail before any request is made
        let filter = ColumnFilter::new(invocation.ids.as_deref(), invocation.filter.as_deref())?;

        let selection = resolve_selection(self.api, invocation, self.settings)?;
        let columns = self.api.columns(
            &selection.realm,
            selection.centricity,
            &selection.groupby.id,
        )?;
        debug!("Appliance returned {} columns", columns.len());

        let mut columns = filter.apply(columns)?;
        if columns.is_empty() {
            info!("No columns matched");
        }
        columns.sort_by_key(|c| (c.key(), c.id));

        let (keys, values): (Vec<Column>, Vec<Column>) =
            columns.into_iter().partition(Column::is_key);

        write_table(&column_table("Key Columns", &keys), out)?;
        writeln!(out)?;
        write_table(&column_table("Value Columns", &values), out)?;

        Ok(())
    }

    fn list_group_bys<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut group_bys = self.api.group_bys()?;
        group_bys.sort_by(|a, b| a.name.cmp(&b.name));

        let mut table = new_table(["GroupBy", "Id"]);
        for g in group_bys {
            table.add_row(text_row([g.name, g.id]));
        }
        write_table(&table, out)?;

        Ok(())
    }

    fn list_realms<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut realms = self.api.realms()?;
        realms.sort_by(|a, b| a.id.cmp(&b.id));

        let mut table = new_table(["Realm", "Name"]);
        for r in realms {
            table.add_row(text_row([r.id, r.name.unwrap_or_default()]));
        }
        write_table(&table, out)?;

        Ok(())
    }

    fn list_centricities<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut centricities = self.api.centricities()?;
        centricities.sort_by(|a, b| a.name.cmp(&b.name));

        let mut table = new_table(["Centricity", "Id"]);
        for c in centricities {
            table.add_row(text_row([c.name, c.id]));
        }
        write_table(&table, out)?;

        Ok(())
    }
}

fn column_table(title: &str, columns: &[Column]) -> Table {
    let mut table = new_table([title, "Label", "ID", "Type"]);
    for c in columns {
        table.add_row(text_row([c.key(), c.label.clone(), c.id.to_string(), c.column_type.clone()]));
    }
    table
}
