//! Result table rendering.
//!
//! Columns come from the first match, in field order, minus the deny-list.
//! A few columns get special cells:
//!
//! - `Name`: link to `WebsiteUrl` when present, else plain text
//! - `PhoneNumber`: plain text only when present
//! - `Award`: link to `Url`

mod table;

pub use table::{Cell, ResultTable};

use mym_core::types::Record;
use mym_core::types::config::RenderConfig;
use tracing::debug;

pub const NAME: &str = "Name";
pub const PHONE_NUMBER: &str = "PhoneNumber";
pub const AWARD: &str = "Award";
pub const URL: &str = "Url";
pub const WEBSITE_URL: &str = "WebsiteUrl";

/// Which columns may appear in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPolicy {
    deny: Vec<String>,
}

impl ColumnPolicy {
    pub fn new<I, S>(deny: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deny: deny.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, column: &str) -> bool {
        !self.deny.iter().any(|denied| denied == column)
    }
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self::new(RenderConfig::default().deny_list)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResultRenderer {
    policy: ColumnPolicy,
}

impl ResultRenderer {
    pub fn new(policy: ColumnPolicy) -> Self {
        Self { policy }
    }

    /// Replaces the table content with one row per record.
    ///
    /// No records clears the table, header included.
    pub fn render<'a, I>(&self, target: &mut ResultTable, matches: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        target.clear();

        let mut matches = matches.into_iter().peekable();
        let Some(first) = matches.peek() else {
            return;
        };

        let columns: Vec<String> = first
            .field_names()
            .filter(|column| self.policy.allows(column))
            .map(str::to_string)
            .collect();

        let body: Vec<Vec<Cell>> = matches
            .map(|record| {
                columns
                    .iter()
                    .map(|column| render_cell(column, record))
                    .collect()
            })
            .collect();

        debug!(columns = columns.len(), rows = body.len(), "rendered table");
        target.replace(columns, body);
    }
}

fn render_cell(column: &str, record: &Record) -> Cell {
    let Some(text) = record.text(column) else {
        return Cell::Empty;
    };

    match column {
        NAME => match link_target(record, &[WEBSITE_URL]) {
            Some(href) => Cell::Link {
                href,
                text: text.into_owned(),
            },
            None => Cell::Text(text.into_owned()),
        },
        PHONE_NUMBER if !record.is_present(PHONE_NUMBER) => Cell::Empty,
        AWARD => match link_target(record, &[URL]) {
            Some(href) => Cell::Link {
                href,
                text: text.into_owned(),
            },
            None => Cell::Text(text.into_owned()),
        },
        _ => Cell::Text(text.into_owned()),
    }
}

/// First present field among `candidates`.
fn link_target(record: &Record, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|field| record.is_present(field))
        .and_then(|field| record.text(field))
        .map(|href| href.into_owned())
}
