//! Tabular data attached to a conversation.
//!
//! The presentation layer parses the CSV; this core only receives the already-split
//! columns and rows, checks that the table is non-empty, and renders it into prompt
//! context for the model.

use std::fmt::Write;

use anyhow::{Result, ensure};

/// A non-empty table of string cells with named columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Validate and wrap a parsed table. Fails on an empty table or ragged rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        ensure!(!columns.is_empty(), "table has no columns");
        ensure!(!rows.is_empty(), "table has no rows");
        for (index, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == columns.len(),
                "row {} has {} fields, expected {}",
                index,
                row.len(),
                columns.len()
            );
        }
        Ok(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Short human-readable summary for display next to the upload widget.
    pub fn summary(&self) -> String {
        format!(
            "Dataset: {} rows x {} columns\nColumns: {}",
            self.row_count(),
            self.column_count(),
            self.columns.join(", ")
        )
    }

    /// Render the table into a context block for the model, capped at `max_rows` rows.
    ///
    /// Includes a truncation note when the table exceeds the cap so the model knows it
    /// is not seeing the full dataset.
    pub fn ai_context(&self, max_rows: usize) -> String {
        let rows_to_send = self.rows.len().min(max_rows);

        let mut context = String::new();
        let _ = writeln!(
            context,
            "You are a helpful data analyst. A user has loaded a CSV, and they want to \
             ask questions about it."
        );
        let _ = writeln!(context);
        let _ = writeln!(context, "Dataset Overview:");
        let _ = writeln!(context, "- Total Rows: {}", self.row_count());
        let _ = writeln!(context, "- Columns: {}", self.column_count());
        let _ = writeln!(context, "- Column Names: {}", self.columns.join(", "));
        let _ = writeln!(context);
        let _ = writeln!(context, "Data ({} of {} rows):", rows_to_send, self.row_count());
        let _ = writeln!(context, "{}", self.columns.join(" | "));
        for row in &self.rows[..rows_to_send] {
            let _ = writeln!(context, "{}", row.join(" | "));
        }

        if self.rows.len() > max_rows {
            let _ = writeln!(
                context,
                "\nNote: Dataset truncated to {} rows for analysis. Full dataset has {} rows.",
                max_rows,
                self.row_count()
            );
        }

        context
    }
}
