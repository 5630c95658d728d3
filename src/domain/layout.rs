//! Column-partitioned table layout
//!
//! Cells are cut into consecutive chunks, one chunk per column, and then
//! transposed into rows so the page reads top-to-bottom, left-to-right.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Layout-density policy: how many cells go into one column, chosen from the
/// total number of cells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutPolicy {
    /// Column height for up to `medium_above` cells
    pub small_chunk: usize,
    /// Column height for more than `medium_above` cells
    pub medium_chunk: usize,
    /// Column height for more than `large_above` cells
    pub large_chunk: usize,
    pub medium_above: usize,
    pub large_above: usize,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            small_chunk: 9,
            medium_chunk: 18,
            large_chunk: 27,
            medium_above: 54,
            large_above: 81,
        }
    }
}

impl LayoutPolicy {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.small_chunk == 0 || self.medium_chunk == 0 || self.large_chunk == 0 {
            return Err(DomainError::InvalidLayout(
                "chunk sizes must be greater than zero".into(),
            ));
        }
        if self.medium_above > self.large_above {
            return Err(DomainError::InvalidLayout(format!(
                "medium_above ({}) exceeds large_above ({})",
                self.medium_above, self.large_above
            )));
        }
        Ok(())
    }

    /// Column height for a table of `cell_count` cells.
    pub fn chunk_size(&self, cell_count: usize) -> usize {
        if cell_count > self.large_above {
            self.large_chunk
        } else if cell_count > self.medium_above {
            self.medium_chunk
        } else {
            self.small_chunk
        }
    }
}

/// A rectangular grid; `None` marks a blank filler cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    pub chunk_size: usize,
    pub rows: Vec<Vec<Option<T>>>,
}

impl<T> Table<T> {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cells in reading order (column by column), blanks skipped.
    pub fn cells_column_major(&self) -> Vec<&T> {
        (0..self.column_count())
            .flat_map(|col| self.rows.iter().filter_map(move |row| row[col].as_ref()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    policy: LayoutPolicy,
}

impl TableBuilder {
    pub fn new(policy: LayoutPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LayoutPolicy {
        &self.policy
    }

    /// Partition `cells` into columns of `chunk_size` and transpose into rows.
    ///
    /// The grid is as tall as its longest column, so a short sequence gives a
    /// single partial column without trailing blank rows; an empty sequence
    /// gives no rows at all.
    pub fn build<T>(&self, cells: Vec<T>) -> Table<T> {
        let chunk_size = self.policy.chunk_size(cells.len()).max(1);

        let chunks = cells.into_iter().chunks(chunk_size);
        let columns: Vec<Vec<T>> = (&chunks).into_iter().map(|chunk| chunk.collect()).collect();

        let height = columns.first().map_or(0, Vec::len);
        let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
        let rows = (0..height)
            .map(|_| columns.iter_mut().map(Iterator::next).collect())
            .collect();

        Table { chunk_size, rows }
    }
}
