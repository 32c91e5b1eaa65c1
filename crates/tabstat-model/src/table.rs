use serde::{Deserialize, Serialize};

/// A delimited file split into text fields.
///
/// Rows are not required to match the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Number of data rows (the header is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Discards rows beyond `limit`. Returns how many rows were dropped.
    pub fn truncate_rows(&mut self, limit: Option<usize>) -> usize {
        match limit {
            Some(limit) if self.rows.len() > limit => {
                let dropped = self.rows.len() - limit;
                self.rows.truncate(limit);
                dropped
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<Vec<String>> {
        (0..count).map(|i| vec![i.to_string()]).collect()
    }

    #[test]
    fn truncate_rows_drops_rows_past_limit() {
        let mut table = Table::new(vec!["a".to_string()], rows(10));
        assert_eq!(table.truncate_rows(Some(5)), 5);
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.rows[4], vec!["4".to_string()]);
    }

    #[test]
    fn truncate_rows_without_limit_keeps_everything() {
        let mut table = Table::new(vec!["a".to_string()], rows(3));
        assert_eq!(table.truncate_rows(None), 0);
        assert_eq!(table.truncate_rows(Some(10)), 0);
        assert_eq!(table.row_count(), 3);
    }
}
