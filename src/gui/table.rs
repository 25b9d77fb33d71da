use crate::catalog::DrinkSet;

/// Which column is sorted (mirrors the TUI version).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Name,
    Category,
    Glass,
    Type,
    Modified,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortOrder::Ascending => " \u{25B2}",
            SortOrder::Descending => " \u{25BC}",
        }
    }
}

/// Results table state
pub struct ResultsTable {
    pub selected: Option<usize>,
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self {
            selected: None,
            sort_column: SortColumn::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl ResultsTable {
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Register a header click: toggle direction on the active column,
    /// otherwise switch to the clicked column ascending.
    pub fn click_column(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_order = match self.sort_order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
        } else {
            self.sort_column = column;
            self.sort_order = SortOrder::Ascending;
        }
    }

    /// Order `indices` (into `set.drinks`) by the active column
    pub fn sort_indices(&self, set: &DrinkSet, indices: &mut [usize]) {
        let column = self.sort_column;
        let order = self.sort_order;
        indices.sort_by(|&a, &b| {
            let da = &set.drinks[a];
            let db = &set.drinks[b];
            let cmp = match column {
                SortColumn::Name => da.name.to_lowercase().cmp(&db.name.to_lowercase()),
                SortColumn::Category => da.category.cmp(&db.category),
                SortColumn::Glass => da.glass.cmp(&db.glass),
                SortColumn::Type => da.alcoholic.as_str().cmp(db.alcoholic.as_str()),
                SortColumn::Modified => da.date_modified.cmp(&db.date_modified),
            };
            if order == SortOrder::Descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Drink;

    fn set_of(names: &[&str]) -> DrinkSet {
        let drinks = names
            .iter()
            .map(|n| Drink {
                id: n.to_string(),
                name: n.to_string(),
                ..Default::default()
            })
            .collect();
        DrinkSet::new("t", drinks)
    }

    #[test]
    fn clicking_a_new_column_sorts_ascending() {
        let mut table = ResultsTable::default();
        table.click_column(SortColumn::Category);
        assert_eq!(table.sort_column, SortColumn::Category);
        assert_eq!(table.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn clicking_the_active_column_flips_direction() {
        let mut table = ResultsTable::default();
        table.click_column(SortColumn::Name);
        assert_eq!(table.sort_order, SortOrder::Descending);
        table.click_column(SortColumn::Name);
        assert_eq!(table.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn sort_is_case_insensitive_on_names() {
        let set = set_of(&["mojito", "Americano", "ZOMBIE"]);
        let mut indices = vec![0, 1, 2];
        let table = ResultsTable::default();
        table.sort_indices(&set, &mut indices);

        let names: Vec<_> = indices.iter().map(|&i| set.drinks[i].name.as_str()).collect();
        assert_eq!(names, vec!["Americano", "mojito", "ZOMBIE"]);
    }
}
