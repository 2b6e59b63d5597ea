//! Column-sort state for list tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Current sort column and direction; `field` is the server-side sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: String,
    pub dir: SortDir,
}

impl SortState {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDir::Asc,
        }
    }

    /// Clicking the active column flips direction; a new column starts
    /// ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.dir = self.dir.flipped();
        } else {
            self.field = field.to_string();
            self.dir = SortDir::Asc;
        }
    }

    /// Header suffix for the column currently sorted on.
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field != field {
            return "";
        }
        match self.dir {
            SortDir::Asc => " ▲",
            SortDir::Desc => " ▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_then_switches() {
        let mut sort = SortState::new("full_name");
        assert_eq!(sort.dir, SortDir::Asc);

        sort.toggle("full_name");
        assert_eq!(sort.dir, SortDir::Desc);
        assert_eq!(sort.dir.as_param(), "desc");

        sort.toggle("join_date");
        assert_eq!(sort.field, "join_date");
        assert_eq!(sort.dir, SortDir::Asc);
    }

    #[test]
    fn indicator_only_on_active_column() {
        let mut sort = SortState::new("full_name");
        assert_eq!(sort.indicator("full_name"), " ▲");
        assert_eq!(sort.indicator("email"), "");
        sort.toggle("full_name");
        assert_eq!(sort.indicator("full_name"), " ▼");
    }
}
