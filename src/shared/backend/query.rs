/// A table read, rendered as PostgREST query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    filters: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<u32>,
    single: bool,
}

impl SelectQuery {
    /// `select=*` with no filter.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order.push(format!("{}.asc", column));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Expect exactly one row back as an object instead of an array.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        pairs.extend(self.filters.iter().cloned());

        if !self.order.is_empty() {
            pairs.push(("order".to_string(), self.order.join(",")));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}
