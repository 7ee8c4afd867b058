//! Query builder for the Directus items endpoint.

/// Read query against one content collection.
///
/// Directus expresses filters as bracketed query parameters, e.g.
/// `filter[hotel_id][_eq]=5`. Only equality filters are needed by the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsQuery {
    pub collection: String,
    pub filters: Vec<(String, String)>,
    /// `None` requests every item (`limit=-1`).
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl ItemsQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            limit: None,
            sort: None,
        }
    }

    /// Adds an equality filter on `field`.
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((field.into(), value.to_string()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Path of the collection relative to the endpoint base URL.
    pub fn path(&self) -> String {
        format!("items/{}", self.collection)
    }

    /// Query string parameters in Directus syntax.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|(field, value)| (format!("filter[{}][_eq]", field), value.clone()))
            .collect();

        let limit = self
            .limit
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-1".to_string());
        params.push(("limit".to_string(), limit));

        if let Some(sort) = &self.sort {
            params.push(("sort".to_string(), sort.clone()));
        }

        params
    }
}
