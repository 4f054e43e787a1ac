//! Query parameters for the link listing endpoint.

use serde::Deserialize;

use crate::domain::repositories::{LinkOrder, OrderDirection, OrderField};

/// Listing order selection, e.g. `?sort=click_count&direction=asc`.
///
/// Unknown values are rejected by the query extractor with a 400; omitted
/// values fall back to newest-created-first.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<OrderField>,
    pub direction: Option<OrderDirection>,
}

impl ListQuery {
    pub fn order(&self) -> LinkOrder {
        let default = LinkOrder::default();
        LinkOrder::new(
            self.sort.unwrap_or(default.field),
            self.direction.unwrap_or(default.direction),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_newest_created_first() {
        let query = ListQuery::default();
        assert_eq!(query.order(), LinkOrder::default());
    }

    #[test]
    fn test_partial_query_keeps_other_default() {
        let query = ListQuery {
            sort: Some(OrderField::ClickCount),
            direction: None,
        };

        let order = query.order();
        assert_eq!(order.field, OrderField::ClickCount);
        assert_eq!(order.direction, OrderDirection::Desc);
    }
}
