//! Client UI: one page, one active view at a time.
//!
//! The page is rendered once from [`VIEWS`]; `static/app.js` does the rest in
//! the browser (switching views, enabling Submit, posting to `/graphql`,
//! drawing the result table or the error banner).

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

// =============================================================================
// View Definitions
// =============================================================================

/// One input box of a view, bound to a GraphQL variable.
#[derive(Debug, Clone, Copy)]
pub struct ViewInput {
    /// GraphQL variable name.
    pub variable: &'static str,
    /// HTML input type (`text` or `date`).
    pub kind: &'static str,
    pub placeholder: &'static str,
}

/// One result-table column.
#[derive(Debug, Clone, Copy)]
pub struct ViewColumn {
    /// Field of the result row.
    pub field: &'static str,
    pub header: &'static str,
}

/// A selectable query form.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub id: &'static str,
    pub label: &'static str,
    /// Heading shown above the result table.
    pub heading: &'static str,
    /// Root field the rows are read from in `data`.
    pub operation: &'static str,
    pub document: &'static str,
    pub inputs: &'static [ViewInput],
    pub columns: &'static [ViewColumn],
    /// Text of the Submit button.
    pub submit: &'static str,
}

const SELLER_INPUT: ViewInput = ViewInput {
    variable: "sellerId",
    kind: "text",
    placeholder: "Enter Seller ID",
};

/// Views in display order.
pub const VIEWS: &[View] = &[
    View {
        id: "searchOrders",
        label: "Search Orders",
        heading: "Orders",
        operation: "ordersBetweenDates",
        document: "query GetOrdersBetweenDates($startDate: String!, $endDate: String!) {
  ordersBetweenDates(startDate: $startDate, endDate: $endDate) {
    order_id
    order_purchase_timestamp
  }
}",
        inputs: &[
            ViewInput {
                variable: "startDate",
                kind: "date",
                placeholder: "Start Date",
            },
            ViewInput {
                variable: "endDate",
                kind: "date",
                placeholder: "End Date",
            },
        ],
        columns: &[
            ViewColumn {
                field: "order_id",
                header: "Order ID",
            },
            ViewColumn {
                field: "order_purchase_timestamp",
                header: "Purchased",
            },
        ],
        submit: "Submit",
    },
    View {
        id: "topZipCodes",
        label: "Top Customer Zip Codes",
        heading: "Top 5 Customer Zip Codes",
        operation: "topCustomerZipCodes",
        document: "query GetTopCustomerZipCodes($sellerId: String!) {
  topCustomerZipCodes(seller_id: $sellerId) {
    zip_code
    count
  }
}",
        inputs: &[SELLER_INPUT],
        columns: &[
            ViewColumn {
                field: "zip_code",
                header: "Zip Code",
            },
            ViewColumn {
                field: "count",
                header: "Count",
            },
        ],
        submit: "Submit",
    },
    View {
        id: "topProducts",
        label: "Top Products by Seller",
        heading: "Top 3 Products",
        operation: "topProductsBySeller",
        document: "query GetTopProducts($sellerId: String!) {
  topProductsBySeller(seller_id: $sellerId) {
    product_id
    product_category_name
    total_sales
  }
}",
        inputs: &[SELLER_INPUT],
        columns: &[
            ViewColumn {
                field: "product_category_name",
                header: "Category",
            },
            ViewColumn {
                field: "product_id",
                header: "Product ID",
            },
            ViewColumn {
                field: "total_sales",
                header: "Total Sales",
            },
        ],
        submit: "Submit",
    },
    View {
        id: "lastProducts",
        label: "Last Orders by Customer",
        heading: "Last 3 Products Ordered",
        operation: "lastThreeProductsByCustomer",
        document: "query GetLastProducts($customerId: String!) {
  lastThreeProductsByCustomer(customer_id: $customerId) {
    product_id
    product_category_name
    order_purchase_timestamp
  }
}",
        inputs: &[ViewInput {
            variable: "customerId",
            kind: "text",
            placeholder: "Enter Customer ID",
        }],
        columns: &[
            ViewColumn {
                field: "product_category_name",
                header: "Category",
            },
            ViewColumn {
                field: "product_id",
                header: "Product ID",
            },
            ViewColumn {
                field: "order_purchase_timestamp",
                header: "Order Date",
            },
        ],
        submit: "Submit",
    },
    View {
        id: "topSellers",
        label: "Top Sellers by Category",
        heading: "Top 5 Sellers",
        operation: "topSellersByCategory",
        document: "query GetTopSellers($category: String!) {
  topSellersByCategory(category: $category) {
    seller_id
    total_sales
  }
}",
        inputs: &[ViewInput {
            variable: "category",
            kind: "text",
            placeholder: "Enter Product Category",
        }],
        columns: &[
            ViewColumn {
                field: "seller_id",
                header: "Seller ID",
            },
            ViewColumn {
                field: "total_sales",
                header: "Total Sales",
            },
        ],
        submit: "Find Top Sellers",
    },
];

impl View {
    /// Comma-separated column fields, for the `data-columns` attribute.
    #[must_use]
    pub fn column_fields(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.field)
            .collect::<Vec<_>>()
            .join(",")
    }
}

// =============================================================================
// Page
// =============================================================================

/// The single UI page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub views: &'static [View],
}

/// Render the UI page.
#[instrument]
pub async fn index() -> IndexTemplate {
    IndexTemplate { views: VIEWS }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use async_graphql::{Request, Value, Variables};
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::db::Store;
    use crate::graphql::build_schema;
    use crate::graphql::error::BAD_USER_INPUT;

    #[test]
    fn test_view_ids_are_unique() {
        let ids: HashSet<_> = VIEWS.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), VIEWS.len());
        assert_eq!(VIEWS.len(), 5);
    }

    #[test]
    fn test_columns_are_selected_by_document() {
        for view in VIEWS {
            assert!(view.document.contains(view.operation), "{}", view.id);
            for column in view.columns {
                assert!(view.document.contains(column.field), "{}.{}", view.id, column.field);
            }
            for input in view.inputs {
                assert!(
                    view.document.contains(&format!("${}", input.variable)),
                    "{}.{}",
                    view.id,
                    input.variable
                );
            }
        }
    }

    #[test]
    fn test_page_renders_every_view() {
        let html = IndexTemplate { views: VIEWS }.render().unwrap();
        for view in VIEWS {
            assert!(html.contains(view.label));
            assert!(html.contains(&format!("data-view=\"{}\"", view.id)));
        }
        assert!(html.contains("/static/app.js"));
    }

    /// Every document validates against the schema and binds its inputs: with
    /// blank variables the resolver itself rejects the first argument.
    #[tokio::test]
    async fn test_documents_match_schema() {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://analytics@127.0.0.1:1/retail")
            .unwrap();
        let schema = build_schema(Store::new(pool, Duration::from_secs(1)));

        for view in VIEWS {
            let variables = view
                .inputs
                .iter()
                .map(|input| (input.variable.to_string(), serde_json::Value::from("")))
                .collect::<serde_json::Map<_, _>>();
            let request = Request::new(view.document)
                .variables(Variables::from_json(serde_json::Value::Object(variables)));
            let response = schema.execute(request).await;

            assert_eq!(response.errors.len(), 1, "{}", view.id);
            let code = response.errors[0]
                .extensions
                .as_ref()
                .and_then(|ext| ext.get("code"))
                .cloned();
            assert_eq!(
                code,
                Some(Value::String(BAD_USER_INPUT.to_string())),
                "{}",
                view.id
            );
        }
    }
}
