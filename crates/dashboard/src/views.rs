//! The closed set of dashboard views.
//!
//! Navigation is a fixed menu of nine pages; there are no per-view
//! parameters and no routes beyond these.

/// A page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Overview,
    Dashboard,
    Customers,
    Stores,
    Products,
    Categories,
    Subcategories,
    Orders,
    OrderLineItems,
}

impl View {
    /// Every view, in sidebar order.
    pub const ALL: [Self; 9] = [
        Self::Overview,
        Self::Dashboard,
        Self::Customers,
        Self::Stores,
        Self::Products,
        Self::Categories,
        Self::Subcategories,
        Self::Orders,
        Self::OrderLineItems,
    ];

    /// Heading shown for the view.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Project Overview",
            Self::Dashboard => "Main Dashboard",
            Self::Customers => "Customers",
            Self::Stores => "Stores",
            Self::Products => "Products",
            Self::Categories => "Categories",
            Self::Subcategories => "Subcategories",
            Self::Orders => "Orders",
            Self::OrderLineItems => "Order Line Items",
        }
    }

    /// Request path the sidebar links to.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Dashboard => "/dashboard",
            Self::Customers => "/tables/customers",
            Self::Stores => "/tables/stores",
            Self::Products => "/tables/products",
            Self::Categories => "/tables/categories",
            Self::Subcategories => "/tables/subcategories",
            Self::Orders => "/tables/orders",
            Self::OrderLineItems => "/tables/order-line-items",
        }
    }

    /// Whether the view is a raw table preview.
    #[must_use]
    pub const fn is_table(self) -> bool {
        !matches!(self, Self::Overview | Self::Dashboard)
    }

    /// Resolve the `{slug}` segment of a `/tables/{slug}` path.
    #[must_use]
    pub fn from_table_slug(slug: &str) -> Option<Self> {
        match slug {
            "customers" => Some(Self::Customers),
            "stores" => Some(Self::Stores),
            "products" => Some(Self::Products),
            "categories" => Some(Self::Categories),
            "subcategories" => Some(Self::Subcategories),
            "orders" => Some(Self::Orders),
            "order-line-items" => Some(Self::OrderLineItems),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_table_slugs_round_trip() {
        for view in View::ALL {
            if !view.is_table() {
                continue;
            }
            let slug = view.path().strip_prefix("/tables/").unwrap();
            assert_eq!(View::from_table_slug(slug), Some(view));
        }
    }

    #[test]
    fn test_unknown_slugs_resolve_to_none() {
        assert_eq!(View::from_table_slug("invoices"), None);
        assert_eq!(View::from_table_slug("dashboard"), None);
        assert_eq!(View::from_table_slug(""), None);
    }

    #[test]
    fn test_base_template_links_every_view() {
        let base = include_str!("../templates/base.html");
        for view in View::ALL {
            let href = format!("href=\"{}\"", view.path());
            assert!(base.contains(&href), "missing sidebar link: {href}");
            assert!(base.contains(view.title()), "missing title: {}", view.title());
        }
    }
}
