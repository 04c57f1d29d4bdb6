// ── Wire → domain conversions ──
//
// One From impl per resource. Soft fields degrade (an unknown status
// string becomes `None` with a trace) while the hard schema work --
// rejecting structurally nonconforming payloads -- already happened at
// the deserialization boundary in storekeep-api.

use tracing::trace;

use storekeep_api::types::{
    ActivityResponse, CategoryResponse, CustomerResponse, DashboardOverviewResponse,
    EmployeeResponse, ProductResponse, SalesTargetResponse, SupplierResponse, UserResponse,
    VariantResponse,
};

use crate::model::{
    Activity, Category, Customer, DashboardOverview, Employee, Product, ProductVariant,
    SalesTarget, Supplier, User,
};

impl From<ProductResponse> for Product {
    fn from(r: ProductResponse) -> Self {
        let status = r.status.as_deref().and_then(|s| {
            s.parse().map_or_else(
                |_| {
                    trace!(status = s, "unrecognized product status");
                    None
                },
                Some,
            )
        });
        Self {
            id: r.id,
            name: r.name,
            sku: r.sku,
            description: r.description,
            price: r.price,
            stock: r.stock.unwrap_or(0),
            category_id: r.category_id,
            category_name: r.category_name,
            status,
            image_url: r.image_url,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<VariantResponse> for ProductVariant {
    fn from(r: VariantResponse) -> Self {
        Self {
            id: r.id,
            product_id: r.product_id,
            size: r.size,
            color: r.color,
            stock: r.stock,
            sku: r.sku,
        }
    }
}

impl From<CategoryResponse> for Category {
    fn from(r: CategoryResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            product_count: r.product_count,
        }
    }
}

impl From<CustomerResponse> for Customer {
    fn from(r: CustomerResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            address: r.address,
            created_at: r.created_at,
        }
    }
}

impl From<EmployeeResponse> for Employee {
    fn from(r: EmployeeResponse) -> Self {
        let status = r.status.as_deref().and_then(|s| {
            s.parse().map_or_else(
                |_| {
                    trace!(status = s, "unrecognized employee status");
                    None
                },
                Some,
            )
        });
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            position: r.position,
            status,
            hired_at: r.hired_at,
        }
    }
}

impl From<SupplierResponse> for Supplier {
    fn from(r: SupplierResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            contact_name: r.contact_name,
            email: r.email,
            phone: r.phone,
            address: r.address,
            created_at: r.created_at,
        }
    }
}

impl From<DashboardOverviewResponse> for DashboardOverview {
    fn from(r: DashboardOverviewResponse) -> Self {
        Self {
            total_revenue: r.total_revenue,
            order_count: r.order_count,
            product_count: r.product_count,
            customer_count: r.customer_count,
            low_stock_count: r.low_stock_count.unwrap_or(0),
        }
    }
}

impl From<SalesTargetResponse> for SalesTarget {
    fn from(r: SalesTargetResponse) -> Self {
        Self {
            label: r.label,
            target: r.target,
            achieved: r.achieved,
        }
    }
}

impl From<ActivityResponse> for Activity {
    fn from(r: ActivityResponse) -> Self {
        Self {
            id: r.id,
            kind: r.activity_type,
            message: r.message,
            actor: r.actor,
            occurred_at: r.created_at,
        }
    }
}

impl From<UserResponse> for User {
    fn from(r: UserResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            role: r.role,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::model::{Product, ProductStatus};
    use storekeep_api::types::ProductResponse;

    #[test]
    fn product_status_string_becomes_enum() {
        let wire: ProductResponse = serde_json::from_str(
            r#"{"id":1,"name":"Widget","price":9.99,"status":"active","stock":4}"#,
        )
        .unwrap();
        let p = Product::from(wire);
        assert_eq!(p.status, Some(ProductStatus::Active));
        assert_eq!(p.stock, 4);
    }

    #[test]
    fn unknown_status_degrades_to_none() {
        let wire: ProductResponse = serde_json::from_str(
            r#"{"id":1,"name":"Widget","price":9.99,"status":"liquidated"}"#,
        )
        .unwrap();
        let p = Product::from(wire);
        assert_eq!(p.status, None);
    }
}
