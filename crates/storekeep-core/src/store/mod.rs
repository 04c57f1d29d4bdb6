// ── Application store ──
//
// One slice per resource, composed into a single context object that is
// created at process start and handed explicitly to dispatchers -- no
// ambient globals. Torn down with the process.

pub mod dashboard;
pub mod slice;

use dashmap::DashMap;
use tokio::sync::watch;

pub use dashboard::{DashboardCommand, DashboardSlice, DashboardState};
pub use slice::{RequestStatus, ResourceState, Slice, SliceCommand, reduce};

use crate::model::{
    Category, Customer, Employee, Product, ProductVariant, RecordId, Supplier, User,
};

/// Process-wide state for every resource the dashboard manages.
///
/// Collections start empty, fill on first successful fetch, are
/// replaced wholesale on refetch, and spliced by mutations. The variant
/// cache is the one lazily-loaded child collection: parent product id →
/// its variants, with no lifecycle independent of the parent.
pub struct AppStore {
    pub products: Slice<Product>,
    pub categories: Slice<Category>,
    pub customers: Slice<Customer>,
    pub employees: Slice<Employee>,
    pub suppliers: Slice<Supplier>,
    pub dashboard: DashboardSlice,
    variants: DashMap<RecordId, Vec<ProductVariant>>,
    session_user: watch::Sender<Option<User>>,
}

impl AppStore {
    pub fn new() -> Self {
        let (session_user, _) = watch::channel(None);
        Self {
            products: Slice::new(),
            categories: Slice::new(),
            customers: Slice::new(),
            employees: Slice::new(),
            suppliers: Slice::new(),
            dashboard: DashboardSlice::new(),
            variants: DashMap::new(),
            session_user,
        }
    }

    // ── Variant detail cache ─────────────────────────────────────────

    /// Cached variants for a product, if that product's detail row has
    /// been expanded (fetched) this session.
    pub fn variants_for(&self, product_id: &RecordId) -> Option<Vec<ProductVariant>> {
        self.variants.get(product_id).map(|v| v.clone())
    }

    /// Overwrite the cached variants for a product (repeated fetches
    /// replace, never merge).
    pub(crate) fn put_variants(&self, product_id: RecordId, variants: Vec<ProductVariant>) {
        self.variants.insert(product_id, variants);
    }

    /// Splice a just-created variant into the cache entry, if one
    /// exists. An uncached parent stays uncached -- the lazy fetch will
    /// pick the variant up.
    pub(crate) fn append_variant(&self, product_id: &RecordId, variant: ProductVariant) {
        if let Some(mut entry) = self.variants.get_mut(product_id) {
            entry.push(variant);
        }
    }

    // ── Session user ─────────────────────────────────────────────────

    pub fn session_user(&self) -> Option<User> {
        self.session_user.borrow().clone()
    }

    pub fn subscribe_session_user(&self) -> watch::Receiver<Option<User>> {
        self.session_user.subscribe()
    }

    pub(crate) fn set_session_user(&self, user: Option<User>) {
        self.session_user.send_modify(|u| *u = user);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn variant(id: i64, product: i64, size: &str) -> ProductVariant {
        ProductVariant {
            id: RecordId::Int(id),
            product_id: RecordId::Int(product),
            size: Some(size.into()),
            color: None,
            stock: 1,
            sku: None,
        }
    }

    #[test]
    fn variant_cache_overwrites_on_refetch() {
        let store = AppStore::new();
        let pid = RecordId::Int(7);

        store.put_variants(pid.clone(), vec![variant(1, 7, "S"), variant(2, 7, "M")]);
        assert_eq!(store.variants_for(&pid).unwrap().len(), 2);

        store.put_variants(pid.clone(), vec![variant(3, 7, "L")]);
        let cached = store.variants_for(&pid).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, RecordId::Int(3));
    }

    #[test]
    fn append_variant_only_touches_cached_parents() {
        let store = AppStore::new();
        let cached = RecordId::Int(1);
        let uncached = RecordId::Int(2);

        store.put_variants(cached.clone(), vec![variant(10, 1, "S")]);
        store.append_variant(&cached, variant(11, 1, "M"));
        store.append_variant(&uncached, variant(12, 2, "S"));

        assert_eq!(store.variants_for(&cached).unwrap().len(), 2);
        assert!(store.variants_for(&uncached).is_none());
    }
}
