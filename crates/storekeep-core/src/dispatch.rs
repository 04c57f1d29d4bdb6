// ── Action dispatcher ──
//
// The bridge between the API client and the store: every user-visible
// operation is an async action with pending/fulfilled/rejected phases.
// The dispatcher performs the service call, commits the settled result
// through the slice reducer, and returns the outcome to the caller.
// Errors are captured into slice state at this boundary -- they never
// propagate into rendering code.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::{join3, join_all};
use secrecy::SecretString;
use tracing::debug;

use storekeep_api::ApiClient;
use storekeep_api::categories::CategoryDraft;
use storekeep_api::customers::CustomerDraft;
use storekeep_api::employees::{EmployeeDraft, EmployeePatch};
use storekeep_api::products::{ProductDraft, ProductFilter, ProductPatch, VariantDraft};
use storekeep_api::suppliers::SupplierDraft;
use storekeep_api::types::{Page, Pagination, RecordId};

use crate::error::CoreError;
use crate::model::{
    Category, Customer, Employee, Product, ProductVariant, Record, Supplier, User,
};
use crate::store::{AppStore, DashboardCommand, Slice, SliceCommand};

// ── Batch outcome ────────────────────────────────────────────────────

/// Rollup of a fan-out of independent child operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    AllSucceeded,
    PartiallySucceeded,
    AllFailed,
}

/// Summary of independently-attempted child operations (e.g. variant
/// creation after a product create). Failures are counted and reported;
/// nothing is rolled back.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub errors: Vec<String>,
}

impl BatchOutcome {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    pub fn status(&self) -> BatchStatus {
        if self.succeeded == self.attempted {
            BatchStatus::AllSucceeded
        } else if self.succeeded > 0 {
            BatchStatus::PartiallySucceeded
        } else {
            BatchStatus::AllFailed
        }
    }
}

/// Result of a successful login.
pub struct LoginOutcome {
    pub token: SecretString,
    pub user: User,
}

// ── Shared settle plumbing ───────────────────────────────────────────

/// Run one list-fetch action against a slice: stamp the dispatch, await
/// the service call, commit the settled result.
async fn settle_list<R, T>(
    slice: &Slice<T>,
    fut: impl Future<Output = Result<Page<R>, storekeep_api::Error>>,
) -> Result<(), CoreError>
where
    T: Record + Clone + Send + Sync + 'static + From<R>,
{
    let seq = slice.begin_fetch();
    match fut.await {
        Ok(page) => {
            let items = page.data.into_iter().map(T::from).collect();
            slice.apply(SliceCommand::FetchFulfilled {
                seq,
                items,
                pagination: page.pagination,
            });
            Ok(())
        }
        Err(e) => {
            let err = CoreError::from(e);
            slice.apply(SliceCommand::FetchRejected {
                seq,
                message: err.to_string(),
            });
            Err(err)
        }
    }
}

/// Run one create/update action: await the call, convert, commit the
/// splice command built by `commit`, or record the failure on the slice.
async fn settle_mutation<R, T>(
    slice: &Slice<T>,
    fut: impl Future<Output = Result<R, storekeep_api::Error>>,
    commit: impl FnOnce(T) -> SliceCommand<T>,
) -> Result<T, CoreError>
where
    T: Record + Clone + Send + Sync + 'static + From<R>,
{
    match fut.await {
        Ok(raw) => {
            let record = T::from(raw);
            slice.apply(commit(record.clone()));
            Ok(record)
        }
        Err(e) => {
            let err = CoreError::from(e);
            slice.apply(SliceCommand::MutationFailed {
                message: err.to_string(),
            });
            Err(err)
        }
    }
}

/// Run one delete action: filter the record out on success, record the
/// failure (items untouched) otherwise.
async fn settle_removal<T>(
    slice: &Slice<T>,
    id: &RecordId,
    fut: impl Future<Output = Result<(), storekeep_api::Error>>,
) -> Result<(), CoreError>
where
    T: Record + Clone + Send + Sync + 'static,
{
    match fut.await {
        Ok(()) => {
            slice.apply(SliceCommand::Removed { id: id.clone() });
            Ok(())
        }
        Err(e) => {
            let err = CoreError::from(e);
            slice.apply(SliceCommand::MutationFailed {
                message: err.to_string(),
            });
            Err(err)
        }
    }
}

// ── Dispatcher ───────────────────────────────────────────────────────

/// Explicit context object: the store plus the API client. Cheap to
/// clone, safe to share across screens/tasks.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<AppStore>,
    api: Arc<ApiClient>,
}

impl Dispatcher {
    pub fn new(store: Arc<AppStore>, api: Arc<ApiClient>) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &Arc<AppStore> {
        &self.store
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    // ── Auth ─────────────────────────────────────────────────────────

    /// Sign in, store the bearer token on the client, and remember the
    /// authenticated user in the store. Persisting the token across
    /// processes is the config layer's job.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginOutcome, CoreError> {
        let resp = self.api.login(email, password).await?;
        let token = SecretString::from(resp.token);
        self.api.set_token(token.clone());
        let user = User::from(resp.user);
        self.store.set_session_user(Some(user.clone()));
        debug!(email = %user.email, "signed in");
        Ok(LoginOutcome { token, user })
    }

    /// Drop the live token and the session user.
    pub fn logout(&self) {
        self.api.clear_token();
        self.store.set_session_user(None);
    }

    // ── Products ─────────────────────────────────────────────────────

    pub async fn fetch_products(
        &self,
        page: u32,
        limit: u32,
        filter: &ProductFilter,
    ) -> Result<(), CoreError> {
        settle_list(
            &self.store.products,
            self.api.list_products(page, limit, filter),
        )
        .await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CoreError> {
        settle_mutation(
            &self.store.products,
            self.api.create_product(draft),
            |record| SliceCommand::Created { record },
        )
        .await
    }

    pub async fn update_product(
        &self,
        id: &RecordId,
        patch: &ProductPatch,
    ) -> Result<Product, CoreError> {
        settle_mutation(
            &self.store.products,
            self.api.update_product(id, patch),
            |record| SliceCommand::Updated { record },
        )
        .await
    }

    pub async fn remove_product(&self, id: &RecordId) -> Result<(), CoreError> {
        settle_removal(&self.store.products, id, self.api.delete_product(id)).await
    }

    /// Ad-hoc detail query -- prefers the already-fetched collection,
    /// falls back to the server.
    pub async fn get_product(&self, id: &RecordId) -> Result<Product, CoreError> {
        let snapshot = self.store.products.snapshot();
        if let Some(found) = snapshot.by_id(id) {
            return Ok(found.clone());
        }
        Ok(Product::from(self.api.get_product(id).await?))
    }

    /// Create one variant under a product, splicing it into the detail
    /// cache when the parent's variants are already cached.
    pub async fn create_variant(
        &self,
        product_id: &RecordId,
        draft: &VariantDraft,
    ) -> Result<ProductVariant, CoreError> {
        let created = ProductVariant::from(self.api.create_variant(product_id, draft).await?);
        self.store.append_variant(product_id, created.clone());
        Ok(created)
    }

    /// Lazily fetch the variant children of one product into the detail
    /// cache (repeated calls overwrite).
    pub async fn fetch_variants(
        &self,
        product_id: &RecordId,
    ) -> Result<Vec<ProductVariant>, CoreError> {
        let variants: Vec<ProductVariant> = self
            .api
            .list_variants(product_id)
            .await?
            .into_iter()
            .map(ProductVariant::from)
            .collect();
        self.store
            .put_variants(product_id.clone(), variants.clone());
        Ok(variants)
    }

    /// Create a product, then attempt each variant independently.
    ///
    /// A parent failure aborts; child failures are counted into the
    /// returned [`BatchOutcome`] and never roll back the parent.
    pub async fn create_product_with_variants(
        &self,
        draft: &ProductDraft,
        variants: Vec<VariantDraft>,
    ) -> Result<(Product, BatchOutcome), CoreError> {
        let product = self.create_product(draft).await?;

        let attempts = join_all(
            variants
                .iter()
                .map(|v| self.api.create_variant(&product.id, v)),
        )
        .await;

        let mut outcome = BatchOutcome {
            attempted: attempts.len(),
            ..BatchOutcome::default()
        };
        for attempt in attempts {
            match attempt {
                Ok(created) => {
                    outcome.succeeded += 1;
                    self.store
                        .append_variant(&product.id, ProductVariant::from(created));
                }
                Err(e) => outcome.errors.push(CoreError::from(e).to_string()),
            }
        }

        Ok((product, outcome))
    }

    // ── Categories ───────────────────────────────────────────────────

    pub async fn fetch_categories(&self) -> Result<(), CoreError> {
        let slice = &self.store.categories;
        let seq = slice.begin_fetch();
        match self.api.list_categories().await {
            Ok(raw) => {
                let items: Vec<Category> = raw.into_iter().map(Category::from).collect();
                let pagination = Pagination::single_page(items.len());
                slice.apply(SliceCommand::FetchFulfilled {
                    seq,
                    items,
                    pagination,
                });
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                slice.apply(SliceCommand::FetchRejected {
                    seq,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CoreError> {
        settle_mutation(
            &self.store.categories,
            self.api.create_category(draft),
            |record| SliceCommand::Created { record },
        )
        .await
    }

    // ── Customers ────────────────────────────────────────────────────

    pub async fn fetch_customers(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<(), CoreError> {
        settle_list(
            &self.store.customers,
            self.api.list_customers(page, limit, search),
        )
        .await
    }

    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer, CoreError> {
        settle_mutation(
            &self.store.customers,
            self.api.create_customer(draft),
            |record| SliceCommand::Created { record },
        )
        .await
    }

    // ── Employees ────────────────────────────────────────────────────

    pub async fn fetch_employees(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<(), CoreError> {
        settle_list(
            &self.store.employees,
            self.api.list_employees(page, limit, search),
        )
        .await
    }

    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, CoreError> {
        settle_mutation(
            &self.store.employees,
            self.api.create_employee(draft),
            |record| SliceCommand::Created { record },
        )
        .await
    }

    pub async fn update_employee(
        &self,
        id: &RecordId,
        patch: &EmployeePatch,
    ) -> Result<Employee, CoreError> {
        settle_mutation(
            &self.store.employees,
            self.api.update_employee(id, patch),
            |record| SliceCommand::Updated { record },
        )
        .await
    }

    pub async fn remove_employee(&self, id: &RecordId) -> Result<(), CoreError> {
        settle_removal(&self.store.employees, id, self.api.delete_employee(id)).await
    }

    // ── Suppliers ────────────────────────────────────────────────────

    pub async fn fetch_suppliers(&self, page: u32, limit: u32) -> Result<(), CoreError> {
        settle_list(&self.store.suppliers, self.api.list_suppliers(page, limit)).await
    }

    /// Ad-hoc detail query -- bypasses the store (no slice owns single
    /// supplier lookups).
    pub async fn get_supplier(&self, id: &RecordId) -> Result<Supplier, CoreError> {
        Ok(Supplier::from(self.api.get_supplier(id).await?))
    }

    pub async fn create_supplier(&self, draft: &SupplierDraft) -> Result<Supplier, CoreError> {
        settle_mutation(
            &self.store.suppliers,
            self.api.create_supplier(draft),
            |record| SliceCommand::Created { record },
        )
        .await
    }

    // ── Dashboard ────────────────────────────────────────────────────

    pub async fn fetch_dashboard_overview(&self) -> Result<(), CoreError> {
        self.store.dashboard.apply(DashboardCommand::Pending);
        match self.api.dashboard_overview().await {
            Ok(raw) => {
                self.store
                    .dashboard
                    .apply(DashboardCommand::OverviewLoaded(raw.into()));
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.store
                    .dashboard
                    .apply(DashboardCommand::Rejected(err.to_string()));
                Err(err)
            }
        }
    }

    pub async fn fetch_sales_targets(&self, period: &str) -> Result<(), CoreError> {
        self.store.dashboard.apply(DashboardCommand::Pending);
        match self.api.sales_targets(period).await {
            Ok(raw) => {
                self.store.dashboard.apply(DashboardCommand::TargetsLoaded(
                    raw.into_iter().map(Into::into).collect(),
                ));
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.store
                    .dashboard
                    .apply(DashboardCommand::Rejected(err.to_string()));
                Err(err)
            }
        }
    }

    pub async fn fetch_recent_activity(
        &self,
        limit: Option<u32>,
        kind: Option<&str>,
    ) -> Result<(), CoreError> {
        self.store.dashboard.apply(DashboardCommand::Pending);
        match self.api.recent_activity(limit, kind).await {
            Ok(raw) => {
                self.store.dashboard.apply(DashboardCommand::ActivityLoaded(
                    raw.into_iter().map(Into::into).collect(),
                ));
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.store
                    .dashboard
                    .apply(DashboardCommand::Rejected(err.to_string()));
                Err(err)
            }
        }
    }

    /// Refresh all three dashboard sections concurrently. Returns the
    /// first error, but every section that succeeded is still committed.
    pub async fn refresh_dashboard(
        &self,
        period: &str,
        activity_limit: Option<u32>,
    ) -> Result<(), CoreError> {
        let (overview, targets, activity) = join3(
            self.fetch_dashboard_overview(),
            self.fetch_sales_targets(period),
            self.fetch_recent_activity(activity_limit, None),
        )
        .await;
        overview.and(targets).and(activity)
    }
}
