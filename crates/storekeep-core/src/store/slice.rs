// ── Generic resource slice ──
//
// One slice per REST resource: the fetched collection, pagination
// metadata, request status, and the last error. Mutations are typed
// commands applied by a pure reducer returning the next state snapshot;
// consumers observe the slice through a `watch` channel.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use storekeep_api::types::{Pagination, RecordId};

use crate::model::Record;

/// Lifecycle of the most recent request against a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// State owned by one resource slice.
///
/// `items` reflects fetch order, not business meaning. On a failed
/// fetch the previous items stay visible -- stale data beats a flash of
/// empty UI on transient failures.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub status: RequestStatus,
    pub error: Option<String>,
    /// Sequence number of the newest settled fetch. Settlements carrying
    /// an older sequence are dropped (see [`reduce`]).
    last_settled_fetch: u64,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
            status: RequestStatus::Idle,
            error: None,
            last_settled_fetch: 0,
        }
    }
}

impl<T: Record> ResourceState<T> {
    /// Look up an item by id in the current collection.
    pub fn by_id(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.record_id() == id)
    }
}

/// Typed mutation commands for a slice, one per action phase.
///
/// Fetch commands carry the dispatch sequence number; mutation
/// fulfillments (`Created`/`Updated`/`Removed`) splice unconditionally
/// whenever they land, matching the splice-on-mutation contract.
#[derive(Debug, Clone)]
pub enum SliceCommand<T> {
    FetchPending {
        seq: u64,
    },
    FetchFulfilled {
        seq: u64,
        items: Vec<T>,
        pagination: Pagination,
    },
    FetchRejected {
        seq: u64,
        message: String,
    },
    /// Append the server-returned record. `pagination.total` is left
    /// stale until the next fetch (known staleness, accepted).
    Created {
        record: T,
    },
    /// Replace the matching record by id; a miss is an anomaly, not an
    /// error -- logged and ignored.
    Updated {
        record: T,
    },
    /// Filter the record with this id out of the collection.
    Removed {
        id: RecordId,
    },
    /// A create/update/remove call failed: record the message, leave the
    /// collection as it was.
    MutationFailed {
        message: String,
    },
}

/// Pure reducer: current state + command → next state snapshot.
///
/// Fetch settlements are guarded by sequence number: when two fetches
/// against the same slice resolve out of order, the settlement of an
/// older dispatch is dropped instead of overwriting newer data.
pub fn reduce<T: Record + Clone>(state: &ResourceState<T>, cmd: SliceCommand<T>) -> ResourceState<T> {
    let mut next = state.clone();
    match cmd {
        SliceCommand::FetchPending { seq: _ } => {
            next.status = RequestStatus::Loading;
            next.error = None;
        }
        SliceCommand::FetchFulfilled {
            seq,
            items,
            pagination,
        } => {
            if seq < state.last_settled_fetch {
                debug!(seq, newest = state.last_settled_fetch, "dropping stale fetch fulfillment");
                return next;
            }
            next.items = items;
            next.pagination = pagination;
            next.status = RequestStatus::Succeeded;
            next.error = None;
            next.last_settled_fetch = seq;
        }
        SliceCommand::FetchRejected { seq, message } => {
            if seq < state.last_settled_fetch {
                debug!(seq, newest = state.last_settled_fetch, "dropping stale fetch rejection");
                return next;
            }
            next.status = RequestStatus::Failed;
            next.error = Some(message);
            next.last_settled_fetch = seq;
        }
        SliceCommand::Created { record } => {
            next.items.push(record);
        }
        SliceCommand::Updated { record } => {
            let id = record.record_id().clone();
            match next.items.iter_mut().find(|item| *item.record_id() == id) {
                Some(slot) => *slot = record,
                None => warn!(%id, "update fulfillment for id not in collection"),
            }
        }
        SliceCommand::Removed { id } => {
            next.items.retain(|item| *item.record_id() != id);
        }
        SliceCommand::MutationFailed { message } => {
            next.status = RequestStatus::Failed;
            next.error = Some(message);
        }
    }
    next
}

/// A watch-backed slice handle: snapshot + subscribe + command apply.
pub struct Slice<T: Clone + Send + Sync + 'static> {
    state: watch::Sender<ResourceState<T>>,
    fetch_seq: AtomicU64,
}

impl<T: Record + Clone + Send + Sync + 'static> Slice<T> {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(ResourceState::default());
        Self {
            state,
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Get the current state (cheap for the collection sizes involved).
    pub fn snapshot(&self) -> ResourceState<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.state.subscribe()
    }

    /// Apply a command through the reducer.
    pub fn apply(&self, cmd: SliceCommand<T>) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.state.send_modify(|s| *s = reduce(s, cmd));
    }

    /// Stamp a new fetch dispatch: bumps the sequence counter and marks
    /// the slice loading. Returns the sequence to settle with.
    pub(crate) fn begin_fetch(&self) -> u64 {
        let seq = self.fetch_seq.fetch_add(1, Ordering::Relaxed) + 1;
        self.apply(SliceCommand::FetchPending { seq });
        seq
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Customer, RecordId};

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id: RecordId::Int(id),
            name: name.into(),
            email: None,
            phone: None,
            address: None,
            created_at: None,
        }
    }

    fn fulfilled(seq: u64, items: Vec<Customer>) -> SliceCommand<Customer> {
        let pagination = Pagination {
            total: u64::try_from(items.len()).unwrap(),
            page: 1,
            limit: 10,
            pages: 1,
        };
        SliceCommand::FetchFulfilled {
            seq,
            items,
            pagination,
        }
    }

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let state = ResourceState::<Customer> {
            error: Some("old".into()),
            status: RequestStatus::Failed,
            ..ResourceState::default()
        };
        let next = reduce(&state, SliceCommand::FetchPending { seq: 1 });
        assert_eq!(next.status, RequestStatus::Loading);
        assert!(next.error.is_none());
    }

    #[test]
    fn fulfillment_replaces_items_wholesale() {
        let state = reduce(
            &ResourceState::default(),
            fulfilled(1, vec![customer(1, "Ann"), customer(2, "Bob")]),
        );
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.status, RequestStatus::Succeeded);

        // A refetch does not merge -- it replaces.
        let state = reduce(&state, fulfilled(2, vec![customer(3, "Cid")]));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, RecordId::Int(3));
    }

    #[test]
    fn fulfillment_is_idempotent_for_identical_payloads() {
        let once = reduce(&ResourceState::default(), fulfilled(1, vec![customer(1, "Ann")]));
        let twice = reduce(&once, fulfilled(2, vec![customer(1, "Ann")]));
        assert_eq!(once.items, twice.items);
        assert_eq!(once.pagination, twice.pagination);
    }

    #[test]
    fn rejection_keeps_stale_items_visible() {
        let state = reduce(&ResourceState::default(), fulfilled(1, vec![customer(1, "Ann")]));
        let state = reduce(
            &state,
            SliceCommand::FetchRejected {
                seq: 2,
                message: "API error: 500 Internal Server Error".into(),
            },
        );
        assert_eq!(state.status, RequestStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("API error: 500 Internal Server Error"));
        // Items from the last good fetch are untouched.
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn stale_fulfillment_is_dropped() {
        // Fetch seq=1 (page 1) and seq=2 (page 2) race; page 2 lands first.
        let state = reduce(&ResourceState::default(), SliceCommand::FetchPending { seq: 1 });
        let state = reduce(&state, SliceCommand::FetchPending { seq: 2 });
        let state = reduce(&state, fulfilled(2, vec![customer(20, "Page2")]));
        let state = reduce(&state, fulfilled(1, vec![customer(10, "Page1")]));

        // The older dispatch's late fulfillment did not overwrite.
        assert_eq!(state.items[0].id, RecordId::Int(20));
        assert_eq!(state.status, RequestStatus::Succeeded);
    }

    #[test]
    fn create_appends_and_keeps_ids_unique() {
        let state = reduce(
            &ResourceState::default(),
            fulfilled(1, vec![customer(1, "Ann"), customer(2, "Bob")]),
        );
        let before: Vec<RecordId> = state.items.iter().map(|c| c.id.clone()).collect();

        let state = reduce(
            &state,
            SliceCommand::Created {
                record: customer(42, "Jane"),
            },
        );

        // Appended at the end, id not previously present.
        assert_eq!(state.items.last().unwrap().id, RecordId::Int(42));
        assert!(!before.contains(&RecordId::Int(42)));
        let mut ids: Vec<RecordId> = state.items.iter().map(|c| c.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), state.items.len());

        // Known staleness: total is not adjusted by a create.
        assert_eq!(state.pagination.total, 2);
    }

    #[test]
    fn update_replaces_matching_record_in_place() {
        let state = reduce(
            &ResourceState::default(),
            fulfilled(1, vec![customer(1, "Ann"), customer(2, "Bob")]),
        );
        let state = reduce(
            &state,
            SliceCommand::Updated {
                record: customer(1, "Anna"),
            },
        );
        assert_eq!(state.items[0].name, "Anna");
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn update_miss_is_a_noop() {
        let state = reduce(&ResourceState::default(), fulfilled(1, vec![customer(1, "Ann")]));
        let next = reduce(
            &state,
            SliceCommand::Updated {
                record: customer(9, "Ghost"),
            },
        );
        assert_eq!(next.items, state.items);
    }

    #[test]
    fn remove_filters_record_out() {
        let state = reduce(
            &ResourceState::default(),
            fulfilled(1, vec![customer(1, "Ann"), customer(2, "Bob")]),
        );
        let state = reduce(&state, SliceCommand::Removed { id: RecordId::Int(1) });
        assert!(state.by_id(&RecordId::Int(1)).is_none());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn mutation_failure_records_error_and_keeps_items() {
        // DELETE returning 404: error stored, items untouched, status failed.
        let state = reduce(
            &ResourceState::default(),
            fulfilled(1, vec![customer(1, "Ann"), customer(5, "Eve")]),
        );
        let state = reduce(
            &state,
            SliceCommand::MutationFailed {
                message: "API error: Product not found".into(),
            },
        );
        assert_eq!(state.status, RequestStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("API error: Product not found"));
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn fetch_fulfillment_overwrites_earlier_create() {
        // The documented mutation race: a create lands, then a fetch that
        // started before the create settles and replaces the collection
        // wholesale. Mutation splices are not sequence-guarded, so the
        // append is lost until the next refetch.
        let state = reduce(&ResourceState::default(), fulfilled(1, vec![customer(1, "Ann")]));
        let state = reduce(
            &state,
            SliceCommand::Created {
                record: customer(42, "Jane"),
            },
        );
        assert!(state.by_id(&RecordId::Int(42)).is_some());

        let state = reduce(&state, fulfilled(2, vec![customer(1, "Ann")]));
        assert!(state.by_id(&RecordId::Int(42)).is_none());
    }

    #[tokio::test]
    async fn slice_notifies_watchers_on_apply() {
        let slice: Slice<Customer> = Slice::new();
        let mut rx = slice.subscribe();

        slice.apply(fulfilled(1, vec![customer(1, "Ann")]));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().items.len(), 1);
    }

    #[test]
    fn begin_fetch_bumps_sequence_and_sets_loading() {
        let slice: Slice<Customer> = Slice::new();
        let first = slice.begin_fetch();
        let second = slice.begin_fetch();
        assert!(second > first);
        assert_eq!(slice.snapshot().status, RequestStatus::Loading);
    }
}
