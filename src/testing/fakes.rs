use crate::*;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::Semaphore;

pub const INFINITE_QUERY: &str = "from numbers";
pub const BROKEN_STREAM_QUERY: &str = "from flaky_numbers";
pub const FAILING_QUERY: &str = "select * frm people";
pub const OFFLINE_QUERY: &str = "from remote_people";
pub const BUGGY_QUERY: &str = "from garbled";
pub const LARGE_VALUE_QUERY: &str = "from big_table";
pub const SMALL_VALUE_QUERY: &str = "from small_table";
pub const SCALAR_QUERY: &str = "count(from people)";

pub fn people_type() -> TypeDescriptor {
    TypeDescriptor::collection(TypeDescriptor::record([
        ("a", TypeDescriptor::primitive(PrimitiveKind::Int)),
        ("e", TypeDescriptor::primitive(PrimitiveKind::String)),
    ]))
}

pub fn people_items() -> Vec<DataValue> {
    vec![
        DataValue::record([("a", DataValue::Int(1)), ("e", "Hello".into())]),
        DataValue::record([("a", DataValue::Int(2)), ("e", "world".into())]),
    ]
}

/// Integers counting up from zero, forever unless told to fail.
pub struct CountingSource {
    next: i64,
    fail_at: Option<i64>,
    releases: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::with_counter(Arc::default())
    }

    pub fn failing_at(index: i64) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::new()
        }
    }

    pub fn with_counter(releases: Arc<AtomicUsize>) -> Self {
        Self {
            next: 0,
            fail_at: None,
            releases,
        }
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// Shared release count that outlives the source.
    pub fn releases_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.releases)
    }
}

impl ResultSource for CountingSource {
    fn next_item(&mut self) -> Result<Option<DataValue>> {
        if self.fail_at == Some(self.next) {
            return Err(Error::Service("cursor closed by server".into()));
        }
        let item = DataValue::Int(self.next);
        self.next += 1;
        Ok(Some(item))
    }

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scripted service. Every call waits on the gate first, when one is set.
#[derive(Clone, Default)]
pub struct FakeService {
    gate: Option<Arc<Semaphore>>,
    calls: Arc<AtomicUsize>,
    releases: Arc<AtomicUsize>,
}

impl FakeService {
    pub fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Releases of sources handed out by this service.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        if let Some(gate) = &self.gate {
            // A closed gate lets everything through.
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn counting(&self) -> CountingSource {
        CountingSource::with_counter(Arc::clone(&self.releases))
    }
}

impl QueryService for FakeService {
    async fn execute(&self, query: &str) -> Result<QueryResult> {
        self.enter().await;
        let numbers = TypeDescriptor::collection(TypeDescriptor::primitive(PrimitiveKind::Int));
        match query {
            INFINITE_QUERY => Ok(QueryResult::stream(numbers, self.counting())),
            BROKEN_STREAM_QUERY => Ok(QueryResult::stream(
                numbers,
                CountingSource {
                    fail_at: Some(3),
                    ..self.counting()
                },
            )),
            LARGE_VALUE_QUERY => Ok(QueryResult::value(
                numbers,
                (0..5000i64).map(DataValue::Int).collect::<Vec<_>>(),
            )),
            SMALL_VALUE_QUERY => Ok(QueryResult::value(numbers, vec![0i64, 1, 2])),
            SCALAR_QUERY => Ok(QueryResult::value(
                TypeDescriptor::primitive(PrimitiveKind::Int),
                42i64,
            )),
            FAILING_QUERY => Err(Error::Service("syntax error near \"frm\"".into())),
            OFFLINE_QUERY => Err(Error::Connectivity("service unreachable".into())),
            BUGGY_QUERY => Err(Error::Internal("response without a type".into())),
            _ => Ok(QueryResult::stream(people_type(), IterSource::new(people_items()))),
        }
    }

    async fn validate(&self, query: &str) -> Result<Validation> {
        self.enter().await;
        if query.contains("bad") {
            Ok(Validation::invalid([format!("unknown identifier in {query:?}")]))
        } else {
            Ok(Validation::valid(TypeDescriptor::primitive(PrimitiveKind::Int)))
        }
    }
}
