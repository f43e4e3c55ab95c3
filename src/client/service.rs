use crate::*;
use std::future::Future;

/// Remote RQL service.
///
/// Calls may take arbitrarily long and are only ever made from the
/// [`QueryWorker`] task. Refusals (parse errors, runtime failures) come back
/// as [`Error::Service`], transport problems as [`Error::Connectivity`].
pub trait QueryService: Send + Sync + 'static {
    fn execute(&self, query: &str) -> impl Future<Output = Result<QueryResult>> + Send;

    fn validate(&self, query: &str) -> impl Future<Output = Result<Validation>> + Send;
}

/// Typed result of executing a query.
pub struct QueryResult {
    pub ty: TypeDescriptor,
    pub data: QueryData,
}

impl QueryResult {
    pub fn value(ty: TypeDescriptor, data: impl Into<DataValue>) -> Self {
        Self {
            ty,
            data: QueryData::Value(data.into()),
        }
    }

    pub fn stream(ty: TypeDescriptor, source: impl ResultSource + 'static) -> Self {
        Self {
            ty,
            data: QueryData::Stream(Box::new(source)),
        }
    }
}

pub enum QueryData {
    /// Materialized by the service. Collections are still capped to [`RESULT_CAP`].
    Value(DataValue),
    /// Items of a collection pulled lazily, e.g. through a server-side cursor.
    Stream(Box<dyn ResultSource>),
}

impl std::fmt::Debug for QueryData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryData::Value(value) => f.debug_tuple("Value").field(value).finish(),
            QueryData::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Outcome of a validation request. An empty `errors` list means the query
/// is well formed and `ty` is its inferred result type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validation {
    pub errors: Vec<String>,
    pub ty: Option<TypeDescriptor>,
}

impl Validation {
    pub fn valid(ty: TypeDescriptor) -> Self {
        Self {
            errors: vec![],
            ty: Some(ty),
        }
    }

    pub fn invalid<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: errors.into_iter().map(Into::into).collect(),
            ty: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
