use crate::testing::*;
use crate::*;
use std::sync::Arc;
pub use test_context::test_context;
use test_context::AsyncTestContext;
use tokio::{runtime::Handle, sync::Semaphore};

/// A running worker over a gated [`FakeService`]. Calls block until
/// [`WorkerContext::open`] lets them through.
pub struct WorkerContext {
    pub worker: QueryWorker<FakeService>,
    pub service: FakeService,
    gate: Arc<Semaphore>,
}

impl WorkerContext {
    pub fn open(&self, calls: usize) {
        self.gate.add_permits(calls);
    }
}

impl AsyncTestContext for WorkerContext {
    async fn setup() -> Self {
        common_init();
        let gate = Arc::new(Semaphore::new(0));
        let service = FakeService::gated(Arc::clone(&gate));
        Self {
            worker: QueryWorker::new(service.clone(), Handle::current()),
            service,
            gate,
        }
    }

    async fn teardown(self) {
        self.gate.close();
        if let Err(err) = self.worker.shutdown().await {
            debug!("Worker ended with {err}");
        }
    }
}
