use crate::*;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::{
    runtime::Handle,
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Command {
    #[display("execute")]
    Execute(String),
    #[display("validate")]
    Validate(String),
}

/// Completed command delivered back to the interaction side.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Executed(QueryOutcome),
    Validated(Validation),
    /// The service refused the command or could not be reached.
    Failed(String),
}

/// An executed query with its result capped to [`RESULT_CAP`] items.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub ty: TypeDescriptor,
    pub data: DataValue,
    pub truncated: bool,
}

/// Runs service calls off the interaction thread, one at a time.
///
/// Scope / Intent:
/// - A single slot: while a command is in flight, further submissions are
///   rejected with [`Error::Busy`] instead of being queued.
/// - Results come back in order as [`Event`]s, polled with
///   [`QueryWorker::try_next_event`] or awaited with [`QueryWorker::next_event`].
///
/// Cancellation:
/// - [`QueryWorker::stop`] abandons the current task and starts a fresh one.
///   The abandoned call is not awaited and may still run to completion on the
///   service side; its result is discarded.
pub struct QueryWorker<S: QueryService> {
    service: Arc<S>,
    runtime: Handle,
    task: WorkerTask,
}

struct WorkerTask {
    commands: mpsc::Sender<Command>,
    events: mpsc::UnboundedReceiver<Event>,
    executing: Arc<AtomicBool>,
    accepting: Arc<AtomicBool>,
    handle: JoinHandle<Result>,
}

impl WorkerTask {
    fn spawn<S: QueryService>(service: Arc<S>, runtime: &Handle) -> Self {
        let (commands, commands_rx) = mpsc::channel(1);
        let (events_tx, events) = mpsc::unbounded_channel();
        let executing = Arc::new(AtomicBool::new(false));
        let accepting = Arc::new(AtomicBool::new(true));
        let handle = runtime.spawn(run(
            service,
            commands_rx,
            events_tx,
            Arc::clone(&executing),
            Arc::clone(&accepting),
        ));
        Self {
            commands,
            events,
            executing,
            accepting,
            handle,
        }
    }
}

impl<S: QueryService> QueryWorker<S> {
    /// Start a worker on `runtime`. Must be called from outside that
    /// runtime's blocking context, e.g. with `Handle::current()` in async code.
    pub fn new(service: S, runtime: Handle) -> Self {
        let service = Arc::new(service);
        let task = WorkerTask::spawn(Arc::clone(&service), &runtime);
        debug!("Started query worker");
        Self {
            service,
            runtime,
            task,
        }
    }

    pub fn is_executing(&self) -> bool {
        self.task.executing.load(Ordering::Acquire)
    }

    /// Hand `command` to the worker without blocking.
    pub fn submit(&self, command: Command) -> Result {
        let executing = &self.task.executing;
        if executing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Rejected {command}: another command is executing");
            return Err(Error::Busy);
        }

        match self.task.commands.try_send(command) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(command)) => {
                executing.store(false, Ordering::Release);
                debug!("Rejected {command}: command slot is occupied");
                Err(Error::Busy)
            }
            Err(TrySendError::Closed(_)) => {
                executing.store(false, Ordering::Release);
                Err(Error::WorkerStopped)
            }
        }
    }

    pub fn execute(&self, query: impl Into<String>) -> Result {
        self.submit(Command::Execute(query.into()))
    }

    pub fn validate(&self, query: impl Into<String>) -> Result {
        self.submit(Command::Validate(query.into()))
    }

    /// Wait for the next event. `None` once the worker task has ended.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.task.events.recv().await
    }

    /// Next event if one is ready.
    pub fn try_next_event(&mut self) -> Option<Event> {
        self.task.events.try_recv().ok()
    }

    /// Abandon the in-flight command, if any, and replace the worker task.
    ///
    /// Returns false when nothing was executing. Events of the abandoned
    /// command are never delivered.
    pub fn stop(&mut self) -> bool {
        if !self.is_executing() {
            return false;
        }
        self.task.accepting.store(false, Ordering::Release);
        let fresh = WorkerTask::spawn(Arc::clone(&self.service), &self.runtime);
        // Dropping the handle detaches the old task.
        drop(std::mem::replace(&mut self.task, fresh));
        info!("Abandoned in-flight command and restarted the query worker");
        true
    }

    /// Close the command channel and wait for the worker task to finish.
    pub async fn shutdown(self) -> Result {
        let WorkerTask {
            commands, handle, ..
        } = self.task;
        drop(commands);
        handle
            .await
            .map_err(|e| Error::Internal(format!("query worker task failed: {e}")))?
    }
}

async fn run<S: QueryService>(
    service: Arc<S>,
    mut commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<Event>,
    executing: Arc<AtomicBool>,
    accepting: Arc<AtomicBool>,
) -> Result {
    while let Some(command) = commands.recv().await {
        if !accepting.load(Ordering::Acquire) {
            debug!("Dropping {command} sent to an abandoned worker");
            break;
        }

        debug!("Running {command}");
        let result = dispatch(service.as_ref(), command).await;
        executing.store(false, Ordering::Release);

        let event = match result {
            Ok(event) => event,
            Err(err) if err.is_user_facing() => {
                warn!("Command failed: {err}");
                Event::Failed(err.to_string())
            }
            Err(err) => {
                error!("Query worker failed: {err}");
                return Err(err);
            }
        };

        if events.send(event).is_err() || !accepting.load(Ordering::Acquire) {
            debug!("Discarding result of an abandoned command");
            break;
        }
    }
    debug!("Query worker finished");
    Ok(())
}

async fn dispatch<S: QueryService>(service: &S, command: Command) -> Result<Event> {
    match command {
        Command::Execute(query) => {
            let result = service.execute(&query).await?;
            Ok(Event::Executed(materialize(result).await?))
        }
        Command::Validate(query) => Ok(Event::Validated(service.validate(&query).await?)),
    }
}

/// Pull a streamed result on the blocking pool so a slow cursor never
/// stalls the runtime.
async fn materialize(result: QueryResult) -> Result<QueryOutcome> {
    let QueryResult { ty, data } = result;
    let source: Box<dyn ResultSource> = match data {
        QueryData::Value(DataValue::Collection(items)) if ty.element().is_some() => {
            Box::new(IterSource::new(items))
        }
        QueryData::Value(data) => {
            return Ok(QueryOutcome {
                ty,
                data,
                truncated: false,
            });
        }
        QueryData::Stream(source) => source,
    };

    let page = tokio::task::spawn_blocking(move || take(source, RESULT_CAP))
        .await
        .map_err(|e| Error::Internal(format!("materialization task failed: {e}")))??;
    if page.truncated {
        info!("Result truncated to {} items", page.items.len());
    }
    Ok(QueryOutcome {
        ty,
        data: DataValue::Collection(page.items),
        truncated: page.truncated,
    })
}
