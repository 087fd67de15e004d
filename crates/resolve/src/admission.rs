use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

/// A unit of work admitted to the scheduling collaborator.
pub type Task = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Admission interface consumed from the upstream scheduling layer.
/// Implementations guarantee that exclusive (write) tasks never run
/// concurrently with read tasks on the same resource family. Everything in
/// this crate is reentrant and stateless per call, so it runs unmodified
/// under any conforming scheduler.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn submit(&self, task: Task, exclusive: bool);
}

/// Runs every task inline on the submitting thread. For tests and
/// single-threaded embedders; the exclusivity guarantee holds trivially.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectScheduler;

#[async_trait]
impl Scheduler for DirectScheduler {
    async fn submit(&self, task: Task, _exclusive: bool) {
        task.await;
    }
}
