use std::collections::VecDeque;

use rota_scheduling_environment::WorkerId;

/// FIFO free-list of workers. It also owns the counter that mints new
/// workers, so a pool is only ever valid for a single sweep.
#[derive(Debug, Default)]
pub struct IdlePool
{
    idle: VecDeque<WorkerId>,
    latest_worker: u64,
}

impl IdlePool
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Reuses the worker that has been idle the longest, or mints a new one.
    pub fn acquire(&mut self) -> WorkerId
    {
        match self.idle.pop_front() {
            Some(worker_id) => worker_id,
            None => {
                self.latest_worker += 1;
                WorkerId(self.latest_worker)
            }
        }
    }

    pub fn release(&mut self, worker_id: WorkerId)
    {
        self.idle.push_back(worker_id);
    }

    /// Number of distinct workers minted so far.
    pub fn minted_workers(&self) -> u64
    {
        self.latest_worker
    }
}
