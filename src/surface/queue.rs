//! UI-thread task queue.
//!
//! Stands in for the platform's main dispatch queue: tasks are queued from
//! construction paths and run later, in order, on the UI thread by whoever
//! pumps the queue.

use std::collections::VecDeque;

type Task<T> = Box<dyn FnOnce(&mut T)>;

/// FIFO of deferred tasks operating on a `T`
pub struct UiQueue<T> {
    tasks: VecDeque<Task<T>>,
}

impl<T> Default for UiQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UiQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Queue a task to run on the next [`Self::run_pending`]
    pub fn dispatch_async(&mut self, task: impl FnOnce(&mut T) + 'static) {
        self.tasks.push_back(Box::new(task));
    }

    /// Run every queued task against `target`, oldest first.
    /// Returns the number of tasks run.
    pub fn run_pending(&mut self, target: &mut T) -> usize {
        let mut ran = 0;
        while let Some(task) = self.tasks.pop_front() {
            task(target);
            ran += 1;
        }
        ran
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> std::fmt::Debug for UiQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiQueue").field("pending", &self.tasks.len()).finish()
    }
}
