use dioxus::prelude::*;
use dioxus::core::Task;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Pending<T> {
    generation: u64,
    value: T,
    due: Duration,
}

/// Cancellable single-slot timer state.
///
/// Every [`schedule`](Debouncer::schedule) supersedes the previous pending
/// value. Time is supplied by the caller as an offset from any fixed origin,
/// so tests can drive it without a clock.
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the quiet period for later schedules. A value already pending
    /// keeps its due time.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any pending value with `value`, due `delay` after `now`.
    /// Returns the generation identifying this schedule.
    pub fn schedule(&mut self, value: T, now: Duration) -> u64 {
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            value,
            due: now + self.delay,
        });
        self.generation
    }

    /// Timer callback for `generation`. Yields the value only if that
    /// schedule is still the latest one.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        let current = matches!(&self.pending, Some(p) if p.generation == generation);
        if current {
            self.flush()
        } else {
            None
        }
    }

    /// Yield the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let elapsed = matches!(&self.pending, Some(p) if p.due <= now);
        if elapsed {
            self.flush()
        } else {
            None
        }
    }

    /// Drop the pending value without emitting it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Emit the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}

/// Wait for `duration` on the platform's timer.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

struct DebounceInner<T> {
    debouncer: Debouncer<T>,
    task: Option<Task>,
}

/// Handle returned by [`use_debounce`].
pub struct DebounceHandle<T: 'static> {
    inner: Rc<RefCell<DebounceInner<T>>>,
    on_settle: EventHandler<T>,
}

impl<T: 'static> Clone for DebounceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            on_settle: self.on_settle,
        }
    }
}

impl<T: 'static> DebounceHandle<T> {
    /// Restart the quiet period with `value`; the previous timer is dropped.
    pub fn schedule(&self, value: T) {
        let (generation, delay, previous) = {
            let mut inner = self.inner.borrow_mut();
            let generation = inner.debouncer.schedule(value, Duration::ZERO);
            (generation, inner.debouncer.delay(), inner.task.take())
        };
        if let Some(task) = previous {
            task.cancel();
        }

        let inner = self.inner.clone();
        let on_settle = self.on_settle;
        let task = spawn(async move {
            sleep(delay).await;
            let settled = {
                let mut inner = inner.borrow_mut();
                inner.task = None;
                inner.debouncer.fire(generation)
            };
            if let Some(value) = settled {
                on_settle.call(value);
            }
        });
        self.inner.borrow_mut().task = Some(task);
    }

    /// Drop any pending value without emitting it.
    pub fn cancel(&self) {
        let task = {
            let mut inner = self.inner.borrow_mut();
            inner.debouncer.cancel();
            inner.task.take()
        };
        if let Some(task) = task {
            task.cancel();
        }
    }

    /// Emit the pending value now, if any.
    pub fn flush(&self) {
        let (value, task) = {
            let mut inner = self.inner.borrow_mut();
            (inner.debouncer.flush(), inner.task.take())
        };
        if let Some(task) = task {
            task.cancel();
        }
        if let Some(value) = value {
            self.on_settle.call(value);
        }
    }
}

/// Debounce values for the lifetime of the calling component.
///
/// `delay` is re-read on every render and applies from the next schedule.
/// Pending values are discarded when the component unmounts.
pub fn use_debounce<T: 'static>(delay: Duration, on_settle: EventHandler<T>) -> DebounceHandle<T> {
    let handle = use_hook(move || DebounceHandle {
        inner: Rc::new(RefCell::new(DebounceInner {
            debouncer: Debouncer::new(delay),
            task: None,
        })),
        on_settle,
    });
    {
        let mut inner = handle.inner.borrow_mut();
        if inner.debouncer.delay() != delay {
            inner.debouncer.set_delay(delay);
        }
    }

    let teardown = handle.inner.clone();
    use_drop(move || {
        teardown.borrow_mut().debouncer.cancel();
    });

    handle
}
