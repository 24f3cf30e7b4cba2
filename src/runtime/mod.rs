//! The only place where commands touch the world. One loop owns the session,
//! feeds it one message at a time and keeps real wake-ups in line with the
//! session's timeouts.

pub mod effects;
pub mod event;
pub mod wakeups;

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::clock::{Clock, Timestamp, after};
use crate::command::{Command, OnError};
use crate::engine::timers::TimerReconciler;
use crate::generator::dictionary;
use crate::message::Message;
use crate::session::{SessionState, reduce};

pub use event::{EventHandler, EventSource, InputEvent};
pub use wakeups::WakeQueue;

/// Upper bound on how long the loop blocks when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_secs(1);

/// How the session asked to end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitRequest {
    pub status: i32,
    pub goodbye: String,
}

pub struct Runtime<C, E> {
    clock: C,
    events: E,
    queue: VecDeque<Message>,
    reconciler: TimerReconciler,
    wakeups: WakeQueue,
}

impl<C: Clock, E: EventSource> Runtime<C, E> {
    pub fn new(clock: C, events: E) -> Self {
        Self {
            clock,
            events,
            queue: VecDeque::new(),
            reconciler: TimerReconciler::new(),
            wakeups: WakeQueue::new(),
        }
    }

    /// Run until the session emits `Command::Exit`. `render` is called
    /// whenever the queue is drained, before blocking for input.
    pub fn run<F>(
        &mut self,
        mut state: SessionState,
        startup: Vec<Command>,
        mut render: F,
    ) -> Result<(SessionState, ExitRequest)>
    where
        F: FnMut(&SessionState, Timestamp) -> Result<()>,
    {
        info!(commands = startup.len(), "session starting");
        if let Some(exit) = self.execute_all(startup, self.clock.now()) {
            return Ok((state, exit));
        }

        loop {
            while let Some(msg) = self.queue.pop_front() {
                let now = self.clock.now();
                let (next, commands) = reduce(state, msg, now);
                state = next;
                self.sync_timers(&state, now);
                if let Some(exit) = self.execute_all(commands, now) {
                    info!(status = exit.status, score = state.score, "session finished");
                    return Ok((state, exit));
                }
            }

            let now = self.clock.now();
            render(&state, now)?;

            let timeout = self.wakeups.timeout(now).unwrap_or(IDLE_POLL);
            match self.events.next_event(timeout)? {
                Some(InputEvent::Key(key)) => self.queue.push_back(Message::Key(key)),
                Some(InputEvent::Redraw) | None => {}
            }

            if self.wakeups.pop_due(self.clock.now()) {
                self.queue.push_back(Message::Interrupt);
            }
            if self.queue.is_empty() {
                // Nothing to reduce, but expired timeouts still need pruning.
                self.queue.push_back(Message::Interrupt);
            }
        }
    }

    fn sync_timers(&mut self, state: &SessionState, now: Timestamp) {
        let plan = self.reconciler.reconcile(&state.timeouts, now);
        for at in plan.cancel {
            self.wakeups.cancel(at);
        }
        // Pruned timeouts are never before `now`, so `now + delay` lands on
        // the same instant that `cancel` later removes.
        for (_, delay) in plan.schedule {
            debug!(?delay, "scheduling wake-up");
            self.wakeups.schedule(after(now, delay));
        }
    }

    /// Execute commands in order, queueing follow-up messages in the same order.
    fn execute_all(&mut self, commands: Vec<Command>, now: Timestamp) -> Option<ExitRequest> {
        for command in commands {
            if let Some(exit) = self.execute(command, now) {
                return Some(exit);
            }
        }
        None
    }

    fn execute(&mut self, command: Command, now: Timestamp) -> Option<ExitRequest> {
        match command {
            Command::ReadFile {
                source,
                purpose,
                on_error,
            } => match effects::read_source(&source) {
                Ok(data) => {
                    debug!(%source, ?purpose, bytes = data.len(), "read complete");
                    self.queue.push_back(purpose.loaded(data));
                }
                Err(err) => match on_error {
                    OnError::Report => self.queue.push_back(Message::Failed(err)),
                    OnError::Ignore => debug!(%source, error = %err, "ignoring read failure"),
                },
            },
            Command::LoadBuiltinDictionary => match dictionary::builtin_words() {
                Ok(data) => self.queue.push_back(Message::DatasourceLoaded(data)),
                Err(err) => self.queue.push_back(Message::Failed(err)),
            },
            Command::AppendFile { path, data } => {
                if let Err(err) = effects::append_file(&path, &data) {
                    warn!(path = %path.display(), error = %err, "append failed");
                    self.queue.push_back(Message::Failed(err));
                }
            }
            Command::ScheduleInterrupt { delay } => self.wakeups.schedule(after(now, delay)),
            Command::SchedulePeriodicInterrupt { period } => {
                self.wakeups.set_periodic(period, now);
            }
            Command::Exit { status, goodbye } => return Some(ExitRequest { status, goodbye }),
        }
        None
    }
}
