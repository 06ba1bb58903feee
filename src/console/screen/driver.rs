//! Runs screen commands on the runtime and folds their results back in.

use tokio::runtime::Handle;

use crate::console::api::{ApiClient, ApiError};
use crate::console::screen::{execute, Command, CrudScreen, Entity, Outcome, SubmitRejected};
use crate::console::task::TaskQueue;

/// A [`CrudScreen`] plus the client and queue that carry out its commands
pub struct ScreenTask<E: Entity> {
    pub screen: CrudScreen<E>,
    client: ApiClient,
    queue: TaskQueue<Outcome<E>>,
}

impl<E: Entity> ScreenTask<E> {
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        Self {
            screen: CrudScreen::new(),
            client,
            queue: TaskQueue::new(runtime),
        }
    }

    /// Fetch the list, as when the screen is navigated to
    pub fn mount(&mut self) {
        let command = self.screen.mount();
        self.dispatch(command);
    }

    /// Submit the open dialog. Validation failures stay in the dialog.
    pub fn submit(&mut self) {
        match self.screen.submit() {
            Ok(command) => self.dispatch(command),
            Err(SubmitRejected::Invalid(e)) => {
                tracing::debug!("{} form rejected: {}", E::NOUN, e);
            }
            Err(rejected) => tracing::debug!("{} submit ignored: {:?}", E::NOUN, rejected),
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(command) = self.screen.confirm_delete() {
            self.dispatch(command);
        }
    }

    /// Apply results that arrived since the last frame
    pub fn poll(&mut self) {
        for outcome in self.queue.drain() {
            if let Some(next) = self.screen.apply(outcome) {
                self.dispatch(next);
            }
        }
    }

    fn dispatch(&mut self, command: Command<E>) {
        tracing::debug!("{}", command.describe());
        let client = self.client.clone();
        self.queue
            .spawn(async move { execute::<E>(&client, command).await });
    }
}

/// Read-only list used to populate a selector on another screen
pub struct Lookup<E: Entity> {
    options: Vec<E::Record>,
    generation: u64,
    client: ApiClient,
    queue: TaskQueue<(u64, Result<Vec<E::Record>, ApiError>)>,
}

impl<E: Entity> Lookup<E> {
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        Self {
            options: Vec::new(),
            generation: 0,
            client,
            queue: TaskQueue::new(runtime),
        }
    }

    pub fn options(&self) -> &[E::Record] {
        &self.options
    }

    /// A fetch is still in flight
    pub fn is_loading(&self) -> bool {
        self.queue.is_busy()
    }

    pub fn load(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        self.queue.spawn(async move {
            (generation, client.get::<Vec<E::Record>>(E::COLLECTION).await)
        });
    }

    pub fn poll(&mut self) {
        for (generation, result) in self.queue.drain() {
            if generation != self.generation {
                continue;
            }
            match result {
                Ok(options) => self.options = options,
                Err(e) => tracing::error!("Failed to fetch {} options: {}", E::NOUN, e),
            }
        }
    }
}
