//! The imperative shell: FIFO event delivery and output rendering.
//!
//! The raw input layer (an interrupt handler, a callback, a test
//! script) may live in a different execution context than the
//! controller. Direct re-entrant calls from there into the controller
//! would interleave mutations of the machine state, so this module puts
//! a FIFO channel between the two: producers raise events through a
//! cloneable [`EventSender`], and a single [`EventPump`] drains them one
//! at a time, running each transition to completion before the next
//! event is accepted. Arrival order is preserved and events are never
//! dropped silently: a raise either queues or reports [`PumpClosed`].
//!
//! Rendering goes through the [`Renderer`] seam, fire-and-forget: the
//! pump never learns whether a request was actually shown or performed.

use crate::controller::Controller;
use crate::core::{Event, OutputRequest};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use thiserror::Error;

/// The pump has shut down and can no longer accept events.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("event pump is no longer running")]
pub struct PumpClosed;

/// Presentation layer seam.
///
/// Implementations turn output requests into console text, LED
/// patterns, actuator signals, whatever the deployment has. Requests
/// arrive in emission order.
pub trait Renderer {
    fn render(&mut self, request: &OutputRequest);
}

/// Cloneable handle for raising events from any context.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<Event>,
}

impl EventSender {
    /// Queue one event for the pump, preserving arrival order.
    pub fn raise(&self, event: Event) -> Result<(), PumpClosed> {
        self.tx.send(event).map_err(|_| PumpClosed)
    }
}

/// Single consumer that drains the event queue into the controller and
/// forwards the resulting output requests to the renderer.
///
/// # Example
///
/// ```rust
/// use vendo::catalog::Catalog;
/// use vendo::controller::Controller;
/// use vendo::core::{Event, OutputRequest};
/// use vendo::pump::{EventPump, RecordingRenderer};
///
/// let controller = Controller::new(Catalog::standard());
/// let (mut pump, sender) = EventPump::new(controller, RecordingRenderer::new());
///
/// pump.start();
/// sender.raise(Event::Coin1).unwrap();
/// sender.raise(Event::Browse).unwrap();
/// pump.drain();
///
/// let renderer = pump.into_renderer();
/// assert_eq!(renderer.requests[0], OutputRequest::Welcome);
/// assert_eq!(renderer.requests.len(), 3);
/// ```
pub struct EventPump<R: Renderer> {
    controller: Controller,
    events: Receiver<Event>,
    renderer: R,
}

impl<R: Renderer> EventPump<R> {
    /// Wire a controller and renderer to a fresh queue, returning the
    /// pump and the producer-side handle.
    pub fn new(controller: Controller, renderer: R) -> (Self, EventSender) {
        let (tx, rx) = mpsc::channel();
        let pump = Self {
            controller,
            events: rx,
            renderer,
        };
        (pump, EventSender { tx })
    }

    /// Render the startup announcement. Call once, before any event.
    pub fn start(&mut self) {
        for request in self.controller.start() {
            self.renderer.render(&request);
        }
    }

    /// Process one queued event, if any. Returns whether one was handled.
    pub fn step(&mut self) -> bool {
        match self.events.try_recv() {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => false,
        }
    }

    /// Process every event queued so far without blocking.
    pub fn drain(&mut self) {
        while self.step() {}
    }

    /// Block on the queue and process events until every sender is
    /// dropped. Consumes the pump; the renderer is returned for
    /// inspection.
    pub fn run(mut self) -> R {
        self.start();
        while let Ok(event) = self.events.recv() {
            self.dispatch(event);
        }
        self.renderer
    }

    /// Access the controller (for state inspection between steps).
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Give up the pump, keeping the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn dispatch(&mut self, event: Event) {
        for request in self.controller.handle_event(event) {
            self.renderer.render(&request);
        }
    }
}

/// Renderer that records every request it receives, in order.
///
/// The standard test double for exercising the controller with zero
/// hardware; also handy for demos.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    /// Every request rendered so far, oldest first.
    pub requests: Vec<OutputRequest>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, request: &OutputRequest) {
        self.requests.push(*request);
    }
}
