//! Recording event sink for integration tests.
//!
//! The engine takes ownership of its sinks, so the recorder shares its
//! log through an `Rc<RefCell<..>>` the test keeps a handle to.

use std::cell::RefCell;
use std::rc::Rc;

use purrfect::app::events::{EngineEvent, Snapshot};
use purrfect::app::ports::EventSink;
use purrfect::app::service::InteractionController;
use purrfect::config::EngineConfig;

#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<(EngineEvent, Snapshot)>>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EngineEvent> {
        self.log.borrow().iter().map(|(e, _)| e.clone()).collect()
    }

    pub fn last_snapshot(&self) -> Option<Snapshot> {
        self.log.borrow().last().map(|(_, s)| s.clone())
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Live handles to the shared log, this one included.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.log)
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl EventSink for Recorder {
    fn emit(&mut self, event: &EngineEvent, snapshot: &Snapshot) {
        self.log.borrow_mut().push((event.clone(), snapshot.clone()));
    }
}

/// Started engine with default config and a recorder attached.
pub fn make_engine() -> (InteractionController, Recorder) {
    make_engine_with(EngineConfig::default())
}

pub fn make_engine_with(config: EngineConfig) -> (InteractionController, Recorder) {
    let mut engine = InteractionController::new(config).expect("valid config");
    let recorder = Recorder::new();
    engine.subscribe(recorder.clone());
    engine.start().expect("start");
    (engine, recorder)
}
