#![allow(dead_code)]

use inference::{Context, Engine, EngineError, EngineSelector, Keypoint};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    path::{Path, PathBuf},
    rc::Rc,
};

/// Step recorded by the scripted engine, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Create(String),
    LoadModel(PathBuf),
    Probe(String, PathBuf),
    Release,
    SetParameter(String, Vec<i32>),
    LoadImage(PathBuf),
    Run,
    Keypoints(usize),
}

#[derive(Debug, Default)]
pub struct Journal {
    pub events: Vec<Event>,
    pub created: usize,
    pub released: usize,
}

impl Journal {
    pub fn live(&self) -> usize {
        self.created - self.released
    }

    pub fn probes(&self) -> Vec<(String, PathBuf)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Probe(engine, model) => Some((engine.clone(), model.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, wanted: &Event) -> Option<usize> {
        self.events.iter().position(|event| event == wanted)
    }

    pub fn count(&self, wanted: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|event| wanted(event)).count()
    }
}

/// What the engine does when asked. Defaults to every call succeeding.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub create_error: Option<EngineError>,
    pub model_error: Option<EngineError>,
    pub probe_succeeds: bool,
    pub parameter_error: Option<EngineError>,
    pub image_errors: HashMap<PathBuf, EngineError>,
    pub run_error: Option<EngineError>,
    pub decode_error: Option<EngineError>,
    pub keypoints: HashMap<PathBuf, Vec<Keypoint>>,
    /// Count reported by decode regardless of what was written
    pub reported_count: Option<usize>,
}

/// In-memory engine following a [`Script`] and recording every call.
pub struct ScriptedEngine {
    script: Rc<Script>,
    journal: Rc<RefCell<Journal>>,
    clock: Cell<i64>,
}

/// Nanoseconds the scripted clock advances per reading.
pub const TICK_NS: i64 = 250_000;

impl ScriptedEngine {
    pub fn new(script: Script) -> Self {
        Self {
            script: Rc::new(script),
            journal: Rc::new(RefCell::new(Journal::default())),
            clock: Cell::new(0),
        }
    }

    pub fn journal(&self) -> std::cell::Ref<'_, Journal> {
        self.journal.borrow()
    }

    fn context(&self) -> ScriptedContext {
        let mut journal = self.journal.borrow_mut();
        journal.created += 1;
        ScriptedContext {
            script: Rc::clone(&self.script),
            journal: Rc::clone(&self.journal),
            current_image: None,
        }
    }
}

impl Engine for ScriptedEngine {
    type Context = ScriptedContext;

    fn version(&self) -> String {
        "0.0.0-scripted".to_string()
    }

    fn create_context(&self, engine: &EngineSelector) -> Result<ScriptedContext, EngineError> {
        self.journal
            .borrow_mut()
            .events
            .push(Event::Create(engine.to_string()));
        match &self.script.create_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.context()),
        }
    }

    fn probe_model(&self, engine: &EngineSelector, model: &Path) -> Option<ScriptedContext> {
        self.journal
            .borrow_mut()
            .events
            .push(Event::Probe(engine.to_string(), model.to_path_buf()));
        self.script.probe_succeeds.then(|| self.context())
    }

    fn clock_now(&self) -> i64 {
        let now = self.clock.get() + TICK_NS;
        self.clock.set(now);
        now
    }
}

pub struct ScriptedContext {
    script: Rc<Script>,
    journal: Rc<RefCell<Journal>>,
    current_image: Option<PathBuf>,
}

impl ScriptedContext {
    fn record(&self, event: Event) {
        self.journal.borrow_mut().events.push(event);
    }
}

impl Context for ScriptedContext {
    fn load_model_file(&mut self, path: &Path) -> Result<(), EngineError> {
        self.record(Event::LoadModel(path.to_path_buf()));
        match &self.script.model_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn set_parameter_i32(&mut self, name: &str, values: &[i32]) -> Result<(), EngineError> {
        self.record(Event::SetParameter(name.to_string(), values.to_vec()));
        match &self.script.parameter_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn load_image_file(&mut self, path: &Path) -> Result<(), EngineError> {
        self.record(Event::LoadImage(path.to_path_buf()));
        if let Some(error) = self.script.image_errors.get(path) {
            return Err(error.clone());
        }
        self.current_image = Some(path.to_path_buf());
        Ok(())
    }

    fn run_model(&mut self) -> Result<(), EngineError> {
        self.record(Event::Run);
        match &self.script.run_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn keypoints(&mut self, out: &mut [Keypoint]) -> Result<usize, EngineError> {
        self.record(Event::Keypoints(out.len()));
        if let Some(error) = &self.script.decode_error {
            return Err(error.clone());
        }
        let found = self
            .current_image
            .as_ref()
            .and_then(|image| self.script.keypoints.get(image))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let written = found.len().min(out.len());
        out[..written].copy_from_slice(&found[..written]);
        Ok(self.script.reported_count.unwrap_or(found.len()))
    }
}

impl Drop for ScriptedContext {
    fn drop(&mut self) {
        let mut journal = self.journal.borrow_mut();
        journal.released += 1;
        journal.events.push(Event::Release);
    }
}

pub fn engine_error(code: i32, message: &str) -> EngineError {
    EngineError::new(code, message)
}
