//! Model acquisition: load the model on the requested engine, and when that
//! fails let the engine probe for a variant that can run it.
//!
//! ```text
//! Direct ──ok──────────────────────────▶ Loaded
//!    │
//!    └─err─▶ Probing ──context found───▶ Loaded
//!                 │
//!                 └──nothing found─────▶ Failed (direct-load error)
//! ```

use crate::{Context, Engine, EngineSelector, InferError};
use std::path::{Path, PathBuf};

/// How the context in an [`Acquired`] was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The requested engine loaded the model as is
    Direct,
    /// The engine probe found a compatible configuration
    Probed,
}

/// A context holding a loaded model, ready for configuration.
pub struct Acquired<C> {
    context: C,
    route: Route,
}

impl<C> Acquired<C> {
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn into_context(self) -> C {
        self.context
    }
}

enum State<C> {
    Direct,
    Probing(InferError),
    Loaded(C, Route),
    Failed(InferError),
}

/// Acquire a context with `model` loaded, falling back to the engine probe.
///
/// The context from a failed direct load is released before probing, so at
/// most one context is alive at any time. When the probe also fails the
/// error from the direct attempt is returned.
pub fn acquire<E: Engine>(
    engine: &E,
    selector: &EngineSelector,
    model: &Path,
) -> Result<Acquired<E::Context>, InferError> {
    let mut state = State::Direct;
    loop {
        state = match state {
            State::Direct => match load_direct(engine, selector, model) {
                Ok(context) => State::Loaded(context, Route::Direct),
                Err(error) => State::Probing(error),
            },
            State::Probing(direct_error) => {
                log::debug!("probing {} engines for {}", selector, model.display());
                match engine.probe_model(selector, model) {
                    Some(context) => {
                        log::warn!(
                            "loaded {} through engine probe after direct load failed: {}",
                            model.display(),
                            direct_error
                        );
                        State::Loaded(context, Route::Probed)
                    }
                    None => State::Failed(direct_error),
                }
            }
            State::Loaded(context, route) => {
                log::info!("model {} loaded on {} ({:?})", model.display(), selector, route);
                return Ok(Acquired { context, route });
            }
            State::Failed(error) => return Err(error),
        };
    }
}

fn load_direct<E: Engine>(
    engine: &E,
    selector: &EngineSelector,
    model: &Path,
) -> Result<E::Context, InferError> {
    let mut context = engine
        .create_context(selector)
        .map_err(|source| InferError::EngineUnavailable {
            engine: selector.to_string(),
            source,
        })?;

    match context.load_model_file(model) {
        Ok(()) => Ok(context),
        Err(source) => {
            // release before the probe creates its own context
            drop(context);
            Err(InferError::ModelLoad {
                path: PathBuf::from(model),
                source,
            })
        }
    }
}
