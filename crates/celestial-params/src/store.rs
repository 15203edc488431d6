//! The live parameter store shared by the synthesis engine, the render
//! consumer and the edit surface
//!
//! Writes come from two places only: a whole-set [`ParameterStore::replace`]
//! after synthesis, or a by-name [`ParameterStore::set`] from the edit surface.
//! Manual edits are clamped, run through the registered propagation rules in
//! the same call and then broadcast to subscribers.

use std::fmt;

use tracing::{debug, warn};

use crate::error::ParamError;
use crate::parameter_set::ParameterSet;
use crate::registry;
use crate::values::ParamValue;

/// A derived-value rule run after every manual edit
///
/// Implementations rewrite whatever depends on `source` and return the names of
/// the parameters they touched.
pub trait Propagation {
    fn propagate(&self, params: &mut ParameterSet, source: &str) -> Vec<&'static str>;
}

/// Where a change notification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The parameter the edit surface wrote
    Edit,
    /// A parameter rewritten by a propagation rule
    Derived,
}

/// Notification delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct ParamChange {
    pub name: &'static str,
    pub value: ParamValue,
    pub origin: ChangeOrigin,
}

/// Result of a successful manual edit
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// Canonical name of the written parameter
    pub name: &'static str,
    /// The value actually stored, after clamping
    pub applied: ParamValue,
    /// True if the requested value was outside the edit range
    pub clamped: bool,
    /// Parameters rewritten by propagation rules
    pub derived: Vec<&'static str>,
}

impl EditOutcome {
    pub fn touched(&self, name: &str) -> bool {
        self.name == name || self.derived.iter().any(|d| *d == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ParamChange)>;

pub struct ParameterStore {
    params: ParameterSet,
    rules: Vec<Box<dyn Propagation>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ParameterStore {
    pub fn new(params: ParameterSet) -> Self {
        Self {
            params,
            rules: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current parameter values
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn add_rule(&mut self, rule: Box<dyn Propagation>) {
        self.rules.push(rule);
    }

    /// Register a per-parameter change listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ParamChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn get(&self, name: &str) -> Result<ParamValue, ParamError> {
        registry::get(&self.params, name)
    }

    /// Manual edit by name
    ///
    /// The value is type-checked and clamped to the parameter's edit range.
    /// On error the store is left untouched.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<EditOutcome, ParamError> {
        let spec =
            registry::spec(name).ok_or_else(|| ParamError::UnknownParameter(name.to_string()))?;
        if !spec.writable {
            return Err(ParamError::ReadOnly(spec.name.to_string()));
        }

        let applied = spec.coerce(value)?;
        let clamped = applied != value;
        if clamped {
            warn!(parameter = spec.name, requested = ?value, applied = ?applied, "edit clamped");
        }
        spec.write(&mut self.params, applied);

        let mut derived: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            for name in rule.propagate(&mut self.params, spec.name) {
                if !derived.contains(&name) {
                    derived.push(name);
                }
            }
        }
        if !derived.is_empty() {
            debug!(source = spec.name, ?derived, "propagated edit");
        }

        let mut changes = vec![ParamChange {
            name: spec.name,
            value: applied,
            origin: ChangeOrigin::Edit,
        }];
        changes.extend(derived.iter().filter_map(|d| registry::spec(d)).map(|s| ParamChange {
            name: s.name,
            value: s.get(&self.params),
            origin: ChangeOrigin::Derived,
        }));
        self.notify(&changes);

        Ok(EditOutcome {
            name: spec.name,
            applied,
            clamped,
            derived,
        })
    }

    /// Swap in a complete parameter set, returning the previous one
    ///
    /// Used after synthesis. Subscribers are not notified per parameter; the
    /// caller refreshes the edit surface in bulk.
    pub fn replace(&mut self, next: ParameterSet) -> ParameterSet {
        std::mem::replace(&mut self.params, next)
    }

    /// Frame clock: set the shader time and spin the atmosphere shell
    pub fn advance_frame(&mut self, elapsed_seconds: f64, spin: f64) {
        let atmosphere = &mut self.params.atmosphere;
        atmosphere.time = elapsed_seconds;
        atmosphere.rotation += spin;
    }

    fn notify(&mut self, changes: &[ParamChange]) {
        for (_, listener) in self.subscribers.iter_mut() {
            for change in changes {
                listener(change);
            }
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}

impl fmt::Debug for ParameterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterStore")
            .field("params", &self.params)
            .field("rules", &self.rules.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
