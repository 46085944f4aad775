//! Generation context
//!
//! One generation run threads a single [`GenerationContext`] through every
//! builder call. It owns the append-only project output, the per-subsystem
//! display counters and everything that went wrong along the way. Counters
//! survive a repair pass, so retried subsystems keep numbering upward.

use crate::cabinet::CabinetInstance;
use cabinetkit_core::{GenerationWarning, LayoutError, Panel, Subsystem};
use serde::Serialize;
use std::collections::BTreeMap;

/// Every cabinet produced by a run, in build order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectOutput {
    instances: Vec<CabinetInstance>,
}

impl ProjectOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: CabinetInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[CabinetInstance] {
        &self.instances
    }

    pub fn of(&self, subsystem: Subsystem) -> impl Iterator<Item = &CabinetInstance> {
        self.instances
            .iter()
            .filter(move |instance| instance.subsystem == subsystem)
    }

    pub fn count(&self, subsystem: Subsystem) -> usize {
        self.of(subsystem).count()
    }

    /// Instances grouped by subsystem tag, each group in build order
    pub fn groups(&self) -> BTreeMap<Subsystem, Vec<&CabinetInstance>> {
        let mut groups: BTreeMap<Subsystem, Vec<&CabinetInstance>> = BTreeMap::new();
        for instance in &self.instances {
            groups.entry(instance.subsystem).or_default().push(instance);
        }
        groups
    }

    /// Every panel of every instance in absolute coordinates
    pub fn absolute_panels(&self) -> Vec<Panel> {
        self.instances
            .iter()
            .flat_map(|instance| instance.absolute_panels())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Mutable state of one generation run
#[derive(Debug, Default)]
pub struct GenerationContext {
    pub output: ProjectOutput,
    counters: BTreeMap<Subsystem, u32>,
    warnings: Vec<GenerationWarning>,
    failures: Vec<LayoutError>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next display index for a subsystem, starting at 1
    pub fn next_index(&mut self, subsystem: Subsystem) -> u32 {
        let counter = self.counters.entry(subsystem).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Last index handed out for a subsystem
    pub fn current_index(&self, subsystem: Subsystem) -> u32 {
        self.counters.get(&subsystem).copied().unwrap_or(0)
    }

    pub fn warn(&mut self, warning: GenerationWarning) {
        self.warnings.push(warning);
    }

    pub fn warn_all(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
        self.warnings.extend(warnings);
    }

    /// Position in the warning list, to stage the warnings of one attempt
    pub fn warning_mark(&self) -> usize {
        self.warnings.len()
    }

    /// Remove and return the warnings recorded since `mark`
    pub fn take_warnings_since(&mut self, mark: usize) -> Vec<GenerationWarning> {
        if mark >= self.warnings.len() {
            return Vec::new();
        }
        self.warnings.split_off(mark)
    }

    pub fn record_failure(&mut self, error: LayoutError) {
        self.failures.push(error);
    }

    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    pub fn failures(&self) -> &[LayoutError] {
        &self.failures
    }

    /// Start a new run; counters restart as well
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn into_parts(self) -> (ProjectOutput, Vec<GenerationWarning>, Vec<LayoutError>) {
        (self.output, self.warnings, self.failures)
    }
}
