//! Verification and repair
//!
//! After a full pass, every subsystem that was expected but left no cabinet
//! in the output is regenerated, a bounded number of times. What cannot be
//! repaired is recorded as a [`LayoutError::MissingSubsystem`].

use crate::context::GenerationContext;
use cabinetkit_core::{LayoutError, LayoutResult, Subsystem};
use tracing::{error, info, warn};

/// Something that can (re)build one subsystem into a context
pub trait SubsystemGenerator {
    /// Whether the configuration asks for this subsystem at all
    fn is_expected(&self, subsystem: Subsystem) -> bool;

    /// Build the subsystem and return how many instances were added
    fn generate_subsystem(
        &self,
        subsystem: Subsystem,
        ctx: &mut GenerationContext,
    ) -> LayoutResult<usize>;
}

#[derive(Debug, Clone, Copy)]
pub struct Supervisor {
    max_attempts: u32,
}

impl Supervisor {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Regenerate one subsystem until it produces output
    ///
    /// Returns the number of attempts used. Warnings of a failed attempt are
    /// withdrawn; when every attempt fails, only the last one's are kept.
    pub fn attempt<G: SubsystemGenerator + ?Sized>(
        &self,
        generator: &G,
        subsystem: Subsystem,
        ctx: &mut GenerationContext,
    ) -> LayoutResult<u32> {
        let mut pending = Vec::new();
        let mut cause = None;
        for attempt in 1..=self.max_attempts {
            let mark = ctx.warning_mark();
            match generator.generate_subsystem(subsystem, ctx) {
                Ok(count) if count > 0 => {
                    info!(%subsystem, attempt, count, "subsystem repaired");
                    return Ok(attempt);
                }
                Ok(_) => {
                    warn!(%subsystem, attempt, "repair produced no cabinets");
                    cause = None;
                }
                Err(e) => {
                    warn!(%subsystem, attempt, error = %e, "repair attempt failed");
                    cause = Some(Box::new(e));
                }
            }
            pending = ctx.take_warnings_since(mark);
        }
        ctx.warn_all(pending);
        Err(LayoutError::MissingSubsystem {
            subsystem,
            attempts: self.max_attempts,
            cause,
        })
    }

    /// Subsystems that were expected but have no cabinets in the output
    pub fn missing<G: SubsystemGenerator + ?Sized>(
        &self,
        generator: &G,
        ctx: &GenerationContext,
    ) -> Vec<Subsystem> {
        Subsystem::ALL
            .into_iter()
            .filter(|s| generator.is_expected(*s) && ctx.output.count(*s) == 0)
            .collect()
    }

    /// Check every subsystem and repair the missing ones
    ///
    /// Returns the subsystems that are still missing afterwards; each is
    /// also recorded as a failure on the context.
    pub fn verify_and_repair<G: SubsystemGenerator + ?Sized>(
        &self,
        generator: &G,
        ctx: &mut GenerationContext,
    ) -> Vec<Subsystem> {
        let mut unresolved = Vec::new();
        for subsystem in self.missing(generator, ctx) {
            warn!(%subsystem, "expected subsystem missing from output");
            if let Err(e) = self.attempt(generator, subsystem, ctx) {
                error!(%subsystem, error = %e, "subsystem could not be repaired");
                ctx.record_failure(e);
                unresolved.push(subsystem);
            }
        }
        unresolved
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(1)
    }
}
