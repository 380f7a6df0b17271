//! The step navigator state machine.

use crate::{
    BackControl, ForwardControl, NavigationState, Position, Progress, StepControls, Transition,
};
use guidepost_core::{Guide, GuideKind, Section, SectionId, Step};
use guidepost_error::{NavigationError, NavigationErrorKind};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Walks the sections of a guide one step at a time.
///
/// States are the hub (no section selected) and `InSection(section, index)`.
/// Forward moves follow a step's `next_step_id` if it resolves, otherwise the
/// next ordinal step; branch moves jump to a choice target. Every forward or
/// branch move pushes the position it left onto the history stack, so
/// [`go_prev`](Self::go_prev) undoes moves exactly, including across branches.
///
/// Invalid section or step ids come from content defects, never from user
/// input. The lenient operations log a warning and do nothing; the `try_*`
/// variants return a [`NavigationError`] for callers that want to fail fast.
///
/// # Examples
///
/// ```
/// use guidepost_core::{Guide, Section, StepBuilder};
/// use guidepost_navigator::StepNavigator;
/// use std::sync::Arc;
///
/// let steps = ["a", "b", "c"]
///     .iter()
///     .map(|id| StepBuilder::default().id(*id).title(*id).build().unwrap())
///     .collect();
/// let guide = Guide::new("Demo", vec![Section::new("demo", "Demo", steps)]);
///
/// let mut nav = StepNavigator::new(Arc::new(guide));
/// nav.select_section("demo");
/// nav.go_next();
/// assert_eq!(nav.current_step().map(|s| s.id().as_str()), Some("b"));
/// nav.go_prev();
/// assert_eq!(nav.current_index(), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct StepNavigator {
    guide: Arc<Guide>,
    state: NavigationState,
}

impl StepNavigator {
    /// Creates a navigator at the hub.
    pub fn new(guide: Arc<Guide>) -> Self {
        Self {
            guide,
            state: NavigationState::default(),
        }
    }

    /// The guide being navigated.
    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Currently selected section.
    pub fn current_section(&self) -> Option<&Section> {
        self.state
            .section_id()
            .and_then(|id| self.guide.section(id.as_str()))
    }

    /// Currently displayed step.
    pub fn current_step(&self) -> Option<&Step> {
        let index = self.state.step_index()?;
        self.current_section()?.step(index)
    }

    /// Index of the current step within its section.
    pub fn current_index(&self) -> Option<usize> {
        self.state.step_index()
    }

    /// Returns true if the current step is a branch point.
    ///
    /// Callers use this to hide the default forward control.
    pub fn has_choices(&self) -> bool {
        self.current_step().is_some_and(Step::has_choices)
    }

    /// Returns true on the first step of a section.
    pub fn is_first_step(&self) -> bool {
        self.current_step().is_some() && self.state.step_index() == Some(0)
    }

    /// Returns true on the last step of a section.
    pub fn is_last_step(&self) -> bool {
        match (self.current_section(), self.state.step_index()) {
            (Some(section), Some(index)) => section.last_index() == Some(index),
            _ => false,
        }
    }

    /// Position of the current step within its section.
    pub fn progress(&self) -> Option<Progress> {
        let section = self.current_section()?;
        let index = self.state.step_index()?;
        Some(Progress {
            index,
            total: section.len(),
        })
    }

    /// Back and forward affordances for the current step.
    pub fn controls(&self) -> StepControls {
        let Some(step) = self.current_step() else {
            return StepControls::HIDDEN;
        };

        let forward = if step.has_choices() {
            ForwardControl::Choices
        } else if self.forward_target().is_some() {
            ForwardControl::Next
        } else {
            ForwardControl::Finish
        };

        let back = if self.can_go_back() {
            BackControl::Previous
        } else {
            BackControl::Hub
        };

        StepControls { back, forward }
    }

    /// Returns true if [`go_prev`](Self::go_prev) would move.
    pub fn can_go_back(&self) -> bool {
        !self.state.history().is_empty() || self.state.step_index().is_some_and(|i| i > 0)
    }

    /// Enters a section at its first step, clearing history.
    ///
    /// # Errors
    ///
    /// Returns an error if the section does not exist or has no steps.
    #[instrument(skip(self))]
    pub fn try_select_section(&mut self, section_id: &str) -> Result<Transition, NavigationError> {
        let section = self.guide.section(section_id).ok_or_else(|| {
            NavigationError::new(NavigationErrorKind::UnknownSection(section_id.to_string()))
        })?;
        if section.is_empty() {
            return Err(NavigationError::new(NavigationErrorKind::EmptySection(
                section_id.to_string(),
            )));
        }
        let id: SectionId = section.id().clone();

        let from = self.state.current().clone();
        self.state.enter(id, 0);
        debug!(section = section_id, "Entered section");
        Ok(self.transition_from(from))
    }

    /// Enters a section; unknown ids are logged and ignored.
    pub fn select_section(&mut self, section_id: &str) -> Option<Transition> {
        self.try_select_section(section_id)
            .map_err(|e| warn!(error = %e, "Ignoring section selection"))
            .ok()
    }

    /// Enters a section directly at a given step, with empty history.
    ///
    /// Used for deep links. Backing out walks the ordinal order one step at
    /// a time since no moves were recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the section or step does not exist.
    #[instrument(skip(self))]
    pub fn try_open_at(
        &mut self,
        section_id: &str,
        step_id: &str,
    ) -> Result<Transition, NavigationError> {
        let section = self.guide.section(section_id).ok_or_else(|| {
            NavigationError::new(NavigationErrorKind::UnknownSection(section_id.to_string()))
        })?;
        let index = section.index_of(step_id).ok_or_else(|| {
            NavigationError::new(NavigationErrorKind::UnknownStep {
                section: section_id.to_string(),
                step: step_id.to_string(),
            })
        })?;
        let id = section.id().clone();

        let from = self.state.current().clone();
        self.state.enter(id, index);
        debug!(section = section_id, step = step_id, "Opened section at step");
        Ok(self.transition_from(from))
    }

    /// Enters a section at a given step; unknown ids are logged and ignored.
    pub fn open_at(&mut self, section_id: &str, step_id: &str) -> Option<Transition> {
        self.try_open_at(section_id, step_id)
            .map_err(|e| warn!(error = %e, "Ignoring deep link"))
            .ok()
    }

    /// Moves forward: to `next_step_id` if it resolves, else to the next step.
    ///
    /// No-op at the hub and on the last step when there is no override.
    /// Choice steps are not special-cased; hosts should not offer a forward
    /// control there (see [`has_choices`](Self::has_choices)).
    #[instrument(skip(self))]
    pub fn go_next(&mut self) -> Option<Transition> {
        let step = self.current_step()?;
        if let Some(next) = step.next_step_id()
            && self
                .current_section()
                .is_some_and(|s| s.index_of(next.as_str()).is_none())
        {
            warn!(
                step = %step.id(),
                next_step_id = %next,
                "next_step_id does not resolve; falling back to sequential order"
            );
        }

        let Some(target) = self.forward_target() else {
            debug!("Already at last step");
            return None;
        };
        let from = self.state.current().clone();
        self.state.advance_to(target);
        debug!(index = target, "Moved forward");
        Some(self.transition_from(from))
    }

    /// Moves back: pops history, else steps back one, else does nothing.
    ///
    /// Returning `None` signals that the section cannot be backed out of any
    /// further; the caller decides whether to [`reset_to_hub`](Self::reset_to_hub).
    #[instrument(skip(self))]
    pub fn go_prev(&mut self) -> Option<Transition> {
        let from = self.state.current().clone();
        if !self.state.retreat() {
            debug!("Cannot go back further");
            return None;
        }
        debug!(to = ?self.state.step_index(), "Moved back");
        Some(self.transition_from(from))
    }

    /// Jumps to a step of the current section by id, recording history.
    ///
    /// # Errors
    ///
    /// Returns an error if no section is selected or the target does not
    /// exist in the current section.
    #[instrument(skip(self))]
    pub fn try_select_choice(&mut self, target_step_id: &str) -> Result<Transition, NavigationError> {
        let section = self
            .current_section()
            .ok_or_else(|| NavigationError::new(NavigationErrorKind::NoSection))?;
        let target = section.index_of(target_step_id).ok_or_else(|| {
            NavigationError::new(NavigationErrorKind::UnknownStep {
                section: section.id().to_string(),
                step: target_step_id.to_string(),
            })
        })?;

        let from = self.state.current().clone();
        self.state.advance_to(target);
        debug!(target_step_id, index = target, "Took branch");
        Ok(self.transition_from(from))
    }

    /// Jumps to a choice target; unknown targets are logged and ignored.
    pub fn select_choice(&mut self, target_step_id: &str) -> Option<Transition> {
        self.try_select_choice(target_step_id)
            .map_err(|e| warn!(error = %e, "Ignoring choice"))
            .ok()
    }

    /// Selects the current step's choice at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no step is displayed, the index is out of range,
    /// or the choice target does not resolve.
    pub fn try_choose(&mut self, index: usize) -> Result<Transition, NavigationError> {
        let step = self
            .current_step()
            .ok_or_else(|| NavigationError::new(NavigationErrorKind::NoSection))?;
        let target = step
            .choice(index)
            .ok_or_else(|| {
                NavigationError::new(NavigationErrorKind::NoSuchChoice {
                    step: step.id().to_string(),
                    index,
                })
            })?
            .go_to()
            .clone();
        self.try_select_choice(target.as_str())
    }

    /// Jumps to the step at `index` in the current section.
    ///
    /// This is slide-deck navigation: history is cleared and the direction
    /// is forward when the target lies after the current step, backward
    /// otherwise. Jumping to the current step is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if no section is selected or the index is out of
    /// range.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<Option<Transition>, NavigationError> {
        let section = self
            .current_section()
            .ok_or_else(|| NavigationError::new(NavigationErrorKind::NoSection))?;
        if index >= section.len() {
            return Err(NavigationError::new(NavigationErrorKind::StepOutOfRange {
                section: section.id().to_string(),
                index,
            }));
        }
        if self.state.step_index() == Some(index) {
            return Ok(None);
        }

        let from = self.state.current().clone();
        self.state.jump_to(index);
        debug!(index, "Jumped to step");
        Ok(Some(self.transition_from(from)))
    }

    /// Jumps to a step by position; out-of-range indexes are logged and ignored.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        self.try_jump_to(index)
            .map_err(|e| warn!(error = %e, "Ignoring jump"))
            .ok()
            .flatten()
    }

    /// Returns to the hub, clearing the section and history.
    ///
    /// Idempotent: at the hub this only re-asserts the backward direction
    /// and returns `None`.
    #[instrument(skip(self))]
    pub fn reset_to_hub(&mut self) -> Option<Transition> {
        let from = self.state.current().clone();
        self.state.clear();
        if from.is_none() {
            return None;
        }
        debug!("Returned to hub");
        Some(self.transition_from(from))
    }

    /// Enters the only section of a deck; guides stay at the hub.
    pub fn start(&mut self) -> Option<Transition> {
        if *self.guide.kind() != GuideKind::Deck {
            return None;
        }
        let first = self.guide.section_at(0)?.id().clone();
        self.select_section(first.as_str())
    }

    /// Index `go_next` would move to, without logging.
    fn forward_target(&self) -> Option<usize> {
        let section = self.current_section()?;
        let index = self.state.step_index()?;
        let step = section.step(index)?;

        if let Some(next) = step.next_step_id()
            && let Some(target) = section.index_of(next.as_str())
        {
            return Some(target);
        }
        (index + 1 < section.len()).then_some(index + 1)
    }

    fn transition_from(&self, from: Option<Position>) -> Transition {
        Transition::new(from, self.state.current().clone(), *self.state.direction())
    }
}
