use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, EventSink};
use crate::progress::{self, GoalOverview};
use crate::rewards;
use crate::schedule;
use crate::selection::GoalSelection;
use crate::utils::{ClockTrait, IdProviderTrait};

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Single owner of the goal collection.
///
/// Every mutation holds the write lock for its full duration and
/// re-derives the current milestone on entry, so reentrant calls can
/// never both succeed against a stale index. The collection is saved
/// through the repository port after each mutation; a failed save
/// degrades to in-memory operation instead of failing the mutation.
pub struct GoalService {
    state: RwLock<StoreState>,
    repository: Arc<dyn GoalRepositoryTrait>,
    clock: Arc<dyn ClockTrait>,
    ids: Arc<dyn IdProviderTrait>,
    events: Arc<dyn EventSink>,
}

struct StoreState {
    goals: Vec<Goal>,
    selection: GoalSelection,
}

impl GoalService {
    /// Creates the store, loading the persisted collection.
    ///
    /// A failed load is reported and the session starts empty; the
    /// selection is reconciled against whatever was loaded.
    pub fn new(
        repository: Arc<dyn GoalRepositoryTrait>,
        clock: Arc<dyn ClockTrait>,
        ids: Arc<dyn IdProviderTrait>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let goals = match repository.load_goals() {
            Ok(goals) => goals,
            Err(e) => {
                warn!("Failed to load stored goals, starting empty: {}", e);
                events.emit(DomainEvent::storage_degraded(e.to_string()));
                Vec::new()
            }
        };
        let mut selection = GoalSelection::new();
        selection.reconcile(&goals);

        GoalService {
            state: RwLock::new(StoreState { goals, selection }),
            repository,
            clock,
            ids,
            events,
        }
    }

    fn persist(&self, goals: &[Goal]) {
        if let Err(e) = self.repository.save_goals(goals) {
            warn!("Durable save failed, continuing in-memory: {}", e);
            self.events.emit(DomainEvent::storage_degraded(e.to_string()));
        }
    }

    fn validate_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(trimmed.to_string())
    }

    fn validate_amount(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "goal amount must be positive, got {}",
                amount
            ))
            .into());
        }
        Ok(())
    }

    /// Recomputes the completed flag as full schedule coverage.
    fn recompute_completed(goal: &mut Goal) {
        let sched = schedule::generate_schedule(goal);
        goal.completed = progress::current_index(&sched).is_none();
    }

    fn position(goals: &[Goal], goal_id: &str) -> Result<usize> {
        goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| Error::NotFound(goal_id.to_string()))
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.state.read().unwrap().goals.clone())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let state = self.state.read().unwrap();
        let pos = Self::position(&state.goals, goal_id)?;
        Ok(state.goals[pos].clone())
    }

    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let name = Self::validate_name(&new_goal.name)?;
        Self::validate_amount(new_goal.amount)?;

        let mut state = self.state.write().unwrap();
        let goal = Goal {
            id: self.ids.next_id(),
            name,
            amount: new_goal.amount,
            frequency: new_goal.frequency,
            start_date: new_goal.start_date.unwrap_or_else(|| self.clock.today()),
            due_date: new_goal.due_date,
            steps_completed: Vec::new(),
            completed: false,
            celebrated: false,
        };
        debug!(
            "Creating {} goal '{}' ({})",
            goal.frequency.as_str(),
            goal.name,
            goal.id
        );

        state.goals.push(goal.clone());
        state.selection.select(goal.id.clone());
        self.persist(&state.goals);

        let mut events = vec![DomainEvent::goals_changed(vec![goal.id.clone()])];
        for badge in rewards::badges_unlocked_at(state.goals.len()) {
            events.push(DomainEvent::badge_unlocked(badge.label, badge.unlock_at));
        }
        self.events.emit_batch(events);

        Ok(goal)
    }

    fn edit_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        let name = update.name.as_deref().map(Self::validate_name).transpose()?;
        if let Some(amount) = update.amount {
            Self::validate_amount(amount)?;
        }

        let mut state = self.state.write().unwrap();
        let pos = Self::position(&state.goals, goal_id)?;
        {
            let goal = &mut state.goals[pos];
            if let Some(name) = name {
                goal.name = name;
            }
            if let Some(amount) = update.amount {
                goal.amount = amount;
            }
            if let Some(frequency) = update.frequency {
                goal.frequency = frequency;
            }
            if let Some(start_date) = update.start_date {
                goal.start_date = start_date;
            }
            if let Some(due_date) = update.due_date {
                goal.due_date = due_date;
            }
        }
        // Contribution history is kept as raw amounts; reinterpreting it
        // against the edited schedule may move the current milestone in
        // either direction.
        Self::recompute_completed(&mut state.goals[pos]);

        let updated = state.goals[pos].clone();
        debug!("Edited goal '{}' ({})", updated.name, updated.id);
        self.persist(&state.goals);
        self.events
            .emit(DomainEvent::goals_changed(vec![updated.id.clone()]));

        Ok(updated)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let mut state = self.state.write().unwrap();
        let state = &mut *state;
        let pos = Self::position(&state.goals, goal_id)?;
        let removed = state.goals.remove(pos);
        debug!("Deleted goal '{}' ({})", removed.name, removed.id);

        state.selection.clear_if(&removed.id);
        state.selection.reconcile(&state.goals);

        self.persist(&state.goals);
        self.events
            .emit(DomainEvent::goals_changed(vec![removed.id]));

        Ok(())
    }

    fn complete_milestone(&self, goal_id: &str, milestone_index: usize) -> Result<Goal> {
        let mut state = self.state.write().unwrap();
        let pos = Self::position(&state.goals, goal_id)?;

        // The current index is re-derived here, never taken from the
        // caller, so a stale view cannot complete the wrong stone.
        let sched = schedule::generate_schedule(&state.goals[pos]);
        match progress::current_index(&sched) {
            None => {
                return Err(Error::InvalidTransition(format!(
                    "goal {} is already fully completed",
                    goal_id
                )))
            }
            Some(current) if current != milestone_index => {
                return Err(Error::InvalidTransition(format!(
                    "milestone {} is not up next for goal {} (current is {})",
                    milestone_index, goal_id, current
                )))
            }
            Some(_) => {}
        }

        let stone_amount = sched[milestone_index].amount;
        let was_complete = state.goals[pos].completed;
        state.goals[pos].steps_completed.push(stone_amount);
        Self::recompute_completed(&mut state.goals[pos]);

        let updated = state.goals[pos].clone();
        debug!(
            "Completed milestone {} of goal '{}' ({})",
            milestone_index, updated.name, updated.id
        );
        self.persist(&state.goals);

        let mut events = vec![DomainEvent::milestone_completed(
            updated.id.clone(),
            milestone_index,
        )];
        if !was_complete && updated.completed {
            events.push(DomainEvent::goal_completed(updated.id.clone()));
        }
        self.events.emit_batch(events);

        Ok(updated)
    }

    fn overview(&self, goal_id: &str) -> Result<GoalOverview> {
        let mut state = self.state.write().unwrap();
        let pos = Self::position(&state.goals, goal_id)?;

        let celebrate = {
            let goal = &mut state.goals[pos];
            if rewards::should_celebrate(goal) {
                goal.celebrated = true;
                true
            } else {
                false
            }
        };
        if celebrate {
            self.persist(&state.goals);
        }

        let goal = state.goals[pos].clone();
        let sched = schedule::generate_schedule(&goal);
        let prog = progress::progress(&goal, &sched);
        let level = rewards::level_info(rewards::xp(&state.goals));

        Ok(GoalOverview {
            schedule: sched,
            progress: prog,
            badges: rewards::unlocked_badges(state.goals.len()),
            uniforms: rewards::unlocked_uniforms(level.level),
            level,
            celebrate,
            goal,
        })
    }

    fn take_celebration(&self, goal_id: &str) -> Result<bool> {
        let mut state = self.state.write().unwrap();
        let pos = Self::position(&state.goals, goal_id)?;

        let goal = &mut state.goals[pos];
        if !rewards::should_celebrate(goal) {
            return Ok(false);
        }
        goal.celebrated = true;
        self.persist(&state.goals);
        Ok(true)
    }

    fn select_goal(&self, goal_id: &str) -> Result<()> {
        let mut state = self.state.write().unwrap();
        Self::position(&state.goals, goal_id)?;
        state.selection.select(goal_id);
        Ok(())
    }

    fn active_goal_id(&self) -> Option<String> {
        self.state
            .read()
            .unwrap()
            .selection
            .active_goal_id()
            .map(str::to_string)
    }
}
