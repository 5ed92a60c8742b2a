use std::collections::VecDeque;

use crate::{
    context::{GenericPropagator, PropagatorState, ReasonStream},
    db::LevelIndex,
    misc::log::targets::{self},
    procedures::propagate::PropagationResult,
    structures::literal::{CLiteral, Literal},
};

use super::ExternalPropagator;

impl<R: rand::Rng + std::default::Default> ExternalPropagator for GenericPropagator<R> {
    fn notify_assignment(&mut self, literal: CLiteral, is_fixed: bool) {
        if !self.is_built() {
            return;
        }
        let Some(info) = self.state.var_index.get_mut(literal.atom()) else {
            return;
        };
        if is_fixed {
            info.fixed = true;
        }

        log::trace!(target: targets::CALLBACK, "Assignment {literal} (fixed: {is_fixed})");
        self.counters.assignments += 1;
        self.assignment.assign(literal, &self.state.var_index);
        if !is_fixed {
            self.trail.store_assignment(literal);
        }
    }

    fn notify_new_decision_level(&mut self) {
        self.trail.push_level();
        if let PropagatorState::HasDecision(_) = self.status {
            self.status = PropagatorState::Idle;
        }
    }

    fn notify_backtrack(&mut self, level: LevelIndex) {
        self.backjump(level);
    }

    fn cb_check_found_model(&mut self, model: &[CLiteral]) -> bool {
        log::info!(target: targets::CALLBACK, "Model of {} literals", model.len());
        true
    }

    fn cb_decide(&mut self) -> CLiteral {
        if !self.is_built() || !self.config.branching.value || self.status != PropagatorState::Idle {
            return 0;
        }
        self.soft_refresh();

        match self.make_decision() {
            Some(decision) => {
                self.counters.decisions += 1;
                self.status = PropagatorState::HasDecision(decision);
                decision
            }
            None => 0,
        }
    }

    fn cb_propagate(&mut self) -> CLiteral {
        if !self.is_built() {
            return 0;
        }

        loop {
            if let PropagatorState::HasPropagation(batch) = &mut self.status {
                while let Some(literal) = batch.pop_front() {
                    if self.assignment.literal_value(literal) == Some(true) {
                        continue;
                    }
                    log::trace!(target: targets::CALLBACK, "Propagating {literal}");
                    self.counters.propagations += 1;
                    return literal;
                }
                self.status = PropagatorState::Idle;
            }

            if self.status != PropagatorState::Idle {
                return 0;
            }

            self.soft_refresh();
            match self.propagate() {
                PropagationResult::Nothing => return 0,

                PropagationResult::Literals(literals) => {
                    let mut batch = VecDeque::with_capacity(literals.len());
                    for (literal, reason) in literals {
                        self.reasons.insert(literal, reason);
                        batch.push_back(literal);
                    }
                    self.status = PropagatorState::HasPropagation(batch);
                }

                PropagationResult::Conflict(clause) => {
                    log::trace!(target: targets::CALLBACK, "Conflict {clause:?}");
                    self.status = PropagatorState::HasExternalClause { clause, index: 0 };
                    return 0;
                }
            }
        }
    }

    fn cb_add_reason_clause_lit(&mut self, propagated: CLiteral) -> CLiteral {
        let fresh = match &self.reason_stream {
            Some(stream) => stream.literal != propagated,
            None => true,
        };
        if fresh {
            let Some(clause) = self.reasons.get(&propagated) else {
                panic!("! No reason for {propagated}");
            };
            self.reason_stream = Some(ReasonStream {
                literal: propagated,
                clause: clause.clone(),
                index: 0,
            });
            self.counters.reasons += 1;
        }

        let Some(stream) = &mut self.reason_stream else {
            return 0;
        };
        match stream.clause.get(stream.index).copied() {
            Some(literal) => {
                stream.index += 1;
                literal
            }
            None => {
                self.reason_stream = None;
                0
            }
        }
    }

    fn cb_has_external_clause(&mut self) -> bool {
        match self.status {
            PropagatorState::HasExternalClause { .. } => return true,
            PropagatorState::Idle if self.is_built() => {}
            _ => return false,
        }

        self.clause_queries += 1;
        if self.clause_queries % self.config.two_bit_interval.value.max(1) != 0 {
            return false;
        }
        self.soft_refresh();
        match self.check_two_bit() {
            Some(clause) => {
                self.status = PropagatorState::HasExternalClause { clause, index: 0 };
                true
            }
            None => false,
        }
    }

    fn cb_add_external_clause_lit(&mut self) -> CLiteral {
        let PropagatorState::HasExternalClause { clause, index } = &mut self.status else {
            return 0;
        };
        match clause.get(*index).copied() {
            Some(literal) => {
                *index += 1;
                literal
            }
            None => {
                self.status = PropagatorState::Idle;
                0
            }
        }
    }
}
