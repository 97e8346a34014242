//! Incremental closure over `(value, mask)` states.
//!
//! Every raw input starts as a leaf state in the frontier queue. Each dequeued
//! state is combined with every disjoint state reachable at that moment, under
//! the six operator attempts, and each new result is recorded together with the
//! two states and the operator that produced it.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::expression::Operator;
use crate::solver::constants::MASK_BITS;
use crate::solver::errors::SolverError;
use crate::solver::state::StateKey;
use crate::utils::validate_numbers;

/// Operator attempts per pair. `true` marks the swapped form `other op current`.
const ATTEMPTS: [(Operator, bool); 6] = [
    (Operator::Add, false),
    (Operator::Sub, false),
    (Operator::Sub, true),
    (Operator::Mul, false),
    (Operator::Div, false),
    (Operator::Div, true),
];

/// How a non-leaf state was built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent {
    pub left: StateKey,
    pub right: StateKey,
    pub op: Operator,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States in the reachable set, leaves included
    pub discovered: usize,
    /// States taken from the frontier queue
    pub expanded: usize,
    /// Operator attempts on disjoint pairs
    pub combinations: usize,
}

/// Search state for a single solve request
#[derive(Debug, Clone)]
pub struct Explorer {
    target: StateKey,
    /// Reachable states in discovery order
    discovered: Vec<StateKey>,
    /// Reachable states mapped to their parent record; `None` for leaves
    states: HashMap<StateKey, Option<Parent>>,
    queue: VecDeque<StateKey>,
    stats: SearchStats,
}

impl Explorer {
    /// Seed the reachable set and frontier queue with one leaf per input.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs do not fit the mask or could overflow
    /// `u64` during the search.
    pub fn new(numbers: &[u64], target: u64) -> Result<Self, SolverError> {
        validate_numbers(numbers, MASK_BITS)?;

        let mut explorer = Self {
            target: StateKey::target(target, numbers.len()),
            discovered: Vec::with_capacity(numbers.len()),
            states: HashMap::with_capacity(numbers.len()),
            queue: VecDeque::with_capacity(numbers.len()),
            stats: SearchStats::default(),
        };

        for (index, &value) in numbers.iter().enumerate() {
            explorer.insert(StateKey::leaf(index, value), None);
        }

        debug!(
            "Seeded {} leaf states, target state {}",
            explorer.discovered.len(),
            explorer.target
        );
        Ok(explorer)
    }

    fn insert(&mut self, key: StateKey, parent: Option<Parent>) -> bool {
        match self.states.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(parent);
                self.discovered.push(key);
                self.queue.push_back(key);
                self.stats.discovered += 1;
                true
            }
        }
    }

    /// Expand one state from the frontier queue. Returns `false` once the queue is empty.
    pub fn step(&mut self) -> bool {
        let Some(current) = self.queue.pop_front() else {
            return false;
        };
        self.stats.expanded += 1;

        // States found while expanding `current` are not paired with it in this pass.
        let snapshot = self.discovered.len();
        for index in 0..snapshot {
            let Some(&other) = self.discovered.get(index) else {
                break;
            };
            if !current.mask().is_disjoint(other.mask()) {
                continue;
            }
            let mask = current.mask().union(other.mask());

            for (op, swapped) in ATTEMPTS {
                self.stats.combinations += 1;
                let (left, right) = if swapped {
                    (other, current)
                } else {
                    (current, other)
                };
                let Some(value) = op.apply(left.value(), right.value()) else {
                    continue;
                };

                let key = StateKey::new(value, mask);
                if self.insert(key, Some(Parent { left, right, op })) {
                    trace!("Discovered {} = {} {} {}", key, left, op, right);
                }
            }
        }

        true
    }

    /// Expand states until the target is reached or the queue drains.
    ///
    /// Returns the target state if it is reachable.
    pub fn run(&mut self) -> Option<StateKey> {
        while !self.is_reached() && self.step() {}

        debug!(
            "Search finished: {} states discovered, {} expanded, {} combinations tried",
            self.stats.discovered, self.stats.expanded, self.stats.combinations
        );

        self.is_reached().then_some(self.target)
    }

    pub fn is_reached(&self) -> bool {
        self.states.contains_key(&self.target)
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.states.contains_key(key)
    }

    /// Parent record of a reachable state; `None` for leaves and unknown states
    pub fn parent(&self, key: &StateKey) -> Option<Parent> {
        self.states.get(key).copied().flatten()
    }

    pub fn target(&self) -> StateKey {
        self.target
    }

    /// Reachable states in the order they were discovered
    pub fn discovered(&self) -> &[StateKey] {
        &self.discovered
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
