//! `Person`, `Population` and the `PopulationSource` seam.

use std::collections::HashMap;

use dp_core::PersonId;

use crate::{Plan, PopulationError, PopulationResult};

// ── Person ────────────────────────────────────────────────────────────────────

/// One agent of the population and all of its plans.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    /// Categorical tag such as `"person"` or `"freight"`.  `None` if the
    /// scenario does not tag this agent.
    pub subpopulation: Option<String>,
    pub plans: Vec<Plan>,
    /// Index into `plans` of the plan that will be executed.
    pub selected_plan: Option<usize>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self { id: id.into(), subpopulation: None, plans: Vec::new(), selected_plan: None }
    }

    pub fn in_subpopulation(mut self, tag: impl Into<String>) -> Self {
        self.subpopulation = Some(tag.into());
        self
    }

    /// Add a plan; the first plan added becomes the selected one.
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.add_plan(plan);
        self
    }

    pub fn add_plan(&mut self, plan: Plan) {
        self.plans.push(plan);
        if self.selected_plan.is_none() {
            self.selected_plan = Some(0);
        }
    }

    pub fn selected(&self) -> Option<&Plan> {
        self.selected_plan.and_then(|i| self.plans.get(i))
    }

    /// `true` if the person carries exactly the subpopulation tag `tag`.
    #[inline]
    pub fn is_in(&self, tag: &str) -> bool {
        self.subpopulation.as_deref() == Some(tag)
    }
}

// ── PopulationSource ──────────────────────────────────────────────────────────

/// Anything that can hand out its persons in a stable order.
///
/// The iteration order must be the same on every call and every run: seeded
/// selection assigns random draws to persons in this order.
pub trait PopulationSource {
    fn person_count(&self) -> usize;

    fn persons(&self) -> impl Iterator<Item = &Person>;

    fn persons_mut(&mut self) -> impl Iterator<Item = &mut Person>;
}

impl PopulationSource for Vec<Person> {
    fn person_count(&self) -> usize {
        self.len()
    }

    fn persons(&self) -> impl Iterator<Item = &Person> {
        self.iter()
    }

    fn persons_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.iter_mut()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// All persons of a scenario, iterated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Population {
    persons: Vec<Person>,
    index:   HashMap<PersonId, usize>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { persons: Vec::with_capacity(n), index: HashMap::with_capacity(n) }
    }

    /// Add a person.  Fails if a person with the same id already exists.
    pub fn add(&mut self, person: Person) -> PopulationResult<()> {
        if self.index.contains_key(&person.id) {
            return Err(PopulationError::DuplicatePerson(person.id));
        }
        self.index.insert(person.id.clone(), self.persons.len());
        self.persons.push(person);
        Ok(())
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.index.get(id).map(|&i| &self.persons[i])
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }
}

impl PartialEq for Population {
    /// Equal if both hold the same persons in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
    }
}

impl PopulationSource for Population {
    fn person_count(&self) -> usize {
        self.persons.len()
    }

    fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    fn persons_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.persons.iter_mut()
    }
}
