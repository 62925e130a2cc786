//! CSV population loader.
//!
//! # CSV format
//!
//! One row per plan element, in plan order.  Rows of the same person need not
//! be contiguous, but persons are kept in order of their first row, and that
//! order is the population's iteration order.
//!
//! ```csv
//! person_id,subpopulation,plan,selected,kind,activity_type,link,end_time,mode,routing_mode,departure_time,travel_time
//! p1,person,0,1,act,home,l1,28800,,,,
//! p1,person,0,1,leg,,,,walk,pt,28800,300
//! p1,person,0,1,act,pt interaction,l2,,,,,
//! p1,person,0,1,leg,,,,pt,pt,,900
//! p1,person,0,1,act,work,l3,,,,,
//! f7,freight,,,,,,,,,,
//! ```
//!
//! **`kind`** field:
//!
//! | Value    | Meaning                                               |
//! |----------|-------------------------------------------------------|
//! | `act`    | Activity; `activity_type` required                    |
//! | `leg`    | Leg; `mode` required                                  |
//! | *empty*  | With `plan` empty: registers a person without plans.  |
//! |          | With `plan` set: declares that plan (possibly empty). |
//!
//! Plan indices start at 0 and each new index of a person must be exactly one
//! past the highest seen so far.  `selected` is `1` on the rows of the
//! selected plan.  Persons with plans but no selected row get plan 0 selected.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dp_core::{LinkId, Mode, PersonId};

use crate::{Activity, Leg, Person, Plan, PlanElement, Population, PopulationError, PopulationResult};

pub(crate) const HEADER: [&str; 12] = [
    "person_id",
    "subpopulation",
    "plan",
    "selected",
    "kind",
    "activity_type",
    "link",
    "end_time",
    "mode",
    "routing_mode",
    "departure_time",
    "travel_time",
];

// ── CSV record ────────────────────────────────────────────────────────────────

/// One row of the plan file.  Shared with the writer.
#[derive(Deserialize, Serialize, Default)]
pub(crate) struct PlanRecord {
    pub person_id:      String,
    pub subpopulation:  Option<String>,
    pub plan:           Option<usize>,
    pub selected:       Option<u8>,
    pub kind:           Option<String>,
    pub activity_type:  Option<String>,
    pub link:           Option<String>,
    pub end_time:       Option<f64>,
    pub mode:           Option<String>,
    pub routing_mode:   Option<String>,
    pub departure_time: Option<f64>,
    pub travel_time:    Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Population`] from a CSV plan file.
pub fn load_population_csv(path: &Path) -> PopulationResult<Population> {
    let file = std::fs::File::open(path).map_err(PopulationError::Io)?;
    load_population_reader(file)
}

/// Like [`load_population_csv`] but accepts any `Read` source.
pub fn load_population_reader<R: Read>(reader: R) -> PopulationResult<Population> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut persons: Vec<Person> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for (i, result) in csv_reader.deserialize::<PlanRecord>().enumerate() {
        let row = result.map_err(|e| PopulationError::Parse(e.to_string()))?;
        // Header is line 1.
        let line = i + 2;

        let slot = match by_id.get(&row.person_id) {
            Some(&slot) => slot,
            None => {
                by_id.insert(row.person_id.clone(), persons.len());
                persons.push(Person::new(PersonId::new(row.person_id.clone())));
                persons.len() - 1
            }
        };
        apply_row(&mut persons[slot], row, line)?;
    }

    let mut population = Population::with_capacity(persons.len());
    for mut person in persons {
        if person.selected_plan.is_none() && !person.plans.is_empty() {
            person.selected_plan = Some(0);
        }
        population.add(person)?;
    }
    Ok(population)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn apply_row(person: &mut Person, row: PlanRecord, line: usize) -> PopulationResult<()> {
    if let Some(tag) = row.subpopulation {
        match &person.subpopulation {
            None => person.subpopulation = Some(tag),
            Some(existing) if *existing == tag => {}
            Some(existing) => {
                return Err(parse_err(line, format!(
                    "person {} tagged both {existing:?} and {tag:?}",
                    person.id
                )));
            }
        }
    }

    let Some(plan_idx) = row.plan else {
        if row.kind.is_some() {
            return Err(parse_err(line, "plan index missing".into()));
        }
        return Ok(());
    };
    // Plans are numbered densely in order of first appearance.
    let plan_count = person.plans.len();
    if plan_idx > plan_count {
        return Err(parse_err(line, format!(
            "plan index {plan_idx} out of order: person {} has {plan_count} plans so far",
            person.id
        )));
    }
    if plan_idx == plan_count {
        person.plans.push(Plan::new());
    }
    if row.selected == Some(1) {
        person.selected_plan = Some(plan_idx);
    }

    let Some(kind) = row.kind else {
        return Ok(());
    };

    let element = match kind.trim() {
        "act" => {
            let activity_type = row
                .activity_type
                .ok_or_else(|| parse_err(line, "activity row without activity_type".into()))?;
            PlanElement::Activity(Activity {
                kind:     activity_type,
                link:     row.link.map(LinkId::new),
                end_time: row.end_time,
            })
        }
        "leg" => {
            let mode = row
                .mode
                .ok_or_else(|| parse_err(line, "leg row without mode".into()))?;
            PlanElement::Leg(Leg {
                mode:           Mode::new(mode),
                routing_mode:   row.routing_mode.map(Mode::new),
                departure_time: row.departure_time,
                travel_time:    row.travel_time,
            })
        }
        other => {
            return Err(parse_err(line, format!(
                "invalid kind {other:?}: expected \"act\", \"leg\" or empty"
            )));
        }
    };

    person.plans[plan_idx].push(element);
    Ok(())
}

fn parse_err(line: usize, msg: String) -> PopulationError {
    PopulationError::Parse(format!("line {line}: {msg}"))
}
