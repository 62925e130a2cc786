//! CSV population writer, the inverse of [`crate::loader`].

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::loader::{HEADER, PlanRecord};
use crate::{PlanElement, PopulationResult, PopulationSource};

/// Write every person of `population` to a CSV plan file at `path`,
/// replacing any existing file.
pub fn write_population_csv<P: PopulationSource>(path: &Path, population: &P) -> PopulationResult<()> {
    let file = std::fs::File::create(path)?;
    write_population_writer(file, population)
}

/// Like [`write_population_csv`] but accepts any `Write` sink.
pub fn write_population_writer<W: Write, P: PopulationSource>(
    sink: W,
    population: &P,
) -> PopulationResult<()> {
    // Header is written by hand so an empty population still gets one.
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(HEADER)?;

    for person in population.persons() {
        if person.plans.is_empty() {
            writer.serialize(PlanRecord {
                person_id:     person.id.to_string(),
                subpopulation: person.subpopulation.clone(),
                ..PlanRecord::default()
            })?;
            continue;
        }

        for (plan_idx, plan) in person.plans.iter().enumerate() {
            let selected = Some(u8::from(person.selected_plan == Some(plan_idx)));
            if plan.is_empty() {
                // Placeholder row: declares the plan without an element.
                writer.serialize(PlanRecord {
                    person_id:     person.id.to_string(),
                    subpopulation: person.subpopulation.clone(),
                    plan:          Some(plan_idx),
                    selected,
                    ..PlanRecord::default()
                })?;
                continue;
            }
            for element in &plan.elements {
                let mut record = PlanRecord {
                    person_id:     person.id.to_string(),
                    subpopulation: person.subpopulation.clone(),
                    plan:          Some(plan_idx),
                    selected,
                    ..PlanRecord::default()
                };
                match element {
                    PlanElement::Activity(a) => {
                        record.kind          = Some("act".into());
                        record.activity_type = Some(a.kind.clone());
                        record.link          = a.link.as_ref().map(|l| l.to_string());
                        record.end_time      = a.end_time;
                    }
                    PlanElement::Leg(l) => {
                        record.kind           = Some("leg".into());
                        record.mode           = Some(l.mode.to_string());
                        record.routing_mode   = l.routing_mode.as_ref().map(|m| m.to_string());
                        record.departure_time = l.departure_time;
                        record.travel_time    = l.travel_time;
                    }
                }
                writer.serialize(record)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
