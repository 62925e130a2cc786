//! Seeded person selection and plan rewrite.

use dp_core::{DemandConfig, ScenarioRng};
use dp_population::{PopulationSource, StageActivityDecomposer, TripDecomposer};

use crate::collapse::trips_to_legs;
use crate::observer::{DemandObserver, DemandSummary, NoopDemandObserver};
use crate::DemandResult;

/// Rewrites the plans of a seeded random subset of persons so that every
/// trip becomes one leg of the target mode.
///
/// The configuration is validated once in [`new`](Self::new); `run` itself
/// cannot fail, so a population is either left untouched (invalid config) or
/// fully processed.
///
/// # Example
///
/// ```rust,ignore
/// let transformer = DemandTransformer::new(config)?;
/// let mut rng = ScenarioRng::new(transformer.config().seed);
/// let summary = transformer.run(&mut population, &mut rng, &mut NoopDemandObserver);
/// ```
pub struct DemandTransformer<D: TripDecomposer = StageActivityDecomposer> {
    config:     DemandConfig,
    decomposer: D,
}

impl DemandTransformer<StageActivityDecomposer> {
    pub fn new(config: DemandConfig) -> DemandResult<Self> {
        Self::with_decomposer(config, StageActivityDecomposer)
    }
}

impl<D: TripDecomposer> DemandTransformer<D> {
    /// Use a custom trip decomposer.
    pub fn with_decomposer(config: DemandConfig, decomposer: D) -> DemandResult<Self> {
        config.validate()?;
        Ok(Self { config, decomposer })
    }

    pub fn config(&self) -> &DemandConfig {
        &self.config
    }

    /// Visit every person of `population` in its iteration order.
    ///
    /// - Persons outside `config.subpopulation` are skipped without a draw.
    /// - Every other person consumes exactly one draw from `rng` and is
    ///   selected if the draw is below `config.selection_probability`.
    /// - Every plan of a selected person has its trips collapsed and all of
    ///   its legs set to `config.target_mode` (mode and routing mode).
    ///
    /// The caller holds `&mut` on the population for the whole call; nothing
    /// else can observe a half-transformed population.
    pub fn run<P, O>(&self, population: &mut P, rng: &mut ScenarioRng, observer: &mut O) -> DemandSummary
    where
        P: PopulationSource,
        O: DemandObserver + ?Sized,
    {
        let target = &self.config.target_mode;
        let probability = self.config.selection_probability;
        let mut summary = DemandSummary::default();

        for person in population.persons_mut() {
            summary.persons += 1;

            if !person.is_in(&self.config.subpopulation) {
                observer.on_person_skipped(person);
                continue;
            }
            summary.eligible += 1;

            let draw = rng.next_f64();
            if draw >= probability {
                continue;
            }
            summary.selected += 1;
            observer.on_person_selected(&person.id, draw);

            for plan in &mut person.plans {
                let trips = trips_to_legs(plan, &self.decomposer);
                for leg in plan.legs_mut() {
                    leg.set_modes(target);
                }
                summary.plans_rewritten += 1;
                summary.trips_collapsed += trips;
                observer.on_plan_collapsed(&person.id, trips);
            }
        }

        observer.on_demand_end(&summary);
        summary
    }
}

/// Select persons with a fresh generator seeded from `config.seed` and
/// rewrite their plans in place.
///
/// Fails only on an invalid configuration, before touching the population.
pub fn transform_demand<P: PopulationSource>(
    population: &mut P,
    config: &DemandConfig,
) -> DemandResult<()> {
    let transformer = DemandTransformer::new(config.clone())?;
    let mut rng = ScenarioRng::new(config.seed);
    transformer.run(population, &mut rng, &mut NoopDemandObserver);
    Ok(())
}
