//! Pool: entity storage, classifier snapshots, and every selection method.

use std::fmt;

use dpal_core::config::{EntropyWeighting, SelectionConfig};
use dpal_core::errors::{DpalResult, PoolError};
use dpal_core::traits::{Classifier, ConcentrationLink};
use dpal_core::types::{CategoryCounts, Entity, Likelihoods, Prior};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, trace, warn};

use crate::catalog::{Strategy, StrategyCall};
use crate::strategies::wrong::WrongModel;
use crate::strategies::{dirichlet, entropy, outlier, wrong};
use crate::weighted::{self, WeightTransform};

/// A pool of entities awaiting labels.
///
/// Call [`Pool::update`] with the current classifier before any selection
/// that reads likelihoods, counts or categories, and again after storing new
/// entities. Every `select*` removes exactly one entity and returns it; the
/// remaining entities keep their relative order.
pub struct Pool<S, I = String> {
    entities: Vec<Entity<S, I>>,
    prior: Prior,
    counts: CategoryCounts,
    /// `None` until the first update.
    categories: Option<Vec<String>>,
    concentration: Box<dyn ConcentrationLink>,
    rng: Xoshiro256PlusPlus,
    entropy_weighting: EntropyWeighting,
    entropy_floor: f64,
}

impl<S, I> Pool<S, I> {
    /// Create an empty pool with default selection settings and an OS seed.
    pub fn new(concentration: impl ConcentrationLink + 'static) -> Self {
        Self::with_config(concentration, &SelectionConfig::default())
    }

    /// Create an empty pool with a fixed RNG seed.
    pub fn with_seed(concentration: impl ConcentrationLink + 'static, seed: u64) -> Self {
        let config = SelectionConfig {
            seed: Some(seed),
            ..Default::default()
        };
        Self::with_config(concentration, &config)
    }

    /// Create an empty pool from selection config.
    pub fn with_config(
        concentration: impl ConcentrationLink + 'static,
        config: &SelectionConfig,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            entities: Vec::new(),
            prior: Prior::Uniform,
            counts: CategoryCounts::new(),
            categories: None,
            concentration: Box::new(concentration),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            entropy_weighting: config.effective_entropy_weighting(),
            entropy_floor: config.effective_entropy_floor(),
        }
    }

    // ---- Storage & refresh ----

    /// Add a sample. Its likelihoods stay empty until the next update.
    pub fn store(&mut self, sample: S, ident: Option<I>) {
        self.entities.push(Entity::new(sample, ident));
    }

    /// Snapshot the classifier: refresh every entity's likelihoods and
    /// capture the category counts and list. With `track_concentration`, the
    /// concentration link is fed `(categories, total count)`.
    ///
    /// Likelihoods are computed for every entity before anything is
    /// committed, so a classifier failure leaves the pool unchanged.
    pub fn update<C>(&mut self, classifier: &C, track_concentration: bool) -> DpalResult<()>
    where
        C: Classifier<S> + ?Sized,
    {
        let refreshed = self
            .entities
            .iter()
            .map(|e| classifier.likelihoods(&e.sample))
            .collect::<DpalResult<Vec<Likelihoods>>>()?;

        for (entity, likelihoods) in self.entities.iter_mut().zip(refreshed) {
            entity.likelihoods = Some(likelihoods);
        }
        self.counts = classifier.category_counts();
        self.categories = Some(classifier.categories());

        if track_concentration {
            self.concentration
                .update(self.counts.len(), self.counts.total());
        }

        debug!(
            entities = self.entities.len(),
            categories = self.counts.len(),
            total_count = self.counts.total(),
            track_concentration,
            "pool updated"
        );
        Ok(())
    }

    /// Replace the prior with `weights` normalized to sum to 1. Categories
    /// left out weigh 0. On error the previous prior is kept.
    pub fn set_prior<W, K>(&mut self, weights: W) -> DpalResult<()>
    where
        W: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.prior = Prior::normalized(weights)?;
        Ok(())
    }

    /// Restore the uniform prior.
    pub fn clear_prior(&mut self) {
        self.prior = Prior::Uniform;
    }

    // ---- Queries ----

    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn size(&self) -> usize {
        self.entities.len()
    }

    /// The live entities, in insertion order.
    pub fn data(&self) -> &[Entity<S, I>] {
        &self.entities
    }

    /// Categories captured at the last update.
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    /// Category counts captured at the last update.
    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    /// Current Dirichlet-Process concentration.
    pub fn concentration(&self) -> f64 {
        self.concentration.get()
    }

    // ---- Selection ----

    /// Uniformly random entity. Needs no update.
    pub fn select_random(&mut self) -> DpalResult<Entity<S, I>> {
        self.ensure_non_empty()?;
        let pos = self.rng.random_range(0..self.entities.len());
        self.take(Some(pos), "random", None)
    }

    /// Outlier sampling: the entity the known categories explain worst.
    ///
    /// `None` takes the lowest prior-weighted marginal likelihood. `Some(beta)`
    /// draws with weight `exp(-beta · score)`.
    pub fn select_outlier(&mut self, beta: Option<f64>) -> DpalResult<Entity<S, I>> {
        self.ensure_non_empty()?;
        if self.known_categories("outlier")? == 0 {
            return self.degrade_to_random("outlier");
        }

        let scores: Vec<f64> = self
            .scored("outlier")?
            .into_iter()
            .map(|l| outlier::score(l, &self.prior))
            .collect();
        trace!(?scores, "outlier scores");

        let pos = match beta {
            None => weighted::arg_min(&scores),
            Some(beta) => weighted::weighted_draw(
                &scores,
                WeightTransform::ExpDecay { beta },
                &mut self.rng,
            ),
        };
        self.take(pos, "outlier", Some(scores.as_slice()))
    }

    /// Uncertainty sampling on the entropy of the prior-weighted posterior.
    ///
    /// `None` takes the highest entropy. `Some(beta)` draws with weight
    /// `exp(-beta · H)`, or `exp(beta · H)` under inverted entropy weighting.
    /// Entities whose mass is entirely below the entropy floor are never
    /// picked unless nothing else is left.
    pub fn select_entropy(&mut self, beta: Option<f64>) -> DpalResult<Entity<S, I>> {
        self.ensure_non_empty()?;
        if self.known_categories("entropy")? == 0 {
            return self.degrade_to_random("entropy");
        }

        let floor = self.entropy_floor;
        let scores: Vec<f64> = self
            .scored("entropy")?
            .into_iter()
            .map(|l| entropy::entropy(l, &self.prior, floor).unwrap_or(f64::NEG_INFINITY))
            .collect();
        trace!(?scores, "entropy scores");

        let pos = match beta {
            None => weighted::arg_max(&scores),
            Some(beta) => {
                let beta = beta * self.entropy_weighting.sign();
                weighted::weighted_draw(&scores, WeightTransform::ExpDecay { beta }, &mut self.rng)
            }
        };
        self.take(pos, "entropy", Some(scores.as_slice()))
    }

    /// Dirichlet-Process sampling: the entity most likely to belong to a
    /// category nobody has labelled yet.
    ///
    /// `hard_choice` takes the highest P(new); otherwise P(new) itself is the
    /// draw weight.
    pub fn select_dp(&mut self, hard_choice: bool) -> DpalResult<Entity<S, I>> {
        self.ensure_non_empty()?;
        self.known_categories("p_new")?;

        let concentration = self.concentration.get();
        let scores: Vec<f64> = self
            .scored("p_new")?
            .into_iter()
            .map(|l| dirichlet::p_new(l, &self.counts, concentration))
            .collect();
        trace!(?scores, concentration, "p_new scores");

        let pos = if hard_choice {
            weighted::arg_max(&scores)
        } else {
            weighted::weighted_draw(&scores, WeightTransform::Identity, &mut self.rng)
        };
        self.take(pos, "p_new", Some(scores.as_slice()))
    }

    /// Misclassification sampling: the entity the classifier is most likely
    /// to get wrong.
    ///
    /// `soft_select` models a classifier that samples its prediction rather
    /// than taking the mode. `dp` adds the chance that the entity belongs to
    /// an unseen category, which the classifier can never predict.
    /// `hard_choice` takes the highest P(wrong); otherwise P(wrong) is the
    /// draw weight.
    pub fn select_wrong(
        &mut self,
        soft_select: bool,
        hard_choice: bool,
        dp: bool,
    ) -> DpalResult<Entity<S, I>> {
        self.ensure_non_empty()?;
        if self.known_categories("p_wrong")? == 0 && !dp {
            return self.degrade_to_random("p_wrong");
        }

        let model = WrongModel { soft_select, dp };
        let concentration = self.concentration.get();
        let scores: Vec<f64> = self
            .scored("p_wrong")?
            .into_iter()
            .map(|l| wrong::p_wrong(l, &self.prior, &self.counts, concentration, model))
            .collect();
        trace!(?scores, ?model, "p_wrong scores");

        let pos = if hard_choice {
            weighted::arg_max(&scores)
        } else {
            weighted::weighted_draw(&scores, WeightTransform::Identity, &mut self.rng)
        };
        self.take(pos, "p_wrong", Some(scores.as_slice()))
    }

    /// Select by catalog name. Unknown names fail without touching the pool.
    pub fn select(&mut self, name: &str) -> DpalResult<Entity<S, I>> {
        let strategy: Strategy = name.parse()?;
        self.select_strategy(strategy)
    }

    /// Select with a catalog strategy.
    pub fn select_strategy(&mut self, strategy: Strategy) -> DpalResult<Entity<S, I>> {
        match strategy.call() {
            StrategyCall::Random => self.select_random(),
            StrategyCall::Outlier => self.select_outlier(None),
            StrategyCall::Entropy => self.select_entropy(None),
            StrategyCall::New { hard_choice } => self.select_dp(hard_choice),
            StrategyCall::Wrong {
                soft_select,
                hard_choice,
                dp,
            } => self.select_wrong(soft_select, hard_choice, dp),
        }
    }

    // ---- Internals ----

    fn ensure_non_empty(&self) -> DpalResult<()> {
        if self.entities.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        Ok(())
    }

    /// Number of categories from the last update.
    fn known_categories(&self, strategy: &str) -> DpalResult<usize> {
        self.categories
            .as_ref()
            .map(Vec::len)
            .ok_or_else(|| PoolError::InvalidState {
                reason: format!("{strategy} selection requires an update first"),
            })
    }

    /// Likelihoods of every entity, or InvalidState if any entity was stored
    /// after the last update.
    fn scored(&self, strategy: &str) -> DpalResult<Vec<&Likelihoods>> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| {
                e.likelihoods
                    .as_ref()
                    .ok_or_else(|| PoolError::InvalidState {
                        reason: format!(
                            "{strategy} selection: entity {i} was stored after the last update"
                        ),
                    })
            })
            .collect()
    }

    fn degrade_to_random(&mut self, strategy: &str) -> DpalResult<Entity<S, I>> {
        warn!(strategy, "no known categories, selecting at random");
        self.select_random()
    }

    /// Remove the chosen entity, preserving the order of the rest.
    fn take(
        &mut self,
        pos: Option<usize>,
        strategy: &str,
        scores: Option<&[f64]>,
    ) -> DpalResult<Entity<S, I>> {
        let pos = pos
            .filter(|&p| p < self.entities.len())
            .ok_or(PoolError::EmptyPool)?;
        let score = scores.and_then(|s| s.get(pos).copied());
        let entity = self.entities.remove(pos);
        debug!(
            strategy,
            index = pos,
            score,
            remaining = self.entities.len(),
            "entity selected"
        );
        Ok(entity)
    }
}

impl<S, I: PartialEq + fmt::Debug> Pool<S, I> {
    /// Uniformly random entity among those whose identifier equals `ident`.
    ///
    /// Typically used when identifiers are the true categories, to force the
    /// first draw for methods that cannot make one.
    pub fn select_random_ident(&mut self, ident: &I) -> DpalResult<Entity<S, I>> {
        self.ensure_non_empty()?;
        let matching: Vec<usize> = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.ident.as_ref() == Some(ident))
            .map(|(i, _)| i)
            .collect();
        if matching.is_empty() {
            return Err(PoolError::NoMatch {
                ident: format!("{ident:?}"),
            });
        }
        let pos = matching[self.rng.random_range(0..matching.len())];
        self.take(Some(pos), "random_ident", None)
    }
}

impl<S: fmt::Debug, I: fmt::Debug> fmt::Debug for Pool<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("entities", &self.entities)
            .field("prior", &self.prior)
            .field("counts", &self.counts)
            .field("categories", &self.categories)
            .field("concentration", &self.concentration.get())
            .finish_non_exhaustive()
    }
}
