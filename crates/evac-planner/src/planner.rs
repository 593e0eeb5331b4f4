//! The evacuation planner: generation, filtering, concurrent routing, and
//! selection for one hazard zone.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use tokio_util::sync::CancellationToken;

use evac_core::{CoreError, GeoPoint, HazardDataset, HazardZone};
use evac_route::{RouteClient, RouteResult, RoutingError, TravelMode};

use crate::plan::{CandidateStatus, EvacuationPlan, PlanState, Resolution, RouteCandidate};
use crate::{PlanError, PlanResult, PlannerConfig, candidates, emission, filter, select_min_emission};

/// Computes evacuation plans against an injected routing capability.
///
/// # Type parameter
///
/// `C` must implement [`RouteClient`].  Swap it at compile time for a
/// different provider binding (or a scripted test double) with no runtime
/// overhead.
///
/// # Concurrency
///
/// Each plan is an independent value; the planner holds no cross-plan
/// mutable state, so one planner may drive any number of plans from
/// separate tasks.
pub struct EvacuationPlanner<C: RouteClient> {
    /// The routing capability.
    pub client: C,
}

impl<C: RouteClient> EvacuationPlanner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Compute the lowest-emission safe route out of `origin`.
    ///
    /// Walks the plan through `GeneratingCandidates` and `AwaitingRoutes` to
    /// a `Resolved` state:
    ///
    /// 1. Generate `config.candidate_count` destinations around the zone
    ///    perimeter at `radius + margin` km.
    /// 2. Mark candidates inside any *other* zone of `snapshot` as
    ///    `RejectedUnsafe`; they are never routed.
    /// 3. Issue one routing request per surviving candidate, at most
    ///    `config.concurrency_limit` in flight, each under
    ///    `config.route_timeout`.  Every completion settles exactly its own
    ///    candidate.
    /// 4. Wait for all issued requests to settle (success or failure) —
    ///    never first-result-wins.
    /// 5. Select the minimum-emission success, ties to the smallest index.
    ///
    /// The plan locks onto `snapshot` for its whole lifetime; concurrent
    /// dataset refreshes cannot change its filtering or selection.
    ///
    /// # Cancellation
    ///
    /// When `cancel` fires mid-flight the planner stops observing: remaining
    /// results are dropped, unsettled candidates stay `Pending`, and the
    /// plan is returned still in `AwaitingRoutes` with no winner selected.
    ///
    /// # Errors
    ///
    /// Only a malformed origin zone fails the call.  Per-candidate routing
    /// errors are recorded on their candidates, and a plan where nothing
    /// succeeded resolves to `NoneFound` — both are normal outcomes.
    pub async fn plan_evacuation(
        &self,
        origin:   HazardZone,
        snapshot: Arc<HazardDataset>,
        config:   &PlannerConfig,
        cancel:   &CancellationToken,
    ) -> PlanResult<EvacuationPlan> {
        origin.center.validate()?;
        if !(origin.radius_km.is_finite() && origin.radius_km > 0.0) {
            return Err(PlanError::InvalidOrigin(CoreError::InvalidRadius(origin.radius_km)));
        }

        let mut plan = EvacuationPlan::idle(origin.clone(), snapshot.snapshot_id);

        // ── Generate candidates ───────────────────────────────────────────
        plan.state = PlanState::GeneratingCandidates;
        tracing::debug!(
            zone = %origin.id,
            snapshot = snapshot.snapshot_id,
            count = config.candidate_count,
            margin_km = config.margin_km,
            "generating evacuation candidates"
        );
        plan.candidates = candidates::generate(
            origin.center,
            origin.radius_km,
            config.margin_km,
            config.candidate_count,
        )
        .into_iter()
        .enumerate()
        .map(|(index, destination)| RouteCandidate::pending(index, destination))
        .collect();

        // Safety filter against the locked snapshot.  The origin zone is
        // excluded: the margin already places every candidate beyond it.
        for candidate in &mut plan.candidates {
            if !filter::is_safe_excluding(candidate.destination, &snapshot.zones, origin.id) {
                candidate.status = CandidateStatus::RejectedUnsafe;
            }
        }

        // ── Fan out routing requests ──────────────────────────────────────
        plan.state = PlanState::AwaitingRoutes;
        let surviving: Vec<(usize, GeoPoint)> = plan
            .candidates
            .iter()
            .filter(|c| c.status == CandidateStatus::Pending)
            .map(|c| (c.index, c.destination))
            .collect();
        tracing::debug!(
            zone = %origin.id,
            surviving = surviving.len(),
            rejected = plan.candidates.len() - surviving.len(),
            "awaiting routes"
        );

        let client = &self.client;
        let origin_center = origin.center;
        let route_timeout = config.route_timeout;

        let mut results = stream::iter(surviving)
            .map(|(index, destination)| async move {
                let outcome = match tokio::time::timeout(
                    route_timeout,
                    client.compute_route(origin_center, destination, TravelMode::Driving),
                )
                .await
                {
                    Ok(outcome) => outcome,
                    Err(_elapsed) => Err(RoutingError::Timeout),
                };
                (index, outcome)
            })
            .buffer_unordered(config.concurrency_limit.unwrap_or(usize::MAX));

        // Completion barrier: every issued request settles (success or
        // failure) before the plan leaves AwaitingRoutes.  Each index is
        // written exactly once, by its own completion.
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(zone = %origin.id, "plan abandoned, dropping remaining results");
                    return Ok(plan);
                }
                next = results.next() => match next {
                    Some((index, outcome)) => settle(
                        &mut plan.candidates[index],
                        outcome,
                        config.emission_factor_kg_per_km,
                    ),
                    None => break,
                },
            }
        }

        // ── Selection ─────────────────────────────────────────────────────
        match select_min_emission(&plan.candidates) {
            Some(index) => {
                let chosen = plan.candidates[index].clone();
                tracing::info!(
                    zone = %origin.id,
                    index,
                    distance_km = ?chosen.distance_km,
                    emissions_kg_co2 = ?chosen.emissions_kg_co2,
                    "minimum-emission route chosen"
                );
                plan.chosen = Some(chosen);
                plan.state = PlanState::Resolved(Resolution::Chosen);
            }
            None => {
                tracing::info!(zone = %origin.id, "no safe route found");
                plan.state = PlanState::Resolved(Resolution::NoneFound);
            }
        }
        Ok(plan)
    }
}

/// Record one settled routing outcome on its candidate.
fn settle(
    candidate:        &mut RouteCandidate,
    outcome:          Result<RouteResult, RoutingError>,
    factor_kg_per_km: f64,
) {
    debug_assert_eq!(candidate.status, CandidateStatus::Pending);
    match outcome {
        Ok(result) => match result.distance_km() {
            Some(distance_km) => {
                candidate.distance_km = Some(distance_km);
                candidate.emissions_kg_co2 = Some(emission::estimate(distance_km, factor_kg_per_km));
                candidate.status = CandidateStatus::Succeeded;
            }
            None => {
                tracing::warn!(index = candidate.index, "provider returned an empty route set");
                candidate.status = CandidateStatus::Failed(RoutingError::NotFound);
            }
        },
        Err(error) => {
            tracing::warn!(index = candidate.index, %error, "candidate routing failed");
            candidate.status = CandidateStatus::Failed(error);
        }
    }
}
