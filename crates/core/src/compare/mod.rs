//! The change-detection engine.
//!
//! Given a "before" and "after" snapshot of a route graph, produces the
//! minimal ordered sequence of commit items sufficient to reconstruct what
//! changed, at what granularity, and in what order. Pure and synchronous:
//! two snapshots in, one flat item list out, no state between calls.

pub mod feature;
pub mod layer;
pub mod property;
mod reconcile;
pub mod route;
mod rules;

use serde::{Deserialize, Serialize};

use crate::commit::CommitItem;
use crate::models::{PartialRoute, PartialRouteFeature, PartialRouteLayer};

pub use feature::compare_features;
pub use layer::compare_layers;
pub use route::compare_routes;

/// One full snapshot of a route graph: the route record plus the flattened
/// layer and feature collections. Layers and features must carry stable ids
/// to be matched across snapshots; an id-less entity is always treated as a
/// pure add or remove.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSnapshot {
    pub route: PartialRoute,
    pub layers: Vec<PartialRouteLayer>,
    pub features: Vec<PartialRouteFeature>,
}

/// Compute the commit items describing the difference between two snapshots.
///
/// Output ordering is fixed: route items first, then layer items, then
/// feature items; within each collection group, removals and updates in prev
/// order followed by additions in next order.
pub fn compare_commits(prev: &RouteSnapshot, next: &RouteSnapshot) -> Vec<CommitItem> {
    let mut items = compare_routes(&prev.route, &next.route);

    for (prev_layer, next_layer) in reconcile::reconcile(&prev.layers, &next.layers, |l| {
        l.id.as_ref()
    }) {
        items.extend(compare_layers(prev_layer, next_layer));
    }

    for (prev_feature, next_feature) in
        reconcile::reconcile(&prev.features, &next.features, |f| f.id.as_ref())
    {
        items.extend(compare_features(prev_feature, next_feature));
    }

    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
