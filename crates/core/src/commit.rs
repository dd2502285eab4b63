//! Commit item value objects.
//!
//! A commit item is one atomic, typed change record: the add, update, or
//! removal of one field or one whole entity. Items are produced fresh per
//! comparison call, never mutated afterwards, and persisted (or discarded)
//! as-is by the storage layer.

use serde::Serialize;
use uuid::Uuid;

use crate::actions::{CommitAction, FeatureAction, LayerAction, ResourceTable, RouteAction};
use crate::models::{PartialRoute, PartialRouteFeature, PartialRouteLayer};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The entity fragment carried by one side of a payload: the entity id plus
/// only the field(s) the action concerns (and their companions).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PayloadEntity {
    Route(PartialRoute),
    Layer(PartialRouteLayer),
    Feature(PartialRouteFeature),
}

impl PayloadEntity {
    /// The id of the entity fragment, if it carries one.
    pub fn id(&self) -> Option<&EntityId> {
        match self {
            Self::Route(route) => route.id.as_ref(),
            Self::Layer(layer) => layer.id.as_ref(),
            Self::Feature(feature) => feature.id.as_ref(),
        }
    }
}

/// Before/after entity fragments. At least one side is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommitPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PayloadEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PayloadEntity>,
}

// ---------------------------------------------------------------------------
// Commit item
// ---------------------------------------------------------------------------

/// One atomic change record in a route's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitItem {
    pub id: String,
    pub action: CommitAction,
    pub payload: CommitPayload,
    /// Id of the affected route, layer, or feature.
    pub resource_id: EntityId,
    pub resource_table: ResourceTable,
}

impl CommitItem {
    /// Build a `routes` item. The resource id and table are derived from the
    /// payload and action, so mismatched pairings cannot be constructed.
    pub(crate) fn route(
        action: RouteAction,
        prev: Option<PartialRoute>,
        next: Option<PartialRoute>,
    ) -> Self {
        let resource_id = entity_id(next.as_ref().and_then(|e| e.id.as_ref()))
            .or_else(|| entity_id(prev.as_ref().and_then(|e| e.id.as_ref())))
            .unwrap_or_default();
        Self {
            id: Uuid::now_v7().to_string(),
            action: action.into(),
            payload: CommitPayload {
                prev: prev.map(PayloadEntity::Route),
                next: next.map(PayloadEntity::Route),
            },
            resource_id,
            resource_table: ResourceTable::Routes,
        }
    }

    /// Build a `route_layers` item.
    pub(crate) fn layer(
        action: LayerAction,
        prev: Option<PartialRouteLayer>,
        next: Option<PartialRouteLayer>,
    ) -> Self {
        let resource_id = entity_id(next.as_ref().and_then(|e| e.id.as_ref()))
            .or_else(|| entity_id(prev.as_ref().and_then(|e| e.id.as_ref())))
            .unwrap_or_default();
        Self {
            id: Uuid::now_v7().to_string(),
            action: action.into(),
            payload: CommitPayload {
                prev: prev.map(PayloadEntity::Layer),
                next: next.map(PayloadEntity::Layer),
            },
            resource_id,
            resource_table: ResourceTable::RouteLayers,
        }
    }

    /// Build a `route_features` item.
    pub(crate) fn feature(
        action: FeatureAction,
        prev: Option<PartialRouteFeature>,
        next: Option<PartialRouteFeature>,
    ) -> Self {
        let resource_id = entity_id(next.as_ref().and_then(|e| e.id.as_ref()))
            .or_else(|| entity_id(prev.as_ref().and_then(|e| e.id.as_ref())))
            .unwrap_or_default();
        Self {
            id: Uuid::now_v7().to_string(),
            action: action.into(),
            payload: CommitPayload {
                prev: prev.map(PayloadEntity::Feature),
                next: next.map(PayloadEntity::Feature),
            },
            resource_id,
            resource_table: ResourceTable::RouteFeatures,
        }
    }
}

/// A usable resource id: present and non-empty.
fn entity_id(id: Option<&EntityId>) -> Option<EntityId> {
    id.filter(|id| !id.is_empty()).cloned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
