//! Partial entity models for the route graph.
//!
//! Every entity exists only in "partial" form here: any field may be absent,
//! because the comparator receives whatever the caller loaded or submitted --
//! a freshly created route arrives as an all-empty prev, a deleted layer as a
//! missing next. Absent fields are omitted from JSON entirely, so a payload
//! carries exactly the id plus the field(s) a commit item concerns.

use serde::{Deserialize, Serialize};

use crate::compare::property::has;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// The geometry kind of a route feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
}

/// One coordinate position (longitude, latitude, optional elevation).
pub type Position = Vec<f64>;

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A route record with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// Owning user. Never diffed by the comparator; ownership transfer is an
    /// orchestration-level event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Alternate titles (search aliases, local names).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_alt: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Cover image id. The derived rendition URLs below are companions: they
    /// always travel with `image_id` as one unit of change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_large_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_og_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_card_banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_360_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_240_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_120_url: Option<String>,
}

impl PartialRoute {
    /// A payload stub carrying only the entity id.
    pub(crate) fn with_id(&self) -> Self {
        Self {
            id: self.id.clone(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// A route layer with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialRouteLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<EntityId>,
    /// Display position within the route. Distinct from the layer's index in
    /// any input array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Nested feature list. Never diffed through the layer (features are
    /// reconciled at the snapshot level); carried only so that whole-layer
    /// add/remove payloads show the layer's content in the history UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<PartialRouteFeature>>,
}

impl PartialRouteLayer {
    /// Returns `true` when no field is present -- the layer is
    /// indistinguishable from a missing one.
    pub fn is_empty(&self) -> bool {
        !has(self.id.as_ref())
            && !has(self.route_id.as_ref())
            && !has(self.order.as_ref())
            && !has(self.title.as_ref())
            && !has(self.color.as_ref())
            && !has(self.symbol.as_ref())
            && !has(self.features.as_ref())
    }

    pub(crate) fn with_id(&self) -> Self {
        Self {
            id: self.id.clone(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

/// A geometric route feature with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialRouteFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// The layer this feature currently belongs to. Only `layer.id` is
    /// compared; the whole object is carried in membership-change payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<PartialRouteLayer>,
    /// Display position within the route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<GeometryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Position>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Elevation at the start of a line, or the single elevation of a point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele_start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele_end: Option<f64>,
    /// Line length in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Polygon area in square meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_large_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_card_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_360_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_240_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_thumb_120_url: Option<String>,
}

impl PartialRouteFeature {
    /// Returns `true` when no field is present.
    pub fn is_empty(&self) -> bool {
        !has(self.id.as_ref())
            && !has(self.layer.as_ref())
            && !has(self.order.as_ref())
            && !has(self.feature_type.as_ref())
            && !has(self.coordinates.as_ref())
            && !has(self.title.as_ref())
            && !has(self.color.as_ref())
            && !has(self.symbol.as_ref())
            && !has(self.description.as_ref())
            && !has(self.ele_start.as_ref())
            && !has(self.ele_end.as_ref())
            && !has(self.distance.as_ref())
            && !has(self.area.as_ref())
            && !has(self.image_id.as_ref())
            && !has(self.image_url.as_ref())
            && !has(self.image_large_url.as_ref())
            && !has(self.image_card_url.as_ref())
            && !has(self.image_thumb_360_url.as_ref())
            && !has(self.image_thumb_240_url.as_ref())
            && !has(self.image_thumb_120_url.as_ref())
    }

    pub(crate) fn with_id(&self) -> Self {
        Self {
            id: self.id.clone(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
