//! The closed action vocabulary for route history.
//!
//! Every commit item carries exactly one action, and every action belongs to
//! exactly one resource table. These enums are exhaustive and in lockstep
//! with persisted commit item rows and with the history renderers: do not
//! add a variant without a matching field-change rule in `compare` and a
//! matching renderer on the frontend.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Resource tables
// ---------------------------------------------------------------------------

/// The logical entity kind a commit item targets. Used as a routing key by
/// storage and by the history UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceTable {
    Routes,
    RouteLayers,
    RouteFeatures,
}

impl ResourceTable {
    /// String representation for display, logging, and database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Routes => "routes",
            Self::RouteLayers => "route_layers",
            Self::RouteFeatures => "route_features",
        }
    }
}

impl std::fmt::Display for ResourceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Route actions
// ---------------------------------------------------------------------------

/// Actions recorded against the `routes` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAction {
    /// Reserved for ownership transfer; never emitted by the comparator.
    UpdateOwner,
    AddIsPrivate,
    UpdateIsPrivate,
    UpdateSlug,
    AddTitle,
    UpdateTitle,
    AddTitleAlt,
    UpdateTitleAlt,
    RemoveTitleAlt,
    AddActivityType,
    UpdateActivityType,
    AddRegion,
    UpdateRegion,
    RemoveRegion,
    AddCountry,
    UpdateCountry,
    RemoveCountry,
    AddSummary,
    UpdateSummary,
    RemoveSummary,
    AddRouteImage,
    UpdateRouteImage,
    RemoveRouteImage,
    /// Synthesized wholesale when a route is forked; never emitted by the
    /// comparator.
    ForkRoute,
}

impl RouteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdateOwner => "update_owner",
            Self::AddIsPrivate => "add_is_private",
            Self::UpdateIsPrivate => "update_is_private",
            Self::UpdateSlug => "update_slug",
            Self::AddTitle => "add_title",
            Self::UpdateTitle => "update_title",
            Self::AddTitleAlt => "add_title_alt",
            Self::UpdateTitleAlt => "update_title_alt",
            Self::RemoveTitleAlt => "remove_title_alt",
            Self::AddActivityType => "add_activity_type",
            Self::UpdateActivityType => "update_activity_type",
            Self::AddRegion => "add_region",
            Self::UpdateRegion => "update_region",
            Self::RemoveRegion => "remove_region",
            Self::AddCountry => "add_country",
            Self::UpdateCountry => "update_country",
            Self::RemoveCountry => "remove_country",
            Self::AddSummary => "add_summary",
            Self::UpdateSummary => "update_summary",
            Self::RemoveSummary => "remove_summary",
            Self::AddRouteImage => "add_route_image",
            Self::UpdateRouteImage => "update_route_image",
            Self::RemoveRouteImage => "remove_route_image",
            Self::ForkRoute => "fork_route",
        }
    }
}

// ---------------------------------------------------------------------------
// Layer actions
// ---------------------------------------------------------------------------

/// Actions recorded against the `route_layers` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerAction {
    AddRouteLayer,
    RemoveRouteLayer,
    UpdateLayerOrder,
    AddLayerTitle,
    UpdateLayerTitle,
    RemoveLayerTitle,
    AddLayerColor,
    UpdateLayerColor,
    RemoveLayerColor,
    AddLayerSymbol,
    UpdateLayerSymbol,
    RemoveLayerSymbol,
}

impl LayerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddRouteLayer => "add_route_layer",
            Self::RemoveRouteLayer => "remove_route_layer",
            Self::UpdateLayerOrder => "update_layer_order",
            Self::AddLayerTitle => "add_layer_title",
            Self::UpdateLayerTitle => "update_layer_title",
            Self::RemoveLayerTitle => "remove_layer_title",
            Self::AddLayerColor => "add_layer_color",
            Self::UpdateLayerColor => "update_layer_color",
            Self::RemoveLayerColor => "remove_layer_color",
            Self::AddLayerSymbol => "add_layer_symbol",
            Self::UpdateLayerSymbol => "update_layer_symbol",
            Self::RemoveLayerSymbol => "remove_layer_symbol",
        }
    }
}

// ---------------------------------------------------------------------------
// Feature actions
// ---------------------------------------------------------------------------

/// Actions recorded against the `route_features` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureAction {
    AddRouteFeature,
    RemoveRouteFeature,
    UpdateFeatureLayer,
    UpdateFeatureOrder,
    UpdateFeatureType,
    AddFeatureCoordinates,
    UpdateFeatureCoordinates,
    RemoveFeatureCoordinates,
    AddFeatureTitle,
    UpdateFeatureTitle,
    RemoveFeatureTitle,
    AddFeatureColor,
    UpdateFeatureColor,
    RemoveFeatureColor,
    AddFeatureSymbol,
    UpdateFeatureSymbol,
    RemoveFeatureSymbol,
    AddFeatureDescription,
    UpdateFeatureDescription,
    RemoveFeatureDescription,
    AddFeatureEleStart,
    UpdateFeatureEleStart,
    RemoveFeatureEleStart,
    AddFeatureEleEnd,
    UpdateFeatureEleEnd,
    RemoveFeatureEleEnd,
    AddFeatureDistance,
    UpdateFeatureDistance,
    RemoveFeatureDistance,
    AddFeatureArea,
    UpdateFeatureArea,
    RemoveFeatureArea,
    AddFeatureImage,
    UpdateFeatureImage,
    RemoveFeatureImage,
}

impl FeatureAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddRouteFeature => "add_route_feature",
            Self::RemoveRouteFeature => "remove_route_feature",
            Self::UpdateFeatureLayer => "update_feature_layer",
            Self::UpdateFeatureOrder => "update_feature_order",
            Self::UpdateFeatureType => "update_feature_type",
            Self::AddFeatureCoordinates => "add_feature_coordinates",
            Self::UpdateFeatureCoordinates => "update_feature_coordinates",
            Self::RemoveFeatureCoordinates => "remove_feature_coordinates",
            Self::AddFeatureTitle => "add_feature_title",
            Self::UpdateFeatureTitle => "update_feature_title",
            Self::RemoveFeatureTitle => "remove_feature_title",
            Self::AddFeatureColor => "add_feature_color",
            Self::UpdateFeatureColor => "update_feature_color",
            Self::RemoveFeatureColor => "remove_feature_color",
            Self::AddFeatureSymbol => "add_feature_symbol",
            Self::UpdateFeatureSymbol => "update_feature_symbol",
            Self::RemoveFeatureSymbol => "remove_feature_symbol",
            Self::AddFeatureDescription => "add_feature_description",
            Self::UpdateFeatureDescription => "update_feature_description",
            Self::RemoveFeatureDescription => "remove_feature_description",
            Self::AddFeatureEleStart => "add_feature_ele_start",
            Self::UpdateFeatureEleStart => "update_feature_ele_start",
            Self::RemoveFeatureEleStart => "remove_feature_ele_start",
            Self::AddFeatureEleEnd => "add_feature_ele_end",
            Self::UpdateFeatureEleEnd => "update_feature_ele_end",
            Self::RemoveFeatureEleEnd => "remove_feature_ele_end",
            Self::AddFeatureDistance => "add_feature_distance",
            Self::UpdateFeatureDistance => "update_feature_distance",
            Self::RemoveFeatureDistance => "remove_feature_distance",
            Self::AddFeatureArea => "add_feature_area",
            Self::UpdateFeatureArea => "update_feature_area",
            Self::RemoveFeatureArea => "remove_feature_area",
            Self::AddFeatureImage => "add_feature_image",
            Self::UpdateFeatureImage => "update_feature_image",
            Self::RemoveFeatureImage => "remove_feature_image",
        }
    }
}

// ---------------------------------------------------------------------------
// Combined action
// ---------------------------------------------------------------------------

/// Any commit action. Serializes to the bare action string; the three
/// per-table string sets are disjoint, so deserialization is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommitAction {
    Route(RouteAction),
    Layer(LayerAction),
    Feature(FeatureAction),
}

impl CommitAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Route(action) => action.as_str(),
            Self::Layer(action) => action.as_str(),
            Self::Feature(action) => action.as_str(),
        }
    }

    /// The table this action is recorded against.
    pub fn resource_table(&self) -> ResourceTable {
        match self {
            Self::Route(_) => ResourceTable::Routes,
            Self::Layer(_) => ResourceTable::RouteLayers,
            Self::Feature(_) => ResourceTable::RouteFeatures,
        }
    }
}

impl std::fmt::Display for CommitAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RouteAction> for CommitAction {
    fn from(action: RouteAction) -> Self {
        Self::Route(action)
    }
}

impl From<LayerAction> for CommitAction {
    fn from(action: LayerAction) -> Self {
        Self::Layer(action)
    }
}

impl From<FeatureAction> for CommitAction {
    fn from(action: FeatureAction) -> Self {
        Self::Feature(action)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_table_strings() {
        assert_eq!(ResourceTable::Routes.as_str(), "routes");
        assert_eq!(ResourceTable::RouteLayers.as_str(), "route_layers");
        assert_eq!(ResourceTable::RouteFeatures.as_str(), "route_features");
    }

    #[test]
    fn route_action_strings_match_serde() {
        for action in [
            RouteAction::UpdateOwner,
            RouteAction::AddIsPrivate,
            RouteAction::UpdateIsPrivate,
            RouteAction::UpdateSlug,
            RouteAction::AddTitleAlt,
            RouteAction::RemoveRouteImage,
            RouteAction::ForkRoute,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn layer_action_strings_match_serde() {
        for action in [
            LayerAction::AddRouteLayer,
            LayerAction::RemoveRouteLayer,
            LayerAction::UpdateLayerOrder,
            LayerAction::RemoveLayerSymbol,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn feature_action_strings_match_serde() {
        for action in [
            FeatureAction::AddRouteFeature,
            FeatureAction::UpdateFeatureLayer,
            FeatureAction::UpdateFeatureType,
            FeatureAction::AddFeatureEleStart,
            FeatureAction::RemoveFeatureArea,
            FeatureAction::UpdateFeatureImage,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn commit_action_serializes_to_bare_string() {
        let action = CommitAction::Route(RouteAction::UpdateTitle);
        assert_eq!(serde_json::to_string(&action).unwrap(), "\"update_title\"");
    }

    #[test]
    fn commit_action_round_trips_across_tables() {
        for action in [
            CommitAction::Route(RouteAction::UpdateTitle),
            CommitAction::Layer(LayerAction::UpdateLayerTitle),
            CommitAction::Feature(FeatureAction::UpdateFeatureTitle),
        ] {
            let json = serde_json::to_string(&action).unwrap();
            let parsed: CommitAction = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn resource_table_follows_action_kind() {
        assert_eq!(
            CommitAction::Route(RouteAction::AddTitle).resource_table(),
            ResourceTable::Routes
        );
        assert_eq!(
            CommitAction::Layer(LayerAction::AddRouteLayer).resource_table(),
            ResourceTable::RouteLayers
        );
        assert_eq!(
            CommitAction::Feature(FeatureAction::AddRouteFeature).resource_table(),
            ResourceTable::RouteFeatures
        );
    }
}
