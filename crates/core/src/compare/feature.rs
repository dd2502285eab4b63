//! Field-change rules for geometric route features.
//!
//! Same shape as the layer comparator: whole-entity short-circuit first,
//! then a fixed field pipeline. Layer membership is the one relation field;
//! only the nested `layer.id` is compared, but membership payloads carry the
//! whole nested layer object so the history UI can name both sides.

use crate::actions::FeatureAction;
use crate::commit::CommitItem;
use crate::compare::rules::{FieldRules, Ops};
use crate::models::PartialRouteFeature;

/// Compare one reconciled (prev, next) feature pair.
pub fn compare_features(
    prev: Option<&PartialRouteFeature>,
    next: Option<&PartialRouteFeature>,
) -> Vec<CommitItem> {
    let prev_blank = prev.is_none_or(PartialRouteFeature::is_empty);
    let next_blank = next.is_none_or(PartialRouteFeature::is_empty);

    match (prev_blank, next_blank) {
        (true, true) => return Vec::new(),
        (true, false) => {
            return vec![CommitItem::feature(
                FeatureAction::AddRouteFeature,
                None,
                next.cloned(),
            )]
        }
        (false, true) => {
            return vec![CommitItem::feature(
                FeatureAction::RemoveRouteFeature,
                prev.cloned(),
                None,
            )]
        }
        (false, false) => {}
    }

    let mut rules = FieldRules::new(prev, next, CommitItem::feature);

    // Which layer the feature belongs to. The nested `layer.id` is the
    // compared value; a feature always belongs to some layer, so this can
    // only ever be an update.
    rules.field(
        |f| f.layer.as_ref().and_then(|l| l.id.as_ref()),
        |f| PartialRouteFeature {
            layer: f.layer.clone(),
            ..f.with_id()
        },
        Ops::update_only(FeatureAction::UpdateFeatureLayer),
    );

    rules.field(
        |f| f.order.as_ref(),
        |f| PartialRouteFeature {
            order: f.order,
            ..f.with_id()
        },
        Ops::update_only(FeatureAction::UpdateFeatureOrder),
    );

    rules.field(
        |f| f.feature_type.as_ref(),
        |f| PartialRouteFeature {
            feature_type: f.feature_type,
            ..f.with_id()
        },
        Ops::update_only(FeatureAction::UpdateFeatureType),
    );

    rules.field(
        |f| f.coordinates.as_ref(),
        |f| PartialRouteFeature {
            coordinates: f.coordinates.clone(),
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureCoordinates,
            FeatureAction::UpdateFeatureCoordinates,
            FeatureAction::RemoveFeatureCoordinates,
        ),
    );

    rules.field(
        |f| f.title.as_ref(),
        |f| PartialRouteFeature {
            title: f.title.clone(),
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureTitle,
            FeatureAction::UpdateFeatureTitle,
            FeatureAction::RemoveFeatureTitle,
        ),
    );

    rules.field(
        |f| f.color.as_ref(),
        |f| PartialRouteFeature {
            color: f.color.clone(),
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureColor,
            FeatureAction::UpdateFeatureColor,
            FeatureAction::RemoveFeatureColor,
        ),
    );

    rules.field(
        |f| f.symbol.as_ref(),
        |f| PartialRouteFeature {
            symbol: f.symbol.clone(),
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureSymbol,
            FeatureAction::UpdateFeatureSymbol,
            FeatureAction::RemoveFeatureSymbol,
        ),
    );

    rules.field(
        |f| f.description.as_ref(),
        |f| PartialRouteFeature {
            description: f.description.clone(),
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureDescription,
            FeatureAction::UpdateFeatureDescription,
            FeatureAction::RemoveFeatureDescription,
        ),
    );

    rules.field(
        |f| f.ele_start.as_ref(),
        |f| PartialRouteFeature {
            ele_start: f.ele_start,
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureEleStart,
            FeatureAction::UpdateFeatureEleStart,
            FeatureAction::RemoveFeatureEleStart,
        ),
    );

    rules.field(
        |f| f.ele_end.as_ref(),
        |f| PartialRouteFeature {
            ele_end: f.ele_end,
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureEleEnd,
            FeatureAction::UpdateFeatureEleEnd,
            FeatureAction::RemoveFeatureEleEnd,
        ),
    );

    rules.field(
        |f| f.distance.as_ref(),
        |f| PartialRouteFeature {
            distance: f.distance,
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureDistance,
            FeatureAction::UpdateFeatureDistance,
            FeatureAction::RemoveFeatureDistance,
        ),
    );

    rules.field(
        |f| f.area.as_ref(),
        |f| PartialRouteFeature {
            area: f.area,
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureArea,
            FeatureAction::UpdateFeatureArea,
            FeatureAction::RemoveFeatureArea,
        ),
    );

    rules.field(
        |f| f.image_id.as_ref(),
        |f| PartialRouteFeature {
            image_id: f.image_id.clone(),
            image_url: f.image_url.clone(),
            image_large_url: f.image_large_url.clone(),
            image_card_url: f.image_card_url.clone(),
            image_thumb_360_url: f.image_thumb_360_url.clone(),
            image_thumb_240_url: f.image_thumb_240_url.clone(),
            image_thumb_120_url: f.image_thumb_120_url.clone(),
            ..f.with_id()
        },
        Ops::full(
            FeatureAction::AddFeatureImage,
            FeatureAction::UpdateFeatureImage,
            FeatureAction::RemoveFeatureImage,
        ),
    );

    rules.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
