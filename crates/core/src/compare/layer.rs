//! Field-change rules for route layers.
//!
//! A wholly new or wholly deleted layer is recorded as a single
//! add/remove item carrying the full layer (nested feature list included,
//! so the history UI can show what appeared or vanished); field rules only
//! run when the layer exists on both sides.

use crate::actions::LayerAction;
use crate::commit::CommitItem;
use crate::compare::rules::{FieldRules, Ops};
use crate::models::PartialRouteLayer;

/// Compare one reconciled (prev, next) layer pair.
pub fn compare_layers(
    prev: Option<&PartialRouteLayer>,
    next: Option<&PartialRouteLayer>,
) -> Vec<CommitItem> {
    let prev_blank = prev.is_none_or(PartialRouteLayer::is_empty);
    let next_blank = next.is_none_or(PartialRouteLayer::is_empty);

    // Whole-entity short-circuit: one item, no per-field noise.
    match (prev_blank, next_blank) {
        (true, true) => return Vec::new(),
        (true, false) => {
            return vec![CommitItem::layer(
                LayerAction::AddRouteLayer,
                None,
                next.cloned(),
            )]
        }
        (false, true) => {
            return vec![CommitItem::layer(
                LayerAction::RemoveRouteLayer,
                prev.cloned(),
                None,
            )]
        }
        (false, false) => {}
    }

    let mut rules = FieldRules::new(prev, next, CommitItem::layer);

    // Order exists from creation on; reorderings are updates.
    rules.field(
        |l| l.order.as_ref(),
        |l| PartialRouteLayer {
            order: l.order,
            ..l.with_id()
        },
        Ops::update_only(LayerAction::UpdateLayerOrder),
    );

    rules.field(
        |l| l.title.as_ref(),
        |l| PartialRouteLayer {
            title: l.title.clone(),
            ..l.with_id()
        },
        Ops::full(
            LayerAction::AddLayerTitle,
            LayerAction::UpdateLayerTitle,
            LayerAction::RemoveLayerTitle,
        ),
    );

    rules.field(
        |l| l.color.as_ref(),
        |l| PartialRouteLayer {
            color: l.color.clone(),
            ..l.with_id()
        },
        Ops::full(
            LayerAction::AddLayerColor,
            LayerAction::UpdateLayerColor,
            LayerAction::RemoveLayerColor,
        ),
    );

    rules.field(
        |l| l.symbol.as_ref(),
        |l| PartialRouteLayer {
            symbol: l.symbol.clone(),
            ..l.with_id()
        },
        Ops::full(
            LayerAction::AddLayerSymbol,
            LayerAction::UpdateLayerSymbol,
            LayerAction::RemoveLayerSymbol,
        ),
    );

    rules.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
