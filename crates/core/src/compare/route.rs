//! Field-change rules for the route record itself.
//!
//! Routes have no whole-entity add/remove: a freshly created route surfaces
//! as field-level adds, and deletion is not part of the history model. The
//! rule order below is fixed; it decides item order within the route group.

use crate::actions::RouteAction;
use crate::commit::CommitItem;
use crate::compare::rules::{FieldRules, Ops};
use crate::models::PartialRoute;

/// Compare two route records field by field.
pub fn compare_routes(prev: &PartialRoute, next: &PartialRoute) -> Vec<CommitItem> {
    let mut rules = FieldRules::new(Some(prev), Some(next), CommitItem::route);

    // Visibility exists from creation on and is never removed; `false` is a
    // real value, not an absent one.
    rules.field(
        |r| r.is_private.as_ref(),
        |r| PartialRoute {
            is_private: r.is_private,
            ..r.with_id()
        },
        Ops::add_update(RouteAction::AddIsPrivate, RouteAction::UpdateIsPrivate),
    );

    rules.field(
        |r| r.slug.as_ref(),
        |r| PartialRoute {
            slug: r.slug.clone(),
            ..r.with_id()
        },
        Ops::update_only(RouteAction::UpdateSlug),
    );

    rules.field(
        |r| r.title.as_ref(),
        |r| PartialRoute {
            title: r.title.clone(),
            ..r.with_id()
        },
        Ops::add_update(RouteAction::AddTitle, RouteAction::UpdateTitle),
    );

    rules.field(
        |r| r.title_alt.as_ref(),
        |r| PartialRoute {
            title_alt: r.title_alt.clone(),
            ..r.with_id()
        },
        Ops::full(
            RouteAction::AddTitleAlt,
            RouteAction::UpdateTitleAlt,
            RouteAction::RemoveTitleAlt,
        ),
    );

    rules.field(
        |r| r.activity_type.as_ref(),
        |r| PartialRoute {
            activity_type: r.activity_type.clone(),
            ..r.with_id()
        },
        Ops::add_update(
            RouteAction::AddActivityType,
            RouteAction::UpdateActivityType,
        ),
    );

    rules.field(
        |r| r.region.as_ref(),
        |r| PartialRoute {
            region: r.region.clone(),
            ..r.with_id()
        },
        Ops::full(
            RouteAction::AddRegion,
            RouteAction::UpdateRegion,
            RouteAction::RemoveRegion,
        ),
    );

    rules.field(
        |r| r.country.as_ref(),
        |r| PartialRoute {
            country: r.country.clone(),
            ..r.with_id()
        },
        Ops::full(
            RouteAction::AddCountry,
            RouteAction::UpdateCountry,
            RouteAction::RemoveCountry,
        ),
    );

    rules.field(
        |r| r.summary.as_ref(),
        |r| PartialRoute {
            summary: r.summary.clone(),
            ..r.with_id()
        },
        Ops::full(
            RouteAction::AddSummary,
            RouteAction::UpdateSummary,
            RouteAction::RemoveSummary,
        ),
    );

    // The image id is the compared field; its derived rendition URLs are
    // companions and travel with it as one unit of change.
    rules.field(
        |r| r.image_id.as_ref(),
        |r| PartialRoute {
            image_id: r.image_id.clone(),
            image_url: r.image_url.clone(),
            image_large_url: r.image_large_url.clone(),
            image_og_url: r.image_og_url.clone(),
            image_card_banner_url: r.image_card_banner_url.clone(),
            image_thumb_360_url: r.image_thumb_360_url.clone(),
            image_thumb_240_url: r.image_thumb_240_url.clone(),
            image_thumb_120_url: r.image_thumb_120_url.clone(),
            ..r.with_id()
        },
        Ops::full(
            RouteAction::AddRouteImage,
            RouteAction::UpdateRouteImage,
            RouteAction::RemoveRouteImage,
        ),
    );

    rules.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommitAction, ResourceTable};
    use crate::commit::PayloadEntity;

    fn route(id: &str) -> PartialRoute {
        PartialRoute {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn payload_route(entity: &Option<PayloadEntity>) -> &PartialRoute {
        match entity {
            Some(PayloadEntity::Route(route)) => route,
            other => panic!("expected route payload, got {other:?}"),
        }
    }

    #[test]
    fn identical_routes_produce_nothing() {
        let prev = PartialRoute {
            id: Some("r1".to_string()),
            title: Some("Kungsleden".to_string()),
            is_private: Some(false),
            title_alt: Some(vec!["King's Trail".to_string()]),
            ..Default::default()
        };
        assert!(compare_routes(&prev, &prev.clone()).is_empty());
    }

    #[test]
    fn title_update_yields_exactly_one_item() {
        let prev = PartialRoute {
            title: Some("Old".to_string()),
            is_private: Some(true),
            ..route("r1")
        };
        let next = PartialRoute {
            title: Some("New".to_string()),
            is_private: Some(true),
            ..route("r1")
        };
        let items = compare_routes(&prev, &next);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.action, CommitAction::Route(RouteAction::UpdateTitle));
        assert_eq!(item.resource_id, "r1");
        assert_eq!(item.resource_table, ResourceTable::Routes);
        assert_eq!(
            payload_route(&item.payload.prev).title.as_deref(),
            Some("Old")
        );
        assert_eq!(
            payload_route(&item.payload.next).title.as_deref(),
            Some("New")
        );
    }

    #[test]
    fn payload_carries_only_id_and_changed_field() {
        let prev = PartialRoute {
            title: Some("Old".to_string()),
            region: Some("Lappland".to_string()),
            ..route("r1")
        };
        let next = PartialRoute {
            title: Some("New".to_string()),
            region: Some("Lappland".to_string()),
            ..route("r1")
        };
        let items = compare_routes(&prev, &next);
        assert_eq!(items.len(), 1);

        // The unchanged region must not leak into the title payload.
        let next_payload = payload_route(&items[0].payload.next);
        assert!(next_payload.region.is_none());
        assert_eq!(next_payload.id.as_deref(), Some("r1"));
    }

    #[test]
    fn toggling_is_private_to_false_is_an_update() {
        let prev = PartialRoute {
            is_private: Some(true),
            ..route("r1")
        };
        let next = PartialRoute {
            is_private: Some(false),
            ..route("r1")
        };
        let items = compare_routes(&prev, &next);

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Route(RouteAction::UpdateIsPrivate)
        );
        assert_eq!(payload_route(&items[0].payload.prev).is_private, Some(true));
        assert_eq!(payload_route(&items[0].payload.next).is_private, Some(false));
    }

    #[test]
    fn fresh_route_surfaces_as_field_adds() {
        let prev = PartialRoute::default();
        let next = PartialRoute {
            is_private: Some(false),
            title: Some("Alta Via 1".to_string()),
            activity_type: Some("hiking".to_string()),
            country: Some("IT".to_string()),
            ..route("r1")
        };
        let items = compare_routes(&prev, &next);

        let actions: Vec<_> = items.iter().map(|i| i.action).collect();
        assert_eq!(
            actions,
            vec![
                CommitAction::Route(RouteAction::AddIsPrivate),
                CommitAction::Route(RouteAction::AddTitle),
                CommitAction::Route(RouteAction::AddActivityType),
                CommitAction::Route(RouteAction::AddCountry),
            ]
        );
    }

    #[test]
    fn slug_never_surfaces_as_add_or_remove() {
        let with_slug = PartialRoute {
            slug: Some("alta-via-1".to_string()),
            ..route("r1")
        };
        assert!(compare_routes(&route("r1"), &with_slug).is_empty());
        assert!(compare_routes(&with_slug, &route("r1")).is_empty());

        let renamed = PartialRoute {
            slug: Some("alta-via-one".to_string()),
            ..route("r1")
        };
        let items = compare_routes(&with_slug, &renamed);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].action, CommitAction::Route(RouteAction::UpdateSlug));
    }

    #[test]
    fn clearing_title_alt_is_a_remove() {
        let prev = PartialRoute {
            title_alt: Some(vec!["Kungsleden".to_string()]),
            ..route("r1")
        };
        let next = PartialRoute {
            title_alt: Some(Vec::new()),
            ..route("r1")
        };
        let items = compare_routes(&prev, &next);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Route(RouteAction::RemoveTitleAlt)
        );
    }

    #[test]
    fn image_change_carries_companion_urls() {
        let prev = route("r1");
        let next = PartialRoute {
            image_id: Some("img-9".to_string()),
            image_url: Some("https://img.example/9/full.jpg".to_string()),
            image_large_url: Some("https://img.example/9/large.jpg".to_string()),
            image_og_url: Some("https://img.example/9/og.jpg".to_string()),
            image_card_banner_url: Some("https://img.example/9/banner.jpg".to_string()),
            image_thumb_360_url: Some("https://img.example/9/360.jpg".to_string()),
            image_thumb_240_url: Some("https://img.example/9/240.jpg".to_string()),
            image_thumb_120_url: Some("https://img.example/9/120.jpg".to_string()),
            ..route("r1")
        };
        let items = compare_routes(&prev, &next);

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Route(RouteAction::AddRouteImage)
        );
        let payload = payload_route(&items[0].payload.next);
        assert_eq!(payload.image_id.as_deref(), Some("img-9"));
        assert_eq!(
            payload.image_thumb_120_url.as_deref(),
            Some("https://img.example/9/120.jpg")
        );
        assert_eq!(payload.image_og_url.as_deref(), Some("https://img.example/9/og.jpg"));
    }

    #[test]
    fn owner_change_is_not_diffed() {
        let prev = PartialRoute {
            owner: Some("user-1".to_string()),
            ..route("r1")
        };
        let next = PartialRoute {
            owner: Some("user-2".to_string()),
            ..route("r1")
        };
        assert!(compare_routes(&prev, &next).is_empty());
    }

    #[test]
    fn multiple_changes_follow_rule_declaration_order() {
        let prev = PartialRoute {
            title: Some("Old".to_string()),
            region: Some("Dolomites".to_string()),
            summary: Some("A classic.".to_string()),
            ..route("r1")
        };
        let next = PartialRoute {
            title: Some("New".to_string()),
            summary: Some("A modern classic.".to_string()),
            ..route("r1")
        };
        let actions: Vec<_> = compare_routes(&prev, &next)
            .iter()
            .map(|i| i.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                CommitAction::Route(RouteAction::UpdateTitle),
                CommitAction::Route(RouteAction::RemoveRegion),
                CommitAction::Route(RouteAction::UpdateSummary),
            ]
        );
    }
}
