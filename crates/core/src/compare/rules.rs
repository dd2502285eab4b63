//! Field-change rule machinery shared by the entity comparators.
//!
//! Each comparator walks its fields in a fixed declaration order and applies
//! one rule per field. A rule classifies the field as added, removed,
//! updated, or unchanged from the presence and equality of its two values,
//! and emits at most one commit item. The original string-keyed rule
//! appliers become typed closures here: `get` reads the field, `pick`
//! projects the payload fragment (id + field + companions).

use crate::commit::CommitItem;
use crate::compare::property::{equal, has, Presence};

/// The actions a field supports. A missing slot means that classification is
/// never recorded for the field (e.g. a slug exists from creation and is
/// never removed, so only `update` is set).
pub(crate) struct Ops<A> {
    pub add: Option<A>,
    pub update: Option<A>,
    pub remove: Option<A>,
}

impl<A> Ops<A> {
    pub fn full(add: A, update: A, remove: A) -> Self {
        Self {
            add: Some(add),
            update: Some(update),
            remove: Some(remove),
        }
    }

    pub fn add_update(add: A, update: A) -> Self {
        Self {
            add: Some(add),
            update: Some(update),
            remove: None,
        }
    }

    pub fn update_only(update: A) -> Self {
        Self {
            add: None,
            update: Some(update),
            remove: None,
        }
    }
}

/// Shared context for one entity's field rules: the (prev, next) pair, the
/// emit constructor for the entity's table, and the items collected so far.
pub(crate) struct FieldRules<'a, E, A> {
    prev: Option<&'a E>,
    next: Option<&'a E>,
    emit: fn(A, Option<E>, Option<E>) -> CommitItem,
    items: Vec<CommitItem>,
}

impl<'a, E, A: Copy> FieldRules<'a, E, A> {
    pub fn new(
        prev: Option<&'a E>,
        next: Option<&'a E>,
        emit: fn(A, Option<E>, Option<E>) -> CommitItem,
    ) -> Self {
        Self {
            prev,
            next,
            emit,
            items: Vec::new(),
        }
    }

    /// Apply one field rule.
    ///
    /// `get` reads the field value, `pick` builds the payload fragment from
    /// the side(s) involved. Absent or malformed input classifies as "not
    /// present" and can only yield add/remove/nothing -- never an error.
    pub fn field<V>(
        &mut self,
        get: impl Fn(&'a E) -> Option<&'a V>,
        pick: impl Fn(&E) -> E,
        ops: Ops<A>,
    ) where
        V: Presence + PartialEq + 'a,
    {
        let prev_value = self.prev.and_then(&get);
        let next_value = self.next.and_then(&get);

        match (has(prev_value), has(next_value)) {
            (false, true) => {
                if let (Some(action), Some(next)) = (ops.add, self.next) {
                    self.items.push((self.emit)(action, None, Some(pick(next))));
                }
            }
            (true, false) => {
                if let (Some(action), Some(prev)) = (ops.remove, self.prev) {
                    self.items.push((self.emit)(action, Some(pick(prev)), None));
                }
            }
            (true, true) => {
                let changed = match (prev_value, next_value) {
                    (Some(prev), Some(next)) => !equal(prev, next),
                    _ => false,
                };
                if changed {
                    if let (Some(action), Some(prev), Some(next)) =
                        (ops.update, self.prev, self.next)
                    {
                        self.items
                            .push((self.emit)(action, Some(pick(prev)), Some(pick(next))));
                    }
                }
            }
            (false, false) => {}
        }
    }

    /// The collected commit items, in rule application order.
    pub fn finish(self) -> Vec<CommitItem> {
        self.items
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommitAction, LayerAction};
    use crate::models::PartialRouteLayer;

    fn layer(id: &str, title: Option<&str>) -> PartialRouteLayer {
        PartialRouteLayer {
            id: Some(id.to_string()),
            title: title.map(str::to_string),
            ..Default::default()
        }
    }

    fn title_rule(
        prev: Option<&PartialRouteLayer>,
        next: Option<&PartialRouteLayer>,
    ) -> Vec<CommitItem> {
        let mut rules = FieldRules::new(prev, next, CommitItem::layer);
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
        rules.finish()
    }

    #[test]
    fn classifies_add() {
        let prev = layer("l1", None);
        let next = layer("l1", Some("Day 1"));
        let items = title_rule(Some(&prev), Some(&next));
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Layer(LayerAction::AddLayerTitle)
        );
        assert!(items[0].payload.prev.is_none());
    }

    #[test]
    fn classifies_remove() {
        let prev = layer("l1", Some("Day 1"));
        let next = layer("l1", None);
        let items = title_rule(Some(&prev), Some(&next));
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Layer(LayerAction::RemoveLayerTitle)
        );
        assert!(items[0].payload.next.is_none());
    }

    #[test]
    fn empty_string_counts_as_remove() {
        let prev = layer("l1", Some("Day 1"));
        let next = layer("l1", Some(""));
        let items = title_rule(Some(&prev), Some(&next));
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Layer(LayerAction::RemoveLayerTitle)
        );
    }

    #[test]
    fn classifies_update() {
        let prev = layer("l1", Some("Day 1"));
        let next = layer("l1", Some("Day 2"));
        let items = title_rule(Some(&prev), Some(&next));
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            CommitAction::Layer(LayerAction::UpdateLayerTitle)
        );
        assert!(items[0].payload.prev.is_some());
        assert!(items[0].payload.next.is_some());
    }

    #[test]
    fn unchanged_emits_nothing() {
        let prev = layer("l1", Some("Day 1"));
        let next = layer("l1", Some("Day 1"));
        assert!(title_rule(Some(&prev), Some(&next)).is_empty());
    }

    #[test]
    fn absent_on_both_sides_emits_nothing() {
        let prev = layer("l1", None);
        let next = layer("l1", None);
        assert!(title_rule(Some(&prev), Some(&next)).is_empty());
        assert!(title_rule(None, None).is_empty());
    }

    #[test]
    fn missing_op_suppresses_classification() {
        // Order is update-only; an order appearing out of nowhere must not
        // produce an item.
        let prev = PartialRouteLayer {
            id: Some("l1".to_string()),
            ..Default::default()
        };
        let next = PartialRouteLayer {
            id: Some("l1".to_string()),
            order: Some(3),
            ..Default::default()
        };
        let mut rules = FieldRules::new(Some(&prev), Some(&next), CommitItem::layer);
        rules.field(
            |l| l.order.as_ref(),
            |l| PartialRouteLayer {
                order: l.order,
                ..l.with_id()
            },
            Ops::update_only(LayerAction::UpdateLayerOrder),
        );
        assert!(rules.finish().is_empty());
    }
}
