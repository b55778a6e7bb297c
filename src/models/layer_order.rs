//! Layer-order operations on a [`WidgetProject`].
//!
//! `add_layer` and `remove_layer` leave existing z-indices alone, so the
//! z-index of a layer can drift away from its position in the sequence.
//! `move_layer` is the only operation that renumbers every layer back to its
//! position. Renderers must read paint order through
//! [`WidgetProject::sorted_layers`], never the raw sequence.

use crate::models::layer::WidgetLayer;
use crate::models::project::WidgetProject;
use tracing::debug;
use uuid::Uuid;

/// Offset (percent of widget bounds) applied to a duplicated layer's frame.
pub const DUPLICATE_OFFSET: f64 = 5.0;

/// Result of [`WidgetProject::move_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Layer was moved from one sequence position to another (possibly the same).
    Moved {
        /// Position before the move
        from: usize,
        /// Position after clamping and reinsertion
        to: usize,
    },
    /// No layer with the requested id; the project is unchanged.
    NotFound,
}

impl MoveOutcome {
    /// True when a layer was found and repositioned.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Layers of a project in ascending z-index order.
///
/// Ties keep sequence order. The view borrows the project and can be iterated
/// any number of times.
#[derive(Debug, Clone)]
pub struct PaintOrder<'a> {
    layers: Vec<&'a WidgetLayer>,
}

impl<'a> PaintOrder<'a> {
    fn new(layers: &'a [WidgetLayer]) -> Self {
        let mut sorted: Vec<&WidgetLayer> = layers.iter().collect();
        // sort_by_key is stable
        sorted.sort_by_key(|l| l.z_index());
        Self { layers: sorted }
    }

    /// Iterates back-to-front.
    pub fn iter(&self) -> impl Iterator<Item = &'a WidgetLayer> + '_ {
        self.layers.iter().copied()
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when there is nothing to paint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Top-most layer.
    #[must_use]
    pub fn top(&self) -> Option<&'a WidgetLayer> {
        self.layers.last().copied()
    }

    /// Layer ids back-to-front.
    #[must_use]
    pub fn ids(&self) -> Vec<Uuid> {
        self.iter().map(WidgetLayer::id).collect()
    }
}

impl<'a> IntoIterator for PaintOrder<'a> {
    type Item = &'a WidgetLayer;
    type IntoIter = std::vec::IntoIter<&'a WidgetLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b PaintOrder<'a> {
    type Item = &'a WidgetLayer;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a WidgetLayer>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter().copied()
    }
}

impl WidgetProject {
    /// Appends a layer on top of every existing layer.
    ///
    /// The new z-index is `max + 1`, or 0 for an empty project. Existing
    /// layers are not renumbered. Returns the assigned z-index.
    pub fn add_layer(&mut self, mut layer: WidgetLayer) -> i32 {
        let z_index = self
            .layers()
            .iter()
            .map(WidgetLayer::z_index)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        layer.set_z_index(z_index);
        debug!(layer = %layer.id(), z_index, "Adding layer '{}'", layer.name);
        self.layers_mut().push(layer);
        self.touch();
        z_index
    }

    /// Removes the first layer with `id` and returns it.
    ///
    /// Remaining z-indices keep their values, gaps included. Returns `None`
    /// and leaves the project untouched when the id is unknown.
    pub fn remove_layer(&mut self, id: Uuid) -> Option<WidgetLayer> {
        let Some(position) = self.position_of(id) else {
            debug!(layer = %id, "Remove ignored: layer not found");
            return None;
        };
        let removed = self.layers_mut().remove(position);
        debug!(layer = %id, position, "Removed layer '{}'", removed.name);
        self.touch();
        Some(removed)
    }

    /// Moves a layer to `new_index` and renumbers every z-index to its position.
    ///
    /// `new_index` is clamped into `0..=count`, where count is measured after
    /// the layer has been taken out, so negative values insert at the bottom
    /// and oversized values at the top.
    pub fn move_layer(&mut self, id: Uuid, new_index: isize) -> MoveOutcome {
        let Some(from) = self.position_of(id) else {
            debug!(layer = %id, "Move ignored: layer not found");
            return MoveOutcome::NotFound;
        };

        let layers = self.layers_mut();
        let layer = layers.remove(from);
        let to = usize::try_from(new_index).unwrap_or(0).min(layers.len());
        layers.insert(to, layer);
        renumber(layers);

        debug!(layer = %id, from, to, "Moved layer");
        self.touch();
        MoveOutcome::Moved { from, to }
    }

    /// Layers in paint order (ascending z-index).
    #[must_use]
    pub fn sorted_layers(&self) -> PaintOrder<'_> {
        PaintOrder::new(self.layers())
    }

    /// Adds a copy of the layer with `id` on top of the stack.
    ///
    /// The copy gets a fresh id, a `" Copy"` name suffix and a frame shifted
    /// by [`DUPLICATE_OFFSET`] (clamped). Returns the new layer's id.
    pub fn duplicate_layer(&mut self, id: Uuid) -> Option<Uuid> {
        let source = self.layer(id)?;
        let mut copy = source.duplicate();
        copy.name = format!("{} Copy", source.name);
        copy.frame = copy.frame.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        let copy_id = copy.id();
        self.add_layer(copy);
        Some(copy_id)
    }

    /// True when z-indices are exactly `0..n` in sequence order.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.layers()
            .iter()
            .enumerate()
            .all(|(i, l)| usize::try_from(l.z_index()).is_ok_and(|z| z == i))
    }
}

/// Sets each layer's z-index to its position.
fn renumber(layers: &mut [WidgetLayer]) {
    for (z_index, layer) in (0_i32..).zip(layers.iter_mut()) {
        layer.set_z_index(z_index);
    }
}
