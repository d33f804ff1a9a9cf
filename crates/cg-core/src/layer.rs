//! Draw layers and the fixed render-pass order.

/// The layer a drawable entity renders on.
///
/// The render stage always makes three passes in the fixed order
/// [`DrawLayer::ALL`] — background first, HUD last — regardless of the order
/// entities were registered in.  Within one layer, entities draw in registry
/// insertion order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawLayer {
    Background,
    #[default]
    Foreground,
    Hud,
}

impl DrawLayer {
    /// All layers in render-pass order.
    pub const ALL: [DrawLayer; 3] = [DrawLayer::Background, DrawLayer::Foreground, DrawLayer::Hud];

    /// Stable index of this layer within [`DrawLayer::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            DrawLayer::Background => 0,
            DrawLayer::Foreground => 1,
            DrawLayer::Hud => 2,
        }
    }
}

impl std::fmt::Display for DrawLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DrawLayer::Background => "background",
            DrawLayer::Foreground => "foreground",
            DrawLayer::Hud => "hud",
        };
        f.write_str(name)
    }
}
