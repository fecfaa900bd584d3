/// Number of layers a [`LayerState`] can hold
pub const MAX_LAYER_NUM: u8 = 32;

/// The firmware's layer state register.
///
/// One bit per layer, the highest active bit is the effective layer.
/// When no bit is set, the default layer is effective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState {
    state: u32,
    default_layer: u8,
}

impl LayerState {
    pub const fn new() -> Self {
        Self {
            state: 0,
            default_layer: 0,
        }
    }

    /// Create a layer state with only `layer` active
    pub const fn with_layer(layer: u8) -> Self {
        let mut state = Self::new();
        if layer < MAX_LAYER_NUM {
            state.state = 1 << layer;
        }
        state
    }

    /// Raw bitmask of active layers
    pub fn bits(&self) -> u32 {
        self.state
    }

    pub fn default_layer(&self) -> u8 {
        self.default_layer
    }

    pub fn set_default_layer(&mut self, layer: u8) {
        if layer >= MAX_LAYER_NUM {
            warn!("Not a valid default layer {}, max: {}", layer, MAX_LAYER_NUM - 1);
            return;
        }
        self.default_layer = layer;
    }

    /// The highest active layer, or the default layer if no layer is active
    pub fn highest_layer(&self) -> u8 {
        if self.state == 0 {
            self.default_layer
        } else {
            (u32::BITS - 1 - self.state.leading_zeros()) as u8
        }
    }

    pub fn is_on(&self, layer: u8) -> bool {
        if layer >= MAX_LAYER_NUM {
            return false;
        }
        self.state & (1 << layer) != 0 || (self.state == 0 && layer == self.default_layer)
    }

    /// Activate `layer` and deactivate all others
    pub fn layer_move(&mut self, layer: u8) {
        if layer >= MAX_LAYER_NUM {
            warn!("Not a valid layer {}, max: {}", layer, MAX_LAYER_NUM - 1);
            return;
        }
        info!("Move to layer {}", layer);
        self.state = 1 << layer;
    }

    /// Activate given layer
    pub fn layer_on(&mut self, layer: u8) {
        if layer >= MAX_LAYER_NUM {
            warn!("Not a valid layer {}, max: {}", layer, MAX_LAYER_NUM - 1);
            return;
        }
        self.state |= 1 << layer;
    }

    /// Deactivate given layer
    pub fn layer_off(&mut self, layer: u8) {
        if layer >= MAX_LAYER_NUM {
            warn!("Not a valid layer {}, max: {}", layer, MAX_LAYER_NUM - 1);
            return;
        }
        self.state &= !(1 << layer);
    }

    /// Toggle given layer
    pub fn layer_invert(&mut self, layer: u8) {
        if layer >= MAX_LAYER_NUM {
            warn!("Not a valid layer {}, max: {}", layer, MAX_LAYER_NUM - 1);
            return;
        }
        self.state ^= 1 << layer;
    }

    /// Deactivate all layers, the default layer becomes effective
    pub fn clear(&mut self) {
        self.state = 0;
    }
}
