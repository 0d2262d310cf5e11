//! Image display settings
//!
//! Both components draw with the same defaults: jet colormap, row 0 at the
//! bottom, panels stretched to fill their area. Pixels always take the
//! color of the nearest data cell.

use serde::{Deserialize, Serialize};

use super::colormap::Colormap;

/// Where data row 0 is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Row 0 at the bottom of the panel
    #[default]
    Lower,
    /// Row 0 at the top of the panel
    Upper,
}

/// Panel aspect policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    /// Stretch the image to fill the panel, whatever the data aspect ratio
    #[default]
    Auto,
    /// Keep cells square, leaving unused margins
    Equal,
}

/// Display settings for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageStyle {
    pub colormap: Colormap,
    pub origin: Origin,
    pub aspect: Aspect,
}

impl ImageStyle {
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = aspect;
        self
    }
}
