//! Wall renderers – turn one [`VirtualWall`][wallviz_types::VirtualWall]
//! into marker primitives.
//!
//! A renderer only decides geometry, appearance and namespace.  Identifiers
//! on the returned markers are scratch values; the reconciliation pass
//! overwrites them.
//!
//! [`WallRenderers`] holds one renderer per [`WallStyle`] and selects with an
//! exhaustive match, so adding a style is a compile error until every
//! renderer set handles it.

use wallviz_types::{
    ColorRgba, Header, Marker, MarkerAction, MarkerKind, Pose, Scale, Stamp, WallStyle,
};

use crate::config::MarkerConfig;

// ────────────────────────────────────────────────────────────────────────────
// Capability
// ────────────────────────────────────────────────────────────────────────────

/// Inputs for drawing a single wall.
#[derive(Debug, Clone, Copy)]
pub struct WallRenderRequest<'a> {
    pub pose: &'a Pose,
    pub text: &'a str,
    pub stamp: Stamp,
    pub base_id: u32,
    pub longitudinal_offset: f64,
    pub ns_prefix: &'a str,
}

/// Draws one wall style.
///
/// # Contract
///
/// * Deterministic for a fixed request.
/// * May return an empty list.
/// * Must not rely on the `id` of the returned markers being kept.
pub trait WallRenderer: Send + Sync {
    fn render(&self, request: &WallRenderRequest<'_>) -> Vec<Marker>;
}

impl<F> WallRenderer for F
where
    F: Fn(&WallRenderRequest<'_>) -> Vec<Marker> + Send + Sync,
{
    fn render(&self, request: &WallRenderRequest<'_>) -> Vec<Marker> {
        self(request)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in renderer
// ────────────────────────────────────────────────────────────────────────────

/// Stock wall: a translucent cube across the lane plus a floating label.
///
/// Markers land in `{prefix}{style}_virtual_wall` and
/// `{prefix}{style}_factor_text`.  An empty label suppresses the text marker.
#[derive(Debug, Clone)]
pub struct VirtualWallRenderer {
    style: WallStyle,
    color: ColorRgba,
    config: MarkerConfig,
}

impl VirtualWallRenderer {
    /// Renderer for `style` with the stock colour for that style.
    pub fn new(style: WallStyle, config: MarkerConfig) -> Self {
        let color = match style {
            WallStyle::Stop => ColorRgba::new(1.0, 0.0, 0.0, 1.0),
            WallStyle::Slowdown => ColorRgba::new(1.0, 1.0, 0.0, 1.0),
            WallStyle::Deadline => ColorRgba::new(0.0, 1.0, 0.0, 1.0),
        };
        Self::with_color(style, color, config)
    }

    /// Renderer for `style` with a custom colour.  The alpha channel is
    /// replaced by `config.wall_alpha`.
    pub fn with_color(style: WallStyle, color: ColorRgba, config: MarkerConfig) -> Self {
        let color = color.with_alpha(config.wall_alpha);
        Self {
            style,
            color,
            config,
        }
    }

    pub fn style(&self) -> WallStyle {
        self.style
    }

    fn header(&self, stamp: Stamp) -> Header {
        Header {
            frame_id: self.config.frame_id.clone(),
            stamp,
        }
    }
}

impl WallRenderer for VirtualWallRenderer {
    fn render(&self, request: &WallRenderRequest<'_>) -> Vec<Marker> {
        let anchor = request.pose.offset_along_heading(request.longitudinal_offset);
        let ns_base = format!("{}{}_", request.ns_prefix, self.style.ns_token());
        let [sx, sy, sz] = self.config.wall_scale;

        let mut markers = Vec::with_capacity(2);
        markers.push(Marker {
            header: self.header(request.stamp),
            ns: format!("{ns_base}virtual_wall"),
            id: request.base_id,
            kind: MarkerKind::Cube,
            action: MarkerAction::Add,
            pose: anchor.raised(self.config.wall_height_offset),
            scale: Scale::new(sx, sy, sz),
            color: self.color,
            text: String::new(),
        });

        if !request.text.is_empty() {
            markers.push(Marker {
                header: self.header(request.stamp),
                ns: format!("{ns_base}factor_text"),
                id: request.base_id,
                kind: MarkerKind::TextViewFacing,
                action: MarkerAction::Add,
                pose: anchor.raised(self.config.text_height_offset),
                scale: Scale::new(0.0, 0.0, self.config.text_size),
                color: ColorRgba::new(1.0, 1.0, 1.0, 1.0),
                text: request.text.to_string(),
            });
        }

        markers
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style dispatch
// ────────────────────────────────────────────────────────────────────────────

/// One renderer per [`WallStyle`].
pub struct WallRenderers {
    stop: Box<dyn WallRenderer>,
    slowdown: Box<dyn WallRenderer>,
    deadline: Box<dyn WallRenderer>,
}

impl WallRenderers {
    pub fn new(
        stop: Box<dyn WallRenderer>,
        slowdown: Box<dyn WallRenderer>,
        deadline: Box<dyn WallRenderer>,
    ) -> Self {
        Self {
            stop,
            slowdown,
            deadline,
        }
    }

    /// Stock renderers for all three styles, sharing `config`.
    pub fn from_config(config: &MarkerConfig) -> Self {
        Self::new(
            Box::new(VirtualWallRenderer::new(WallStyle::Stop, config.clone())),
            Box::new(VirtualWallRenderer::new(WallStyle::Slowdown, config.clone())),
            Box::new(VirtualWallRenderer::new(WallStyle::Deadline, config.clone())),
        )
    }

    /// The renderer responsible for `style`.
    pub fn for_style(&self, style: WallStyle) -> &dyn WallRenderer {
        match style {
            WallStyle::Stop => self.stop.as_ref(),
            WallStyle::Slowdown => self.slowdown.as_ref(),
            WallStyle::Deadline => self.deadline.as_ref(),
        }
    }
}

impl Default for WallRenderers {
    fn default() -> Self {
        Self::from_config(&MarkerConfig::default())
    }
}

impl std::fmt::Debug for WallRenderers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallRenderers").finish_non_exhaustive()
    }
}
