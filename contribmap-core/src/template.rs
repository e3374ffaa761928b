//! World map template: parsed once, shared read-only by every render.

use crate::error::TemplateError;
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The map shipped with the binary.
pub const EMBEDDED_TEMPLATE: &str = include_str!("../assets/world-map.svg");

/// Native extent used when the template declares neither a viewBox nor a size.
pub const FALLBACK_BOUNDS: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 1000.0,
    height: 500.0,
};

/// Elements that carry no geometry and are dropped while loading.
const NON_VISUAL_TAGS: &[&str] = &["title", "desc", "metadata", "style", "script"];

/// Attributes reassigned at render time and therefore not kept.
const PRESENTATION_ATTRIBUTES: &[&str] = &["fill", "stroke", "class", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    Path,
    Polygon,
    Circle,
    Rect,
    Group,
    Other(String),
}

impl ShapeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "path" => ShapeKind::Path,
            "polygon" => ShapeKind::Polygon,
            "circle" => ShapeKind::Circle,
            "rect" => ShapeKind::Rect,
            "g" => ShapeKind::Group,
            other => ShapeKind::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ShapeKind::Path => "path",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Group => "g",
            ShapeKind::Other(tag) => tag,
        }
    }

    /// Shapes that get a heatmap fill and an outline.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            ShapeKind::Path | ShapeKind::Polygon | ShapeKind::Circle | ShapeKind::Rect
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    pub kind: ShapeKind,
    /// Raw `id`, or `data-id` when there is no `id`.
    pub identifier: Option<String>,
    /// Structural attributes in document order, `id` included.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MapShape>,
}

impl MapShape {
    /// The two-letter region code encoded in the identifier, if any.
    ///
    /// Identifiers are lowercased and stripped of leading underscores. A
    /// two-character identifier is the code itself; longer ones use their
    /// first two-character whitespace-separated token (`"fr gf"` -> `fr`).
    pub fn region_code(&self) -> Option<String> {
        let identifier = self.identifier.as_deref()?.to_lowercase();
        let clean = identifier.trim_start_matches('_');

        match clean.chars().count() {
            2 => Some(clean.to_string()),
            n if n > 2 => clean
                .split_whitespace()
                .find(|token| token.chars().count() == 2)
                .map(str::to_string),
            _ => None,
        }
    }

    /// Number of shapes in this subtree, this one included.
    pub fn shape_count(&self) -> usize {
        1 + self.children.iter().map(MapShape::shape_count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapTemplate {
    bounds: Bounds,
    shapes: Vec<MapShape>,
}

impl MapTemplate {
    /// Parse the template bundled into the binary.
    pub fn embedded() -> Result<Self, TemplateError> {
        Self::parse(EMBEDDED_TEMPLATE)
    }

    /// Read and parse a template from disk.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let template = Self::parse(&content)?;
        info!(
            "Loaded map template {} ({} shapes)",
            path.display(),
            template.shape_count()
        );
        Ok(template)
    }

    pub fn parse(svg: &str) -> Result<Self, TemplateError> {
        // Exported maps often carry an SVG DOCTYPE.
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let document = Document::parse_with_options(svg, options)?;
        let root = document.root_element();

        if root.tag_name().name() != "svg" {
            return Err(TemplateError::NotSvg(root.tag_name().name().to_string()));
        }

        let bounds = parse_bounds(&root)?;
        let shapes: Vec<MapShape> = root.children().filter_map(convert_node).collect();

        if shapes.is_empty() {
            return Err(TemplateError::Empty);
        }

        debug!(
            "Parsed template with bounds {:?} and {} top-level shapes",
            bounds,
            shapes.len()
        );
        Ok(Self { bounds, shapes })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn shapes(&self) -> &[MapShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.iter().map(MapShape::shape_count).sum()
    }
}

fn convert_node(node: Node) -> Option<MapShape> {
    if !node.is_element() {
        return None;
    }

    // Editor namespaces (inkscape, sodipodi, ...) carry no geometry.
    let tag = node.tag_name();
    if tag.namespace().is_some_and(|ns| ns != crate::scene::SVG_NS) {
        return None;
    }
    if NON_VISUAL_TAGS.contains(&tag.name()) {
        return None;
    }

    let attributes: Vec<(String, String)> = node
        .attributes()
        .filter(|attr| attr.namespace().is_none())
        .filter(|attr| !PRESENTATION_ATTRIBUTES.contains(&attr.name()))
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();

    let identifier = node
        .attribute("id")
        .filter(|id| !id.is_empty())
        .or_else(|| node.attribute("data-id").filter(|id| !id.is_empty()))
        .map(str::to_string);

    Some(MapShape {
        kind: ShapeKind::from_tag(tag.name()),
        identifier,
        attributes,
        children: node.children().filter_map(convert_node).collect(),
    })
}

fn parse_bounds(root: &Node) -> Result<Bounds, TemplateError> {
    if let Some(view_box) = root.attribute("viewBox") {
        let parts: Vec<f64> = view_box
            .replace(',', " ")
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<_, _>>()
            .map_err(|_| TemplateError::InvalidViewBox(view_box.to_string()))?;

        return match parts.as_slice() {
            [x, y, width, height] if *width > 0.0 && *height > 0.0 => Ok(Bounds {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            }),
            _ => Err(TemplateError::InvalidViewBox(view_box.to_string())),
        };
    }

    let length = |name: &str| {
        root.attribute(name)
            .map(|v| v.trim().trim_end_matches("px"))
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| *v > 0.0)
    };

    match (length("width"), length("height")) {
        (Some(width), Some(height)) => Ok(Bounds {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }),
        _ => Ok(FALLBACK_BOUNDS),
    }
}
