//! Heatmap compositor: counts + template -> standalone SVG document.

use crate::aggregate::CountryCounts;
use crate::color;
use crate::error::RenderError;
use crate::model::Variant;
use crate::scene::{self, Element, SVG_NS, fmt_num};
use crate::template::{Bounds, MapShape, MapTemplate};
use tracing::debug;

pub const TITLE: &str = "Contribution map";

/// Rows shown in the ranked list before the summary row.
pub const MAX_LIST_ROWS: usize = 10;

const CARD_HEIGHT: f64 = 620.0;
const MARGIN: f64 = 40.0;
const CONTENT_TOP: f64 = 130.0;
const CONTENT_BOTTOM: f64 = 600.0;
const HEADER_DIVIDER_Y: f64 = 90.0;

const BADGE_WIDTH: f64 = 150.0;
const BADGE_HEIGHT: f64 = 36.0;
const BADGE_Y: f64 = 35.0;
const BADGE_TEXT_Y: f64 = 58.0;

const MAP_CARD_WIDTH: f64 = 920.0;
const LIST_CARD_WIDTH: f64 = 1200.0;
const LIST_MAP_WIDTH: f64 = 800.0;
const LIST_PANEL_X: f64 = 845.0;
const LIST_TOP: f64 = 120.0;
const LIST_BOTTOM: f64 = 580.0;
const BAR_MAX_WIDTH: f64 = 80.0;
const BAR_GAP: f64 = 28.0;

const BASE_STYLE: &str = "
    @import url('https://rsms.me/inter/inter.css');
    .card { fill: #f9fafb; }
    .title { font-family: 'Inter', sans-serif; font-size: 32px; font-weight: 600; fill: #0f172a; }
    .badge-bg { fill: #dbeafe; }
    .badge-text { font-family: 'Inter', sans-serif; font-size: 15px; font-weight: 800; fill: #1e40af; letter-spacing: 0.05em; }
    .divider { stroke: #e2e8f0; stroke-width: 1; }
    .country-fill { stroke: none; }
    .country-outline { fill: none; stroke: #334155; stroke-width: 0.6; stroke-linejoin: round; pointer-events: none; }
";

const LIST_STYLE: &str = "
    .list-title { font-family: 'Inter', sans-serif; font-size: 18px; font-weight: 600; fill: #64748b; }
    .country-name { font-family: 'Inter', sans-serif; font-size: 16px; font-weight: 500; fill: #334155; }
    .country-count { font-family: 'Inter', sans-serif; font-size: 16px; font-weight: 700; fill: #1e40af; }
    .list-divider { stroke: #e2e8f0; stroke-width: 1; }
";

/// Rectangle in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Card dimensions and map placement for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub card_width: f64,
    pub card_height: f64,
    /// Right edge of the header (badge and divider end here).
    pub header_right: f64,
    pub map_area: Viewport,
}

impl Layout {
    pub fn for_variant(variant: Variant) -> Self {
        let (card_width, header_right) = match variant {
            Variant::Map => (MAP_CARD_WIDTH, MAP_CARD_WIDTH - MARGIN),
            Variant::List => (LIST_CARD_WIDTH, LIST_MAP_WIDTH),
        };
        let map_right = match variant {
            Variant::Map => MAP_CARD_WIDTH - MARGIN,
            Variant::List => LIST_MAP_WIDTH - MARGIN,
        };

        Self {
            card_width,
            card_height: CARD_HEIGHT,
            header_right,
            map_area: Viewport {
                x: MARGIN,
                y: CONTENT_TOP,
                width: map_right - MARGIN,
                height: CONTENT_BOTTOM - CONTENT_TOP,
            },
        }
    }
}

/// Uniform scale plus translation placing template bounds inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Fit {
    /// Largest scale that fits `bounds` into `target` with the aspect ratio
    /// kept, centered on both axes.
    pub fn compute(bounds: Bounds, target: Viewport) -> Result<Self, RenderError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(bounds.width) || !valid(bounds.height) {
            return Err(RenderError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let scale = (target.width / bounds.width).min(target.height / bounds.height);
        Ok(Self {
            scale,
            translate_x: target.x + (target.width - bounds.width * scale) / 2.0 - bounds.x * scale,
            translate_y: target.y + (target.height - bounds.height * scale) / 2.0
                - bounds.y * scale,
        })
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            fmt_num(self.translate_x),
            fmt_num(self.translate_y),
            fmt_num(self.scale)
        )
    }
}

/// Which copy of the template is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Fill,
    Outline,
}

/// Render the heatmap as serialized SVG bytes.
pub fn render(
    counts: &CountryCounts,
    variant: Variant,
    template: &MapTemplate,
) -> Result<Vec<u8>, RenderError> {
    let document = compose(counts, variant, template)?;
    let svg = scene::to_document(&document)?;
    debug!(
        "Rendered {} variant for {} countries ({} bytes)",
        variant.as_str(),
        counts.len(),
        svg.len()
    );
    Ok(svg.into_bytes())
}

/// Build the output element tree without serializing it.
pub fn compose(
    counts: &CountryCounts,
    variant: Variant,
    template: &MapTemplate,
) -> Result<Element, RenderError> {
    let layout = Layout::for_variant(variant);
    let fit = Fit::compute(template.bounds(), layout.map_area)?;
    let max_count = counts.max_count();

    let style = match variant {
        Variant::Map => BASE_STYLE.to_string(),
        Variant::List => format!("{}{}", BASE_STYLE, LIST_STYLE),
    };

    let mut root = Element::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("version", "1.1")
        .attr("width", fmt_num(layout.card_width))
        .attr("height", fmt_num(layout.card_height))
        .attr(
            "viewBox",
            format!(
                "0 0 {} {}",
                fmt_num(layout.card_width),
                fmt_num(layout.card_height)
            ),
        )
        .child(Element::new("style").text(style));

    for element in header(&layout, counts.len()) {
        root.push(element);
    }

    if variant == Variant::List {
        root.push(
            Element::new("line")
                .attr("x1", fmt_num(LIST_MAP_WIDTH + 20.0))
                .attr("y1", fmt_num(MARGIN))
                .attr("x2", fmt_num(LIST_MAP_WIDTH + 20.0))
                .attr("y2", fmt_num(CARD_HEIGHT - MARGIN))
                .attr("class", "list-divider"),
        );
    }

    for pass in [Pass::Fill, Pass::Outline] {
        let mut group = Element::new("g").attr("transform", fit.transform());
        for shape in template.shapes() {
            group.push(clone_shape(shape, pass, counts, max_count));
        }
        root.push(group);
    }

    if variant == Variant::List {
        for element in ranked_list(counts, max_count, layout.card_width) {
            root.push(element);
        }
    }

    Ok(root)
}

/// Copy one template node for `pass`, recursing into its children.
///
/// Geometry gets a pass class; fill copies also get the heatmap color for
/// the region encoded in the node identifier (white when there is none).
/// Outline copies drop `id` so ids stay unique across the document.
pub fn clone_shape(shape: &MapShape, pass: Pass, counts: &CountryCounts, max_count: u64) -> Element {
    let mut element = Element::new(shape.kind.tag());
    for (name, value) in &shape.attributes {
        if pass == Pass::Outline && name == "id" {
            continue;
        }
        element.set_attr(name.as_str(), value);
    }

    if shape.kind.is_geometry() {
        match pass {
            Pass::Fill => {
                let count = shape
                    .region_code()
                    .map(|code| counts.get_str(&code))
                    .unwrap_or(0);
                element.set_attr("class", "country-fill");
                element.set_attr("fill", color::scale(count, max_count));
            }
            Pass::Outline => element.set_attr("class", "country-outline"),
        }
    }

    for child in &shape.children {
        element.push(clone_shape(child, pass, counts, max_count));
    }
    element
}

fn header(layout: &Layout, country_count: usize) -> Vec<Element> {
    let badge_x = layout.header_right - BADGE_WIDTH;
    vec![
        Element::new("rect")
            .attr("x", 0)
            .attr("y", 0)
            .attr("width", fmt_num(layout.card_width))
            .attr("height", fmt_num(layout.card_height))
            .attr("rx", 16)
            .attr("class", "card"),
        Element::new("text")
            .attr("x", fmt_num(MARGIN))
            .attr("y", 60)
            .attr("class", "title")
            .text(TITLE),
        Element::new("rect")
            .attr("x", fmt_num(badge_x))
            .attr("y", fmt_num(BADGE_Y))
            .attr("width", fmt_num(BADGE_WIDTH))
            .attr("height", fmt_num(BADGE_HEIGHT))
            .attr("rx", 18)
            .attr("class", "badge-bg"),
        Element::new("text")
            .attr("x", fmt_num(badge_x + BADGE_WIDTH / 2.0))
            .attr("y", fmt_num(BADGE_TEXT_Y))
            .attr("class", "badge-text")
            .attr("text-anchor", "middle")
            .text(format!("{} COUNTRIES", country_count)),
        Element::new("line")
            .attr("x1", fmt_num(MARGIN))
            .attr("y1", fmt_num(HEADER_DIVIDER_Y))
            .attr("x2", fmt_num(layout.header_right))
            .attr("y2", fmt_num(HEADER_DIVIDER_Y))
            .attr("class", "divider"),
    ]
}

/// Heading, up to [`MAX_LIST_ROWS`] ranked rows and an optional summary row.
fn ranked_list(counts: &CountryCounts, max_count: u64, card_width: f64) -> Vec<Element> {
    let ranked = counts.ranked();
    let shown = ranked.len().min(MAX_LIST_ROWS);
    let remaining = ranked.len() - shown;
    let count_x = card_width - MARGIN;

    let mut elements = vec![
        Element::new("text")
            .attr("x", fmt_num(LIST_PANEL_X))
            .attr("y", 60)
            .attr("class", "list-title")
            .text(format!("TOP {} COUNTRIES", shown)),
        Element::new("line")
            .attr("x1", fmt_num(LIST_MAP_WIDTH + 30.0))
            .attr("y1", fmt_num(HEADER_DIVIDER_Y))
            .attr("x2", fmt_num(count_x))
            .attr("y2", fmt_num(HEADER_DIVIDER_Y))
            .attr("class", "divider"),
    ];

    let rows = shown + usize::from(remaining > 0);
    let positions = row_positions(rows);

    for ((code, count), y) in ranked.iter().take(shown).zip(&positions) {
        let bar_width = *count as f64 / max_count as f64 * BAR_MAX_WIDTH;
        elements.push(
            Element::new("text")
                .attr("x", fmt_num(LIST_PANEL_X))
                .attr("y", fmt_num(y + 4.0))
                .attr("class", "country-name")
                .text(code.display_name()),
        );
        elements.push(
            Element::new("text")
                .attr("x", fmt_num(count_x))
                .attr("y", fmt_num(y + 4.0))
                .attr("class", "country-count")
                .attr("text-anchor", "end")
                .text(count.to_string()),
        );
        elements.push(
            Element::new("rect")
                .attr("x", fmt_num(count_x - BAR_GAP - bar_width))
                .attr("y", fmt_num(y - 12.0))
                .attr("width", fmt_num(bar_width))
                .attr("height", 18)
                .attr("rx", 9)
                .attr("fill", color::scale(*count, max_count))
                .attr("class", "country-bar"),
        );
    }

    if remaining > 0
        && let Some(y) = positions.last()
    {
        elements.push(
            Element::new("text")
                .attr("x", fmt_num(LIST_PANEL_X))
                .attr("y", fmt_num(y + 4.0))
                .attr("class", "list-title")
                .text(format!("+{} more countries", remaining)),
        );
    }

    elements
}

/// Baselines for `rows` rows, each centered in an equal slot of the list area.
pub fn row_positions(rows: usize) -> Vec<f64> {
    if rows == 0 {
        return Vec::new();
    }
    let step = (LIST_BOTTOM - LIST_TOP) / rows as f64;
    (0..rows)
        .map(|i| LIST_TOP + step * (i as f64 + 0.5))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_template_is_width_bound() {
        let bounds = Bounds {
            x: 0.0,
            y: 0.0,
            width: 1000.0,
            height: 500.0,
        };
        let fit = Fit::compute(bounds, Layout::for_variant(Variant::Map).map_area).unwrap();
        // 840 / 1000 < 470 / 500
        assert!((fit.scale - 0.84).abs() < 1e-12);
        assert!((fit.translate_x - 40.0).abs() < 1e-9);
        // 130 + (470 - 420) / 2
        assert!((fit.translate_y - 155.0).abs() < 1e-9);
        assert_eq!(fit.transform(), "translate(40, 155) scale(0.84)");
    }

    #[test]
    fn test_fit_accounts_for_origin() {
        let bounds = Bounds {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 100.0,
        };
        let target = Viewport {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
        };
        let fit = Fit::compute(bounds, target).unwrap();
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.translate_x, 40.0);
        assert_eq!(fit.translate_y, -20.0);
    }

    #[test]
    fn test_fit_rejects_degenerate_bounds() {
        let bounds = Bounds {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 10.0,
        };
        let target = Layout::for_variant(Variant::List).map_area;
        assert!(matches!(
            Fit::compute(bounds, target),
            Err(RenderError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_layouts() {
        let map = Layout::for_variant(Variant::Map);
        assert_eq!(map.card_width, 920.0);
        assert_eq!(map.map_area.x + map.map_area.width, 880.0);
        assert_eq!(map.map_area.y + map.map_area.height, 600.0);

        let list = Layout::for_variant(Variant::List);
        assert_eq!(list.card_width, 1200.0);
        assert_eq!(list.map_area.width, 720.0);
        assert_eq!(list.header_right, 800.0);
    }

    #[test]
    fn test_row_positions_evenly_spaced() {
        assert!(row_positions(0).is_empty());
        assert_eq!(row_positions(1), vec![350.0]);

        let rows = row_positions(4);
        assert_eq!(rows, vec![177.5, 292.5, 407.5, 522.5]);
        assert!(rows.iter().all(|y| *y > LIST_TOP && *y < LIST_BOTTOM));
    }
}
