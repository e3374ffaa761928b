// Tests for heatmap compositing

use contribmap_core::render::{MAX_LIST_ROWS, Pass, clone_shape, compose};
use contribmap_core::scene::Element;
use contribmap_core::template::{MapShape, ShapeKind};
use contribmap_core::{CountryCode, CountryCounts, MapTemplate, Variant, render};

const TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">
    <title>test map</title>
    <g id="world" transform="translate(1 1)">
        <path id="JP" d="M80 10 L85 10 L85 20 Z"/>
        <path id="DE" d="M50 10 L55 10 L55 15 Z" fill="red"/>
        <circle id="_SG" cx="70" cy="30" r="1"/>
    </g>
    <rect id="_somaliland" x="60" y="25" width="3" height="2"/>
</svg>"#;

fn template() -> MapTemplate {
    MapTemplate::parse(TEMPLATE).unwrap()
}

fn counts(entries: &[(&str, u64)]) -> CountryCounts {
    entries
        .iter()
        .map(|(code, count)| (CountryCode::new(code).unwrap(), *count))
        .collect()
}

fn find_by_attr<'a>(root: &'a Element, name: &str, value: &str) -> Vec<&'a Element> {
    root.descendants()
        .into_iter()
        .filter(|e| e.get_attr(name) == Some(value))
        .collect()
}

/// The two transformed template copies, fill first.
fn map_groups(root: &Element) -> (&Element, &Element) {
    let groups: Vec<&Element> = root
        .children()
        .iter()
        .filter(|e| e.name() == "g" && e.get_attr("transform").is_some())
        .collect();
    assert_eq!(groups.len(), 2);
    (groups[0], groups[1])
}

fn texts_with_class<'a>(root: &'a Element, class: &str) -> Vec<&'a str> {
    find_by_attr(root, "class", class)
        .iter()
        .filter_map(|e| e.text_content())
        .collect()
}

// ============================================================================
// Document Tests
// ============================================================================

#[test]
fn test_render_is_deterministic() {
    let template = template();
    let counts = counts(&[("jp", 4), ("de", 2), ("sg", 1)]);

    for variant in [Variant::Map, Variant::List] {
        let first = render(&counts, variant, &template).unwrap();
        let second = render(&counts, variant, &template).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_render_is_standalone_svg() {
    let bytes = render(&counts(&[("de", 1)]), Variant::List, &template()).unwrap();
    let svg = String::from_utf8(bytes).unwrap();
    assert!(svg.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<svg"));

    let document = roxmltree::Document::parse(&svg).unwrap();
    let root = document.root_element();
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("viewBox"), Some("0 0 1200 620"));
}

#[test]
fn test_map_variant_layout() {
    let root = compose(&counts(&[("jp", 1)]), Variant::Map, &template()).unwrap();
    assert_eq!(root.get_attr("width"), Some("920"));
    assert_eq!(root.get_attr("height"), Some("620"));
    assert_eq!(texts_with_class(&root, "title"), vec!["Contribution map"]);
    assert_eq!(texts_with_class(&root, "badge-text"), vec!["1 COUNTRIES"]);
    assert!(find_by_attr(&root, "class", "list-title").is_empty());

    // 100x50 into 840x470: width bound, scale 8.4, centered vertically
    let (fills, _) = map_groups(&root);
    assert_eq!(fills.get_attr("transform"), Some("translate(40, 155) scale(8.4)"));
}

#[test]
fn test_header_has_style_and_card() {
    let root = compose(&CountryCounts::new(), Variant::Map, &template()).unwrap();
    let style = &root.children()[0];
    assert_eq!(style.name(), "style");
    assert!(style.text_content().unwrap().contains(".country-outline"));
    assert_eq!(find_by_attr(&root, "class", "card").len(), 1);
    assert_eq!(texts_with_class(&root, "badge-text"), vec!["0 COUNTRIES"]);
}

// ============================================================================
// Fill and Outline Pass Tests
// ============================================================================

#[test]
fn test_single_country_uses_light_anchor() {
    let root = compose(&counts(&[("jp", 1)]), Variant::Map, &template()).unwrap();
    let (fills, _) = map_groups(&root);

    let japan = find_by_attr(fills, "id", "JP");
    assert_eq!(japan.len(), 1);
    assert_eq!(japan[0].get_attr("fill"), Some("#93c5fd"));
    assert_eq!(japan[0].get_attr("class"), Some("country-fill"));

    let germany = find_by_attr(fills, "id", "DE");
    assert_eq!(germany[0].get_attr("fill"), Some("#ffffff"));
}

#[test]
fn test_fill_pass_colors_every_geometry() {
    let root = compose(&counts(&[("sg", 9), ("de", 3)]), Variant::Map, &template()).unwrap();
    let (fills, _) = map_groups(&root);

    let geometry: Vec<&Element> = fills
        .descendants()
        .into_iter()
        .filter(|e| ["path", "circle", "rect"].contains(&e.name()))
        .collect();
    assert_eq!(geometry.len(), 4);
    assert!(geometry.iter().all(|e| e.get_attr("fill").is_some()));

    assert_eq!(find_by_attr(fills, "id", "_SG")[0].get_attr("fill"), Some("#1e40af"));
    assert_eq!(find_by_attr(fills, "id", "_somaliland")[0].get_attr("fill"), Some("#ffffff"));
    // the template's own fill is replaced
    assert_ne!(find_by_attr(fills, "id", "DE")[0].get_attr("fill"), Some("red"));
}

#[test]
fn test_outline_pass_follows_fill_pass() {
    let root = compose(&counts(&[("de", 1)]), Variant::Map, &template()).unwrap();
    let (fills, outlines) = map_groups(&root);

    let position = |target: &Element| {
        root.children()
            .iter()
            .position(|e| std::ptr::eq(e, target))
            .unwrap()
    };
    assert!(position(fills) < position(outlines));

    let outlined: Vec<&Element> = find_by_attr(outlines, "class", "country-outline");
    assert_eq!(outlined.len(), 4);
    for element in outlines.descendants() {
        assert!(element.get_attr("id").is_none());
        assert!(element.get_attr("fill").is_none());
    }

    // group structure and transforms survive in both copies
    assert_eq!(outlines.children()[0].get_attr("transform"), Some("translate(1 1)"));
    assert_eq!(fills.children()[0].get_attr("id"), Some("world"));
}

#[test]
fn test_ids_are_unique() {
    let bytes = render(&counts(&[("de", 1)]), Variant::List, &template()).unwrap();
    let svg = String::from_utf8(bytes).unwrap();
    assert_eq!(svg.matches("id=\"JP\"").count(), 1);
}

#[test]
fn test_clone_shape_is_pure() {
    let shape = MapShape {
        kind: ShapeKind::Polygon,
        identifier: Some("AU".to_string()),
        attributes: vec![
            ("id".to_string(), "AU".to_string()),
            ("points".to_string(), "0,0 1,1 1,0".to_string()),
        ],
        children: Vec::new(),
    };
    let counts = counts(&[("au", 10), ("nz", 100)]);

    let fill = clone_shape(&shape, Pass::Fill, &counts, 100);
    assert_eq!(fill.name(), "polygon");
    assert_eq!(fill.get_attr("points"), Some("0,0 1,1 1,0"));
    assert_eq!(fill.get_attr("fill"), Some("#5882d6"));

    let outline = clone_shape(&shape, Pass::Outline, &counts, 100);
    assert_eq!(outline.get_attr("id"), None);
    assert_eq!(outline.get_attr("class"), Some("country-outline"));

    assert_eq!(shape.attributes.len(), 2);
}

// ============================================================================
// Ranked List Tests
// ============================================================================

#[test]
fn test_list_rows_and_summary() {
    let codes = [
        "us", "de", "in", "br", "fr", "gb", "jp", "ca", "ng", "ua", "pl", "es",
    ];
    let entries: Vec<(&str, u64)> = codes
        .iter()
        .enumerate()
        .map(|(i, code)| (*code, 20 - i as u64))
        .collect();
    let counts = counts(&entries);

    let root = compose(&counts, Variant::List, &template()).unwrap();
    let names = texts_with_class(&root, "country-name");
    assert_eq!(names.len(), MAX_LIST_ROWS);
    assert_eq!(names[0], "United States");
    assert_eq!(names[1], "Germany");

    let titles = texts_with_class(&root, "list-title");
    assert_eq!(titles, vec!["TOP 10 COUNTRIES", "+2 more countries"]);
    assert_eq!(texts_with_class(&root, "badge-text"), vec!["12 COUNTRIES"]);

    // displayed plus remaining covers every country
    assert_eq!(names.len() + 2, counts.len());
}

#[test]
fn test_list_without_summary() {
    let counts = counts(&[("de", 1), ("jp", 5), ("ci", 5)]);
    let root = compose(&counts, Variant::List, &template()).unwrap();

    assert_eq!(
        texts_with_class(&root, "country-name"),
        vec!["Japan", "Côte d'Ivoire", "Germany"]
    );
    assert_eq!(texts_with_class(&root, "country-count"), vec!["5", "5", "1"]);
    assert_eq!(texts_with_class(&root, "list-title"), vec!["TOP 3 COUNTRIES"]);
}

#[test]
fn test_list_bars_scale_with_count() {
    let counts = counts(&[("fr", 8), ("it", 2)]);
    let root = compose(&counts, Variant::List, &template()).unwrap();
    let bars = find_by_attr(&root, "class", "country-bar");

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].get_attr("width"), Some("80"));
    assert_eq!(bars[0].get_attr("x"), Some("1052"));
    assert_eq!(bars[0].get_attr("fill"), Some("#1e40af"));
    assert_eq!(bars[1].get_attr("width"), Some("20"));
}

#[test]
fn test_list_rows_evenly_spaced() {
    let counts = counts(&[("fr", 3), ("it", 2), ("es", 1), ("pt", 1)]);
    let root = compose(&counts, Variant::List, &template()).unwrap();

    let baselines: Vec<&str> = find_by_attr(&root, "class", "country-name")
        .iter()
        .filter_map(|e| e.get_attr("y"))
        .collect();
    assert_eq!(baselines, vec!["181.5", "296.5", "411.5", "526.5"]);
}

#[test]
fn test_unknown_code_shows_uppercase() {
    let counts = counts(&[("zz", 1)]);
    let root = compose(&counts, Variant::List, &template()).unwrap();
    assert_eq!(texts_with_class(&root, "country-name"), vec!["ZZ"]);
}

#[test]
fn test_empty_counts_render() {
    let root = compose(&CountryCounts::new(), Variant::List, &template()).unwrap();
    assert_eq!(texts_with_class(&root, "list-title"), vec!["TOP 0 COUNTRIES"]);
    assert!(find_by_attr(&root, "class", "country-name").is_empty());

    let (fills, _) = map_groups(&root);
    assert!(
        find_by_attr(fills, "class", "country-fill")
            .iter()
            .all(|e| e.get_attr("fill") == Some("#ffffff"))
    );
}
