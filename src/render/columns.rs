//! Column definitions and UI hint payloads for the table widget.

use crate::config::RenderOptions;
use crate::model::{ColumnKind, RenderHint, TableModel, ValueKind, escape_html};
use serde_json::{Map, Value, json};

/// Browser-side renderer for colored numbers and raw HTML cells.
pub const RENDER_NUM_FUNC: &str = "render_num";
/// Browser-side renderer for grouped plain numbers.
pub const RENDER_LOCALE_NUM_FUNC: &str = "render_locale_num";
/// Sort type registered by the bundled template.
pub const NUM_HTML_TYPE: &str = "num-html";

/// Stand-in for a function reference inside JSON. Escaped titles never
/// contain `<`, so the placeholder cannot collide with column text.
fn func_placeholder(func: &str) -> String {
    format!("<fn:{}>", func)
}

/// Column definitions as a JS array literal.
///
/// Renderer functions are emitted as bare identifiers, not strings.
pub(crate) fn column_definitions(model: &TableModel, options: &RenderOptions) -> String {
    let defs: Vec<Value> = model
        .columns()
        .iter()
        .map(|column| {
            let mut def = Map::new();
            def.insert("title".into(), json!(escape_html(&column.title)));
            def.insert("orderable".into(), json!(column.orderable));
            def.insert("searchable".into(), json!(column.searchable));

            if options.load_column_control {
                let search = match column.kind {
                    ColumnKind::CategoricalCandidate => "searchList",
                    _ => "search",
                };
                def.insert("columnControl".into(), json!(["order", ["title", search]]));
            }

            match column.render_hint {
                RenderHint::NumericColored | RenderHint::RawHtmlPassthrough => {
                    def.insert("type".into(), json!(NUM_HTML_TYPE));
                    def.insert("render".into(), json!(func_placeholder(RENDER_NUM_FUNC)));
                }
                RenderHint::Plain
                    if options.locale_formatting && column.value_kind == ValueKind::Numeric =>
                {
                    def.insert(
                        "render".into(),
                        json!(func_placeholder(RENDER_LOCALE_NUM_FUNC)),
                    );
                }
                RenderHint::Plain => {}
            }

            Value::Object(def)
        })
        .collect();

    let mut text = Value::Array(defs).to_string();
    for func in [RENDER_NUM_FUNC, RENDER_LOCALE_NUM_FUNC] {
        text = text.replace(&format!("\"{}\"", func_placeholder(func)), func);
    }
    text
}

/// Dropdown, search and order column indices for the column control menus.
pub(crate) fn column_control_config(model: &TableModel) -> Value {
    let hints = model.hints();
    json!({
        "dropdown": hints.categorical,
        "search": hints.searchable,
        "order": hints.orderable,
    })
}

/// Escaped titles of searchable text columns, matching the column definitions.
pub(crate) fn search_columns(model: &TableModel) -> Value {
    json!(
        model
            .searchable_titles()
            .into_iter()
            .map(|t| escape_html(t).into_owned())
            .collect::<Vec<_>>()
    )
}

/// Let the widget size columns itself for small or wide tables.
pub(crate) fn auto_width(model: &TableModel) -> bool {
    model.n_rows() < 100 || model.n_cols() > 10
}
