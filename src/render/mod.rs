//! Page rendering.
//!
//! Composes the table model builder with the template engine: the model's
//! rows, column definitions and UI hints are serialized to JSON and written
//! into the named regions of a template. The bundled template loads the
//! DataTables widget from its CDN.
//!
//! Regions filled by a full-page render:
//!
//! | Region                  | Value                                      |
//! |-------------------------|--------------------------------------------|
//! | `title`, `page_title`   | escaped page title                         |
//! | `table`                 | the `<table>` element                      |
//! | `table_id`              | table id as a JS string                    |
//! | `tab_data`              | row matrix                                 |
//! | `tab_columns`           | column definitions                         |
//! | `search_columns`        | titles of searchable text columns          |
//! | `column_control_config` | dropdown/search/order column indices       |
//! | `precision`, `locale`   | numeric display settings                   |
//! | `auto_width`            | widget auto-width flag                     |
//! | `js_opts`               | extra widget options, when set             |
//! | `column_control`        | cleared when the extension is disabled     |
//! | `datatables_logo`       | cleared when the logo is disabled          |
//!
//! Template regions absent from a caller-supplied template are skipped.

mod columns;


pub use columns::{NUM_HTML_TYPE, RENDER_LOCALE_NUM_FUNC, RENDER_NUM_FUNC};

use crate::config::RenderOptions;
use crate::dataset::Dataset;
use crate::error::{Df2TablesError, Result};
use crate::fs::atomic_write_file;
use crate::model::{TableModel, build_table_model, escape_html};
use crate::template::{self, Document};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

/// The bundled page template.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../assets/datatable_templ.html");

/// Render a dataset as a complete HTML page using the bundled template.
pub fn render(dataset: &Dataset, options: &RenderOptions) -> Result<String> {
    render_with_template(dataset, options, BUNDLED_TEMPLATE)
}

/// Render a dataset into a caller-supplied template.
///
/// Fails before producing any text when the model cannot be built or the
/// template has malformed regions.
pub fn render_with_template(
    dataset: &Dataset,
    options: &RenderOptions,
    template: &str,
) -> Result<String> {
    let model = build_model(dataset, options)?;

    let mut vars = script_vars(&model, options)?;
    let title = escape_html(&options.title).into_owned();
    vars.insert("title", title.clone());
    vars.insert("page_title", title);
    vars.insert("table_id", script_json(&options.table_id)?);
    vars.insert(
        "table",
        html_tag(
            "table",
            "",
            &[
                ("id", options.table_id.as_str()),
                ("class", options.table_class.as_str()),
            ],
        ),
    );
    if !options.load_column_control {
        vars.insert("column_control", String::new());
    }
    if !options.display_logo {
        vars.insert("datatables_logo", String::new());
    }

    let html = Document::new(template).replace_many(vars)?.into_string();

    tracing::info!(
        rows = model.n_rows(),
        columns = model.n_cols(),
        bytes = html.len(),
        "rendered table"
    );
    Ok(html)
}

/// Render an embeddable fragment: the table element followed by its script.
///
/// `table_attrs` override the default `id` and `class` and may add more
/// attributes. The page must load the widget once, see [`head_fragment`].
/// The page title does not apply here.
pub fn render_inline(
    dataset: &Dataset,
    options: &RenderOptions,
    table_attrs: &[(&str, &str)],
) -> Result<String> {
    if options.title != RenderOptions::default().title {
        tracing::warn!(title = %options.title, "title is ignored for inline rendering");
    }

    let model = build_model(dataset, options)?;

    let mut attrs: Vec<(&str, &str)> = vec![
        ("id", options.table_id.as_str()),
        ("class", options.table_class.as_str()),
    ];
    for &(key, value) in table_attrs {
        match attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => attrs.push((key, value)),
        }
    }
    let table_id = attrs
        .iter()
        .find(|(k, _)| *k == "id")
        .map(|(_, v)| *v)
        .unwrap_or(options.table_id.as_str());

    let mut vars = script_vars(&model, options)?;
    vars.insert("table_id", script_json(table_id)?);

    // substitute into the fragment so cell text is never rescanned for markers
    let fragment = template::extract(BUNDLED_TEMPLATE, "min_content")?;
    let script = Document::new(fragment).replace_many(vars)?;

    let html = format!("{}{}", html_tag("table", "", &attrs), script);
    tracing::info!(
        rows = model.n_rows(),
        columns = model.n_cols(),
        bytes = html.len(),
        "rendered inline table"
    );
    Ok(html)
}

/// The bundled template's `head` region: widget scripts, styles, extensions.
pub fn head_fragment() -> Result<String> {
    Ok(template::extract(BUNDLED_TEMPLATE, "head")?)
}

/// Render with the bundled template and write the page atomically.
///
/// On any failure the destination is left as it was.
pub fn render_to_file<P: AsRef<Path>>(
    dataset: &Dataset,
    options: &RenderOptions,
    path: P,
) -> Result<()> {
    let html = render(dataset, options)?;
    atomic_write_file(path.as_ref(), &html)?;
    tracing::info!(path = %path.as_ref().display(), "wrote table page");
    Ok(())
}

/// Build an HTML element with escaped attribute values.
///
/// ```
/// use df2tables::render::html_tag;
///
/// let tag = html_tag("table", "", &[("id", "t1"), ("data-note", "a\"b")]);
/// assert_eq!(tag, r#"<table id="t1" data-note="a&quot;b"></table>"#);
/// ```
pub fn html_tag(tag: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    let attr_str: String = attrs
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, escape_html(v)))
        .collect();
    format!("<{tag}{attr_str}>{content}</{tag}>")
}

fn build_model(dataset: &Dataset, options: &RenderOptions) -> Result<TableModel> {
    if dataset.n_cols() == 0 {
        return Err(Df2TablesError::Dataset(
            "dataset has no columns to render".to_string(),
        ));
    }
    if dataset.is_empty() {
        tracing::warn!(columns = dataset.n_cols(), "dataset has no rows; rendering an empty table");
    }
    build_table_model(dataset, options)
}

/// Values for the regions inside the table's script.
fn script_vars(
    model: &TableModel,
    options: &RenderOptions,
) -> Result<BTreeMap<&'static str, String>> {
    let separators = options.separators();
    let mut vars = BTreeMap::new();
    vars.insert("tab_data", escape_script(&model.rows_json()));
    vars.insert(
        "tab_columns",
        escape_script(&columns::column_definitions(model, options)),
    );
    vars.insert(
        "search_columns",
        script_json(&columns::search_columns(model))?,
    );
    vars.insert(
        "column_control_config",
        script_json(&columns::column_control_config(model))?,
    );
    vars.insert("precision", options.precision.to_string());
    vars.insert(
        "locale",
        script_json(&json!({
            "enabled": options.locale_formatting,
            "thousands": separators.thousands.map(String::from).unwrap_or_default(),
            "decimal": separators.decimal.to_string(),
        }))?,
    );
    vars.insert("auto_width", columns::auto_width(model).to_string());
    if let Some(opts) = &options.js_opts {
        vars.insert("js_opts", script_json(opts)?);
    }
    Ok(vars)
}

/// Serialize a value for injection into a script region.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value).map_err(|e| {
        Df2TablesError::Config(format!("failed to serialize template value: {}", e))
    })?;
    Ok(escape_script(&text))
}

/// Keep JSON from closing or confusing the surrounding `<script>` element.
///
/// Both sequences can only occur inside JSON strings, where the escaped
/// forms decode to the same text.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\u0021--")
}
