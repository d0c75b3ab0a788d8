//! Tree builder: turns parameters and render state into markup.

use std::collections::HashSet;

use webdom::Element;

use crate::error::GridError;
use crate::format::format_value;

use super::cell::CellValue;
use super::column::{ColumnConfiguration, ColumnType};
use super::params::{GridParams, Measurement};
use super::state::RenderState;

// =============================================================================
// Class names
// =============================================================================

pub const OUTER_CLASS: &str = "mb-grid-div-outer";
pub const HEADER_DIV_CLASS: &str = "mb-grid-div-header mb-grid-backgroundcolor-header-background";
pub const BODY_DIV_CLASS: &str = "mb-grid-div-body";
pub const TABLE_CLASS: &str = "mb-grid-table";
pub const COLGROUP_CLASS: &str = "mb-grid-colgroup";
pub const THEAD_CLASS: &str = "mb-grid-thead";
pub const TBODY_CLASS: &str = "mb-grid-tbody";
pub const TR_CLASS: &str = "mb-grid-tr";
pub const HEADER_BACKGROUND_CLASS: &str = "mb-grid-backgroundcolor-header-background";
pub const GROUP_TD_CLASS: &str = "mb-grid-td-group mb-grid-backgroundcolor-row-group";
pub const ROW_SELECTED_CLASS: &str = "mb-grid-backgroundcolor-row-selected";
pub const ROW_EVEN_CLASS: &str = "mb-grid-backgroundcolor-row-even";
pub const ROW_ODD_CLASS: &str = "mb-grid-backgroundcolor-row-odd";

const BLUR: &str = " filter: blur(0.25em); ";

/// Element ids of the scrolling containers, unique per grid instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIds {
    pub header: String,
    pub body: String,
}

impl GridIds {
    pub fn generate(prefix: &str) -> Self {
        Self {
            header: format!("{prefix}-header-{}", uuid::Uuid::new_v4()),
            body: format!("{prefix}-body-{}", uuid::Uuid::new_v4()),
        }
    }
}

/// The cheap first-pass output.
pub fn build_placeholder() -> Element {
    Element::div()
}

/// Build the full grid markup.
///
/// Fails before emitting anything when a column has an unsupported kind or
/// the width array does not match the columns.
pub fn build_grid<T>(params: &GridParams<T>, state: &RenderState, ids: &GridIds) -> Result<Element, GridError> {
    if params.columns.is_empty() {
        return Err(GridError::MissingColumns);
    }
    for column in &params.columns {
        column.check_kind()?;
    }
    if state.column_widths.len() != params.columns.len() {
        return Err(GridError::ColumnWidthMismatch {
            widths: state.column_widths.len(),
            columns: params.columns.len(),
        });
    }

    let colgroup = build_colgroup(params, &state.column_widths);

    let mut parts = Vec::with_capacity(2);
    if !params.suppress_header {
        parts.push(build_header(params, ids, colgroup.clone()));
    }
    parts.push(build_body(params, state, ids, colgroup)?);

    let root = if params.class.is_empty() && params.style.is_empty() {
        Element::fragment()
    } else {
        Element::div()
            .class(format!("{OUTER_CLASS} {}", params.class))
            .style(params.style.clone())
    };
    Ok(root.children(parts))
}

// =============================================================================
// Column sizing
// =============================================================================

fn build_colgroup<T>(params: &GridParams<T>, widths: &[f32]) -> Element {
    let cols = params.columns.iter().zip(widths).map(|(column, measured)| {
        match column_style(params.measurement, column.width, *measured) {
            Some(style) => Element::col().style(style),
            None => Element::col(),
        }
    });
    Element::colgroup().class(COLGROUP_CLASS).children(cols)
}

/// `width`, `max-width` and `min-width` for one `<col>`.
///
/// Unit modes use the column's explicit width and emit nothing without one.
pub fn column_style(measurement: Measurement, explicit: Option<f32>, measured: f32) -> Option<String> {
    let (width, unit) = match measurement.unit() {
        Some(unit) => (explicit?, unit),
        None => (measured, "px"),
    };
    Some(format!(
        "width: {width}{unit} !important; max-width: {width}{unit} !important; min-width: {width}{unit} !important; "
    ))
}

// =============================================================================
// Header
// =============================================================================

fn build_header<T>(params: &GridParams<T>, ids: &GridIds, colgroup: Element) -> Element {
    let cells = params.columns.iter().enumerate().map(|(index, column)| {
        let style = format!(
            "{} color: {}; background-color : {};",
            border_style(index == 0, true),
            column.header_foreground.to_css(),
            column.header_background.to_css(),
        );
        Element::td()
            .class(format!("mb-grid-td {HEADER_BACKGROUND_CLASS}"))
            .style(style)
            .text(column.title.clone())
    });

    Element::div().class(HEADER_DIV_CLASS).id(ids.header.clone()).child(
        Element::table()
            .class(TABLE_CLASS)
            .child(colgroup)
            .child(
                Element::thead()
                    .class(THEAD_CLASS)
                    .child(Element::tr().class(TR_CLASS).children(cells)),
            ),
    )
}

/// Cell borders. The first column carries the left edge; header cells also
/// carry top and bottom.
pub fn border_style(first_column: bool, header: bool) -> &'static str {
    match (header, first_column) {
        (true, true) => " border-width: 1px; border-style: solid; border-color: black; ",
        (true, false) => " border-width: 1px 1px 1px 0px; border-style: solid; border-color: black; ",
        (false, true) => " border-width: 0px 1px 0px 1px; border-style: solid; border-color: black; ",
        (false, false) => " border-width: 0px 1px 0px 0px; border-style: solid; border-color: black; ",
    }
}

// =============================================================================
// Body
// =============================================================================

fn build_body<T>(
    params: &GridParams<T>,
    state: &RenderState,
    ids: &GridIds,
    colgroup: Element,
) -> Result<Element, GridError> {
    let mut rows = Vec::with_capacity(params.row_count() + params.data.len());
    let mut seen = HashSet::new();

    for (group_index, (label, group_rows)) in params.data.iter().enumerate() {
        if params.group {
            rows.push(build_group_row(label, params.columns.len(), group_index == 0));
        }

        for (position, (pair_key, row)) in group_rows.iter().enumerate() {
            let key = params.row_key(pair_key, row);
            if !seen.insert(key.clone()) {
                return Err(GridError::DuplicateRowKey(key));
            }

            let class = row_class(params.highlight_selected_row && key == state.selected_key, position);

            let mut cells = Vec::with_capacity(params.columns.len());
            for (index, column) in params.columns.iter().enumerate() {
                cells.push(build_cell(params, column, row, index == 0, class)?);
            }

            rows.push(
                Element::tr()
                    .class(format!("{TR_CLASS} {class}"))
                    .id(key.clone())
                    .key(key)
                    .clickable(true)
                    .children(cells),
            );
        }
    }

    Ok(Element::div()
        .class(BODY_DIV_CLASS)
        .id(ids.body.clone())
        .scrollable(true)
        .child(
            Element::table()
                .class(TABLE_CLASS)
                .child(colgroup)
                .child(Element::tbody().class(TBODY_CLASS).children(rows)),
        ))
}

/// Selected rows win over the even/odd alternation, which restarts in each
/// group.
pub fn row_class(selected: bool, position: usize) -> &'static str {
    if selected {
        ROW_SELECTED_CLASS
    } else if position % 2 == 0 {
        ROW_EVEN_CLASS
    } else {
        ROW_ODD_CLASS
    }
}

fn build_group_row(label: &str, column_count: usize, first: bool) -> Element {
    let mut td = Element::td()
        .attribute("colspan", column_count.to_string())
        .class(GROUP_TD_CLASS);
    if first {
        td = td.style("border-top: 1px solid black; ");
    }
    Element::tr()
        .class(TR_CLASS)
        .child(td.attribute("mbgrid-td-wide", "0").text(format!("  {label}")))
}

fn build_cell<T>(
    params: &GridParams<T>,
    column: &ColumnConfiguration<T>,
    row: &T,
    first_column: bool,
    row_class: &str,
) -> Result<Element, GridError> {
    let td = Element::td().class(format!("mb-grid-td {row_class}"));
    let mut style = border_style(first_column, false).to_string();
    let blur = column.sensitive && params.obscure_sensitive;

    let cell = match column.extract(row)? {
        Some(CellValue::Icon(icon)) => {
            style.push_str(&format!(" color: {}; text-align: center;", icon.color.to_css()));
            let td = td.style(style);
            match icon.element() {
                Some(glyph) => td.child(glyph),
                None => td,
            }
        }
        Some(CellValue::TextColor(spec)) => {
            if spec.suppress {
                td.style(style)
            } else {
                style.push_str(&format!(
                    " color: {}; background-color: {};",
                    spec.foreground.to_css(),
                    spec.background.to_css()
                ));
                if blur {
                    style.push_str(BLUR);
                }
                td.style(style).text(spec.text)
            }
        }
        Some(CellValue::Text(value)) => {
            text_style(column, row, blur, &mut style);
            td.style(style)
                .text(format_value(&value, column.format.as_deref())?)
        }
        None if column.column_type == ColumnType::Text => {
            text_style(column, row, blur, &mut style);
            td.style(style)
        }
        None => td,
    };
    Ok(cell)
}

fn text_style<T>(column: &ColumnConfiguration<T>, row: &T, blur: bool, style: &mut String) {
    if let Some(fg) = column.foreground_of(row) {
        style.push_str(&format!(" color: {}; ", fg.to_css()));
    }
    if let Some(bg) = column.background_of(row).filter(|bg| !bg.is_transparent()) {
        style.push_str(&format!(" background-color: {}; ", bg.to_css()));
    }
    if blur {
        style.push_str(BLUR);
    }
}
