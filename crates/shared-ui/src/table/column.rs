use dioxus::prelude::*;
use shared_types::CellValue;

use super::row::{RowFn, TableRow};

/// Column id whose cells never trigger row clicks.
pub const ACTIONS_COLUMN: &str = "actions";

/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "align-left",
            Align::Center => "align-center",
            Align::Right => "align-right",
        }
    }
}

/// How a column reads its value out of a row.
pub enum Accessor<T> {
    Field(String),
    Compute(RowFn<T, CellValue>),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(name.clone()),
            Accessor::Compute(f) => Accessor::Compute(f.clone()),
        }
    }
}

impl<T> PartialEq for Accessor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Accessor::Field(a), Accessor::Field(b)) => a == b,
            (Accessor::Compute(a), Accessor::Compute(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: TableRow> Accessor<T> {
    pub fn read(&self, row: &T) -> CellValue {
        match self {
            Accessor::Field(name) => row.field(name),
            Accessor::Compute(f) => f.call(row),
        }
    }
}

/// What a column displays.
///
/// `Hybrid` renders through its render function while sorting and filtering
/// use the accessor value.
pub enum ColumnKind<T> {
    Blank,
    Accessor(Accessor<T>),
    Render(RowFn<T, Element>),
    Hybrid {
        accessor: Accessor<T>,
        render: RowFn<T, Element>,
    },
}

impl<T> Clone for ColumnKind<T> {
    fn clone(&self) -> Self {
        match self {
            ColumnKind::Blank => ColumnKind::Blank,
            ColumnKind::Accessor(a) => ColumnKind::Accessor(a.clone()),
            ColumnKind::Render(r) => ColumnKind::Render(r.clone()),
            ColumnKind::Hybrid { accessor, render } => ColumnKind::Hybrid {
                accessor: accessor.clone(),
                render: render.clone(),
            },
        }
    }
}

impl<T> PartialEq for ColumnKind<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ColumnKind::Blank, ColumnKind::Blank) => true,
            (ColumnKind::Accessor(a), ColumnKind::Accessor(b)) => a == b,
            (ColumnKind::Render(a), ColumnKind::Render(b)) => a == b,
            (
                ColumnKind::Hybrid {
                    accessor: a1,
                    render: r1,
                },
                ColumnKind::Hybrid {
                    accessor: a2,
                    render: r2,
                },
            ) => a1 == a2 && r1 == r2,
            _ => false,
        }
    }
}

/// Descriptor of one table column.
pub struct Column<T> {
    pub id: String,
    pub header: String,
    pub kind: ColumnKind<T>,
    pub sortable: bool,
    pub filterable: bool,
    pub width: Option<String>,
    pub align: Align,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            kind: self.kind.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            width: self.width.clone(),
            align: self.align,
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.header == other.header
            && self.kind == other.kind
            && self.sortable == other.sortable
            && self.filterable == other.filterable
            && self.width == other.width
            && self.align == other.align
    }
}

impl<T: 'static> Column<T> {
    fn with_kind(id: impl Into<String>, header: impl Into<String>, kind: ColumnKind<T>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            kind,
            sortable: false,
            filterable: false,
            width: None,
            align: Align::Left,
        }
    }

    /// Column reading the row property named like the column id.
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let accessor = Accessor::Field(id.clone());
        Self::with_kind(id, header, ColumnKind::Accessor(accessor))
    }

    /// Column reading a differently named row property.
    pub fn property(
        id: impl Into<String>,
        header: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        let accessor = Accessor::Field(property.into());
        Self::with_kind(id, header, ColumnKind::Accessor(accessor))
    }

    /// Column whose value is computed from the row.
    pub fn computed(
        id: impl Into<String>,
        header: impl Into<String>,
        f: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        let accessor = Accessor::Compute(RowFn::new(f));
        Self::with_kind(id, header, ColumnKind::Accessor(accessor))
    }

    /// Column rendered entirely by `render`.
    pub fn rendered(
        id: impl Into<String>,
        header: impl Into<String>,
        render: impl Fn(&T) -> Element + 'static,
    ) -> Self {
        Self::with_kind(id, header, ColumnKind::Render(RowFn::new(render)))
    }

    /// Column with neither accessor nor renderer; displays nothing.
    pub fn blank(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self::with_kind(id, header, ColumnKind::Blank)
    }

    /// Render this column with `render`, keeping any accessor for sorting.
    pub fn render_with(mut self, render: impl Fn(&T) -> Element + 'static) -> Self {
        let render = RowFn::new(render);
        self.kind = match self.kind {
            ColumnKind::Accessor(accessor) | ColumnKind::Hybrid { accessor, .. } => {
                ColumnKind::Hybrid { accessor, render }
            }
            ColumnKind::Blank | ColumnKind::Render(_) => ColumnKind::Render(render),
        };
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

impl<T: TableRow> Column<T> {
    /// Plain value of this column for a row, used by sorting and filtering.
    ///
    /// Render-only columns fall back to the row property named like the
    /// column id.
    pub fn value(&self, row: &T) -> CellValue {
        match &self.kind {
            ColumnKind::Accessor(accessor) | ColumnKind::Hybrid { accessor, .. } => {
                accessor.read(row)
            }
            ColumnKind::Render(_) => row.field(&self.id),
            ColumnKind::Blank => CellValue::Empty,
        }
    }
}

/// Resolved content of one body cell.
pub enum Cell {
    Rendered(Element),
    Value(CellValue),
}

/// Resolve what a column displays for a row.
///
/// Render functions win and are used verbatim, then accessors; a column
/// without either resolves to an empty value.
pub fn resolve_cell<T: TableRow>(column: &Column<T>, row: &T) -> Cell {
    match &column.kind {
        ColumnKind::Render(render) | ColumnKind::Hybrid { render, .. } => {
            Cell::Rendered(render.call(row))
        }
        ColumnKind::Accessor(accessor) => Cell::Value(accessor.read(row)),
        ColumnKind::Blank => Cell::Value(CellValue::Empty),
    }
}
