use shared_types::CellValue;
use std::rc::Rc;

pub use shared_types::TableRow;

/// A shared function of a row, compared by identity so it can live in props.
pub struct RowFn<T, R>(Rc<dyn Fn(&T) -> R>);

impl<T, R> RowFn<T, R> {
    pub fn new(f: impl Fn(&T) -> R + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, row: &T) -> R {
        (self.0)(row)
    }
}

impl<T, R> Clone for RowFn<T, R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T, R> PartialEq for RowFn<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Explicit row key supplied by the caller.
#[derive(Clone, PartialEq)]
pub enum RowKey<T> {
    /// Read this property and stringify it.
    Field(String),
    Compute(RowFn<T, String>),
}

impl<T> RowKey<T> {
    pub fn field(name: impl Into<String>) -> Self {
        RowKey::Field(name.into())
    }

    pub fn compute(f: impl Fn(&T) -> String + 'static) -> Self {
        RowKey::Compute(RowFn::new(f))
    }
}

fn natural_id<T: TableRow>(row: &T, row_key: Option<&RowKey<T>>) -> Option<String> {
    if let Some(key) = row_key {
        return Some(match key {
            RowKey::Field(name) => row.field(name).to_string(),
            RowKey::Compute(f) => f.call(row),
        });
    }
    ["id", "key"]
        .iter()
        .map(|name| row.field(name))
        .find(CellValue::is_truthy)
        .map(|value| value.to_string())
}

/// Identity of a row for selection membership.
///
/// Priority: explicit key, truthy `id`, truthy `key`, then `row-{index}`.
pub fn resolve_row_id<T: TableRow>(row: &T, index: usize, row_key: Option<&RowKey<T>>) -> String {
    natural_id(row, row_key).unwrap_or_else(|| format!("row-{}", index))
}

/// Key used when rendering the row.
///
/// Agrees with [`resolve_row_id`] for rows with an identity; positional rows
/// also carry their content fingerprint.
pub fn render_key<T: TableRow>(row: &T, index: usize, row_key: Option<&RowKey<T>>) -> String {
    match natural_id(row, row_key) {
        Some(id) => id,
        None => format!("row-{}-{:x}", index, row.fingerprint()),
    }
}
