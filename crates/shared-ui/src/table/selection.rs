/// Who owns a piece of table state, decided once when the table mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The caller passes the value in and is told about every change; the
    /// table mirrors the prop and never writes its own copy.
    Controlled,
    /// The table keeps the value and reports changes.
    Uncontrolled,
}

impl Ownership {
    pub fn for_prop<V>(prop: &Option<V>) -> Self {
        if prop.is_some() {
            Ownership::Controlled
        } else {
            Ownership::Uncontrolled
        }
    }
}

/// Add `id` if absent, remove it if present.
pub fn toggle(selected: &[String], id: &str) -> Vec<String> {
    if selected.iter().any(|s| s == id) {
        selected.iter().filter(|s| *s != id).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id.to_string());
        next
    }
}

/// Header checkbox action: clear when everything is selected, otherwise
/// select every row id.
pub fn select_all(selected: &[String], all_ids: Vec<String>) -> Vec<String> {
    if selected.len() == all_ids.len() {
        Vec::new()
    } else {
        all_ids
    }
}

/// Row selection with an ownership strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    ownership: Ownership,
    local: Vec<String>,
}

impl SelectionState {
    pub fn new(ownership: Ownership) -> Self {
        Self {
            ownership,
            local: Vec::new(),
        }
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Selection to display this render.
    pub fn current(&self, controlled: Option<&[String]>) -> Vec<String> {
        match self.ownership {
            Ownership::Controlled => controlled.map(<[String]>::to_vec).unwrap_or_default(),
            Ownership::Uncontrolled => self.local.clone(),
        }
    }

    /// Record a new selection. Controlled tables leave their copy untouched.
    /// Returns the selection to report upward.
    pub fn commit(&mut self, next: Vec<String>) -> Vec<String> {
        if self.ownership == Ownership::Uncontrolled {
            self.local = next.clone();
        }
        next
    }

    pub fn is_selected(&self, controlled: Option<&[String]>, id: &str) -> bool {
        match self.ownership {
            Ownership::Controlled => controlled.is_some_and(|ids| ids.iter().any(|s| s == id)),
            Ownership::Uncontrolled => self.local.iter().any(|s| s == id),
        }
    }
}
