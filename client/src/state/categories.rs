//! Categories screen state and the create/edit form.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use desk::guard::SubmitKey;
use desk::notify::Failure;
use desk::tree::{CategoryArena, ParentOption};
use schema::{Category, CategoryCreate, CategoryUpdate, Id};

const NAME_REQUIRED: &str = "카테고리 이름을 입력하세요";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFormMode {
    Create,
    Edit(Id),
}

/// Values of the category dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryForm {
    pub mode: CategoryFormMode,
    pub name: String,
    pub description: String,
    pub parent_id: Option<Id>,
}

impl CategoryForm {
    /// Empty form, optionally preset to add a child under `parent_id`.
    #[must_use]
    pub fn create(parent_id: Option<Id>) -> Self {
        Self { mode: CategoryFormMode::Create, name: String::new(), description: String::new(), parent_id }
    }

    #[must_use]
    pub fn edit(category: &Category) -> Self {
        Self {
            mode: CategoryFormMode::Edit(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            parent_id: category.parent_id,
        }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            CategoryFormMode::Create => "새 카테고리",
            CategoryFormMode::Edit(_) => "카테고리 수정",
        }
    }

    /// Id being edited; parent options exclude it and its subtree.
    #[must_use]
    pub fn editing(&self) -> Option<Id> {
        match self.mode {
            CategoryFormMode::Create => None,
            CategoryFormMode::Edit(id) => Some(id),
        }
    }

    fn trimmed_name(&self) -> Result<String, Failure> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Failure::Invalid(NAME_REQUIRED.to_owned()));
        }
        Ok(name.to_owned())
    }

    fn description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_owned())
    }

    /// # Errors
    ///
    /// The name is blank.
    pub fn to_create(&self) -> Result<CategoryCreate, Failure> {
        Ok(CategoryCreate { name: self.trimmed_name()?, description: self.description(), parent_id: self.parent_id })
    }

    /// # Errors
    ///
    /// The name is blank.
    pub fn to_update(&self) -> Result<CategoryUpdate, Failure> {
        Ok(CategoryUpdate {
            name: Some(self.trimmed_name()?),
            description: self.description(),
            parent_id: self.parent_id,
        })
    }
}

/// Parse the parent `<select>` value; the empty option means top level.
#[must_use]
pub fn parse_parent(raw: &str) -> Option<Id> {
    raw.trim().parse().ok()
}

/// `<option>` text for a picker entry. Browsers collapse plain spaces in
/// option labels, so the indent uses no-break spaces.
#[must_use]
pub fn option_label(option: &ParentOption) -> String {
    option.indented_label().replace(' ', "\u{a0}")
}

/// Guard key for creating a category from `payload`.
#[must_use]
pub fn create_key(payload: &CategoryCreate) -> SubmitKey {
    SubmitKey::new("category:create", payload)
}

#[must_use]
pub fn update_key(id: Id, payload: &CategoryUpdate) -> SubmitKey {
    SubmitKey::new(format!("category:{id}:update"), payload)
}

#[must_use]
pub fn delete_key(id: Id) -> SubmitKey {
    SubmitKey::bare(format!("category:{id}:delete"))
}

#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub arena: CategoryArena,
    pub loading: bool,
    pub form: Option<CategoryForm>,
    pub pending_delete: Option<Id>,
}

impl CategoriesState {
    pub fn replace_tree(&mut self, roots: Vec<Category>) {
        self.arena = CategoryArena::from_nested(roots);
        self.loading = false;
    }

    /// Name of the category awaiting delete confirmation.
    #[must_use]
    pub fn pending_delete_name(&self) -> Option<&str> {
        let id = self.pending_delete?;
        self.arena.get(id).map(|c| c.name.as_str())
    }
}
