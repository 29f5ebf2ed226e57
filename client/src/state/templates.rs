//! Templates screen state and the template form.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use desk::editor::EditorDocument;
use desk::guard::SubmitKey;
use desk::notify::{Failure, text};
use schema::{Id, Template, TemplateCreate, TemplateUpdate};

const NAME_REQUIRED: &str = "템플릿 이름을 입력하세요";

/// Values of the template dialog. `id` is set when editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateForm {
    pub id: Option<Id>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub document: EditorDocument,
}

fn non_blank(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl TemplateForm {
    #[must_use]
    pub fn edit(template: &Template) -> Self {
        Self {
            id: Some(template.id),
            name: template.name.clone(),
            description: template.description.clone().unwrap_or_default(),
            category: template.category.clone().unwrap_or_default(),
            document: EditorDocument::load(template.content.clone()),
        }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.id.is_some() { "템플릿 수정" } else { "새 템플릿" }
    }

    fn validate(&self) -> Result<String, Failure> {
        let name = non_blank(&self.name).ok_or_else(|| Failure::Invalid(NAME_REQUIRED.to_owned()))?;
        if self.document.is_blank() {
            return Err(Failure::Invalid(text::TEMPLATE_CONTENT_REQUIRED.to_owned()));
        }
        Ok(name)
    }

    /// # Errors
    ///
    /// The name is blank or the document has no content.
    pub fn to_create(&self) -> Result<TemplateCreate, Failure> {
        Ok(TemplateCreate {
            name: self.validate()?,
            description: non_blank(&self.description),
            content: self.document.serialize(),
            category: non_blank(&self.category),
        })
    }

    /// # Errors
    ///
    /// The name is blank or the document has no content.
    pub fn to_update(&self) -> Result<TemplateUpdate, Failure> {
        Ok(TemplateUpdate {
            name: Some(self.validate()?),
            description: non_blank(&self.description),
            content: Some(self.document.serialize()),
            category: non_blank(&self.category),
        })
    }
}

#[must_use]
pub fn create_key(payload: &TemplateCreate) -> SubmitKey {
    SubmitKey::new("template:create", payload)
}

#[must_use]
pub fn update_key(id: Id, payload: &TemplateUpdate) -> SubmitKey {
    SubmitKey::new(format!("template:{id}:update"), payload)
}

#[must_use]
pub fn delete_key(id: Id) -> SubmitKey {
    SubmitKey::bare(format!("template:{id}:delete"))
}

#[derive(Clone, Debug, Default)]
pub struct TemplatesState {
    pub items: Vec<Template>,
    pub loading: bool,
    /// Category filter as typed; blank lists everything.
    pub category_filter: String,
    pub form: Option<TemplateForm>,
    pub preview: Option<Template>,
    pub pending_delete: Option<Id>,
}

impl TemplatesState {
    #[must_use]
    pub fn filter(&self) -> Option<String> {
        non_blank(&self.category_filter)
    }

    pub fn replace_items(&mut self, items: Vec<Template>) {
        self.items = items;
        self.loading = false;
    }
}
