//! Server-rendered views (Tera)
//!
//! Templates are compiled into the binary, so the server does not depend on
//! the working directory. Autoescaping is on for every `.html` template.

use chrono::NaiveDate;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

use crate::models::errors::AppResult;
use crate::models::types::tanggal_indonesia;
use crate::utils::constants::{APP_NAME, APP_VERSION, UPLOADS_URL_PREFIX};

pub const VIEW_ARTIKEL_INDEX: &str = "admin/artikel/index.html";
pub const VIEW_ARTIKEL_CREATE: &str = "admin/artikel/tambah.html";
pub const VIEW_ARTIKEL_EDIT: &str = "admin/artikel/edit.html";
pub const VIEW_CONTENT_PLANNER: &str = "content-planner/content-planners.html";

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    (VIEW_ARTIKEL_INDEX, include_str!("../../templates/admin/artikel/index.html")),
    (VIEW_ARTIKEL_CREATE, include_str!("../../templates/admin/artikel/tambah.html")),
    (VIEW_ARTIKEL_EDIT, include_str!("../../templates/admin/artikel/edit.html")),
    (
        VIEW_CONTENT_PLANNER,
        include_str!("../../templates/content-planner/content-planners.html"),
    ),
];

/// Compiled template set
#[derive(Debug)]
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        tera.autoescape_on(vec![".html"]);
        tera.register_filter("tanggal", tanggal_filter);
        Ok(Self { tera })
    }

    /// Render `name` with the shared globals added to `context`
    pub fn render(&self, name: &str, mut context: Context) -> AppResult<String> {
        context.insert("app_name", APP_NAME);
        context.insert("app_version", APP_VERSION);
        context.insert("uploads_url", UPLOADS_URL_PREFIX);
        Ok(self.tera.render(name, &context)?)
    }
}

/// `{{ value | tanggal }}`: `2026-10-16` or `2026-10-16T09:30:00` → `16 Oktober 2026`
fn tanggal_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("tanggal filter expects a date string"))?;
    let date = raw
        .get(..10)
        .and_then(|ymd| NaiveDate::parse_from_str(ymd, "%Y-%m-%d").ok())
        .ok_or_else(|| tera::Error::msg(format!("tanggal filter: cannot parse {:?}", raw)))?;
    Ok(Value::String(tanggal_indonesia(date)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_templates_compile() {
        let views = Views::new().unwrap();
        let names: Vec<&str> = views.tera.get_template_names().collect();
        for (name, _) in TEMPLATES {
            assert!(names.contains(&name), "missing template {}", name);
        }
    }

    #[test]
    fn test_tanggal_filter() {
        let out = tanggal_filter(&json!("2026-10-16T09:30:00"), &HashMap::new()).unwrap();
        assert_eq!(out, json!("16 Oktober 2026"));
        assert!(tanggal_filter(&json!("kemarin"), &HashMap::new()).is_err());
        assert!(tanggal_filter(&json!(5), &HashMap::new()).is_err());
    }
}
