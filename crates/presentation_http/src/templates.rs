//! HTML templates
//!
//! Templates are embedded at compile time and compiled once at startup.

use tera::{Context, Tera};

/// Data rendered into the question/answer page
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    /// Question the user submitted, echoed back into the form
    pub question: Option<String>,
    /// Answer text (generated or canned)
    pub answer: Option<String>,
    /// Whether an answer was produced for this render
    pub success: bool,
    /// One-shot notification message
    pub flash: Option<String>,
    /// Notification level: "warning", "danger" or "info"
    pub flash_level: Option<String>,
}

/// Compiled page templates
pub struct Pages {
    tera: Tera,
}

impl std::fmt::Debug for Pages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pages").finish_non_exhaustive()
    }
}

impl Pages {
    /// Compile the embedded templates
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;
        Ok(Self { tera })
    }

    /// Render the question/answer page
    pub fn render_index(&self, page: &IndexPage) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("question", page.question.as_deref().unwrap_or(""));
        ctx.insert("answer", page.answer.as_deref().unwrap_or(""));
        ctx.insert("success", &page.success);
        ctx.insert("flash", page.flash.as_deref().unwrap_or(""));
        ctx.insert("flash_level", page.flash_level.as_deref().unwrap_or("info"));
        self.tera.render("index.html", &ctx)
    }
}
