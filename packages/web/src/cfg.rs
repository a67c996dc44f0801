use sudoku_form::FormConfig;

/// Configuration for binding the controller to a page.
///
/// Describes where the controller finds its elements. The defaults match the generator page template.
///
/// # Example
///
/// ```rust, ignore
/// sudoku_form_web::launch_cfg(WebConfig::new().form_selector("#generate").log_level(None))
/// ```
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub(crate) form_selector: String,
    pub(crate) submit_selector: String,
    pub(crate) control_selector: String,
    pub(crate) form: FormConfig,
    pub(crate) log_level: Option<tracing::Level>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".to_string(),
            submit_selector: "button[type=\"submit\"]".to_string(),
            control_selector: ".btn".to_string(),
            form: FormConfig::default(),
            log_level: Some(tracing::Level::INFO),
        }
    }
}

impl WebConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector of the form, looked up in the whole document. The first match wins.
    pub fn form_selector(mut self, selector: impl Into<String>) -> Self {
        self.form_selector = selector.into();
        self
    }

    /// Set the selector of the submit button, looked up inside the form.
    pub fn submit_selector(mut self, selector: impl Into<String>) -> Self {
        self.submit_selector = selector.into();
        self
    }

    /// Set the selector of an option's visual control, looked up inside the radio's parent element.
    pub fn control_selector(mut self, selector: impl Into<String>) -> Self {
        self.control_selector = selector.into();
        self
    }

    /// Set the controller configuration. The radio group is taken from [`FormConfig::group_name`].
    pub fn form(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    /// Install a `tracing-wasm` subscriber at this level on launch, or leave logging alone with `None`.
    pub fn log_level(mut self, level: Option<tracing::Level>) -> Self {
        self.log_level = level;
        self
    }

    /// The selector matching every radio of the group.
    pub(crate) fn radio_selector(&self) -> String {
        format!("input[type=\"radio\"][name=\"{}\"]", self.form.group_name())
    }
}
