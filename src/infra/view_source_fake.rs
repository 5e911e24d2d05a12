use crate::domain_model::{OUTLET, ViewRef};
use crate::domain_port::{ViewSource, ViewSourceError};

/// Section layouts known to the fake source.
const LAYOUTS: [&str; 2] = ["Manager", "Front"];

/// Serves placeholder markup for every view, for running without a build.
#[derive(Debug, Default)]
pub struct FakeViewSource;

impl FakeViewSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ViewSource for FakeViewSource {
    async fn fetch(&self, view: &ViewRef) -> Result<String, ViewSourceError> {
        if LAYOUTS.contains(&view.as_str()) {
            Ok(format!(
                "<div class=\"layout\" data-layout=\"{view}\"><main>{OUTLET}</main></div>"
            ))
        } else {
            Ok(format!("<section data-view=\"{view}\"></section>"))
        }
    }
}
