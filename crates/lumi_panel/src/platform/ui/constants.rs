/// Name of a panel element, as bound by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(&'static str);

impl ElementId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

pub const LUMI_FORM: ElementId = ElementId::new("lumiForm");
pub const LAUNCH_BUTTON: ElementId = ElementId::new("launchButton");
pub const STATUS: ElementId = ElementId::new("status");
pub const PROGRESS_CONTAINER: ElementId = ElementId::new("progress-container");
pub const PROGRESS_BAR_FILL: ElementId = ElementId::new(".progress-bar-fill");
pub const PROGRESS_TEXT: ElementId = ElementId::new("progress-text");
