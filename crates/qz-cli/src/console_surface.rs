use qz_core::ChoiceItem;
use qz_runtime::RenderSurface;

/// Buffers rendered frames as terminal lines until the player flushes them.
#[derive(Debug, Default)]
pub(crate) struct ConsoleSurface {
    lines: Vec<String>,
}

impl ConsoleSurface {
    pub(crate) fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl RenderSurface for ConsoleSurface {
    fn render_text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn render_dismiss_affordance(&mut self) {
        self.lines.push("  [enter] next".to_string());
    }

    fn render_choice_list(&mut self, items: &[ChoiceItem]) {
        for item in items {
            self.lines.push(format!("  [{}] {}", item.index, item.label));
        }
    }

    fn render_exclusive_choice_list(&mut self, items: &[ChoiceItem]) {
        for item in items {
            self.lines.push(format!("  ({}) {}", item.index, item.label));
        }
    }

    fn teardown(&mut self) {
        self.lines.push(String::new());
    }
}
