use qz_core::ChoiceItem;

/// Presentation capability the engine draws frames onto.
///
/// The engine calls `teardown` before presenting the next frame, so a surface
/// never shows two frames at once.
pub trait RenderSurface {
    fn render_text(&mut self, text: &str);
    fn render_dismiss_affordance(&mut self);
    fn render_choice_list(&mut self, items: &[ChoiceItem]);
    fn render_exclusive_choice_list(&mut self, items: &[ChoiceItem]);
    fn teardown(&mut self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn render_text(&mut self, _text: &str) {}
    fn render_dismiss_affordance(&mut self) {}
    fn render_choice_list(&mut self, _items: &[ChoiceItem]) {}
    fn render_exclusive_choice_list(&mut self, _items: &[ChoiceItem]) {}
    fn teardown(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Text(String),
    DismissAffordance,
    ChoiceList(Vec<ChoiceItem>),
    ExclusiveChoiceList(Vec<ChoiceItem>),
    Teardown,
}

/// Records every call in order.
#[derive(Debug, Default, Clone)]
pub struct TranscriptSurface {
    events: Vec<SurfaceEvent>,
}

impl TranscriptSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for TranscriptSurface {
    fn render_text(&mut self, text: &str) {
        self.events.push(SurfaceEvent::Text(text.to_string()));
    }

    fn render_dismiss_affordance(&mut self) {
        self.events.push(SurfaceEvent::DismissAffordance);
    }

    fn render_choice_list(&mut self, items: &[ChoiceItem]) {
        self.events.push(SurfaceEvent::ChoiceList(items.to_vec()));
    }

    fn render_exclusive_choice_list(&mut self, items: &[ChoiceItem]) {
        self.events.push(SurfaceEvent::ExclusiveChoiceList(items.to_vec()));
    }

    fn teardown(&mut self) {
        self.events.push(SurfaceEvent::Teardown);
    }
}
