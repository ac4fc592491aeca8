// SPDX-License-Identifier: MPL-2.0
//! Shows with shared default options.

use super::{Handle, QueueEngine, ShowOptions};

/// An engine scope whose `show` layers per-call options over fixed defaults.
#[derive(Debug)]
pub struct Preset<D = ()> {
    engine: QueueEngine<D>,
    defaults: ShowOptions<D>,
}

impl<D: Clone> Clone for Preset<D> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            defaults: self.defaults.clone(),
        }
    }
}

impl<D: Clone + Send + 'static> Preset<D> {
    pub(crate) fn new(engine: QueueEngine<D>, defaults: ShowOptions<D>) -> Self {
        Self { engine, defaults }
    }

    pub fn show(&self, title: impl Into<String>, options: ShowOptions<D>) -> Handle<D> {
        self.engine.show(title, options.or(&self.defaults))
    }

    #[must_use]
    pub fn defaults(&self) -> &ShowOptions<D> {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::Placement;
    use crate::engine::EngineSettings;
    use std::time::Duration;

    #[test]
    fn preset_defaults_fill_unset_options() {
        let engine: QueueEngine<&str> = QueueEngine::new(EngineSettings::with_capacity(2));
        let preset = engine.with_preset(
            ShowOptions::new()
                .placement(Placement::Top)
                .timeout(Duration::from_secs(3))
                .data("upload"),
        );

        let handle = preset.show("a", ShowOptions::new().timeout(Duration::from_secs(1)));
        let view = engine.entry(handle.id()).expect("tracked");
        assert_eq!(view.placement, Placement::Top);
        assert_eq!(view.timeout, Some(Duration::from_secs(1)));
        assert_eq!(view.data, Some("upload"));
    }
}
